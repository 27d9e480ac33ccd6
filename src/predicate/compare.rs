//! Comparison predicates.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::Predicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Relation {
    fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (Relation::Ne, Some(ordering)) => ordering != Ordering::Equal,
            // Incomparable values (NaN) differ from everything.
            (Relation::Ne, None) => true,
            (_, None) => false,
            (Relation::Eq, Some(ordering)) => ordering == Ordering::Equal,
            (Relation::Gt, Some(ordering)) => ordering == Ordering::Greater,
            (Relation::Ge, Some(ordering)) => ordering != Ordering::Less,
            (Relation::Lt, Some(ordering)) => ordering == Ordering::Less,
            (Relation::Le, Some(ordering)) => ordering != Ordering::Greater,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Relation::Eq => "equal to",
            Relation::Ne => "not equal to",
            Relation::Gt => "greater than",
            Relation::Ge => "at least",
            Relation::Lt => "less than",
            Relation::Le => "at most",
        }
    }
}

/// Compares the tested value against a fixed operand.
#[derive(Debug, Clone, Copy)]
pub struct Compare<T> {
    relation: Relation,
    operand: T,
}

impl<T: PartialOrd + Debug> Predicate<T> for Compare<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.relation.holds(value.partial_cmp(&self.operand))
    }

    fn description(&self) -> String {
        format!("{} {:?}", self.relation.phrase(), self.operand)
    }
}

macro_rules! constructors {
    ($($(#[$doc:meta])* $fn:ident => $relation:ident;)*) => {$(
        $(#[$doc])*
        pub fn $fn<T: PartialOrd + Debug>(operand: T) -> Compare<T> {
            Compare {
                relation: Relation::$relation,
                operand,
            }
        }
    )*};
}

constructors! {
    /// Equal to `operand`.
    eq => Eq;
    /// Not equal to `operand`.
    ne => Ne;
    /// Strictly greater than `operand`.
    gt => Gt;
    /// Greater than or equal to `operand`.
    ge => Ge;
    /// Strictly less than `operand`.
    lt => Lt;
    /// Less than or equal to `operand`.
    le => Le;
}

/// Inclusive range predicate built by [`between`].
#[derive(Debug, Clone, Copy)]
pub struct Between<T> {
    min: T,
    max: T,
}

/// Within `[min, max]`, inclusive.
pub fn between<T: PartialOrd + Debug>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

impl<T: PartialOrd + Debug> Predicate<T> for Between<T> {
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    fn description(&self) -> String {
        format!("between {:?} and {:?}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relations() {
        assert!(eq(5).test(&5));
        assert!(ne(5).test(&4));
        assert!(gt(5).test(&6) && !gt(5).test(&5));
        assert!(ge(5).test(&5) && !ge(5).test(&4));
        assert!(lt(5).test(&4) && !lt(5).test(&5));
        assert!(le(5).test(&5) && !le(5).test(&6));
    }

    #[test]
    fn nan_only_satisfies_ne() {
        assert!(!eq(f64::NAN).test(&f64::NAN));
        assert!(ne(f64::NAN).test(&f64::NAN));
        assert!(!le(1.0).test(&f64::NAN));
        assert!(!between(0.0, 1.0).test(&f64::NAN));
    }

    #[test]
    fn descriptions_show_operands() {
        assert_eq!(Predicate::<&str>::description(&eq("a")), r#"equal to "a""#);
        assert_eq!(Predicate::<i32>::description(&between(1, 3)), "between 1 and 3");
    }
}
