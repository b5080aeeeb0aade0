//! Classified comparison results.
//!
//! `std::cmp::Ordering` has three states and no notion of how strong the
//! relation that produced it was. [`Comparison`] pairs an [`Outcome`] with the
//! [`Strength`] of the relation, and adds the `Unordered` state that only a
//! partial order can produce.

use std::cmp::Ordering;
use std::fmt;

/// How strong an ordering relation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// Total order where equivalence implies substitutability
    Strong,
    /// Total order that may group distinct values as equivalent
    Weak,
    /// Some pairs may be incomparable
    Partial,
}

impl Strength {
    /// Label used in reports, e.g. `weak_ordering`
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Strong => "strong_ordering",
            Strength::Weak => "weak_ordering",
            Strength::Partial => "partial_ordering",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Less,
    /// Indistinguishable under a strong order
    Equal,
    /// Neither less nor greater under a weak or partial order
    Equivalent,
    Greater,
    /// Incomparable; only a partial order yields this
    Unordered,
}

impl Outcome {
    /// Bare outcome label, e.g. `less`
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Less => "less",
            Outcome::Equal => "equal",
            Outcome::Equivalent => "equivalent",
            Outcome::Greater => "greater",
            Outcome::Unordered => "unordered",
        }
    }

    /// Collapse to a `std::cmp::Ordering`, if the pair was ordered
    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            Outcome::Less => Some(Ordering::Less),
            Outcome::Equal | Outcome::Equivalent => Some(Ordering::Equal),
            Outcome::Greater => Some(Ordering::Greater),
            Outcome::Unordered => None,
        }
    }
}

impl From<Ordering> for Outcome {
    /// Maps `Ordering::Equal` to [`Outcome::Equal`]; callers on a weaker
    /// relation go through [`Comparison::from_ordering`], which demotes it.
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Outcome::Less,
            Ordering::Equal => Outcome::Equal,
            Ordering::Greater => Outcome::Greater,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An [`Outcome`] tagged with the [`Strength`] of the relation that produced it.
///
/// The constructor keeps the pair consistent: `Equal` only exists under a
/// strong order, `Unordered` only under a partial one.
///
/// ```
/// use ship_registry::ordering::{Comparison, Outcome, Strength};
///
/// let cmp = Comparison::new(Strength::Weak, Outcome::Equal).unwrap();
/// assert_eq!(cmp.outcome(), Outcome::Equivalent);
/// assert_eq!(cmp.to_string(), "weak_ordering::equivalent");
///
/// assert!(Comparison::new(Strength::Strong, Outcome::Unordered).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparison {
    strength: Strength,
    outcome: Outcome,
}

impl Comparison {
    /// Build a comparison, normalizing the outcome to the strength.
    ///
    /// # Returns
    ///
    /// * `Some(Comparison)` - The normalized pair
    /// * `None` - If `outcome` is `Unordered` under a strong or weak order,
    ///   which cannot leave a pair incomparable
    pub fn new(strength: Strength, outcome: Outcome) -> Option<Self> {
        let outcome = match (strength, outcome) {
            (Strength::Strong, Outcome::Equivalent) => Outcome::Equal,
            (Strength::Weak | Strength::Partial, Outcome::Equal) => Outcome::Equivalent,
            (Strength::Strong | Strength::Weak, Outcome::Unordered) => return None,
            (_, outcome) => outcome,
        };
        Some(Self { strength, outcome })
    }

    /// Build a comparison from a three-way `Ordering`, which is valid at
    /// every strength
    pub fn from_ordering(strength: Strength, ordering: Ordering) -> Self {
        let outcome = match (strength, ordering) {
            (Strength::Weak | Strength::Partial, Ordering::Equal) => Outcome::Equivalent,
            (_, ordering) => Outcome::from(ordering),
        };
        Self { strength, outcome }
    }

    /// The incomparable result of a partial order
    pub fn unordered() -> Self {
        Self {
            strength: Strength::Partial,
            outcome: Outcome::Unordered,
        }
    }

    /// Get the strength of the relation
    #[inline]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Get the classified outcome
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if the pair was incomparable
    #[inline]
    pub fn is_unordered(&self) -> bool {
        self.outcome == Outcome::Unordered
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.strength, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(strength: Strength, outcome: Outcome) -> Comparison {
        Comparison::new(strength, outcome).expect("valid pair")
    }

    #[test]
    fn test_normalization() {
        assert_eq!(
            comparison(Strength::Strong, Outcome::Equivalent).outcome(),
            Outcome::Equal
        );
        assert_eq!(
            comparison(Strength::Partial, Outcome::Equal).outcome(),
            Outcome::Equivalent
        );
        assert_eq!(
            comparison(Strength::Partial, Outcome::Unordered).outcome(),
            Outcome::Unordered
        );
        assert_eq!(
            comparison(Strength::Weak, Outcome::Less).outcome(),
            Outcome::Less
        );
    }

    #[test]
    fn test_total_strength_rejects_unordered() {
        assert_eq!(Comparison::new(Strength::Weak, Outcome::Unordered), None);
        assert_eq!(Comparison::new(Strength::Strong, Outcome::Unordered), None);
        assert!(Comparison::new(Strength::Partial, Outcome::Unordered).is_some());
    }

    #[test]
    fn test_from_ordering() {
        let strong = Comparison::from_ordering(Strength::Strong, Ordering::Equal);
        assert_eq!(strong.outcome(), Outcome::Equal);

        let weak = Comparison::from_ordering(Strength::Weak, Ordering::Equal);
        assert_eq!(weak.outcome(), Outcome::Equivalent);

        let partial = Comparison::from_ordering(Strength::Partial, Ordering::Less);
        assert_eq!(partial.outcome(), Outcome::Less);
        assert_eq!(partial.strength(), Strength::Partial);

        assert_eq!(Comparison::unordered(), comparison(Strength::Partial, Outcome::Unordered));
        assert!(Comparison::unordered().is_unordered());
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            comparison(Strength::Strong, Outcome::Less).to_string(),
            "strong_ordering::less"
        );
        assert_eq!(
            comparison(Strength::Strong, Outcome::Equal).to_string(),
            "strong_ordering::equal"
        );
        assert_eq!(
            comparison(Strength::Partial, Outcome::Unordered).to_string(),
            "partial_ordering::unordered"
        );
        assert_eq!(Outcome::Greater.as_str(), "greater");
    }

    #[test]
    fn test_to_ordering() {
        assert_eq!(Outcome::Equivalent.to_ordering(), Some(Ordering::Equal));
        assert_eq!(Outcome::Greater.to_ordering(), Some(Ordering::Greater));
        assert_eq!(Outcome::Unordered.to_ordering(), None);
    }
}
