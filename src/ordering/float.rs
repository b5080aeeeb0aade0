//! Ordering comparators for `f32` at each [`Strength`].
//!
//! | Comparator | NaN vs anything | NaN vs NaN | -0 vs +0 |
//! |-------|-----------------|------------|----------|
//! | [`total_order`] | by sign and payload | by payload | less |
//! | [`weak_order`] | greater | equivalent | equivalent |
//! | [`partial_order`] | unordered | unordered | equivalent |
//!
//! Only the total and weak comparators are usable as sort keys. A comparison sort
//! fed a partial relation can return any permutation once NaNs are present.

use std::cmp::Ordering;

use crate::ordering::{Comparison, Strength};

const QUIET_NAN: u32 = 0x7fc0_0000;
const PAYLOAD_MASK: u32 = 0x003f_ffff;

/// Build a quiet NaN carrying `payload` in its low mantissa bits.
///
/// Bits above the 22-bit payload field are dropped.
///
/// ```
/// use ship_registry::ordering::nan_with_payload;
///
/// let a = nan_with_payload(1);
/// let b = nan_with_payload(2);
/// assert!(a.is_nan() && b.is_nan());
/// assert_ne!(a.to_bits(), b.to_bits());
/// ```
pub fn nan_with_payload(payload: u32) -> f32 {
    f32::from_bits(QUIET_NAN | (payload & PAYLOAD_MASK))
}

/// IEEE 754 totalOrder.
///
/// Every bit pattern has a place: negative NaNs below `-inf`, positive NaNs
/// above `+inf`, NaNs among themselves by payload, and `-0 < +0`.
pub fn total_order(a: f32, b: f32) -> Comparison {
    Comparison::from_ordering(Strength::Strong, a.total_cmp(&b))
}

/// Standard IEEE comparison. Any NaN operand makes the pair unordered.
pub fn partial_order(a: f32, b: f32) -> Comparison {
    match a.partial_cmp(&b) {
        Some(ordering) => Comparison::from_ordering(Strength::Partial, ordering),
        None => Comparison::unordered(),
    }
}

/// IEEE comparison with every NaN equivalent to every other NaN and greater
/// than all numbers.
///
/// The NaN sign is ignored: unlike IEEE sign-aware grouping, a negative NaN
/// does not sort below `-inf`. Use [`total_order`] to keep sign and payload.
pub fn weak_order(a: f32, b: f32) -> Comparison {
    Comparison::from_ordering(Strength::Weak, weak_cmp(a, b))
}

/// [`weak_order`] as a sort comparator.
pub fn weak_cmp(a: f32, b: f32) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        // at least one side is NaN
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

/// Sort by [`weak_cmp`].
///
/// Numbers come out ascending with all NaNs clustered at the end. The sort
/// is stable, so equivalent values (NaNs, or `-0` and `+0`) keep their input
/// order.
///
/// ```
/// use ship_registry::ordering::sort_weak;
///
/// let mut values = [2.0, f32::NAN, f32::INFINITY, 1.0];
/// sort_weak(&mut values);
/// assert_eq!(&values[..3], &[1.0, 2.0, f32::INFINITY]);
/// assert!(values[3].is_nan());
/// ```
pub fn sort_weak(values: &mut [f32]) {
    values.sort_by(|a, b| weak_cmp(*a, *b));
}

/// Sort by IEEE totalOrder.
pub fn sort_total(values: &mut [f32]) {
    values.sort_by(f32::total_cmp);
}

impl Strength {
    /// Compare two floats with the comparator of this strength.
    ///
    /// ```
    /// use ship_registry::ordering::{Outcome, Strength};
    ///
    /// assert_eq!(Strength::Partial.compare_f32(1.0, f32::NAN).outcome(), Outcome::Unordered);
    /// assert_eq!(Strength::Weak.compare_f32(1.0, f32::NAN).outcome(), Outcome::Less);
    /// ```
    pub fn compare_f32(self, a: f32, b: f32) -> Comparison {
        match self {
            Strength::Strong => total_order(a, b),
            Strength::Weak => weak_order(a, b),
            Strength::Partial => partial_order(a, b),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
