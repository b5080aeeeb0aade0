//! Ordering model.
//!
//! ## Ships
//!
//! [`Ship`](crate::types::Ship) implements `Ord` directly: name, then
//! registry, then class, then first-seen year, stopping at the first field
//! that differs. Equality agrees with it exactly, so ships form a strong
//! order and every pair is comparable.
//!
//! ## Floats
//!
//! Floats have no single natural order. The comparators in [`float`] classify a
//! pair under each [`Strength`]:
//!
//! - **Strong**: IEEE totalOrder, every bit pattern has a place
//! - **Weak**: NaNs grouped together above all numbers
//! - **Partial**: plain IEEE, NaN makes the pair [`Outcome::Unordered`]
//!
//! ## Example
//!
//! ```
//! use ship_registry::ordering::{nan_with_payload, Outcome, Strength};
//!
//! let nan1 = nan_with_payload(1);
//! let nan2 = nan_with_payload(2);
//!
//! assert_eq!(Strength::Partial.compare_f32(nan1, nan2).outcome(), Outcome::Unordered);
//! assert_eq!(Strength::Weak.compare_f32(nan1, nan2).outcome(), Outcome::Equivalent);
//! assert_eq!(Strength::Strong.compare_f32(nan1, nan2).outcome(), Outcome::Less);
//! ```

pub mod comparison;
pub mod float;

pub use comparison::{Comparison, Outcome, Strength};
pub use float::{
    nan_with_payload, partial_order, sort_total, sort_weak, total_order, weak_cmp, weak_order,
};
