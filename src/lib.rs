//! # Ship Registry
//!
//! In-memory ship catalog kept in a unique, deterministically ordered set.
//!
//! ## Architecture
//!
//! - **Types**: [`Ship`], [`ShipClass`] and their canonical SSZ record
//! - **Ordering**: the strong order on ships, plus total/weak/partial comparators
//!   for floats
//! - **Fleet**: the ordered collection, with merge and replace-by-name
//!
//! ## Design Principles
//!
//! 1. **One comparator**: the same `Ord` decides uniqueness and iteration order
//! 2. **Immutable entries**: updates are remove-then-insert, never in place
//! 3. **Explicit strength**: an incomparable float pair is a result
//!    ([`Outcome::Unordered`]), not an error
//! 4. **Determinism**: equal fleets produce identical digests

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Ship, ShipClass, ShipRecord
pub mod types;

/// Ordering model: comparison results and float comparators
pub mod ordering;

/// Fleet: the ordered ship collection
pub mod fleet;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use fleet::Fleet;
pub use ordering::{Comparison, Outcome, Strength};
pub use types::{CatalogError, Ship, ShipClass, ShipRecord};
