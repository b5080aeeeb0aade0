//! Core data types for the ship registry
//!
//! ## Types
//!
//! - [`Ship`]: An immutable catalog entry, ordered by all four fields
//! - [`ShipClass`]: Fixed enumeration of ship classes
//! - [`ShipRecord`]: Canonical SSZ form of a ship
//! - [`CatalogError`]: Failures from parsing and encoding

mod error;
mod ship;
pub mod record;

// Re-export all types at module level
pub use error::CatalogError;
pub use ship::{Ship, ShipClass};
pub use record::{ShipRecord, MAX_NAME_LEN, MAX_REGISTRY_LEN};
