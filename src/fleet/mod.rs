//! Fleet module: the ordered ship collection.
//!
//! ## Components
//!
//! - [`Fleet`]: Unique, ascending set of ships with merge and replace
//! - [`report`]: Text rendering of fleets and comparison results
//!
//! ## Invariants
//!
//! - No two ships in a fleet compare equal
//! - Iteration is always ascending by `(name, registry, class, first_seen)`
//! - Ships are never mutated in place; replacement is erase-then-insert
//!
//! ## Example
//!
//! ```
//! use ship_registry::fleet::Fleet;
//! use ship_registry::types::{Ship, ShipClass};
//!
//! let mut fleet = Fleet::new();
//! fleet.insert(Ship::new("Voyager", "NCC-74656", ShipClass::Intrepid, 2371));
//! fleet.insert(Ship::new("Reliant", "NCC-1864", ShipClass::Miranda, 2267));
//!
//! assert_eq!(fleet.first().map(|s| s.name()), Some("Reliant"));
//! ```

pub mod registry;
pub mod report;

pub use registry::Fleet;
