//! Plain-text report of fleets and comparisons.
//!
//! Writers target `std::fmt::Write` so callers can render into a `String`
//! for tests or wrap stdout in the binary.

use std::fmt::{self, Display, Write};

use crate::fleet::Fleet;
use crate::ordering::Comparison;

/// Write a titled group: heading, one `USS {name} ({registry})` line per
/// ship in ascending order, then a blank line.
///
/// ```
/// use ship_registry::fleet::{report, Fleet};
/// use ship_registry::types::{Ship, ShipClass};
///
/// let fleet: Fleet = [Ship::new("Reliant", "NCC-1864", ShipClass::Miranda, 2267)]
///     .into_iter()
///     .collect();
///
/// let mut out = String::new();
/// report::write_fleet(&mut out, "Here are some ships", &fleet).unwrap();
/// assert_eq!(out, "Here are some ships:\nUSS Reliant (NCC-1864)\n\n");
/// ```
pub fn write_fleet<W: Write>(out: &mut W, title: &str, fleet: &Fleet) -> fmt::Result {
    writeln!(out, "{title}:")?;
    for ship in fleet {
        writeln!(out, "{ship}")?;
    }
    writeln!(out)
}

/// Write `"{lhs} <=> {rhs}: {label}"`
pub fn write_comparison<W, L, R>(out: &mut W, lhs: L, rhs: R, cmp: &Comparison) -> fmt::Result
where
    W: Write,
    L: Display,
    R: Display,
{
    writeln!(out, "{lhs} <=> {rhs}: {cmp}")
}
