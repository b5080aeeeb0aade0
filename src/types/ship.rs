//! Ship types for the registry.
//!
//! ## Identity
//!
//! A [`Ship`] is identified by all four of its fields. Equality and ordering
//! are defined over the tuple `(name, registry, class, first_seen)`, in that
//! order, so two ships sharing a name but differing in registry are distinct
//! entries that sort next to each other.
//!
//! ## Immutability
//!
//! Fields are private. A ship stored in a [`Fleet`](crate::fleet::Fleet) sits
//! at a position chosen by its fields, so changing one in place would break
//! the collection's ordering. Updates go through remove-then-insert.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::ordering::{Comparison, Strength};
use crate::types::CatalogError;

// ============================================================================
// ShipClass enum
// ============================================================================

/// Ship class enumeration
///
/// Classes order by declaration index. The discriminant doubles as the
/// encoded byte in [`ShipRecord`](crate::types::ShipRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShipClass {
    #[default]
    Constitution,
    Danube,
    Defiant,
    Excelsior,
    Galaxy,
    Intrepid,
    Miranda,
    Nebula,
}

impl ShipClass {
    /// Every class, in declaration order
    pub const ALL: [ShipClass; 8] = [
        ShipClass::Constitution,
        ShipClass::Danube,
        ShipClass::Defiant,
        ShipClass::Excelsior,
        ShipClass::Galaxy,
        ShipClass::Intrepid,
        ShipClass::Miranda,
        ShipClass::Nebula,
    ];

    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            ShipClass::Constitution => 0,
            ShipClass::Danube => 1,
            ShipClass::Defiant => 2,
            ShipClass::Excelsior => 3,
            ShipClass::Galaxy => 4,
            ShipClass::Intrepid => 5,
            ShipClass::Miranda => 6,
            ShipClass::Nebula => 7,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Lower-case class name
    pub fn as_str(self) -> &'static str {
        match self {
            ShipClass::Constitution => "constitution",
            ShipClass::Danube => "danube",
            ShipClass::Defiant => "defiant",
            ShipClass::Excelsior => "excelsior",
            ShipClass::Galaxy => "galaxy",
            ShipClass::Intrepid => "intrepid",
            ShipClass::Miranda => "miranda",
            ShipClass::Nebula => "nebula",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipClass {
    type Err = CatalogError;

    /// Parse a class name, ignoring ASCII case
    ///
    /// ```
    /// use ship_registry::types::ShipClass;
    ///
    /// assert_eq!("Galaxy".parse::<ShipClass>().unwrap(), ShipClass::Galaxy);
    /// assert!("sovereign".parse::<ShipClass>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownClass(s.to_string()))
    }
}

// ============================================================================
// Ship struct
// ============================================================================

/// A catalogued ship.
///
/// ## Example
///
/// ```
/// use ship_registry::types::{Ship, ShipClass};
///
/// let defiant = Ship::new("Defiant", "NX-74205", ShipClass::Defiant, 2370);
/// assert_eq!(defiant.to_string(), "USS Defiant (NX-74205)");
/// ```
#[derive(Debug, Clone)]
pub struct Ship {
    name: String,
    registry: String,
    class: ShipClass,
    first_seen: u32,
}

impl Ship {
    /// Create a new ship
    ///
    /// # Arguments
    ///
    /// * `name` - Ship name, the primary sort key
    /// * `registry` - Registry number
    /// * `class` - Ship class
    /// * `first_seen` - Year the ship was first seen
    pub fn new(
        name: impl Into<String>,
        registry: impl Into<String>,
        class: ShipClass,
        first_seen: u32,
    ) -> Self {
        Self {
            name: name.into(),
            registry: registry.into(),
            class,
            first_seen,
        }
    }

    /// Get the ship name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the registry number
    #[inline]
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Get the ship class
    #[inline]
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Get the year the ship was first seen
    #[inline]
    pub fn first_seen(&self) -> u32 {
        self.first_seen
    }

    /// Classify the ordering of two ships.
    ///
    /// Ships form a strong order, so the result is always `Less`, `Equal` or
    /// `Greater` under [`Strength::Strong`].
    ///
    /// ```
    /// use ship_registry::ordering::Outcome;
    /// use ship_registry::types::{Ship, ShipClass};
    ///
    /// let defiant = Ship::new("Defiant", "NX-74205-A", ShipClass::Defiant, 2375);
    /// let enterprise = Ship::new("Enterprise", "NCC-1701-D", ShipClass::Galaxy, 2363);
    /// assert_eq!(defiant.compare(&enterprise).outcome(), Outcome::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Comparison {
        Comparison::from_ordering(Strength::Strong, self.cmp(other))
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ship {}

impl PartialOrd for Ship {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ship {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .as_str()
            .cmp(other.name.as_str())
            .then_with(|| self.registry.as_str().cmp(other.registry.as_str()))
            .then_with(|| self.class.cmp(&other.class))
            .then_with(|| self.first_seen.cmp(&other.first_seen))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USS {} ({})", self.name, self.registry)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
