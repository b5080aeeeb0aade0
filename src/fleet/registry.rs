//! Unique, ordered ship collection.
//!
//! ## Architecture
//!
//! `Fleet` wraps a `BTreeSet<Ship>`. The set relies on `Ship`'s `Ord` for
//! both uniqueness and iteration order, so the two can never disagree.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert / remove / contains | O(log n) |
//! | Merge | O(m log n) |
//! | Find by predicate | O(n) |
//! | Replace | O(log n) |
//! | Replace by name | O(k * n) |
//!
//! ## Example
//!
//! ```
//! use ship_registry::fleet::Fleet;
//! use ship_registry::types::{Ship, ShipClass};
//!
//! let mut fleet: Fleet = [
//!     Ship::new("Excelsior", "NCC-2000", ShipClass::Excelsior, 2285),
//!     Ship::new("Enterprise", "NCC-1701", ShipClass::Constitution, 2245),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut newcomers: Fleet = [
//!     Ship::new("Defiant", "NX-74205", ShipClass::Defiant, 2370),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(fleet.merge(&mut newcomers), 1);
//! let names: Vec<&str> = fleet.iter().map(|s| s.name()).collect();
//! assert_eq!(names, ["Defiant", "Enterprise", "Excelsior"]);
//! ```

use std::collections::btree_set;
use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use crate::types::{CatalogError, Ship, ShipRecord};

/// Ordered set of ships
///
/// Ships are owned by the fleet. Moving a ship between fleets goes through
/// [`Fleet::merge`] or [`Fleet::remove`] + [`Fleet::insert`]; a ship is never
/// shared between two fleets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: BTreeSet<Ship>,
}

impl Fleet {
    /// Create a new empty fleet
    pub fn new() -> Self {
        Self {
            ships: BTreeSet::new(),
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of ships in the fleet
    #[inline]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Check if the fleet has no ships
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    // ========================================================================
    // Ship Management
    // ========================================================================

    /// Add a ship unless an equal one is already present.
    ///
    /// A duplicate is dropped silently.
    ///
    /// # Returns
    ///
    /// `true` if the ship was added
    ///
    /// # Example
    ///
    /// ```
    /// use ship_registry::fleet::Fleet;
    /// use ship_registry::types::{Ship, ShipClass};
    ///
    /// let mut fleet = Fleet::new();
    /// let voyager = Ship::new("Voyager", "NCC-74656", ShipClass::Intrepid, 2371);
    ///
    /// assert!(fleet.insert(voyager.clone()));
    /// assert!(!fleet.insert(voyager));
    /// assert_eq!(fleet.len(), 1);
    /// ```
    pub fn insert(&mut self, ship: Ship) -> bool {
        self.ships.insert(ship)
    }

    /// Remove the ship equal to `ship`
    ///
    /// # Returns
    ///
    /// The removed ship, or None if not found
    pub fn remove(&mut self, ship: &Ship) -> Option<Ship> {
        self.ships.take(ship)
    }

    /// Check if an equal ship is present
    #[inline]
    pub fn contains(&self, ship: &Ship) -> bool {
        self.ships.contains(ship)
    }

    /// Move every ship of `other` that is not already here into `self`.
    ///
    /// Ships that collide with an existing entry stay behind in `other`, so
    /// afterwards `self` holds the union and `other` holds exactly the
    /// collisions.
    ///
    /// # Returns
    ///
    /// The number of ships moved
    ///
    /// # Example
    ///
    /// ```
    /// use ship_registry::fleet::Fleet;
    /// use ship_registry::types::{Ship, ShipClass};
    ///
    /// let phoenix = Ship::new("Phoenix", "NCC-65420", ShipClass::Nebula, 2363);
    /// let rubicon = Ship::new("Rubicon", "NCC-72936", ShipClass::Danube, 2371);
    ///
    /// let mut fleet: Fleet = [phoenix.clone()].into_iter().collect();
    /// let mut other: Fleet = [phoenix.clone(), rubicon].into_iter().collect();
    ///
    /// assert_eq!(fleet.merge(&mut other), 1);
    /// assert_eq!(fleet.len(), 2);
    /// assert!(other.contains(&phoenix));
    /// assert_eq!(other.len(), 1);
    /// ```
    pub fn merge(&mut self, other: &mut Fleet) -> usize {
        let before = self.ships.len();
        let incoming = std::mem::take(&mut other.ships);

        for ship in incoming {
            if self.ships.contains(&ship) {
                other.ships.insert(ship);
            } else {
                self.ships.insert(ship);
            }
        }

        self.ships.len() - before
    }

    /// Swap `old` for `new`.
    ///
    /// The old ship is erased first and the new one inserted at whatever
    /// position its own fields dictate. If `new` equals another ship already
    /// in the fleet, the insert is a no-op and the fleet shrinks by one.
    ///
    /// # Returns
    ///
    /// `false` (and no change) if `old` is not in the fleet
    pub fn replace(&mut self, old: &Ship, new: Ship) -> bool {
        if self.ships.remove(old) {
            self.ships.insert(new);
            true
        } else {
            false
        }
    }

    /// Replace ships matched by name.
    ///
    /// Replacements are applied in iteration order, which is ascending when
    /// the batch is itself a `Fleet`. For each one,
    /// the first ship in the fleet with the same name is swapped out for it.
    /// A replacement whose name matches nothing is dropped, never added.
    ///
    /// # Returns
    ///
    /// The number of replacements applied
    ///
    /// # Example
    ///
    /// ```
    /// use ship_registry::fleet::Fleet;
    /// use ship_registry::types::{Ship, ShipClass};
    ///
    /// let mut fleet: Fleet = [
    ///     Ship::new("Defiant", "NX-74205", ShipClass::Defiant, 2370),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let replacements: Fleet = [
    ///     Ship::new("Defiant", "NX-74205-A", ShipClass::Defiant, 2375),
    ///     Ship::new("Prometheus", "NX-59650", ShipClass::Galaxy, 2374),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(fleet.replace_by_name(replacements), 1);
    /// assert_eq!(fleet.len(), 1);
    /// assert_eq!(fleet.first().unwrap().registry(), "NX-74205-A");
    /// ```
    pub fn replace_by_name<I>(&mut self, replacements: I) -> usize
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut replaced = 0;

        for replacement in replacements {
            let existing = match self.find_by_name(replacement.name()) {
                Some(ship) => ship.clone(),
                None => continue,
            };
            if self.replace(&existing, replacement) {
                replaced += 1;
            }
        }

        replaced
    }

    /// Remove every ship
    pub fn clear(&mut self) {
        self.ships.clear();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// First ship, in ascending order, satisfying `predicate`.
    ///
    /// This is a linear scan. The predicate may look at any subset of fields,
    /// so the set's ordering cannot narrow the search.
    pub fn find_by<P>(&self, mut predicate: P) -> Option<&Ship>
    where
        P: FnMut(&Ship) -> bool,
    {
        self.ships.iter().find(|ship| predicate(ship))
    }

    /// First ship with the given name, ignoring every other field
    pub fn find_by_name(&self, name: &str) -> Option<&Ship> {
        self.find_by(|ship| ship.name() == name)
    }

    /// Lowest ship
    #[inline]
    pub fn first(&self) -> Option<&Ship> {
        self.ships.first()
    }

    /// Highest ship
    #[inline]
    pub fn last(&self) -> Option<&Ship> {
        self.ships.last()
    }

    /// Ascending iterator over the ships.
    ///
    /// Each call starts a fresh traversal. The iterator borrows the fleet, so
    /// the fleet cannot change while it is alive.
    pub fn iter(&self) -> btree_set::Iter<'_, Ship> {
        self.ships.iter()
    }

    /// Owned copy of the ships in ascending order
    pub fn snapshot(&self) -> Vec<Ship> {
        self.ships.iter().cloned().collect()
    }

    // ========================================================================
    // Digest
    // ========================================================================

    /// SHA-256 over the SSZ encoding of every ship, in ascending order.
    ///
    /// Equal fleets have equal digests no matter how they were built.
    ///
    /// # Errors
    ///
    /// [`CatalogError::FieldTooLong`] if a ship does not fit a [`ShipRecord`]
    pub fn digest(&self) -> Result<[u8; 32], CatalogError> {
        let mut hasher = Sha256::new();

        for ship in &self.ships {
            let bytes = ShipRecord::try_from(ship)?.encode()?;
            // length prefix keeps record boundaries unambiguous
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Ok(digest)
    }

    /// [`Fleet::digest`] as a hex string
    pub fn digest_hex(&self) -> Result<String, CatalogError> {
        self.digest().map(hex::encode)
    }
}

impl FromIterator<Ship> for Fleet {
    fn from_iter<I: IntoIterator<Item = Ship>>(iter: I) -> Self {
        Self {
            ships: iter.into_iter().collect(),
        }
    }
}

impl Extend<Ship> for Fleet {
    fn extend<I: IntoIterator<Item = Ship>>(&mut self, iter: I) {
        self.ships.extend(iter);
    }
}

impl IntoIterator for Fleet {
    type Item = Ship;
    type IntoIter = btree_set::IntoIter<Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Ship;
    type IntoIter = btree_set::Iter<'a, Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
