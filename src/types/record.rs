//! Canonical SSZ encoding of a ship.
//!
//! ## SSZ Layout
//!
//! `ShipRecord` is a variable-size container:
//! - `name`: `List<u8, 64>` (offset + bytes)
//! - `registry`: `List<u8, 32>` (offset + bytes)
//! - `class_raw`: `u8`
//! - `first_seen`: `u32` little-endian
//!
//! The same ship always produces the same bytes, which is what lets a fleet
//! digest be compared across processes.

use ssz_rs::prelude::*;

use crate::types::{CatalogError, Ship, ShipClass};

/// Maximum encoded length of a ship name, in bytes
pub const MAX_NAME_LEN: usize = 64;

/// Maximum encoded length of a registry number, in bytes
pub const MAX_REGISTRY_LEN: usize = 32;

/// Wire form of a [`Ship`].
///
/// ## Example
///
/// ```
/// use ship_registry::types::{Ship, ShipClass, ShipRecord};
///
/// let ship = Ship::new("Voyager", "NCC-74656", ShipClass::Intrepid, 2371);
/// let record = ShipRecord::try_from(&ship).unwrap();
/// let bytes = record.encode().unwrap();
///
/// let decoded = Ship::try_from(ShipRecord::decode(&bytes).unwrap()).unwrap();
/// assert_eq!(decoded, ship);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct ShipRecord {
    /// UTF-8 bytes of the name
    pub name: List<u8, MAX_NAME_LEN>,

    /// UTF-8 bytes of the registry number
    pub registry: List<u8, MAX_REGISTRY_LEN>,

    /// Class discriminant (see [`ShipClass::to_u8`])
    pub class_raw: u8,

    /// Year first seen
    pub first_seen: u32,
}

impl ShipRecord {
    /// Serialize to SSZ bytes
    pub fn encode(&self) -> Result<Vec<u8>, CatalogError> {
        ssz_rs::serialize(self).map_err(|err| CatalogError::Encoding(format!("{err:?}")))
    }

    /// Deserialize from SSZ bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, CatalogError> {
        ssz_rs::deserialize(bytes).map_err(|err| CatalogError::Encoding(format!("{err:?}")))
    }
}

fn bounded<const N: usize>(field: &'static str, text: &str) -> Result<List<u8, N>, CatalogError> {
    let bytes = text.as_bytes().to_vec();
    let len = bytes.len();
    if len > N {
        return Err(CatalogError::FieldTooLong { field, len, max: N });
    }
    List::try_from(bytes).map_err(|_| CatalogError::FieldTooLong { field, len, max: N })
}

fn text<const N: usize>(field: &'static str, list: &List<u8, N>) -> Result<String, CatalogError> {
    let bytes: Vec<u8> = list.iter().copied().collect();
    String::from_utf8(bytes).map_err(|_| CatalogError::InvalidUtf8 { field })
}

impl TryFrom<&Ship> for ShipRecord {
    type Error = CatalogError;

    fn try_from(ship: &Ship) -> Result<Self, Self::Error> {
        Ok(Self {
            name: bounded("name", ship.name())?,
            registry: bounded("registry", ship.registry())?,
            class_raw: ship.class().to_u8(),
            first_seen: ship.first_seen(),
        })
    }
}

impl TryFrom<ShipRecord> for Ship {
    type Error = CatalogError;

    fn try_from(record: ShipRecord) -> Result<Self, Self::Error> {
        let class = ShipClass::from_u8(record.class_raw)
            .ok_or(CatalogError::UnknownClassByte(record.class_raw))?;
        Ok(Ship::new(
            text("name", &record.name)?,
            text("registry", &record.registry)?,
            class,
            record.first_seen,
        ))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reliant() -> Ship {
        Ship::new("Reliant", "NCC-1864", ShipClass::Miranda, 2267)
    }

    #[test]
    fn test_record_from_ship() {
        let record = ShipRecord::try_from(&reliant()).expect("record");

        assert_eq!(record.name.iter().copied().collect::<Vec<u8>>(), b"Reliant".to_vec());
        assert_eq!(record.registry.len(), "NCC-1864".len());
        assert_eq!(record.class_raw, ShipClass::Miranda.to_u8());
        assert_eq!(record.first_seen, 2267);
    }

    #[test]
    fn test_decode_restores_ship() {
        let ship = reliant();
        let bytes = ShipRecord::try_from(&ship).unwrap().encode().unwrap();
        let decoded = Ship::try_from(ShipRecord::decode(&bytes).unwrap()).unwrap();

        assert_eq!(decoded, ship);
    }

    #[test]
    fn test_deterministic_encoding() {
        let a = ShipRecord::try_from(&reliant()).unwrap().encode().unwrap();
        let b = ShipRecord::try_from(&reliant()).unwrap().encode().unwrap();
        assert_eq!(a, b, "SSZ encoding must be deterministic");

        // Two offsets (4 bytes each), class byte, year, then the list payloads
        assert_eq!(a.len(), 4 + 4 + 1 + 4 + "Reliant".len() + "NCC-1864".len());
    }

    #[test]
    fn test_name_too_long() {
        let ship = Ship::new("X".repeat(MAX_NAME_LEN + 1), "NCC-1", ShipClass::Galaxy, 2360);

        assert_eq!(
            ShipRecord::try_from(&ship),
            Err(CatalogError::FieldTooLong {
                field: "name",
                len: MAX_NAME_LEN + 1,
                max: MAX_NAME_LEN,
            })
        );
    }

    #[test]
    fn test_name_at_bound() {
        let ship = Ship::new("X".repeat(MAX_NAME_LEN), "NCC-1", ShipClass::Galaxy, 2360);
        assert!(ShipRecord::try_from(&ship).is_ok());
    }

    #[test]
    fn test_registry_too_long() {
        let ship = Ship::new("Long", "9".repeat(MAX_REGISTRY_LEN + 5), ShipClass::Galaxy, 2360);

        assert!(matches!(
            ShipRecord::try_from(&ship),
            Err(CatalogError::FieldTooLong { field: "registry", .. })
        ));
    }

    #[test]
    fn test_unknown_class_byte() {
        let mut record = ShipRecord::try_from(&reliant()).unwrap();
        record.class_raw = 42;

        assert_eq!(Ship::try_from(record), Err(CatalogError::UnknownClassByte(42)));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut record = ShipRecord::try_from(&reliant()).unwrap();
        record.name = List::try_from(vec![0xff, 0xfe]).unwrap();

        assert_eq!(
            Ship::try_from(record),
            Err(CatalogError::InvalidUtf8 { field: "name" })
        );
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            ShipRecord::decode(&[1, 2, 3]),
            Err(CatalogError::Encoding(_))
        ));
    }
}
