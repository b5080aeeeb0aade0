//! Error type for the fallible edges of the registry.
//!
//! The ordering core never fails. Only parsing class names and the SSZ
//! record layer can, and they report through [`CatalogError`].

use thiserror::Error;

/// Errors raised while parsing or encoding ships.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A text field does not fit its bounded SSZ list
    #[error("{field} is {len} bytes, maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A class name that is not part of [`ShipClass`](crate::types::ShipClass)
    #[error("unknown ship class `{0}`")]
    UnknownClass(String),

    /// A class discriminant outside the declared range
    #[error("unknown ship class byte {0}")]
    UnknownClassByte(u8),

    /// Decoded text was not valid UTF-8
    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    /// The SSZ codec rejected the input
    #[error("ssz codec failure: {0}")]
    Encoding(String),
}
