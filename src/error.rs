use crate::value::ValueKind;
use thiserror::Error;

/// Errors surfaced by the preference accessor and its stores.
///
/// A missing key is never reported here: reads resolve it to `None` or to the caller's default.
#[derive(Error, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Keys need at least one byte.
    #[error("key empty")]
    KeyEmpty,

    /// The max key length is 15 bytes, this also applies to keys derived from a prefix.
    #[error("key too long")]
    KeyTooLong,

    /// Namespace names need at least one byte.
    #[error("namespace empty")]
    NamespaceEmpty,

    /// The max namespace length is 15 bytes.
    #[error("namespace too long")]
    NamespaceTooLong,

    /// A plural vector prefix needs at least two characters and a trailing `s`.
    #[error("invalid vector prefix")]
    InvalidVectorPrefix,

    /// The key holds a value of another kind. The stored kind is reported.
    #[error("value type mismatch: {0}")]
    TypeMismatch(ValueKind),

    /// A fixed size value was stored with an unexpected number of bytes.
    #[error("value size mismatch: {0} bytes")]
    ValueSizeMismatch(usize),

    /// A vector has more elements than its `i32` count key can hold.
    #[error("value too long")]
    ValueTooLong,

    /// The stored element count of a vector is negative.
    #[error("invalid vector length: {0}")]
    InvalidLength(i32),

    /// A stored address octet is outside `0..=255`.
    #[error("octet out of range: {0}")]
    OctetOutOfRange(i32),

    /// The error reported by the underlying driver.
    #[cfg(feature = "esp-nvs")]
    #[error("nvs: {0}")]
    Nvs(#[from] esp_nvs::error::Error),
}
