//! The closed set of value types a preference can hold.
//!
//! `Value` is sealed: the six implementations below mirror the item types the NVS driver can
//! persist for a preference, and `Preferences::update` relies on every one of them having a zero
//! value and an equality check.

use alloc::string::String;
use core::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for alloc::string::String {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

#[derive(strum::Display, Debug, Eq, PartialEq, Copy, Clone)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    UInt,
    ULong,
}

/// A borrowed view of any supported value, used for logging and for filling a `Stored` entry.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueRef<'a> {
    Bool(bool),
    Int(i32),
    Float(f32),
    Text(&'a str),
    UInt(u32),
    ULong(u64),
}

impl ValueRef<'_> {
    pub const fn kind(&self) -> ValueKind {
        match self {
            ValueRef::Bool(_) => ValueKind::Bool,
            ValueRef::Int(_) => ValueKind::Int,
            ValueRef::Float(_) => ValueKind::Float,
            ValueRef::Text(_) => ValueKind::Text,
            ValueRef::UInt(_) => ValueKind::UInt,
            ValueRef::ULong(_) => ValueKind::ULong,
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Bool(value) => write!(f, "{value}"),
            ValueRef::Int(value) => write!(f, "{value}"),
            ValueRef::Float(value) => write!(f, "{value}"),
            ValueRef::Text(value) => write!(f, "{value:?}"),
            ValueRef::UInt(value) => write!(f, "{value}"),
            ValueRef::ULong(value) => write!(f, "{value}"),
        }
    }
}

/// An owned value as kept by an untyped store such as [`crate::MemoryStore`].
#[derive(Debug, PartialEq, Clone)]
pub enum Stored {
    Bool(bool),
    Int(i32),
    Float(f32),
    Text(String),
    UInt(u32),
    ULong(u64),
}

impl Stored {
    pub fn kind(&self) -> ValueKind {
        self.as_value_ref().kind()
    }

    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Stored::Bool(value) => ValueRef::Bool(*value),
            Stored::Int(value) => ValueRef::Int(*value),
            Stored::Float(value) => ValueRef::Float(*value),
            Stored::Text(value) => ValueRef::Text(value.as_str()),
            Stored::UInt(value) => ValueRef::UInt(*value),
            Stored::ULong(value) => ValueRef::ULong(*value),
        }
    }
}

impl From<ValueRef<'_>> for Stored {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Bool(value) => Stored::Bool(value),
            ValueRef::Int(value) => Stored::Int(value),
            ValueRef::Float(value) => Stored::Float(value),
            ValueRef::Text(value) => Stored::Text(String::from(value)),
            ValueRef::UInt(value) => Stored::UInt(value),
            ValueRef::ULong(value) => Stored::ULong(value),
        }
    }
}

/// A type that can be persisted as a preference.
///
/// Equality decides whether `update` writes, so `f32::NAN` is never considered up-to-date.
pub trait Value: PartialEq + Sized + sealed::Sealed {
    const KIND: ValueKind;

    /// The value assumed for a key that has never been written.
    fn zero() -> Self;

    fn as_value_ref(&self) -> ValueRef<'_>;

    /// Returns `None` if `stored` holds another kind.
    fn from_stored(stored: &Stored) -> Option<Self>;
}

impl Value for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn zero() -> Self {
        false
    }

    fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::Bool(*self)
    }

    fn from_stored(stored: &Stored) -> Option<Self> {
        match stored {
            Stored::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl Value for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn zero() -> Self {
        0
    }

    fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::Int(*self)
    }

    fn from_stored(stored: &Stored) -> Option<Self> {
        match stored {
            Stored::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl Value for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn zero() -> Self {
        0.0
    }

    fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::Float(*self)
    }

    fn from_stored(stored: &Stored) -> Option<Self> {
        match stored {
            Stored::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl Value for String {
    const KIND: ValueKind = ValueKind::Text;

    fn zero() -> Self {
        String::new()
    }

    fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::Text(self.as_str())
    }

    fn from_stored(stored: &Stored) -> Option<Self> {
        match stored {
            Stored::Text(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl Value for u32 {
    const KIND: ValueKind = ValueKind::UInt;

    fn zero() -> Self {
        0
    }

    fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::UInt(*self)
    }

    fn from_stored(stored: &Stored) -> Option<Self> {
        match stored {
            Stored::UInt(value) => Some(*value),
            _ => None,
        }
    }
}

impl Value for u64 {
    const KIND: ValueKind = ValueKind::ULong;

    fn zero() -> Self {
        0
    }

    fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::ULong(*self)
    }

    fn from_stored(stored: &Stored) -> Option<Self> {
        match stored {
            Stored::ULong(value) => Some(*value),
            _ => None,
        }
    }
}
