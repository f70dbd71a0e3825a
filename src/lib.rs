#![doc = include_str ! ("../README.md")]
#![cfg_attr(not(target_arch = "x86_64"), no_std)]

mod composite;
pub mod error;
mod get;
pub mod log;
mod memory;
#[cfg(feature = "esp-nvs")]
pub mod nvs;
mod set;
pub mod value;

extern crate alloc;

/// Maximum key length in bytes, shared by keys and namespace names. The NVS null terminator is
/// not included.
pub const MAX_KEY_LENGTH: usize = 15;

pub use composite::VectorKeys;
pub use get::Get;
pub use memory::MemoryStore;
pub use set::Set;

use crate::error::Error;
use crate::log::{Event, Log, NoLog};
use crate::value::Value;

pub(crate) fn check_key(key: &str) -> Result<(), Error> {
    if key.is_empty() {
        return Err(Error::KeyEmpty);
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(Error::KeyTooLong);
    }
    Ok(())
}

/// Result of [`Preferences::update`].
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The stored value differed and was overwritten.
    Written,
    /// The stored value already matched, nothing was written.
    Unchanged,
}

/// Typed access to the preferences of a store.
///
/// The accessor holds no state besides the store and the logger: every call is passed straight
/// through, opening and closing the underlying namespace is up to the caller.
pub struct Preferences<S, L = NoLog> {
    store: S,
    log: L,
}

impl<S> Preferences<S, NoLog> {
    pub fn new(store: S) -> Self {
        Self { store, log: NoLog }
    }
}

impl<S, L: Log> Preferences<S, L> {
    pub fn with_log(store: S, log: L) -> Self {
        Self { store, log }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Get a preference, or `default` if the key was never written.
    ///
    /// The type is selected by `default`. Store errors are reported to the logger and resolve to
    /// `default` as well; use [`Preferences::try_get`] to see them.
    pub fn get<V: Value>(&mut self, key: &str, default: V) -> V
    where
        S: Get<V>,
    {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(error) => {
                self.log.log(Event::ReadFailed { key, error: &error });
                default
            }
        }
    }

    pub fn try_get<V: Value>(&mut self, key: &str) -> Result<Option<V>, Error>
    where
        S: Get<V>,
    {
        self.log.log(Event::Read { key, kind: V::KIND });
        self.store.get(key)
    }

    /// Write a preference unconditionally.
    pub fn put<V: Value>(&mut self, key: &str, value: V) -> Result<(), Error>
    where
        S: Set<V>,
    {
        self.put_ref(key, &value)
    }

    fn put_ref<V: Value>(&mut self, key: &str, value: &V) -> Result<(), Error>
    where
        S: Set<V>,
    {
        self.log.log(Event::Write { key, kind: V::KIND });
        self.store.set(key, value)
    }

    /// Write a preference only if it differs from the stored one, sparing the flash a write cycle.
    ///
    /// A key that was never written counts as holding the zero value of `V`, so updating it to
    /// zero writes nothing. Read errors abort the update before anything is written.
    pub fn update<V: Value>(&mut self, key: &str, value: V) -> Result<Outcome, Error>
    where
        S: Get<V> + Set<V>,
    {
        let current = self.try_get::<V>(key)?.unwrap_or_else(V::zero);
        self.log.log(Event::Compare {
            key,
            current: current.as_value_ref(),
            new: value.as_value_ref(),
        });

        if current != value {
            self.put_ref(key, &value)?;
            self.log.log(Event::Updated { key });
            Ok(Outcome::Written)
        } else {
            self.log.log(Event::UpToDate { key });
            Ok(Outcome::Unchanged)
        }
    }
}
