use crate::error::Error;
use crate::value::{Stored, Value};
use crate::{Get, Set, check_key};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// A volatile store that keeps every preference in a map and counts the writes it receives.
///
/// Applies the same key rules as the flash backed store, which makes it a drop-in replacement on
/// the host and a write-count probe in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Stored>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw access to an entry regardless of its kind.
    pub fn get_stored(&self, key: &str) -> Option<&Stored> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<V: Value> Get<V> for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<V>, Error> {
        check_key(key)?;

        match self.entries.get(key) {
            None => Ok(None),
            Some(stored) => V::from_stored(stored)
                .map(Some)
                .ok_or(Error::TypeMismatch(stored.kind())),
        }
    }
}

impl<V: Value> Set<V> for MemoryStore {
    fn set(&mut self, key: &str, value: &V) -> Result<(), Error> {
        check_key(key)?;

        self.entries
            .insert(String::from(key), Stored::from(value.as_value_ref()));
        self.writes += 1;
        Ok(())
    }
}
