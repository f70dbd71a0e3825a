//! The `Get<V>` trait lets a store provide one typed read per supported value type, so that
//! `Preferences::get<V>()` resolves to the right backend call at compile time.

use crate::error::Error;

pub trait Get<V> {
    /// Reads the value stored under `key`. A missing key is `Ok(None)`, not an error.
    fn get(&mut self, key: &str) -> Result<Option<V>, Error>;
}

impl<V, G: Get<V>> Get<V> for &mut G {
    fn get(&mut self, key: &str) -> Result<Option<V>, Error> {
        (*self).get(key)
    }
}
