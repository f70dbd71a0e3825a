use crate::error::Error;

pub trait Set<V> {
    /// Unconditionally writes `value` under `key`, costing one write cycle of the backing flash.
    fn set(&mut self, key: &str, value: &V) -> Result<(), Error>;
}

impl<V, S: Set<V>> Set<V> for &mut S {
    fn set(&mut self, key: &str, value: &V) -> Result<(), Error> {
        (*self).set(key, value)
    }
}
