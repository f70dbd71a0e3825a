//! Values spread over several keys: an IPv4 address as four octet keys and an integer vector as a
//! count key plus one key per element.

use crate::error::Error;
use crate::log::Log;
use crate::{Get, MAX_KEY_LENGTH, Preferences, Set, check_key};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::net::Ipv4Addr;

/// The keys an integer vector is stored under: `count` holds the number of elements, element `i`
/// is stored at `{base}{i}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorKeys {
    count: String,
    base: String,
}

impl VectorKeys {
    /// Takes the count key and the element base key explicitly.
    ///
    /// `count` follows the usual key rules. `base` must leave room for at least one index digit,
    /// so it is limited to `MAX_KEY_LENGTH - 1` bytes.
    pub fn new(count: &str, base: &str) -> Result<Self, Error> {
        check_key(count)?;
        if base.is_empty() {
            return Err(Error::KeyEmpty);
        }
        if base.len() >= MAX_KEY_LENGTH {
            return Err(Error::KeyTooLong);
        }

        Ok(Self {
            count: String::from(count),
            base: String::from(base),
        })
    }

    /// Derives the keys from a plural prefix: `items` is counted at `num_items` and its elements
    /// live at `item0`, `item1`, ...
    pub fn from_plural(prefix: &str) -> Result<Self, Error> {
        let Some(base) = prefix.strip_suffix('s') else {
            return Err(Error::InvalidVectorPrefix);
        };
        if base.is_empty() {
            return Err(Error::InvalidVectorPrefix);
        }

        Self::new(&format!("num_{prefix}"), base)
    }

    /// The key holding the number of elements.
    pub fn count(&self) -> &str {
        &self.count
    }

    /// The prefix of every element key.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The key of element `index`. It is not checked against the key length limit.
    pub fn element(&self, index: usize) -> String {
        format!("{}{index}", self.base)
    }
}

/// Octets are stored 1-based: `{prefix}1` holds the first one.
fn octet_key(prefix: &str, index: usize) -> String {
    format!("{prefix}{}", index + 1)
}

impl<S, L: Log> Preferences<S, L>
where
    S: Get<i32> + Set<i32>,
{
    /// Stores each octet of `address` under `{prefix}1` to `{prefix}4`, writing only the ones
    /// that changed.
    pub fn update_network_address(&mut self, prefix: &str, address: Ipv4Addr) -> Result<(), Error> {
        for (index, octet) in address.octets().into_iter().enumerate() {
            self.update(&octet_key(prefix, index), i32::from(octet))?;
        }
        Ok(())
    }

    /// Reads an address written by [`Preferences::update_network_address`].
    ///
    /// An octet that was never written reads as zero, as `update` skips writing zero to a fresh
    /// key. Returns `None` only if none of the four octets exist.
    pub fn network_address(&mut self, prefix: &str) -> Result<Option<Ipv4Addr>, Error> {
        let mut octets = [0u8; 4];
        let mut found = false;
        for (index, octet) in octets.iter_mut().enumerate() {
            let Some(value) = self.try_get::<i32>(&octet_key(prefix, index))? else {
                continue;
            };
            *octet = u8::try_from(value).map_err(|_| Error::OctetOutOfRange(value))?;
            found = true;
        }
        Ok(found.then(|| Ipv4Addr::from(octets)))
    }

    /// Stores `values` under the keys derived from the plural `prefix`, see
    /// [`VectorKeys::from_plural`].
    pub fn update_vector(&mut self, prefix: &str, values: &[i32]) -> Result<(), Error> {
        let keys = VectorKeys::from_plural(prefix)?;
        self.update_vector_at(&keys, values)
    }

    /// Stores the element count and then every element, writing only what changed.
    ///
    /// Elements beyond the new length from an earlier, longer vector are left in place. All
    /// element keys are checked before the first write, so a too long key leaves the store as is.
    pub fn update_vector_at(&mut self, keys: &VectorKeys, values: &[i32]) -> Result<(), Error> {
        let count = i32::try_from(values.len()).map_err(|_| Error::ValueTooLong)?;
        // the last element has the longest key
        if let Some(last) = values.len().checked_sub(1) {
            check_key(&keys.element(last))?;
        }
        self.update(keys.count(), count)?;

        for (index, &value) in values.iter().enumerate() {
            self.update(&keys.element(index), value)?;
        }
        Ok(())
    }

    pub fn vector(&mut self, prefix: &str) -> Result<Vec<i32>, Error> {
        let keys = VectorKeys::from_plural(prefix)?;
        self.vector_at(&keys)
    }

    /// Reads a vector written by [`Preferences::update_vector_at`]. A missing count is an empty
    /// vector and a missing element is zero.
    pub fn vector_at(&mut self, keys: &VectorKeys) -> Result<Vec<i32>, Error> {
        let count = self.try_get::<i32>(keys.count())?.unwrap_or(0);
        let count = usize::try_from(count).map_err(|_| Error::InvalidLength(count))?;

        (0..count)
            .map(|index| Ok(self.try_get::<i32>(&keys.element(index))?.unwrap_or(0)))
            .collect()
    }
}
