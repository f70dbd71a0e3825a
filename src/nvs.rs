//! Preferences stored in a namespace of an ESP-IDF compatible NVS partition.
//!
//! Integers and booleans map onto the driver's primitive items and text onto its string items.
//! The driver has no float item, so a float is kept as a 4 byte little-endian blob.

use crate::error::Error;
use crate::{Get, Set, check_key};
use alloc::string::String;
use alloc::vec::Vec;
use esp_nvs::platform::Platform;
use esp_nvs::{Key, Nvs};

/// A namespace of an opened partition, borrowed for a batch of preference operations.
///
/// The partition stays borrowed until the handle is dropped.
pub struct Namespace<'a, T: Platform> {
    nvs: &'a mut Nvs<T>,
    name: Key,
}

impl<'a, T: Platform> Namespace<'a, T> {
    /// Namespace names follow the key rules: 1 to 15 bytes.
    pub fn open(nvs: &'a mut Nvs<T>, name: &str) -> Result<Self, Error> {
        match check_key(name) {
            Ok(()) => {}
            Err(Error::KeyEmpty) => return Err(Error::NamespaceEmpty),
            Err(_) => return Err(Error::NamespaceTooLong),
        }

        Ok(Self {
            nvs,
            name: Key::from_str(name),
        })
    }

    pub fn name(&self) -> &Key {
        &self.name
    }

    fn read<R>(&mut self, key: &str) -> Result<Option<R>, Error>
    where
        Nvs<T>: esp_nvs::Get<R>,
    {
        check_key(key)?;

        match self.nvs.get::<R>(&self.name, &Key::from_str(key)) {
            Ok(value) => Ok(Some(value)),
            // the namespace is only created by its first write
            Err(esp_nvs::error::Error::KeyNotFound | esp_nvs::error::Error::NamespaceNotFound) => {
                Ok(None)
            }
            Err(e) => Err(Error::Nvs(e)),
        }
    }

    fn write<R>(&mut self, key: &str, value: R) -> Result<(), Error>
    where
        Nvs<T>: esp_nvs::Set<R>,
    {
        check_key(key)?;

        self.nvs.set(&self.name, &Key::from_str(key), value)?;
        Ok(())
    }
}

impl<T: Platform> Get<bool> for Namespace<'_, T> {
    fn get(&mut self, key: &str) -> Result<Option<bool>, Error> {
        self.read(key)
    }
}

impl<T: Platform> Get<i32> for Namespace<'_, T> {
    fn get(&mut self, key: &str) -> Result<Option<i32>, Error> {
        self.read(key)
    }
}

impl<T: Platform> Get<f32> for Namespace<'_, T> {
    fn get(&mut self, key: &str) -> Result<Option<f32>, Error> {
        let Some(bytes) = self.read::<Vec<u8>>(key)? else {
            return Ok(None);
        };

        let bytes: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::ValueSizeMismatch(bytes.len()))?;
        Ok(Some(f32::from_le_bytes(bytes)))
    }
}

impl<T: Platform> Get<String> for Namespace<'_, T> {
    fn get(&mut self, key: &str) -> Result<Option<String>, Error> {
        self.read(key)
    }
}

impl<T: Platform> Get<u32> for Namespace<'_, T> {
    fn get(&mut self, key: &str) -> Result<Option<u32>, Error> {
        self.read(key)
    }
}

impl<T: Platform> Get<u64> for Namespace<'_, T> {
    fn get(&mut self, key: &str) -> Result<Option<u64>, Error> {
        self.read(key)
    }
}

impl<T: Platform> Set<bool> for Namespace<'_, T> {
    fn set(&mut self, key: &str, value: &bool) -> Result<(), Error> {
        self.write(key, *value)
    }
}

impl<T: Platform> Set<i32> for Namespace<'_, T> {
    fn set(&mut self, key: &str, value: &i32) -> Result<(), Error> {
        self.write(key, *value)
    }
}

impl<T: Platform> Set<f32> for Namespace<'_, T> {
    fn set(&mut self, key: &str, value: &f32) -> Result<(), Error> {
        let bytes = value.to_le_bytes();
        self.write(key, &bytes[..])
    }
}

impl<T: Platform> Set<String> for Namespace<'_, T> {
    fn set(&mut self, key: &str, value: &String) -> Result<(), Error> {
        self.write(key, value.as_str())
    }
}

impl<T: Platform> Set<u32> for Namespace<'_, T> {
    fn set(&mut self, key: &str, value: &u32) -> Result<(), Error> {
        self.write(key, *value)
    }
}

impl<T: Platform> Set<u64> for Namespace<'_, T> {
    fn set(&mut self, key: &str, value: &u64) -> Result<(), Error> {
        self.write(key, *value)
    }
}
