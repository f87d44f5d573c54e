// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-file persistence for configured devices.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::ConfigError;

use super::DeviceConfig;

/// Persistent store of configured device entries.
///
/// Entries are kept in memory keyed by identifier and written back to a JSON
/// file on every mutation. The file holds a plain array of entries, so it
/// stays hand-editable. Writes go through a temporary file that is renamed
/// into place, so a crash mid-write cannot truncate the store.
///
/// # Examples
///
/// ```no_run
/// use medior_lib::config::{ConfigStore, DeviceConfig};
///
/// # fn example() -> medior_lib::Result<()> {
/// let store = ConfigStore::load("devices.json")?;
/// store.add(DeviceConfig::new("Living Room Player", "192.168.1.42"))?;
///
/// for entry in store.all() {
///     println!("{}: {}", entry.identifier, entry.address);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    devices: RwLock<HashMap<String, DeviceConfig>>,
}

impl ConfigStore {
    /// Loads the store from the given file.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first mutation.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed, or if
    /// it contains duplicate or invalid entries.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let mut devices = HashMap::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let entries: Vec<DeviceConfig> = serde_json::from_str(&contents)?;

            for entry in entries {
                entry.validate()?;
                if devices
                    .insert(entry.identifier.clone(), entry.clone())
                    .is_some()
                {
                    return Err(ConfigError::DuplicateDevice(entry.identifier));
                }
            }

            tracing::debug!(
                path = %path.display(),
                count = devices.len(),
                "Loaded configured devices"
            );
        } else {
            tracing::debug!(path = %path.display(), "No config file yet, starting empty");
        }

        Ok(Self {
            path,
            devices: RwLock::new(devices),
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all configured entries.
    ///
    /// The order is unspecified.
    #[must_use]
    pub fn all(&self) -> Vec<DeviceConfig> {
        self.devices.read().values().cloned().collect()
    }

    /// Returns the entry with the given identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<DeviceConfig> {
        self.devices.read().get(identifier).cloned()
    }

    /// Returns `true` if an entry with the given identifier exists.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.devices.read().contains_key(identifier)
    }

    /// Returns the number of configured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if no entry is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    /// Adds a new entry and saves the store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateDevice` if the identifier is already
    /// configured, `ConfigError::InvalidEntry` if the entry is invalid, or
    /// an I/O error if saving fails.
    pub fn add(&self, config: DeviceConfig) -> Result<(), ConfigError> {
        config.validate()?;

        {
            let mut devices = self.devices.write();
            if devices.contains_key(&config.identifier) {
                return Err(ConfigError::DuplicateDevice(config.identifier));
            }
            devices.insert(config.identifier.clone(), config);
        }

        self.save()
    }

    /// Replaces an existing entry and saves the store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownDevice` if no entry with the identifier
    /// exists.
    pub fn update(&self, config: DeviceConfig) -> Result<(), ConfigError> {
        config.validate()?;

        {
            let mut devices = self.devices.write();
            if !devices.contains_key(&config.identifier) {
                return Err(ConfigError::UnknownDevice(config.identifier));
            }
            devices.insert(config.identifier.clone(), config);
        }

        self.save()
    }

    /// Removes an entry and saves the store.
    ///
    /// Returns the removed entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownDevice` if no entry with the identifier
    /// exists.
    pub fn remove(&self, identifier: &str) -> Result<DeviceConfig, ConfigError> {
        let removed = {
            let mut devices = self.devices.write();
            devices
                .remove(identifier)
                .ok_or_else(|| ConfigError::UnknownDevice(identifier.to_string()))?
        };

        self.save()?;
        Ok(removed)
    }

    /// Writes the store to disk via a temporary file.
    fn save(&self) -> Result<(), ConfigError> {
        let mut entries = self.all();
        entries.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        let contents = serde_json::to_string_pretty(&entries)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "Saved configured devices");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!(
            "medior-config-{}.json",
            uuid::Uuid::new_v4().simple()
        ))
    }

    #[test]
    fn load_missing_file_is_empty() {
        let path = temp_store_path();
        let store = ConfigStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn add_get_remove_round_trip() {
        let path = temp_store_path();
        let store = ConfigStore::load(&path).unwrap();

        let config = DeviceConfig::new("Player", "192.168.1.42").with_identifier("d1");
        store.add(config.clone()).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains("d1"));
        assert_eq!(store.get("d1").unwrap().address, "192.168.1.42");

        let removed = store.remove("d1").unwrap();
        assert_eq!(removed, config);
        assert!(store.is_empty());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn add_duplicate_is_rejected() {
        let path = temp_store_path();
        let store = ConfigStore::load(&path).unwrap();

        let config = DeviceConfig::new("Player", "192.168.1.42").with_identifier("d1");
        store.add(config.clone()).unwrap();

        assert!(matches!(
            store.add(config),
            Err(ConfigError::DuplicateDevice(_))
        ));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn update_unknown_is_rejected() {
        let path = temp_store_path();
        let store = ConfigStore::load(&path).unwrap();

        let config = DeviceConfig::new("Player", "192.168.1.42").with_identifier("ghost");
        assert!(matches!(
            store.update(config),
            Err(ConfigError::UnknownDevice(_))
        ));
    }

    #[test]
    fn persisted_entries_survive_reload() {
        let path = temp_store_path();

        {
            let store = ConfigStore::load(&path).unwrap();
            store
                .add(DeviceConfig::new("One", "10.0.0.1").with_identifier("d1"))
                .unwrap();
            store
                .add(DeviceConfig::new("Two", "10.0.0.2").with_identifier("d2"))
                .unwrap();
        }

        let reloaded = ConfigStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("d2").unwrap().name, "Two");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn remove_unknown_is_rejected() {
        let path = temp_store_path();
        let store = ConfigStore::load(&path).unwrap();
        assert!(matches!(
            store.remove("ghost"),
            Err(ConfigError::UnknownDevice(_))
        ));
    }
}
