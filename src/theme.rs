use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the mode you would switch *to*.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "extra-moon",
            Theme::Dark => "extra-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("couldn't write {key} to storage")]
    WriteFailed { key: String },
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-only storage, used on the server and whenever nothing durable exists.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Holds the active theme and keeps storage in sync with it.
///
/// Storage failures never surface: reads fall back to [`Theme::Light`] and
/// failed writes only cost persistence, the in-memory value still changes.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    current: Theme,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        let current = match storage.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                log::debug!("ignoring stored theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("couldn't read theme preference: {e}");
                Theme::default()
            }
        };
        Self { storage, current }
    }

    pub fn get_theme(&self) -> Theme {
        self.current
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, self.current.as_str()) {
            log::warn!("couldn't persist theme preference: {e}");
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                key: key.to_string(),
            })
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::new(MemoryStorage::default());
        assert_eq!(store.get_theme(), Theme::Light);
    }

    #[test]
    fn test_invalid_stored_value_falls_back() {
        let storage = MemoryStorage::default();
        storage.set(THEME_STORAGE_KEY, "purple").unwrap();
        let store = ThemeStore::new(&storage);
        assert_eq!(store.get_theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_parity() {
        for start in Theme::ALL {
            for n in 0..7 {
                let storage = MemoryStorage::default();
                storage.set(THEME_STORAGE_KEY, start.as_str()).unwrap();
                let mut store = ThemeStore::new(&storage);
                for _ in 0..n {
                    store.toggle_theme();
                }
                let expected = if n % 2 == 0 { start } else { start.toggled() };
                assert_eq!(store.get_theme(), expected, "start {start}, {n} toggles");
            }
        }
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let storage = MemoryStorage::default();
        {
            let mut store = ThemeStore::new(&storage);
            assert_eq!(store.toggle_theme(), Theme::Dark);
        }
        assert_eq!(
            storage.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("dark")
        );

        let reloaded = ThemeStore::new(&storage);
        assert_eq!(reloaded.get_theme(), Theme::Dark);
    }

    #[test]
    fn test_broken_storage_is_silent() {
        let mut store = ThemeStore::new(BrokenStorage);
        assert_eq!(store.get_theme(), Theme::Light);
        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(store.toggle_theme(), Theme::Light);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
