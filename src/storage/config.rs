//! JSON settings file.
//!
//! Stores settings in `<config dir>/EnoCursor/eno-cursor-settings.json`.
//!
//! Uses an in-memory cache so edits never touch the disk on the render path.
//! The runtime flushes dirty settings periodically from a blocking task, one
//! write at a time, and once more at shutdown. Writes go through a temporary
//! file and a rename.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::model::constants::*;
use crate::model::CircleSpec;

/// Size and color of one circle as stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircleSettings {
    pub size: f64,
    pub color: String,
}

/// Serializable settings structure for JSON persistence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    pub inner: CircleSettings,
    pub outer: CircleSettings,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub auto_start: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::from_spec(&CircleSpec::default(), false, false)
    }
}

impl PersistedSettings {
    pub fn from_spec(spec: &CircleSpec, running: bool, auto_start: bool) -> Self {
        Self {
            inner: CircleSettings {
                size: spec.inner_diameter,
                color: spec.inner_color.clone(),
            },
            outer: CircleSettings {
                size: spec.outer_diameter,
                color: spec.outer_color.clone(),
            },
            running,
            auto_start,
        }
    }

    pub fn to_spec(&self) -> CircleSpec {
        CircleSpec {
            inner_diameter: self.inner.size,
            outer_diameter: self.outer.size,
            inner_color: self.inner.color.clone(),
            outer_color: self.outer.color.clone(),
        }
    }
}

/// Default settings file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_from(path: &Path) -> Result<PersistedSettings, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(PersistedSettings::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write settings to `path`, creating the parent directory if needed.
pub fn save_to(path: &Path, settings: &PersistedSettings) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    // Readers only ever see the old file or the complete new one
    let tmp = temp_path_for(path);
    fs::write(&tmp, json).map_err(io_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Cached settings with a dirty flag.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    cache: PersistedSettings,
    dirty: bool,
}

impl ConfigStore {
    /// Load the store from `path`, falling back to defaults on any error.
    pub fn open(path: PathBuf) -> Self {
        let cache = match load_from(&path) {
            Ok(settings) => {
                info!("Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Failed to load settings, using defaults: {}", e);
                PersistedSettings::default()
            }
        };
        Self {
            path,
            cache,
            dirty: false,
        }
    }

    /// A store that starts from `settings` without reading the disk.
    pub fn with_settings(path: PathBuf, settings: PersistedSettings) -> Self {
        Self {
            path,
            cache: settings,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &PersistedSettings {
        &self.cache
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Update the cache; marks it dirty only if something changed.
    pub fn update(&mut self, settings: PersistedSettings) {
        if settings != self.cache {
            self.cache = settings;
            self.dirty = true;
        }
    }

    /// Hand out a snapshot to write, clearing the dirty flag.
    pub fn take_dirty(&mut self) -> Option<(PathBuf, PersistedSettings)> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some((self.path.clone(), self.cache.clone()))
    }

    /// Write the cache to disk now if dirty.
    pub fn flush(&mut self) -> Result<(), ConfigError> {
        if let Some((path, settings)) = self.take_dirty() {
            if let Err(e) = save_to(&path, &settings) {
                self.dirty = true;
                return Err(e);
            }
            info!("Settings saved to {}", path.display());
        }
        Ok(())
    }
}
