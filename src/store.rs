// src/store.rs
//! The store itself: path resolution plus the JSON load/save round trip
//!
//! One `ConfigStore` maps one application to one JSON file and moves
//! caller-provided values across that file boundary with serde.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::consts::{CONFIG_FILENAME, DEFAULT_APP_NAME};
use crate::error::{Result, StoreError};

/// Persistent storage for a single application's config file.
///
/// The config lives in one JSON document at
/// `<root_dir>/<app_name>/config.json`. The root defaults to the platform
/// user-config directory (`$XDG_CONFIG_HOME` or `$HOME/.config` on Linux,
/// `~/Library/Application Support` on macOS, the roaming AppData folder on
/// Windows). A store is immutable once built; overrides go through
/// [`ConfigStore::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    app_name: String,
    root_dir: PathBuf,
}

impl ConfigStore {
    /// Create a store for `app_name` rooted at the platform user-config
    /// directory.
    ///
    /// An empty `app_name` falls back to [`DEFAULT_APP_NAME`].
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigDir`] when the platform directory cannot be
    /// resolved from the environment.
    pub fn new(app_name: impl Into<String>) -> Result<Self> {
        Self::builder().app_name(app_name).build()
    }

    /// Like [`ConfigStore::new`], but panics instead of returning an error.
    ///
    /// Intended for top-level initialization where a missing user-config
    /// directory is unrecoverable anyway. Library code should prefer
    /// [`ConfigStore::new`] and propagate the error.
    ///
    /// # Panics
    ///
    /// Panics when the platform user-config directory cannot be resolved.
    pub fn must_new(app_name: impl Into<String>) -> Self {
        match Self::new(app_name) {
            Ok(store) => store,
            Err(err) => panic!("configstore: {err}"),
        }
    }

    /// Start building a store with explicit root or name overrides
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::default()
    }

    /// Name of the per-app subdirectory
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Base directory holding all per-app config directories
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Full path to the directory the config file is stored in
    pub fn dir(&self) -> PathBuf {
        self.root_dir.join(&self.app_name)
    }

    /// Full path to the config file
    pub fn filepath(&self) -> PathBuf {
        self.dir().join(CONFIG_FILENAME)
    }

    /// Read the config file from disk and decode it into `value`.
    ///
    /// A config file that does not exist yet is not an error: `value` is
    /// left exactly as passed in. Callers should pre-fill it with their
    /// defaults before the call. The store directory is created when
    /// missing, the file never is.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] for directory or read failures other than the
    /// file being absent, [`StoreError::Decode`] when the file content is
    /// not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, value: &mut T) -> Result<()> {
        ensure_dir_exists(&self.dir())?;

        let path = self.filepath();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file yet");
                return Ok(());
            }
            Err(err) => return Err(StoreError::io("read", &path, err)),
        };

        *value = serde_json::from_slice(&data).map_err(StoreError::Decode)?;
        debug!(path = %path.display(), "config loaded");
        Ok(())
    }

    /// Encode `value` as JSON and write it to the config file.
    ///
    /// Any existing file content is replaced in full. There is no atomic
    /// rename and no backup; concurrent writers race and the last one wins.
    /// The store directory is created when missing.
    ///
    /// # Errors
    ///
    /// [`StoreError::Encode`] when `value` cannot be serialized (the file
    /// is left untouched in that case), [`StoreError::Io`] for directory or
    /// write failures.
    pub fn put<T: Serialize>(&self, value: &T) -> Result<()> {
        ensure_dir_exists(&self.dir())?;

        let data = serde_json::to_vec(value).map_err(StoreError::Encode)?;

        let path = self.filepath();
        fs::write(&path, data).map_err(|err| StoreError::io("write", &path, err))?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// Staged builder for [`ConfigStore`].
///
/// Setters take `self` by value, so call order never matters and the
/// finished store is immutable. Overriding the root is mainly meant for
/// tests; production code normally keeps the platform default.
#[derive(Debug, Default)]
pub struct ConfigStoreBuilder {
    app_name: Option<String>,
    root_dir: Option<PathBuf>,
}

impl ConfigStoreBuilder {
    /// Set the app name. Empty names fall back to [`DEFAULT_APP_NAME`].
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Replace the root directory the per-app directory is placed under.
    /// Empty paths count as unset and keep the platform default.
    pub fn root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    /// Finalize the store.
    ///
    /// The platform user-config directory is only consulted when the root
    /// override is unset or empty, so building with a non-empty explicit
    /// root cannot fail.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoConfigDir`] when the default root is needed but the
    /// platform directory cannot be resolved.
    pub fn build(self) -> Result<ConfigStore> {
        let root_dir = match self.root_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => dirs::config_dir().ok_or(StoreError::NoConfigDir)?,
        };

        let app_name = match self.app_name {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_APP_NAME.to_owned(),
        };

        Ok(ConfigStore { app_name, root_dir })
    }
}

/// Ensure `path` and all missing ancestors exist
fn ensure_dir_exists(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|err| StoreError::io("create dir", path, err))
        }
        Err(err) => Err(StoreError::io("stat", path, err)),
    }
}
