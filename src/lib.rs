// src/lib.rs
//! configstore: persistent storage for per-application config files
//!
//! Each application gets a single JSON document at a deterministic
//! location under the platform user-config directory:
//!
//! ```text
//! <user config dir>/<app name>/config.json
//! ```
//!
//! The store serializes whatever the caller's type holds and reads it back
//! on the next run. A file that was never written is treated as "no config
//! yet", not as an error, so first runs need no special casing.
//!
//! ```no_run
//! use configstore::ConfigStore;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Config {
//!     api_key: String,
//! }
//!
//! fn main() -> configstore::Result<()> {
//!     let store = ConfigStore::new("my_app")?;
//!
//!     // Load whatever was stored on a previous run.
//!     let mut config = Config::default();
//!     store.get(&mut config)?;
//!
//!     // Persist the updated config.
//!     config.api_key = "xyz".to_owned();
//!     store.put(&config)?;
//!     Ok(())
//! }
//! ```

pub mod consts;
pub mod error;
pub mod store;

// Re-export everything users need at the crate root
pub use consts::{CONFIG_FILENAME, DEFAULT_APP_NAME};
pub use error::{Result, StoreError};
pub use store::{ConfigStore, ConfigStoreBuilder};
