//! Settings system — schema, loading, env var overrides, and stores.
//!
//! # Usage
//! ```no_run
//! use paperdeck_core::config::{JsonFileStore, SettingsStore};
//!
//! let store = JsonFileStore::at_default_path();
//! let settings = store.load();
//! println!("Provider: {}", settings.provider);
//! ```

pub mod loader;
pub mod schema;
pub mod store;

pub use loader::{get_config_path, load_persisted, load_settings, save_settings};
pub use schema::{ProviderSettings, Settings};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
