//! Settings stores — the injectable persistence seam.
//!
//! The resolver takes an `Arc<dyn SettingsStore>` and calls [`SettingsStore::load`]
//! exactly once per generation, so edits made while a request is in flight
//! are only seen by the next call.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use super::loader::{get_config_path, load_persisted, load_settings, save_settings};
use super::schema::Settings;

/// Persistent key-value settings, read and written as a whole.
pub trait SettingsStore: Send + Sync {
    /// Read a consistent snapshot of every setting.
    fn load(&self) -> Settings;

    /// Read the persisted settings only, for a read-modify-write.
    ///
    /// Unlike [`SettingsStore::load`] this must not mix in values that are
    /// not stored (such as env overrides) and must fail rather than fall
    /// back to defaults when the stored data cannot be read.
    fn load_for_update(&self) -> std::io::Result<Settings> {
        Ok(self.load())
    }

    /// Replace the stored settings.
    fn save(&self, settings: &Settings) -> std::io::Result<()>;
}

/// Settings persisted as JSON on disk, with env var overrides applied on load.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.paperdeck/config.json`.
    pub fn at_default_path() -> Self {
        Self::new(get_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Settings {
        load_settings(Some(&self.path))
    }

    fn load_for_update(&self) -> std::io::Result<Settings> {
        load_persisted(&self.path)
    }

    fn save(&self, settings: &Settings) -> std::io::Result<()> {
        save_settings(settings, Some(&self.path))
    }
}

/// In-memory store. Counts loads so tests can assert snapshot reads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<Settings>,
    loads: AtomicUsize,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of times [`SettingsStore::load`] has been called.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Mutate the stored settings in place (simulates the user editing prefs).
    pub fn update(&self, f: impl FnOnce(&mut Settings)) {
        let mut guard = self.settings.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Settings {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.settings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, settings: &Settings) -> std::io::Result<()> {
        *self.settings.write().unwrap_or_else(|e| e.into_inner()) = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_counts_loads() {
        let store = MemoryStore::default();
        assert_eq!(store.load_count(), 0);
        let _ = store.load();
        let _ = store.load();
        assert_eq!(store.load_count(), 2);
    }

    #[test]
    fn test_memory_store_snapshot_is_detached() {
        let store = MemoryStore::default();
        let snapshot = store.load();
        store.update(|s| s.provider = "openai".into());
        assert_eq!(snapshot.provider, "deepseek");
        assert_eq!(store.load().provider, "openai");
    }

    #[test]
    fn test_json_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("config.json"));

        let mut s = store.load();
        s.set("providers.siliconflow.apiKey", "sf-key").unwrap();
        store.save(&s).unwrap();

        let reloaded = store.load();
        assert_eq!(
            reloaded.get("providers.siliconflow.apiKey").as_deref(),
            Some("sf-key")
        );
    }

    #[test]
    fn test_json_file_store_update_load_skips_env() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("config.json"));
        std::env::set_var("PAPERDECK_PROVIDERS__CUSTOM__API_KEY", "custom-env-only");

        let overlaid = store.load();
        let persisted = store.load_for_update().unwrap();
        std::env::remove_var("PAPERDECK_PROVIDERS__CUSTOM__API_KEY");

        assert_eq!(overlaid.get("providers.custom.apiKey").as_deref(), Some("custom-env-only"));
        assert!(persisted.provider_settings("custom").is_none());
    }

    #[test]
    fn test_json_file_store_update_load_fails_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert_eq!(store.load(), Settings::default());
        assert!(store.load_for_update().is_err());
    }

    #[test]
    fn test_json_file_store_path() {
        let store = JsonFileStore::new("/tmp/paperdeck-test/config.json");
        assert_eq!(store.path(), Path::new("/tmp/paperdeck-test/config.json"));
        assert!(JsonFileStore::at_default_path().path().ends_with("config.json"));
    }
}
