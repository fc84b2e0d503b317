//! The collaborator-facing surface consumed by the presentation layer.

use crate::config::ConfigStore;
use crate::core::{launcher, sync};
use crate::models::entry::ModEntry;
use crate::models::error::Error;
use crate::models::settings::SortPreference;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::warn;

/// Facade over the record store and the managed directory.
///
/// Holds the only in-memory state: the store handle, the game path loaded at
/// construction, and the managed directory derived from it. The mod list
/// itself is never held here; reads always go back to disk.
pub struct ModManager {
    store: ConfigStore,
    game_path: Option<Utf8PathBuf>,
    mods_dir: Option<Utf8PathBuf>,
}

impl ModManager {
    /// Opens the manager against the store's default location.
    pub fn initialize() -> Result<Self, Error> {
        Self::with_store(ConfigStore::default_location())
    }

    /// Opens the manager against an explicit store.
    ///
    /// Creates the backing file if absent, loads the persisted game path and
    /// derives the managed directory from it. A missing or underivable game
    /// path is a valid state; only a failure to create the store is an error.
    pub fn with_store(store: ConfigStore) -> Result<Self, Error> {
        store.ensure_initialized()?;
        let game_path = store.game_path();
        let mods_dir = game_path.as_deref().and_then(sync::mods_dir_for);
        Ok(Self {
            store,
            game_path,
            mods_dir,
        })
    }

    pub fn game_path(&self) -> Option<&Utf8Path> {
        self.game_path.as_deref()
    }

    /// Sets and persists the game executable path, then re-derives the managed
    /// directory. The path must point at an existing file; this is the one
    /// operation whose failure blocks the caller instead of degrading.
    pub fn set_game_path(&mut self, path: impl Into<Utf8PathBuf>) -> Result<(), Error> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::InvalidGamePath(path.into_string()));
        }
        self.store.set_game_path(&path)?;
        self.mods_dir = sync::mods_dir_for(&path);
        self.game_path = Some(path);
        Ok(())
    }

    pub fn sort_preference(&self) -> SortPreference {
        self.store.sort_preference()
    }

    pub fn set_sort_preference(&self, pref: SortPreference) {
        self.store.set_sort_preference(pref);
    }

    /// The managed directory, when a game path is set and the tree could be
    /// created under it.
    pub fn mods_dir(&self) -> Option<&Utf8Path> {
        self.mods_dir.as_deref()
    }

    /// Scans the managed directory, persists the result and returns it. Empty
    /// when no managed directory is available.
    pub fn list_mods(&self) -> Vec<ModEntry> {
        match &self.mods_dir {
            Some(dir) => sync::scan(&self.store, dir),
            None => Vec::new(),
        }
    }

    /// Flips one mod between active and disabled. Callers re-list afterwards;
    /// no rescan happens here.
    pub fn toggle_mod(&self, filename: &str, currently_enabled: bool) {
        match &self.mods_dir {
            Some(dir) => sync::toggle(dir, filename, currently_enabled),
            None => warn!("no managed directory, cannot toggle '{filename}'"),
        }
    }

    /// Copies a mod file into the managed directory and returns the refreshed
    /// list.
    pub fn install_mod(&self, source: &Utf8Path) -> Vec<ModEntry> {
        match &self.mods_dir {
            Some(dir) => sync::install(&self.store, dir, source),
            None => {
                warn!("no managed directory, cannot install '{source}'");
                Vec::new()
            }
        }
    }

    /// Deletes the named mod files permanently and returns the refreshed list.
    /// One rescan per batch, not per file.
    pub fn remove_mods(&self, filenames: &[String]) -> Vec<ModEntry> {
        match &self.mods_dir {
            Some(dir) => sync::remove(&self.store, dir, filenames),
            None => {
                warn!("no managed directory, nothing removed");
                Vec::new()
            }
        }
    }

    /// Starts the configured game as an independent process.
    pub fn launch_game(&self) -> Result<(), Error> {
        launcher::launch(self.game_path.as_deref())
    }
}
