//! The record store: one TOML document holding the settings section and the
//! mod list cached from the last scan.

use crate::models::entry::ModEntry;
use crate::models::error::Error;
use crate::models::settings::{Settings, SortPreference};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name of the backing document.
pub const STORE_FILE: &str = "modlist.toml";

/// The full backing document.
///
/// `settings` holds the game path and sort preference; `mods` is a pure cache
/// of the last directory scan and is rewritten wholesale, never merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modlist {
    pub settings: Settings,
    pub mods: Vec<ModEntry>,
}

/// Handle on the backing file.
///
/// Holds no parsed state: every accessor is a fresh read and every mutation a
/// full read-modify-write of the whole document. There is no locking; the
/// design assumes a single running instance is the only writer.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Utf8PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory, falling back to the directory
    /// of the running executable and then to the working directory.
    pub fn default_location() -> Self {
        let dir = ProjectDirs::from("com", "srmm", "srmm")
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
                    .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
            })
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        Self::at(dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Create the backing file with defaults (no game path, sort by name
    /// ascending, empty mod list) if it does not exist. Never touches an
    /// existing file, malformed or not.
    pub fn ensure_initialized(&self) -> Result<(), Error> {
        if self.path.exists() {
            return Ok(());
        }
        self.write(&Modlist::default())
    }

    /// The persisted game path, or `None` when it was never set or the
    /// document cannot be read.
    pub fn game_path(&self) -> Option<Utf8PathBuf> {
        self.read().settings.game_path
    }

    pub fn set_game_path(&self, path: &Utf8Path) -> Result<(), Error> {
        let mut doc = self.read();
        doc.settings.game_path = Some(path.to_owned());
        self.write(&doc)
    }

    /// The persisted sort preference; defaults when the document is malformed
    /// or the fields are missing.
    pub fn sort_preference(&self) -> SortPreference {
        let settings = self.read().settings;
        SortPreference {
            column: settings.sort_column,
            direction: settings.sort_direction,
        }
    }

    /// Insert-or-update the sort preference. Persistence failures are logged,
    /// not returned.
    pub fn set_sort_preference(&self, pref: SortPreference) {
        let mut doc = self.read();
        doc.settings.sort_column = pref.column;
        doc.settings.sort_direction = pref.direction;
        if let Err(err) = self.write(&doc) {
            warn!("could not save sort preference: {err}");
        }
    }

    /// Discard all stored mod records and write the given list. Settings ride
    /// along unchanged through the same read-modify-write cycle.
    pub fn replace_mod_list(&self, mods: &[ModEntry]) -> Result<(), Error> {
        let mut doc = self.read();
        doc.mods = mods.to_vec();
        self.write(&doc)
    }

    /// The mod list as last persisted. The scan is authoritative and this is
    /// a stale view, but it lets callers display something before the first
    /// scan completes.
    pub fn mod_list(&self) -> Vec<ModEntry> {
        self.read().mods
    }

    fn read(&self) -> Modlist {
        match confy::load_path(&self.path) {
            Ok(doc) => doc,
            Err(err) => {
                warn!("could not read {}: {err}; using defaults", self.path);
                Modlist::default()
            }
        }
    }

    fn write(&self, doc: &Modlist) -> Result<(), Error> {
        confy::store_path(&self.path, doc).map_err(|e| Error::Config(e.to_string()))
    }
}
