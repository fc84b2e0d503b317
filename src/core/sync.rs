//! Keeps the record store in step with the managed directory.
//!
//! The directory is the source of truth. Nothing here diffs or merges: every
//! mutating operation ends in a full rescan that overwrites the stored mod
//! list wholesale.

use crate::config::ConfigStore;
use crate::models::entry::{self, ModEntry};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{error, info, warn};

/// Directory the mod loader creates next to the game executable.
pub const LOADER_DIR: &str = "SRML";
/// Subdirectory of [`LOADER_DIR`] holding the mod files.
pub const MODS_SUBDIR: &str = "mods";

/// Resolves the managed directory for a game executable and makes sure it
/// exists. Returns `None` when the tree cannot be created; callers treat that
/// the same as an unset game path.
pub fn mods_dir_for(game_path: &Utf8Path) -> Option<Utf8PathBuf> {
    let parent = match game_path.parent() {
        Some(p) => p,
        None => {
            warn!("game path '{game_path}' has no parent directory");
            return None;
        }
    };
    let dir = parent.join(LOADER_DIR).join(MODS_SUBDIR);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        warn!("could not create mods directory {dir}: {err}");
        return None;
    }
    Some(dir)
}

/// Rebuilds the mod list from the managed directory.
///
/// Non-recursive; only regular files carrying one of the two markers are
/// picked up, everything else is ignored. The result overwrites the stored
/// list; if persisting fails the error is logged and the scan result is still
/// returned, since the directory remains authoritative. A missing directory
/// yields an empty list and leaves the store alone.
pub fn scan(store: &ConfigStore, mods_dir: &Utf8Path) -> Vec<ModEntry> {
    if !mods_dir.is_dir() {
        return Vec::new();
    }
    let entries: Vec<ModEntry> = walkdir::WalkDir::new(mods_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().and_then(ModEntry::classify))
        .collect();

    if let Err(err) = store.replace_mod_list(&entries) {
        error!("could not persist scanned mod list: {err}");
    }
    entries
}

/// Flips one mod between active and disabled by renaming its marker suffix.
///
/// `currently_enabled` is the caller's view of the state; the target name is
/// derived from it, not re-read from disk. A filename without the expected
/// marker or a failed rename is logged and leaves the file untouched. No
/// rescan happens here; callers re-list when they need fresh state.
pub fn toggle(mods_dir: &Utf8Path, filename: &str, currently_enabled: bool) {
    let renamed = match entry::toggled_filename(filename, currently_enabled) {
        Some(n) => n,
        None => {
            warn!("'{filename}' does not carry the expected marker, not toggling");
            return;
        }
    };
    let from = mods_dir.join(filename);
    let to = mods_dir.join(&renamed);
    match std::fs::rename(&from, &to) {
        Ok(()) => info!("renamed '{filename}' to '{renamed}'"),
        Err(err) => error!("could not rename '{filename}': {err}"),
    }
}

/// Copies a mod file into the managed directory under its original filename,
/// overwriting any same-named file, then rescans. The source keeps its marker,
/// so an installed `.disabled` file arrives disabled. On copy failure nothing
/// is rescanned and the previous state stands.
pub fn install(store: &ConfigStore, mods_dir: &Utf8Path, source: &Utf8Path) -> Vec<ModEntry> {
    let filename = match source.file_name() {
        Some(f) => f,
        None => {
            error!("install source '{source}' has no filename");
            return store.mod_list();
        }
    };
    let dst = mods_dir.join(filename);
    if let Err(err) = std::fs::copy(source, &dst) {
        error!("could not copy '{source}' into {mods_dir}: {err}");
        return store.mod_list();
    }
    info!("installed '{filename}'");
    scan(store, mods_dir)
}

/// Deletes the named mod files, best effort: files already gone are skipped,
/// per-file failures are logged without aborting the batch. Exactly one rescan
/// runs after the whole batch.
pub fn remove(store: &ConfigStore, mods_dir: &Utf8Path, filenames: &[String]) -> Vec<ModEntry> {
    for filename in filenames {
        let path = mods_dir.join(filename);
        if !path.exists() {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => info!("deleted mod file '{filename}'"),
            Err(err) => error!("could not delete '{filename}': {err}"),
        }
    }
    scan(store, mods_dir)
}
