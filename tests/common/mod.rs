use camino::{Utf8Path, Utf8PathBuf};
use srmm::config::ConfigStore;
use std::fs;
use tempfile::TempDir;

/// Helper to set up a dummy game install: an executable file with the
/// SRML/mods tree already created next to it.
pub fn setup_game_dir() -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();

    let exe = root.join("SlimeRancher.exe");
    fs::write(&exe, "dummy").unwrap();

    let mods_dir = root.join("SRML").join("mods");
    fs::create_dir_all(&mods_dir).unwrap();

    (tmp, exe, mods_dir)
}

/// A store backed by a file inside the given directory.
pub fn store_in(dir: &Utf8Path) -> ConfigStore {
    ConfigStore::at(dir.join("modlist.toml"))
}

/// Drop a mod file with the given on-disk name into a directory.
pub fn create_mod_file(dir: &Utf8Path, filename: &str) {
    fs::write(dir.join(filename), "mod bytes").unwrap();
}

/// Filenames in the directory, sorted, for order-independent comparisons.
pub fn dir_filenames(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
