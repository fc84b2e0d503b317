use serde::{Deserialize, Serialize};

/// Marker suffix SRML actually loads.
pub const ACTIVE_MARKER: &str = ".dll";
/// Marker suffix for mods parked on disk but ignored by the loader.
pub const DISABLED_MARKER: &str = ".disabled";

/// One mod file in the managed directory, as of the last scan.
///
/// Entries carry no identity beyond the literal filename and are rebuilt from
/// scratch on every scan; nothing mutates them in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModEntry {
    /// On-disk name, marker included.
    pub filename: String,
    /// Display name: the filename with its marker stripped.
    pub name: String,
    /// Derived from the marker alone, not from any other metadata.
    pub enabled: bool,
}

impl ModEntry {
    /// Classify a directory entry by its marker suffix. Files carrying
    /// neither marker are not managed mods and yield `None`.
    pub fn classify(filename: &str) -> Option<Self> {
        let enabled = if filename.ends_with(ACTIVE_MARKER) {
            true
        } else if filename.ends_with(DISABLED_MARKER) {
            false
        } else {
            return None;
        };

        Some(Self {
            filename: filename.to_owned(),
            name: display_name(filename).to_owned(),
            enabled,
        })
    }
}

/// Strip the marker suffix, if any. Only a true trailing marker is removed;
/// marker text elsewhere in the name (`dll_loader.dll`, `my.disabled.song.dll`)
/// is left untouched.
pub fn display_name(filename: &str) -> &str {
    filename
        .strip_suffix(ACTIVE_MARKER)
        .or_else(|| filename.strip_suffix(DISABLED_MARKER))
        .unwrap_or(filename)
}

/// The filename a toggle renames to: active marker swapped for disabled or
/// vice versa, based on the state the caller believes the file is in.
/// `None` when the filename does not end in the expected marker, in which
/// case renaming would corrupt the name and the caller must leave it alone.
pub fn toggled_filename(filename: &str, currently_enabled: bool) -> Option<String> {
    if currently_enabled {
        filename
            .strip_suffix(ACTIVE_MARKER)
            .map(|stem| format!("{stem}{DISABLED_MARKER}"))
    } else {
        filename
            .strip_suffix(DISABLED_MARKER)
            .map(|stem| format!("{stem}{ACTIVE_MARKER}"))
    }
}
