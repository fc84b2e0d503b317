use crate::models::entry::ModEntry;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// The `settings` section of the backing document. Every field is optional on
/// disk; missing or unknown values fall back to the defaults here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the game executable. Absent until the user picks one.
    pub game_path: Option<Utf8PathBuf>,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "status")]
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Persisted display order. The scan itself guarantees no order; front ends
/// apply this to whatever the scan returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortPreference {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortPreference {
    /// Order entries for display: by display name (case-insensitive, A to Z
    /// when ascending), or by status with active mods first when ascending.
    pub fn apply(self, mods: &mut [ModEntry]) {
        match (self.column, self.direction) {
            (SortColumn::Name, SortDirection::Ascending) => {
                mods.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            (SortColumn::Name, SortDirection::Descending) => {
                mods.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
            }
            (SortColumn::Status, SortDirection::Ascending) => {
                mods.sort_by_key(|m| !m.enabled);
            }
            (SortColumn::Status, SortDirection::Descending) => {
                mods.sort_by_key(|m| m.enabled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(filename: &str) -> ModEntry {
        ModEntry::classify(filename).unwrap()
    }

    fn names(mods: &[ModEntry]) -> Vec<&str> {
        mods.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut mods = vec![entry("beta.dll"), entry("Alpha.disabled"), entry("gamma.dll")];

        SortPreference {
            column: SortColumn::Name,
            direction: SortDirection::Ascending,
        }
        .apply(&mut mods);
        assert_eq!(names(&mods), ["Alpha", "beta", "gamma"]);

        SortPreference {
            column: SortColumn::Name,
            direction: SortDirection::Descending,
        }
        .apply(&mut mods);
        assert_eq!(names(&mods), ["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn test_sort_by_status_puts_active_first_when_ascending() {
        let mut mods = vec![entry("a.disabled"), entry("b.dll"), entry("c.disabled")];

        SortPreference {
            column: SortColumn::Status,
            direction: SortDirection::Ascending,
        }
        .apply(&mut mods);
        assert!(mods[0].enabled);
        assert!(!mods[1].enabled && !mods[2].enabled);

        SortPreference {
            column: SortColumn::Status,
            direction: SortDirection::Descending,
        }
        .apply(&mut mods);
        assert!(!mods[0].enabled && !mods[1].enabled);
        assert!(mods[2].enabled);
    }
}
