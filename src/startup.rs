//! Inventory of programs configured to start with the OS.
//!
//! Pulls entries from the per-user and machine Run keys plus the user and
//! all-users startup folders. Listing is read-only and best-effort: a key
//! or folder that cannot be enumerated contributes nothing.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::store::{ConfigStore, Hive};

const RUN_PATH: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Run";
const COMMON_STARTUP: &str = "C:\\ProgramData\\Microsoft\\Windows\\Start Menu\\Programs\\Startup";

/// One program that launches at startup, with where it was registered.
#[derive(Debug, Clone, Serialize)]
pub struct StartupEntry {
    pub name: String,
    pub command: String,
    pub source: String,
}

/// Full scan: both Run keys plus both startup folders.
pub fn scan(store: &mut impl ConfigStore) -> Vec<StartupEntry> {
    let mut entries = registry_entries(store);
    if let Some(user) = user_startup_folder() {
        entries.extend(folder_entries(&user, "Startup folder"));
    }
    entries.extend(folder_entries(Path::new(COMMON_STARTUP), "All users startup"));
    entries
}

/// Entries registered under the HKCU and HKLM Run keys.
pub fn registry_entries(store: &mut impl ConfigStore) -> Vec<StartupEntry> {
    let mut entries = Vec::new();
    for hive in [Hive::Hkcu, Hive::Hklm] {
        let Ok(values) = store.list_values(hive, RUN_PATH) else {
            continue;
        };
        for (name, value) in values {
            entries.push(StartupEntry {
                name,
                command: value.to_string(),
                source: format!("{hive} Run"),
            });
        }
    }
    entries
}

/// Files dropped into a startup folder, sorted by name. A folder that does
/// not exist yields nothing.
pub fn folder_entries(dir: &Path, source: &str) -> Vec<StartupEntry> {
    let Ok(read) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut entries: Vec<StartupEntry> = read
        .flatten()
        .filter(|e| e.path().is_file())
        .filter_map(|e| {
            let path = e.path();
            let name = path.file_stem()?.to_string_lossy().into_owned();
            Some(StartupEntry {
                name,
                command: path.to_string_lossy().into_owned(),
                source: source.to_string(),
            })
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

fn user_startup_folder() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Microsoft\\Windows\\Start Menu\\Programs\\Startup"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, ValueData};
    use tempfile::TempDir;

    #[test]
    fn registry_entries_cover_both_hives() {
        let mut store = MemoryStore::new();
        store.seed(
            Hive::Hkcu,
            RUN_PATH,
            "Steam",
            ValueData::Text("\"C:\\Steam\\steam.exe\" -silent".to_string()),
        );
        store.seed(
            Hive::Hklm,
            RUN_PATH,
            "SecurityHealth",
            ValueData::Text("SecurityHealthSystray.exe".to_string()),
        );
        // A value outside the Run key must not show up.
        store.seed(
            Hive::Hkcu,
            "Software\\Microsoft\\GameBar",
            "AllowAutoGameMode",
            ValueData::Dword(1),
        );

        let entries = registry_entries(&mut store);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Steam");
        assert_eq!(entries[0].source, "HKCU Run");
        assert!(entries[0].command.contains("steam.exe"));
        assert_eq!(entries[1].name, "SecurityHealth");
        assert_eq!(entries[1].source, "HKLM Run");
    }

    #[test]
    fn folder_entries_list_files_sorted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b-tool.lnk"), b"").unwrap();
        std::fs::write(dir.path().join("a-tool.lnk"), b"").unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        let entries = folder_entries(dir.path(), "Startup folder");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a-tool", "b-tool"]);
        assert!(entries[0].command.ends_with("a-tool.lnk"));
    }

    #[test]
    fn missing_folder_yields_nothing() {
        assert!(folder_entries(Path::new("/no/such/folder"), "x").is_empty());
    }
}
