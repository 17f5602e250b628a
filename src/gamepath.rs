//! Locate the CS2 executable through the Steam library layout.
//!
//! Resolution order: explicit config override (handled by the caller), the
//! Steam install path from the config store, then every library listed in
//! `libraryfolders.vdf`. All probing is plain filesystem access so tests run
//! against a fabricated tree.

use std::path::{Path, PathBuf};

use crate::store::{ConfigStore, Hive, ValueData};

const STEAM_KEY: &str = "Software\\Valve\\Steam";
const CS2_RELATIVE: &str =
    "steamapps/common/Counter-Strike Global Offensive/game/bin/win64/cs2.exe";

/// Steam install directory as recorded at install time, if any.
pub fn steam_root(store: &mut impl ConfigStore) -> Option<PathBuf> {
    match store.read_value(Hive::Hkcu, STEAM_KEY, "SteamPath") {
        Ok(Some(ValueData::Text(path))) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Find cs2.exe under the Steam root or any of its extra libraries.
pub fn find_cs2(steam_root: &Path) -> Option<String> {
    let mut libraries = vec![steam_root.to_path_buf()];
    let vdf = steam_root.join("steamapps").join("libraryfolders.vdf");
    if let Ok(content) = std::fs::read_to_string(&vdf) {
        libraries.extend(parse_library_folders(&content));
    }

    for library in libraries {
        let exe = library.join(CS2_RELATIVE);
        if exe.is_file() {
            return Some(exe.to_string_lossy().into_owned());
        }
    }
    None
}

/// Convenience wrapper: registry lookup plus library probe.
pub fn locate_cs2(store: &mut impl ConfigStore) -> Option<String> {
    find_cs2(&steam_root(store)?)
}

/// Pull every `"path"` entry out of a libraryfolders.vdf document.
///
/// VDF is close enough to quoted key/value pairs per line that a full parser
/// is not worth carrying for this one field.
fn parse_library_folders(content: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split('"').collect();
        // A quoted pair line splits into 5 fields: junk, key, junk, value, junk.
        if fields.len() >= 5 && fields[1] == "path" {
            let unescaped = fields[3].replace("\\\\", "\\");
            paths.push(PathBuf::from(unescaped));
        }
    }
    paths
}
