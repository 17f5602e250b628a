//! Named tweak profiles.
//!
//! A profile is a saved selection of tweak ids, one JSON file per profile.
//! Names are restricted to `[A-Za-z0-9_-]` so they can double as file names
//! without escaping.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub saved_at: String,
    pub tweak_ids: Vec<String>,
}

pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("frametune")
            .join("profiles");
        Self { dir }
    }

    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save(&self, name: &str, tweak_ids: Vec<String>) -> Result<Profile> {
        let name = validate_name(name)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Profile(format!("cannot create {}: {e}", self.dir.display())))?;

        let profile = Profile {
            name: name.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            tweak_ids,
        };
        let json = serde_json::to_string_pretty(&profile)
            .map_err(|e| Error::Profile(format!("serialize {name}: {e}")))?;
        let path = self.path_for(name);
        fs::write(&path, json)
            .map_err(|e| Error::Profile(format!("cannot write {}: {e}", path.display())))?;
        Ok(profile)
    }

    pub fn load(&self, name: &str) -> Result<Profile> {
        let name = validate_name(name)?;
        let path = self.path_for(name);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Profile(format!("no profile named '{name}'"))
            } else {
                Error::Profile(format!("cannot read {}: {e}", path.display()))
            }
        })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Profile(format!("{} is not a valid profile: {e}", path.display())))
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let name = validate_name(name)?;
        let path = self.path_for(name);
        fs::remove_file(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Profile(format!("no profile named '{name}'"))
            } else {
                Error::Profile(format!("cannot delete {}: {e}", path.display()))
            }
        })
    }

    /// Profile names present on disk, sorted. Files that are not valid
    /// profiles are skipped.
    pub fn list(&self) -> Result<Vec<Profile>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Profile(format!(
                    "cannot list {}: {e}",
                    self.dir.display()
                )));
            }
        };

        let mut profiles = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| Error::Profile(format!("cannot list profiles: {e}")))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(profile) = serde_json::from_str::<Profile>(&content) {
                    profiles.push(profile);
                }
            }
        }
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

/// Names double as file names: letters, digits, dash, underscore only.
fn validate_name(name: &str) -> Result<&str> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(Error::Profile(format!(
            "profile name must be 1-{MAX_NAME_LEN} characters"
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Error::Profile(format!(
            "invalid profile name '{name}': only letters, digits, '-' and '_' are allowed"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());

        store
            .save(
                "competitive",
                vec!["disable_gamedvr".into(), "power_plan".into()],
            )
            .unwrap();
        let loaded = store.load("competitive").unwrap();
        assert_eq!(loaded.name, "competitive");
        assert_eq!(loaded.tweak_ids, vec!["disable_gamedvr", "power_plan"]);
    }

    #[test]
    fn list_is_sorted_and_skips_garbage() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());
        store.save("zeta", vec![]).unwrap();
        store.save("alpha", vec![]).unwrap();
        std::fs::write(dir.path().join("junk.json"), "not a profile").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());
        store.save("temp", vec![]).unwrap();
        store.delete("temp").unwrap();
        assert!(store.load("temp").is_err());
    }

    #[test]
    fn delete_missing_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());
        assert!(store.delete("ghost").is_err());
    }

    #[test]
    fn rejects_path_traversal_names() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path());
        assert!(store.save("../evil", vec![]).is_err());
        assert!(store.save("a/b", vec![]).is_err());
        assert!(store.save("", vec![]).is_err());
        assert!(store.save(&"x".repeat(65), vec![]).is_err());
        assert!(store.save(&"x".repeat(64), vec![]).is_ok());
    }

    #[test]
    fn empty_dir_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path().join("does-not-exist"));
        assert!(store.list().unwrap().is_empty());
    }
}
