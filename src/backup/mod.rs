//! Durable undo state.
//!
//! One JSON document on disk maps tweak id to the values that were in place
//! before the first apply. Restore replays those records and then removes
//! them. The store never loses a record for a tweak that is still applied:
//! re-applying keeps the original pre-apply snapshot.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{Hive, ValueData};

/// Captured prior state for one action of a tweak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionBackup {
    ConfigValue {
        hive: Hive,
        path: String,
        name: String,
        /// None means the value did not exist before apply.
        prior: Option<ValueData>,
    },
    PowerScheme {
        previous: String,
    },
    GpuPreference {
        exe: String,
        prior: Option<ValueData>,
    },
    ServiceStartPolicy {
        service: String,
        prior: Option<u32>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    pub taken_at: String,
    pub actions: Vec<ActionBackup>,
}

impl BackupRecord {
    pub fn new(actions: Vec<ActionBackup>) -> Self {
        Self {
            taken_at: chrono::Utc::now().to_rfc3339(),
            actions,
        }
    }
}

/// The on-disk backup document, loaded eagerly and written atomically on
/// every mutation.
pub struct BackupStore {
    path: PathBuf,
    records: HashMap<String, BackupRecord>,
}

impl BackupStore {
    /// Open (or create) the store at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(default_path())
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(records) => records,
                Err(e) => {
                    // A corrupt file must not brick restore for future
                    // applies; keep the bytes aside and start fresh.
                    let aside = path.with_extension("json.corrupt");
                    let _ = fs::copy(&path, &aside);
                    eprintln!(
                        "{} backup file {} is corrupt ({}); moved aside to {}",
                        "warning:".yellow().bold(),
                        path.display(),
                        e,
                        aside.display()
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(Error::Backup(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };
        Ok(Self { path, records })
    }

    pub fn get(&self, id: &str) -> Option<&BackupRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Store a record unless one already exists for this id. Returns whether
    /// the record was inserted. Re-applying an applied tweak must keep the
    /// snapshot taken before the first apply.
    pub fn insert_if_absent(&mut self, id: &str, record: BackupRecord) -> Result<bool> {
        if self.records.contains_key(id) {
            return Ok(false);
        }
        self.records.insert(id.to_string(), record);
        self.save()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<Option<BackupRecord>> {
        let record = self.records.remove(id);
        if record.is_some() {
            self.save()?;
        }
        Ok(record)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Backup(format!("cannot create {}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| Error::Backup(format!("serialize: {e}")))?;
        // Write-then-rename so a crash never truncates the document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| Error::Backup(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| Error::Backup(format!("cannot rename {}: {e}", tmp.display())))?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("frametune")
        .join("backup.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> BackupRecord {
        BackupRecord::new(vec![ActionBackup::ConfigValue {
            hive: Hive::Hkcu,
            path: "Software\\Test".into(),
            name: "Value".into(),
            prior: Some(ValueData::Dword(7)),
        }])
    }

    #[test]
    fn roundtrips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.json");

        let mut store = BackupStore::open(&path).unwrap();
        assert!(store.insert_if_absent("disable_gamedvr", record()).unwrap());

        let reopened = BackupStore::open(&path).unwrap();
        let rec = reopened.get("disable_gamedvr").unwrap();
        assert_eq!(rec.actions.len(), 1);
        match &rec.actions[0] {
            ActionBackup::ConfigValue { prior, .. } => {
                assert_eq!(prior, &Some(ValueData::Dword(7)));
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn second_insert_keeps_first_record() {
        let dir = TempDir::new().unwrap();
        let mut store = BackupStore::open(dir.path().join("backup.json")).unwrap();

        assert!(store.insert_if_absent("x", record()).unwrap());
        let replacement = BackupRecord::new(vec![ActionBackup::PowerScheme {
            previous: "not-the-original".into(),
        }]);
        assert!(!store.insert_if_absent("x", replacement).unwrap());

        match &store.get("x").unwrap().actions[0] {
            ActionBackup::ConfigValue { .. } => {}
            other => panic!("first record was replaced: {other:?}"),
        }
    }

    #[test]
    fn remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.json");
        let mut store = BackupStore::open(&path).unwrap();
        store.insert_if_absent("x", record()).unwrap();
        assert!(store.remove("x").unwrap().is_some());

        let reopened = BackupStore::open(&path).unwrap();
        assert!(!reopened.contains("x"));
    }

    #[test]
    fn corrupt_file_starts_empty_and_is_kept_aside() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.json");
        fs::write(&path, "{ not json").unwrap();

        let store = BackupStore::open(&path).unwrap();
        assert!(store.ids().is_empty());
        assert!(path.with_extension("json.corrupt").exists());
    }
}
