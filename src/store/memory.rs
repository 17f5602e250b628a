use super::{ConfigStore, Hive, ValueData, location};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// In-memory config store used as the scripted test double.
///
/// Value names listed in `fail_names` make every read and write against that
/// name fail, which is how the best-effort batch semantics get exercised.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStore {
    values: HashMap<(Hive, String, String), ValueData>,
    pub fail_names: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, bypassing failure injection.
    pub fn seed(&mut self, hive: Hive, path: &str, name: &str, value: ValueData) {
        self.values
            .insert((hive, path.to_string(), name.to_string()), value);
    }

    /// Peek at a value without going through the trait.
    pub fn get(&self, hive: Hive, path: &str, name: &str) -> Option<&ValueData> {
        self.values
            .get(&(hive, path.to_string(), name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_injected_failure(&self, hive: Hive, path: &str, name: &str) -> Result<()> {
        if self.fail_names.contains(name) {
            return Err(Error::StoreWrite {
                location: location(hive, path, name),
                detail: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl ConfigStore for MemoryStore {
    fn read_value(&mut self, hive: Hive, path: &str, name: &str) -> Result<Option<ValueData>> {
        self.check_injected_failure(hive, path, name)?;
        Ok(self.get(hive, path, name).cloned())
    }

    fn write_value(
        &mut self,
        hive: Hive,
        path: &str,
        name: &str,
        value: &ValueData,
    ) -> Result<()> {
        self.check_injected_failure(hive, path, name)?;
        self.values
            .insert((hive, path.to_string(), name.to_string()), value.clone());
        Ok(())
    }

    fn delete_value(&mut self, hive: Hive, path: &str, name: &str) -> Result<()> {
        self.check_injected_failure(hive, path, name)?;
        self.values
            .remove(&(hive, path.to_string(), name.to_string()));
        Ok(())
    }

    fn list_values(&mut self, hive: Hive, path: &str) -> Result<Vec<(String, ValueData)>> {
        let mut out: Vec<(String, ValueData)> = self
            .values
            .iter()
            .filter(|((h, p, _), _)| *h == hive && p == path)
            .map(|((_, _, n), v)| (n.clone(), v.clone()))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_delete() {
        let mut store = MemoryStore::new();
        let v = ValueData::Dword(10);

        store
            .write_value(Hive::Hklm, "SOFTWARE\\Test", "SystemResponsiveness", &v)
            .unwrap();
        assert_eq!(
            store
                .read_value(Hive::Hklm, "SOFTWARE\\Test", "SystemResponsiveness")
                .unwrap(),
            Some(v)
        );

        store
            .delete_value(Hive::Hklm, "SOFTWARE\\Test", "SystemResponsiveness")
            .unwrap();
        assert_eq!(
            store
                .read_value(Hive::Hklm, "SOFTWARE\\Test", "SystemResponsiveness")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_list_values_filters_and_sorts() {
        let mut store = MemoryStore::new();
        store.seed(Hive::Hkcu, "Run", "Steam", ValueData::Text("steam.exe".into()));
        store.seed(Hive::Hkcu, "Run", "Discord", ValueData::Text("discord.exe".into()));
        store.seed(Hive::Hklm, "Run", "Driver", ValueData::Text("drv.exe".into()));
        store.seed(Hive::Hkcu, "Other", "Steam", ValueData::Dword(1));

        let values = store.list_values(Hive::Hkcu, "Run").unwrap();
        assert_eq!(
            values,
            vec![
                ("Discord".to_string(), ValueData::Text("discord.exe".into())),
                ("Steam".to_string(), ValueData::Text("steam.exe".into())),
            ]
        );
    }

    #[test]
    fn test_injected_failure() {
        let mut store = MemoryStore::new();
        store.fail_names.insert("Broken".to_string());

        assert!(store.read_value(Hive::Hkcu, "Software", "Broken").is_err());
        assert!(
            store
                .write_value(Hive::Hkcu, "Software", "Broken", &ValueData::Dword(1))
                .is_err()
        );
        assert!(store.read_value(Hive::Hkcu, "Software", "Fine").is_ok());
    }
}
