pub mod memory;
pub mod reg;

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub use memory::MemoryStore;
pub use reg::RegStore;

/// Root of the hierarchical configuration namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Hive {
    Hklm,
    Hkcu,
}

impl std::fmt::Display for Hive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hive::Hklm => write!(f, "HKLM"),
            Hive::Hkcu => write!(f, "HKCU"),
        }
    }
}

impl Hive {
    /// Long-form root name understood by `reg.exe`.
    pub fn full_name(&self) -> &'static str {
        match self {
            Hive::Hklm => "HKEY_LOCAL_MACHINE",
            Hive::Hkcu => "HKEY_CURRENT_USER",
        }
    }
}

/// A typed value in the configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ValueData {
    Dword(u32),
    Text(String),
}

impl std::fmt::Display for ValueData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueData::Dword(v) => write!(f, "{}", v),
            ValueData::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Reads, writes, and deletes single named values in a hierarchical
/// configuration namespace. The engine performs every mutation and every
/// pre-read through this trait so tests can substitute an in-memory store.
pub trait ConfigStore {
    fn read_value(&mut self, hive: Hive, path: &str, name: &str) -> Result<Option<ValueData>>;

    fn write_value(&mut self, hive: Hive, path: &str, name: &str, value: &ValueData)
    -> Result<()>;

    fn delete_value(&mut self, hive: Hive, path: &str, name: &str) -> Result<()>;

    /// Enumerate every named value directly under `path`, sorted by name.
    fn list_values(&mut self, hive: Hive, path: &str) -> Result<Vec<(String, ValueData)>>;
}

/// Human-readable location for error messages.
pub(crate) fn location(hive: Hive, path: &str, name: &str) -> String {
    format!("{}\\{}\\{}", hive, path, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hive_names() {
        assert_eq!(Hive::Hklm.to_string(), "HKLM");
        assert_eq!(Hive::Hkcu.full_name(), "HKEY_CURRENT_USER");
    }

    #[test]
    fn test_value_data_serde_roundtrip() {
        let v = ValueData::Dword(0xffff_ffff);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<ValueData>(&json).unwrap(), v);

        let t = ValueData::Text("Deny".to_string());
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(serde_json::from_str::<ValueData>(&json).unwrap(), t);
    }
}
