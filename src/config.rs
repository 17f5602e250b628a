use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level frametune configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrametuneConfig {
    pub game: GameConfig,
    pub apply: ApplyConfig,
    pub backup: BackupConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Full path to the game executable used by GPU preference bindings.
    /// When unset, the Steam library scan tries to locate it.
    pub exe_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyConfig {
    /// Leave advanced-risk tweaks out of batch operations.
    pub skip_advanced: bool,
    /// Skip the interactive confirmation prompt.
    pub assume_yes: bool,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            skip_advanced: true,
            assume_yes: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Override for the backup document location.
    pub path: Option<PathBuf>,
}

const SYSTEM_CONFIG: &str = "/etc/frametune/config.toml";

/// Load the system config file if it exists.
fn load_system() -> Option<toml::Value> {
    let path = Path::new(SYSTEM_CONFIG);
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Load the user config file (~/.config/frametune/config.toml) if it exists.
fn load_user() -> Option<toml::Value> {
    let dir = dirs::config_dir()?;
    let path = dir.join("frametune").join("config.toml");
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Recursively merge two TOML values. Tables are merged key-by-key;
/// all other types in `overlay` replace `base`.
fn merge_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load config from a specific path, ignoring system/user files.
fn load_from_path(path: &Path) -> FrametuneConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            eprintln!(
                "warning: failed to parse config at {}: {}",
                path.display(),
                e
            );
            FrametuneConfig::default()
        }),
        Err(e) => {
            eprintln!(
                "warning: failed to read config at {}: {}",
                path.display(),
                e
            );
            FrametuneConfig::default()
        }
    }
}

/// Load the merged config: system defaults, then user overrides.
/// If `override_path` is provided, use only that file instead.
pub fn load(override_path: Option<&PathBuf>) -> FrametuneConfig {
    if let Some(path) = override_path {
        return load_from_path(path);
    }

    let system = load_system();
    let user = load_user();

    let merged = match (system, user) {
        (Some(s), Some(u)) => Some(merge_values(s, u)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    };

    match merged {
        Some(value) => value.try_into().unwrap_or_else(|e| {
            eprintln!("warning: failed to deserialize config: {}", e);
            FrametuneConfig::default()
        }),
        None => FrametuneConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrametuneConfig::default();
        assert_eq!(config.game.exe_path, None);
        assert!(config.apply.skip_advanced);
        assert!(!config.apply.assume_yes);
        assert_eq!(config.backup.path, None);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
            [apply]
            assume_yes = true
        "#;
        let config: FrametuneConfig = toml::from_str(toml_str).unwrap();
        assert!(config.apply.assume_yes);
        // Defaults for everything else
        assert!(config.apply.skip_advanced);
        assert_eq!(config.game.exe_path, None);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
            [game]
            exe_path = "C:\\Games\\Steam\\steamapps\\common\\Counter-Strike Global Offensive\\game\\bin\\win64\\cs2.exe"

            [apply]
            skip_advanced = false
            assume_yes = true

            [backup]
            path = "/tmp/frametune-backup.json"
        "#;
        let config: FrametuneConfig = toml::from_str(toml_str).unwrap();
        assert!(config.game.exe_path.as_deref().unwrap().ends_with("cs2.exe"));
        assert!(!config.apply.skip_advanced);
        assert!(config.apply.assume_yes);
        assert_eq!(
            config.backup.path,
            Some(PathBuf::from("/tmp/frametune-backup.json"))
        );
    }

    #[test]
    fn test_merge_values_tables() {
        let base: toml::Value = toml::from_str(
            r#"
            [apply]
            skip_advanced = true
            assume_yes = false
        "#,
        )
        .unwrap();

        let overlay: toml::Value = toml::from_str(
            r#"
            [apply]
            assume_yes = true
        "#,
        )
        .unwrap();

        let merged = merge_values(base, overlay);
        let apply = merged.as_table().unwrap()["apply"].as_table().unwrap();
        assert_eq!(apply["assume_yes"].as_bool(), Some(true));
        assert_eq!(apply["skip_advanced"].as_bool(), Some(true));
    }

    #[test]
    fn test_merge_values_overlay_replaces_scalar() {
        let base: toml::Value = toml::from_str("value = 1").unwrap();
        let overlay: toml::Value = toml::from_str("value = 2").unwrap();
        let merged = merge_values(base, overlay);
        assert_eq!(merged["value"].as_integer(), Some(2));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let config = load_from_path(Path::new("/nonexistent/config.toml"));
        // Should return defaults without panicking
        assert!(config.apply.skip_advanced);
    }

    #[test]
    fn test_roundtrip_serialize() {
        let config = FrametuneConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: FrametuneConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config.apply.skip_advanced, deserialized.apply.skip_advanced);
        assert_eq!(config.game.exe_path, deserialized.game.exe_path);
    }
}
