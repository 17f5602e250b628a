use super::{ConfigStore, Hive, ValueData, location};
use crate::error::{Error, Result};
use std::process::Command;

/// Config store backed by the system registry, driven through `reg.exe`.
///
/// On hosts without `reg.exe` every operation fails cleanly with a store
/// error; the engine converts that into "action not applied" rather than
/// aborting the whole tweak.
#[derive(Debug, Default)]
pub struct RegStore;

impl RegStore {
    pub fn new() -> Self {
        Self
    }

    fn key(hive: Hive, path: &str) -> String {
        format!("{}\\{}", hive.full_name(), path)
    }
}

impl ConfigStore for RegStore {
    fn read_value(&mut self, hive: Hive, path: &str, name: &str) -> Result<Option<ValueData>> {
        let output = Command::new("reg")
            .args(["query", &Self::key(hive, path), "/v", name])
            .output()
            .map_err(|e| Error::StoreRead {
                location: location(hive, path, name),
                detail: e.to_string(),
            })?;

        // reg query exits non-zero when the key or value does not exist.
        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_query_output(&stdout, name))
    }

    fn write_value(
        &mut self,
        hive: Hive,
        path: &str,
        name: &str,
        value: &ValueData,
    ) -> Result<()> {
        let (value_type, data) = match value {
            ValueData::Dword(v) => ("REG_DWORD", v.to_string()),
            ValueData::Text(s) => ("REG_SZ", s.clone()),
        };

        let status = Command::new("reg")
            .args([
                "add",
                &Self::key(hive, path),
                "/v",
                name,
                "/t",
                value_type,
                "/d",
                &data,
                "/f",
            ])
            .status()
            .map_err(|e| Error::StoreWrite {
                location: location(hive, path, name),
                detail: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::StoreWrite {
                location: location(hive, path, name),
                detail: format!("reg add exited with {}", status),
            });
        }
        Ok(())
    }

    fn delete_value(&mut self, hive: Hive, path: &str, name: &str) -> Result<()> {
        let status = Command::new("reg")
            .args(["delete", &Self::key(hive, path), "/v", name, "/f"])
            .status()
            .map_err(|e| Error::StoreDelete {
                location: location(hive, path, name),
                detail: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::StoreDelete {
                location: location(hive, path, name),
                detail: format!("reg delete exited with {}", status),
            });
        }
        Ok(())
    }

    fn list_values(&mut self, hive: Hive, path: &str) -> Result<Vec<(String, ValueData)>> {
        let output = Command::new("reg")
            .args(["query", &Self::key(hive, path)])
            .output()
            .map_err(|e| Error::StoreRead {
                location: location(hive, path, "*"),
                detail: e.to_string(),
            })?;

        // Missing key enumerates as empty, same as a missing value reads
        // as None.
        if !output.status.success() {
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut values: Vec<(String, ValueData)> =
            stdout.lines().filter_map(parse_value_line).collect();
        values.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(values)
    }
}

/// Parse `reg query` output, e.g.:
/// ```text
/// HKEY_CURRENT_USER\Software\Microsoft\GameBar
///     AllowAutoGameMode    REG_DWORD    0x0
/// ```
fn parse_query_output(stdout: &str, name: &str) -> Option<ValueData> {
    for line in stdout.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() != Some(name) {
            continue;
        }
        let value_type = parts.next()?;
        let rest: Vec<&str> = parts.collect();
        let data = rest.join(" ");

        return match value_type {
            "REG_DWORD" | "REG_QWORD" => {
                let raw = data.trim_start_matches("0x");
                u32::from_str_radix(raw, 16).ok().map(ValueData::Dword)
            }
            _ => Some(ValueData::Text(data)),
        };
    }
    None
}

/// Parse one value line from an unfiltered `reg query`, e.g.:
/// ```text
///     OneDrive    REG_SZ    C:\Users\me\OneDrive.exe /background
/// ```
/// Key header lines carry no type token and fall through. Value names may
/// contain spaces, so everything before the type token is the name.
fn parse_value_line(line: &str) -> Option<(String, ValueData)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let type_idx = tokens.iter().position(|t| t.starts_with("REG_"))?;
    if type_idx == 0 {
        return None;
    }
    let name = tokens[..type_idx].join(" ");
    let data = tokens[type_idx + 1..].join(" ");

    let value = match tokens[type_idx] {
        "REG_DWORD" | "REG_QWORD" => {
            let raw = data.trim_start_matches("0x");
            ValueData::Dword(u32::from_str_radix(raw, 16).ok()?)
        }
        _ => ValueData::Text(data),
    };
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dword() {
        let out = "\r\nHKEY_CURRENT_USER\\Software\\Microsoft\\GameBar\r\n    AllowAutoGameMode    REG_DWORD    0x1f\r\n\r\n";
        assert_eq!(
            parse_query_output(out, "AllowAutoGameMode"),
            Some(ValueData::Dword(0x1f))
        );
    }

    #[test]
    fn test_parse_text() {
        let out = "HKEY_CURRENT_USER\\Control Panel\\Mouse\n    MouseSpeed    REG_SZ    0\n";
        assert_eq!(
            parse_query_output(out, "MouseSpeed"),
            Some(ValueData::Text("0".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_name() {
        let out = "HKEY_CURRENT_USER\\Software\n    OtherValue    REG_DWORD    0x1\n";
        assert_eq!(parse_query_output(out, "MouseSpeed"), None);
    }

    #[test]
    fn test_parse_value_lines_skip_key_headers() {
        let out = "\r\nHKEY_CURRENT_USER\\Software\\Microsoft\\Windows\\CurrentVersion\\Run\r\n    OneDrive    REG_SZ    C:\\Users\\me\\OneDrive.exe /background\r\n    Epic Games Launcher    REG_SZ    launcher.exe\r\n    Flags    REG_DWORD    0x2\r\n\r\n";
        let values: Vec<_> = out.lines().filter_map(parse_value_line).collect();
        assert_eq!(
            values,
            vec![
                (
                    "OneDrive".to_string(),
                    ValueData::Text("C:\\Users\\me\\OneDrive.exe /background".to_string())
                ),
                (
                    "Epic Games Launcher".to_string(),
                    ValueData::Text("launcher.exe".to_string())
                ),
                ("Flags".to_string(), ValueData::Dword(2)),
            ]
        );
    }

    #[test]
    fn test_key_formatting() {
        assert_eq!(
            RegStore::key(Hive::Hklm, "SYSTEM\\CurrentControlSet\\Control"),
            "HKEY_LOCAL_MACHINE\\SYSTEM\\CurrentControlSet\\Control"
        );
    }
}
