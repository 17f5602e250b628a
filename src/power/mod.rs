use crate::error::{Error, Result};
use std::process::Command;

/// Queries and switches the active system power profile by GUID.
pub trait PowerScheme {
    /// GUID of the currently active scheme, if one can be determined.
    fn active_scheme(&mut self) -> Result<Option<String>>;

    /// Activate a scheme. Returns false when the scheme does not exist or
    /// the underlying call rejects it.
    fn set_active(&mut self, guid: &str) -> Result<bool>;

    /// Materialize a scheme from its template GUID so a later activation can
    /// succeed. Returns false when the host cannot create it.
    fn ensure_scheme(&mut self, guid: &str) -> Result<bool>;
}

/// Real adapter shelling out to `powercfg`.
#[derive(Debug, Default)]
pub struct PowercfgAdapter;

impl PowercfgAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl PowerScheme for PowercfgAdapter {
    fn active_scheme(&mut self) -> Result<Option<String>> {
        let output = Command::new("powercfg")
            .arg("/getactivescheme")
            .output()
            .map_err(|e| Error::Power(format!("powercfg /getactivescheme: {}", e)))?;

        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(extract_guid(&stdout))
    }

    fn set_active(&mut self, guid: &str) -> Result<bool> {
        if guid.is_empty() {
            return Ok(false);
        }
        let status = Command::new("powercfg")
            .args(["/setactive", guid])
            .status()
            .map_err(|e| Error::Power(format!("powercfg /setactive: {}", e)))?;
        Ok(status.success())
    }

    fn ensure_scheme(&mut self, guid: &str) -> Result<bool> {
        let status = Command::new("powercfg")
            .args(["/duplicatescheme", guid])
            .status()
            .map_err(|e| Error::Power(format!("powercfg /duplicatescheme: {}", e)))?;
        Ok(status.success())
    }
}

/// Find the first GUID-shaped token in powercfg output.
/// Lines look like: `Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)`
fn extract_guid(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| is_guid(token))
        .map(|t| t.to_ascii_lowercase())
}

fn is_guid(token: &str) -> bool {
    if token.len() != 36 {
        return false;
    }
    token.char_indices().all(|(i, c)| match i {
        8 | 13 | 18 | 23 => c == '-',
        _ => c.is_ascii_hexdigit(),
    })
}

/// Scripted test double: accepts only GUIDs in `valid`, tracks activations.
#[derive(Debug, Default)]
pub struct FakePower {
    pub active: Option<String>,
    pub valid: Vec<String>,
    /// Template GUIDs that `ensure_scheme` is allowed to materialize.
    pub templates: Vec<String>,
    pub activations: Vec<String>,
}

impl FakePower {
    pub fn new(active: &str, valid: &[&str]) -> Self {
        Self {
            active: Some(active.to_string()),
            valid: valid.iter().map(|s| s.to_string()).collect(),
            templates: Vec::new(),
            activations: Vec::new(),
        }
    }
}

impl PowerScheme for FakePower {
    fn active_scheme(&mut self) -> Result<Option<String>> {
        Ok(self.active.clone())
    }

    fn set_active(&mut self, guid: &str) -> Result<bool> {
        if self.valid.iter().any(|v| v == guid) {
            self.active = Some(guid.to_string());
            self.activations.push(guid.to_string());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn ensure_scheme(&mut self, guid: &str) -> Result<bool> {
        if !self.templates.iter().any(|t| t == guid) {
            return Ok(false);
        }
        if !self.valid.iter().any(|v| v == guid) {
            self.valid.push(guid.to_string());
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_guid() {
        let out = "Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)\n";
        assert_eq!(
            extract_guid(out),
            Some("381b4222-f694-41f0-9685-ff5bb260df2e".to_string())
        );
    }

    #[test]
    fn test_extract_guid_none() {
        assert_eq!(extract_guid("no scheme information here"), None);
        assert_eq!(extract_guid("381b4222-f694-41f0"), None);
    }

    #[test]
    fn test_is_guid_rejects_bad_shapes() {
        assert!(is_guid("e9a42b02-d5df-448d-aa00-03f14749eb61"));
        assert!(!is_guid("e9a42b02-d5df-448d-aa00-03f14749eb6"));
        assert!(!is_guid("e9a42b02xd5df-448d-aa00-03f14749eb61"));
    }

    #[test]
    fn test_fake_power_fallback() {
        let mut power = FakePower::new("aaaa", &["second-guid"]);
        assert!(!power.set_active("first-guid").unwrap());
        assert!(power.set_active("second-guid").unwrap());
        assert_eq!(power.active.as_deref(), Some("second-guid"));
        assert_eq!(power.activations, vec!["second-guid"]);
    }
}
