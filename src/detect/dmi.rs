use crate::sysroot::SysRoot;

#[derive(Debug, Clone, Default)]
pub struct DmiInfo {
    pub board_vendor: Option<String>,
    pub board_name: Option<String>,
    pub bios_version: Option<String>,
    pub bios_date: Option<String>,
    pub chassis: Option<String>,
}

impl DmiInfo {
    pub fn detect(sys: &SysRoot) -> Self {
        Self {
            board_vendor: sys
                .read_optional("sys/class/dmi/id/board_vendor")
                .unwrap_or(None),
            board_name: sys
                .read_optional("sys/class/dmi/id/board_name")
                .unwrap_or(None),
            bios_version: sys
                .read_optional("sys/class/dmi/id/bios_version")
                .unwrap_or(None),
            bios_date: sys
                .read_optional("sys/class/dmi/id/bios_date")
                .unwrap_or(None),
            chassis: sys
                .read_optional("sys/class/dmi/id/chassis_type")
                .unwrap_or(None)
                .and_then(|t| chassis_label(&t)),
        }
    }

    /// "Vendor Board" when both are present, whichever exists otherwise.
    pub fn motherboard(&self) -> Option<String> {
        match (&self.board_vendor, &self.board_name) {
            (Some(v), Some(n)) => Some(format!("{v} {n}")),
            (Some(v), None) => Some(v.clone()),
            (None, Some(n)) => Some(n.clone()),
            (None, None) => None,
        }
    }
}

/// SMBIOS chassis type number, the handful of kinds worth distinguishing.
fn chassis_label(raw: &str) -> Option<String> {
    let label = match raw.trim() {
        "3" | "4" | "6" | "7" => "Desktop",
        "5" => "Pizza Box",
        "8" | "9" | "10" | "14" => "Laptop",
        "13" => "All-in-One",
        "17" | "23" => "Server",
        "30" | "31" | "32" => "Tablet / Convertible",
        "35" => "Mini PC",
        _ => return None,
    };
    Some(label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn combines_vendor_and_board() {
        let dir = TempDir::new().unwrap();
        let dmi = dir.path().join("sys/class/dmi/id");
        fs::create_dir_all(&dmi).unwrap();
        fs::write(dmi.join("board_vendor"), "ASUSTeK\n").unwrap();
        fs::write(dmi.join("board_name"), "ROG STRIX B550-F\n").unwrap();
        fs::write(dmi.join("bios_version"), "3404\n").unwrap();
        fs::write(dmi.join("bios_date"), "05/13/2024\n").unwrap();
        fs::write(dmi.join("chassis_type"), "3\n").unwrap();

        let info = DmiInfo::detect(&SysRoot::new(dir.path()));
        assert_eq!(info.motherboard().as_deref(), Some("ASUSTeK ROG STRIX B550-F"));
        assert_eq!(info.bios_version.as_deref(), Some("3404"));
        assert_eq!(info.bios_date.as_deref(), Some("05/13/2024"));
        assert_eq!(info.chassis.as_deref(), Some("Desktop"));
    }

    #[test]
    fn unknown_chassis_type_is_none() {
        assert_eq!(chassis_label("2"), None);
        assert_eq!(chassis_label("garbage"), None);
        assert_eq!(chassis_label("9"), Some("Laptop".to_string()));
    }

    #[test]
    fn missing_dmi_yields_none() {
        let dir = TempDir::new().unwrap();
        let info = DmiInfo::detect(&SysRoot::new(dir.path()));
        assert_eq!(info.motherboard(), None);
    }
}
