use serde::Serialize;

use crate::sysroot::SysRoot;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageInfo {
    pub models: Vec<String>,
    pub has_ssd: bool,
    pub has_nvme: bool,
}

impl StorageInfo {
    pub fn detect(sys: &SysRoot) -> Self {
        let mut info = Self::default();

        let Ok(entries) = sys.list_dir("sys/block") else {
            return info;
        };
        for entry in &entries {
            // Only real disks: skip loopbacks, ramdisks, and mapper devices.
            if entry.starts_with("loop") || entry.starts_with("ram") || entry.starts_with("dm-") {
                continue;
            }

            if let Some(model) = sys
                .read_optional(format!("sys/block/{entry}/device/model"))
                .unwrap_or(None)
            {
                info.models.push(model);
            }

            if entry.starts_with("nvme") {
                info.has_nvme = true;
                info.has_ssd = true;
            } else if sys
                .read_optional(format!("sys/block/{entry}/queue/rotational"))
                .unwrap_or(None)
                .as_deref()
                == Some("0")
            {
                info.has_ssd = true;
            }
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_disk(root: &std::path::Path, name: &str, model: &str, rotational: &str) {
        let block = root.join("sys/block").join(name);
        fs::create_dir_all(block.join("device")).unwrap();
        fs::create_dir_all(block.join("queue")).unwrap();
        fs::write(block.join("device/model"), format!("{model}\n")).unwrap();
        fs::write(block.join("queue/rotational"), rotational).unwrap();
    }

    #[test]
    fn nvme_counts_as_ssd() {
        let dir = TempDir::new().unwrap();
        add_disk(dir.path(), "nvme0n1", "Samsung SSD 980 PRO", "0");

        let info = StorageInfo::detect(&SysRoot::new(dir.path()));
        assert!(info.has_nvme);
        assert!(info.has_ssd);
        assert_eq!(info.models, vec!["Samsung SSD 980 PRO"]);
    }

    #[test]
    fn rotational_disk_is_not_ssd() {
        let dir = TempDir::new().unwrap();
        add_disk(dir.path(), "sda", "WDC WD40EZRZ", "1");

        let info = StorageInfo::detect(&SysRoot::new(dir.path()));
        assert!(!info.has_ssd);
        assert!(!info.has_nvme);
    }

    #[test]
    fn loop_devices_are_ignored() {
        let dir = TempDir::new().unwrap();
        add_disk(dir.path(), "loop0", "ignored", "0");

        let info = StorageInfo::detect(&SysRoot::new(dir.path()));
        assert!(info.models.is_empty());
        assert!(!info.has_ssd);
    }
}
