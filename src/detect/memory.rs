use serde::Serialize;

use crate::sysroot::SysRoot;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryInfo {
    pub total_mb: u64,
    /// DDR generation when the firmware tables expose it.
    pub kind: Option<String>,
    pub speed_mts: Option<u32>,
}

impl MemoryInfo {
    pub fn detect(sys: &SysRoot) -> Self {
        let mut info = Self::default();

        if let Ok(meminfo) = sys.read("proc/meminfo") {
            for line in meminfo.lines() {
                if let Some(rest) = line.strip_prefix("MemTotal:") {
                    let kb: u64 = rest
                        .trim()
                        .trim_end_matches("kB")
                        .trim()
                        .parse()
                        .unwrap_or(0);
                    info.total_mb = kb / 1024;
                    break;
                }
            }
        }

        // dmi type 17 exports, present on machines with decoded SMBIOS
        info.kind = sys
            .read_optional("sys/class/dmi/id/memory_type")
            .unwrap_or(None);
        info.speed_mts = sys
            .read_optional("sys/class/dmi/id/memory_speed")
            .unwrap_or(None)
            .and_then(|v| v.parse().ok());

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_meminfo_total() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("proc")).unwrap();
        fs::write(
            dir.path().join("proc/meminfo"),
            "MemTotal:       32768000 kB\nMemFree:        12345678 kB\n",
        )
        .unwrap();

        let info = MemoryInfo::detect(&SysRoot::new(dir.path()));
        assert_eq!(info.total_mb, 32000);
        assert_eq!(info.kind, None);
    }
}
