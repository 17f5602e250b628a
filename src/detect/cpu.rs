use std::collections::BTreeSet;

use serde::Serialize;

use crate::sysroot::SysRoot;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CpuInfo {
    pub name: String,
    pub physical_cores: u32,
    pub logical_threads: u32,
    /// Maximum scaling frequency in MHz, when cpufreq exposes it.
    pub max_clock_mhz: Option<u32>,
}

impl CpuInfo {
    pub fn detect(sys: &SysRoot) -> Self {
        let mut info = Self::default();

        // Parse /proc/cpuinfo: model name, logical thread count, and the set
        // of distinct core ids for the physical count.
        let mut core_ids: BTreeSet<(u32, u32)> = BTreeSet::new();
        let mut physical_id = 0u32;
        if let Ok(cpuinfo) = sys.read("proc/cpuinfo") {
            for line in cpuinfo.lines() {
                if let Some((key, value)) = line.split_once(':') {
                    let key = key.trim();
                    let value = value.trim();
                    match key {
                        "model name" if info.name.is_empty() => {
                            info.name = value.to_string();
                        }
                        "processor" => info.logical_threads += 1,
                        "physical id" => {
                            physical_id = value.parse().unwrap_or(0);
                        }
                        "core id" => {
                            if let Ok(core) = value.parse() {
                                core_ids.insert((physical_id, core));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
        info.physical_cores = if core_ids.is_empty() {
            info.logical_threads
        } else {
            core_ids.len() as u32
        };

        // cpufreq reports kHz
        if let Some(khz) = sys
            .read_optional("sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq")
            .unwrap_or(None)
            .and_then(|v| v.parse::<u32>().ok())
        {
            info.max_clock_mhz = Some(khz / 1000);
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_root() -> (TempDir, SysRoot) {
        let dir = TempDir::new().unwrap();
        let root = SysRoot::new(dir.path());
        (dir, root)
    }

    #[test]
    fn parses_cpuinfo() {
        let (dir, sys) = fake_root();
        fs::create_dir_all(dir.path().join("proc")).unwrap();
        let cpuinfo = "\
processor\t: 0\n\
model name\t: AMD Ryzen 7 5800X3D 8-Core Processor\n\
physical id\t: 0\n\
core id\t\t: 0\n\
\n\
processor\t: 1\n\
model name\t: AMD Ryzen 7 5800X3D 8-Core Processor\n\
physical id\t: 0\n\
core id\t\t: 0\n\
\n\
processor\t: 2\n\
model name\t: AMD Ryzen 7 5800X3D 8-Core Processor\n\
physical id\t: 0\n\
core id\t\t: 1\n";
        fs::write(dir.path().join("proc/cpuinfo"), cpuinfo).unwrap();
        let freq_dir = dir.path().join("sys/devices/system/cpu/cpu0/cpufreq");
        fs::create_dir_all(&freq_dir).unwrap();
        fs::write(freq_dir.join("cpuinfo_max_freq"), "4548828\n").unwrap();

        let info = CpuInfo::detect(&sys);
        assert_eq!(info.name, "AMD Ryzen 7 5800X3D 8-Core Processor");
        assert_eq!(info.logical_threads, 3);
        assert_eq!(info.physical_cores, 2);
        assert_eq!(info.max_clock_mhz, Some(4548));
    }

    #[test]
    fn empty_root_yields_defaults() {
        let (_dir, sys) = fake_root();
        let info = CpuInfo::detect(&sys);
        assert!(info.name.is_empty());
        assert_eq!(info.logical_threads, 0);
        assert_eq!(info.max_clock_mhz, None);
    }
}
