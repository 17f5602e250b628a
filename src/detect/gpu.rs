use serde::Serialize;

use crate::sysroot::SysRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
    #[default]
    Unknown,
}

impl GpuVendor {
    fn from_pci_id(id: &str) -> Self {
        match id.trim() {
            "0x10de" => Self::Nvidia,
            "0x1002" => Self::Amd,
            "0x8086" => Self::Intel,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nvidia => "NVIDIA",
            Self::Amd => "AMD",
            Self::Intel => "Intel",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GpuInfo {
    pub vendor: GpuVendor,
    pub name: String,
    pub vram_mb: Option<u64>,
}

impl GpuInfo {
    pub fn detect(sys: &SysRoot) -> Self {
        let mut info = Self::default();

        // First DRM card wins. Render nodes and connectors contain '-'.
        let Ok(entries) = sys.list_dir("sys/class/drm") else {
            return info;
        };
        for entry in &entries {
            if !entry.starts_with("card") || entry.contains('-') {
                continue;
            }
            let device = format!("sys/class/drm/{entry}/device");
            if !sys.exists(&device) {
                continue;
            }

            if let Some(vendor) = sys
                .read_optional(format!("{device}/vendor"))
                .unwrap_or(None)
            {
                info.vendor = GpuVendor::from_pci_id(&vendor);
            }

            // amdgpu exposes VRAM in bytes; other drivers may not.
            if let Some(bytes) = sys
                .read_optional(format!("{device}/mem_info_vram_total"))
                .unwrap_or(None)
                .and_then(|v| v.parse::<u64>().ok())
            {
                info.vram_mb = Some(bytes / (1024 * 1024));
            }

            // Driver name from the symlink doubles as a readable model hint.
            let driver = sys.path(format!("{device}/driver"));
            if let Ok(target) = std::fs::read_link(&driver) {
                if let Some(name) = target.file_name().and_then(|n| n.to_str()) {
                    info.name = format!("{} ({name})", info.vendor.label());
                }
            }
            if info.name.is_empty() {
                info.name = info.vendor.label().to_string();
            }
            break;
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_nvidia_card() {
        let dir = TempDir::new().unwrap();
        let device = dir.path().join("sys/class/drm/card0/device");
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join("vendor"), "0x10de\n").unwrap();

        let info = GpuInfo::detect(&SysRoot::new(dir.path()));
        assert_eq!(info.vendor, GpuVendor::Nvidia);
        assert_eq!(info.vram_mb, None);
    }

    #[test]
    fn reads_vram_when_exposed() {
        let dir = TempDir::new().unwrap();
        let device = dir.path().join("sys/class/drm/card0/device");
        fs::create_dir_all(&device).unwrap();
        fs::write(device.join("vendor"), "0x1002\n").unwrap();
        fs::write(device.join("mem_info_vram_total"), "8589934592\n").unwrap();

        let info = GpuInfo::detect(&SysRoot::new(dir.path()));
        assert_eq!(info.vendor, GpuVendor::Amd);
        assert_eq!(info.vram_mb, Some(8192));
    }

    #[test]
    fn skips_connector_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sys/class/drm/card0-HDMI-A-1")).unwrap();

        let info = GpuInfo::detect(&SysRoot::new(dir.path()));
        assert_eq!(info.vendor, GpuVendor::Unknown);
    }
}
