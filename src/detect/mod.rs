//! Hardware detection.
//!
//! Everything reads through [`SysRoot`] so tests can point the detectors at a
//! fabricated tree instead of the live system.

pub mod cpu;
pub mod dmi;
pub mod gpu;
pub mod memory;
pub mod storage;

pub use cpu::CpuInfo;
pub use gpu::{GpuInfo, GpuVendor};
pub use memory::MemoryInfo;
pub use storage::StorageInfo;

use serde::Serialize;

use crate::sysroot::SysRoot;

/// A point-in-time picture of the machine, the sole input to the
/// recommendation policy.
#[derive(Debug, Clone, Serialize)]
pub struct HardwareSnapshot {
    pub cpu: CpuInfo,
    pub gpu: GpuInfo,
    pub memory: MemoryInfo,
    pub storage: StorageInfo,
    pub motherboard: Option<String>,
    pub bios_version: Option<String>,
    pub bios_date: Option<String>,
    pub chassis: Option<String>,
}

impl HardwareSnapshot {
    pub fn detect(sys: &SysRoot) -> Self {
        let dmi = dmi::DmiInfo::detect(sys);

        Self {
            cpu: CpuInfo::detect(sys),
            gpu: GpuInfo::detect(sys),
            memory: MemoryInfo::detect(sys),
            storage: StorageInfo::detect(sys),
            motherboard: dmi.motherboard(),
            bios_version: dmi.bios_version,
            bios_date: dmi.bios_date,
            chassis: dmi.chassis,
        }
    }
}
