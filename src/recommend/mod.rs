//! Hardware-driven tweak recommendations.
//!
//! Pure policy: the input is a [`HardwareSnapshot`], the output is the set of
//! tweak ids worth applying on that machine. Nothing here reads the system or
//! mutates anything, so the whole module is trivially testable.

use std::collections::BTreeSet;

use crate::detect::{GpuVendor, HardwareSnapshot};

/// RAM threshold above which memory-hungry tweaks make sense.
const PLENTY_OF_RAM_MB: u64 = 16 * 1024;

/// Tweaks recommended on every machine regardless of hardware.
const ALWAYS: &[&str] = &[
    "power_plan",
    "disable_gamedvr",
    "system_responsiveness",
    "games_task_priority",
    "network_throttle",
    "disable_fullscreen_optim",
    "disable_game_bar",
    "disable_mouse_accel",
    "disable_transparency",
    "disable_background_apps",
    "disable_tips_notifications",
    "disable_telemetry",
    "win32_priority_separation",
    "disable_notifications_fullscreen",
    "disable_ntfs_last_access",
    "disable_8dot3_names",
    "disable_delivery_optimization",
    "disable_advertising_id",
    "disable_feedback_frequency",
    "disable_bing_search",
    "disable_error_reporting",
    "disable_aero_shake",
    "disable_core_parking",
    "disable_ecn",
    "tcp_ack_frequency",
    "nagle_disable",
];

/// Compute the recommended tweak ids for the given machine.
///
/// The result is sorted (BTreeSet) so output and tests are deterministic.
pub fn recommended_ids(hw: &HardwareSnapshot) -> BTreeSet<&'static str> {
    let mut ids: BTreeSet<&'static str> = ALWAYS.iter().copied().collect();

    // Discrete-GPU tweaks: meaningful only when a real NVIDIA or AMD card is
    // present, otherwise the GPU preference would pin the integrated chip.
    if matches!(hw.gpu.vendor, GpuVendor::Nvidia | GpuVendor::Amd) {
        ids.insert("cs2_gpu_pref");
        ids.insert("cs2_launch_opts");
    }
    if hw.gpu.vendor == GpuVendor::Nvidia {
        ids.insert("nvidia_threaded_optim");
    }

    // Memory-hungry tweaks need headroom to be a net win.
    if hw.memory.total_mb >= PLENTY_OF_RAM_MB {
        ids.insert("large_system_cache");
        ids.insert("disable_paging_exec");
        ids.insert("disable_memory_compression");
        ids.insert("svchost_split_threshold");
        ids.insert("ndu_disable");
    }

    // Prefetch/Superfetch only hurt on solid-state storage.
    if hw.storage.has_ssd {
        ids.insert("disable_prefetch");
        ids.insert("disable_superfetch");
        ids.insert("disable_diagtrack");
        ids.insert("disable_sysmain");
    }

    // Power throttling is an Intel Speed Shift feature.
    if hw.cpu.name.to_lowercase().contains("intel") {
        ids.insert("disable_power_throttling");
    }

    // On integrated-only graphics every bit of GPU compositing time counts.
    if hw.gpu.vendor == GpuVendor::Intel {
        ids.insert("visual_fx_performance");
        ids.insert("disable_animations");
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::detect::{CpuInfo, GpuInfo, MemoryInfo, StorageInfo};

    fn snapshot(cpu: &str, vendor: GpuVendor, ram_mb: u64, ssd: bool) -> HardwareSnapshot {
        HardwareSnapshot {
            cpu: CpuInfo {
                name: cpu.to_string(),
                physical_cores: 8,
                logical_threads: 16,
                max_clock_mhz: Some(4800),
            },
            gpu: GpuInfo {
                vendor,
                name: String::from("test gpu"),
                vram_mb: Some(8192),
            },
            memory: MemoryInfo {
                total_mb: ram_mb,
                kind: None,
                speed_mts: None,
            },
            storage: StorageInfo {
                models: vec![String::from("test disk")],
                has_ssd: ssd,
                has_nvme: ssd,
            },
            motherboard: None,
            bios_version: None,
            bios_date: None,
            chassis: None,
        }
    }

    #[test]
    fn every_recommended_id_exists_in_catalog() {
        let hw = snapshot("Intel Core i7-13700K", GpuVendor::Nvidia, 32 * 1024, true);
        let tweaks = catalog::catalog();
        for id in recommended_ids(&hw) {
            assert!(catalog::find(&tweaks, id).is_some(), "unknown id {id}");
        }
    }

    #[test]
    fn baseline_set_is_always_present() {
        let hw = snapshot("AMD Ryzen 5 3600", GpuVendor::Unknown, 8 * 1024, false);
        let ids = recommended_ids(&hw);
        assert!(ids.contains("power_plan"));
        assert!(ids.contains("disable_gamedvr"));
        assert!(ids.contains("nagle_disable"));
        assert!(!ids.contains("cs2_gpu_pref"));
        assert!(!ids.contains("nvidia_threaded_optim"));
        assert!(!ids.contains("large_system_cache"));
        assert!(!ids.contains("disable_prefetch"));
        assert!(!ids.contains("disable_power_throttling"));
    }

    #[test]
    fn nvidia_gets_gpu_tweaks() {
        let hw = snapshot("AMD Ryzen 7 5800X3D", GpuVendor::Nvidia, 8 * 1024, false);
        let ids = recommended_ids(&hw);
        assert!(ids.contains("cs2_gpu_pref"));
        assert!(ids.contains("cs2_launch_opts"));
        assert!(ids.contains("nvidia_threaded_optim"));
    }

    #[test]
    fn amd_gets_gpu_pref_but_not_nvidia_hint() {
        let hw = snapshot("AMD Ryzen 7 5800X3D", GpuVendor::Amd, 8 * 1024, false);
        let ids = recommended_ids(&hw);
        assert!(ids.contains("cs2_gpu_pref"));
        assert!(!ids.contains("nvidia_threaded_optim"));
    }

    #[test]
    fn ram_threshold_gates_memory_tweaks() {
        let small = snapshot("Intel Core i5-12400", GpuVendor::Intel, 8 * 1024, true);
        let big = snapshot("Intel Core i5-12400", GpuVendor::Intel, 16 * 1024, true);
        assert!(!recommended_ids(&small).contains("large_system_cache"));
        assert!(recommended_ids(&big).contains("large_system_cache"));
        assert!(recommended_ids(&big).contains("ndu_disable"));
    }

    #[test]
    fn ssd_gates_prefetch_tweaks() {
        let hdd = snapshot("Intel Core i5-12400", GpuVendor::Unknown, 8 * 1024, false);
        let ssd = snapshot("Intel Core i5-12400", GpuVendor::Unknown, 8 * 1024, true);
        assert!(!recommended_ids(&hdd).contains("disable_sysmain"));
        assert!(recommended_ids(&ssd).contains("disable_sysmain"));
        assert!(recommended_ids(&ssd).contains("disable_prefetch"));
    }

    #[test]
    fn intel_cpu_gates_power_throttling() {
        let intel = snapshot("12th Gen Intel(R) Core(TM) i7-12700K", GpuVendor::Amd, 8 * 1024, false);
        let amd = snapshot("AMD Ryzen 9 7950X", GpuVendor::Amd, 8 * 1024, false);
        assert!(recommended_ids(&intel).contains("disable_power_throttling"));
        assert!(!recommended_ids(&amd).contains("disable_power_throttling"));
    }

    #[test]
    fn integrated_gpu_gets_visual_tweaks() {
        let igpu = snapshot("Intel Core i5-1240P", GpuVendor::Intel, 8 * 1024, true);
        let ids = recommended_ids(&igpu);
        assert!(ids.contains("visual_fx_performance"));
        assert!(ids.contains("disable_animations"));
    }
}
