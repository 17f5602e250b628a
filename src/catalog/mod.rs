pub mod data;

use crate::store::{Hive, ValueData};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Registry path under which per-executable GPU preferences live.
pub const GPU_PREFERENCE_PATH: &str = "Software\\Microsoft\\DirectX\\UserGpuPreferences";

/// Registry path prefix for service configuration keys.
pub const SERVICES_PATH_PREFIX: &str = "SYSTEM\\CurrentControlSet\\Services";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Risk {
    Safe,
    Advanced,
}

/// Service startup policy, stored as the `Start` DWORD of a service key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStart {
    Automatic,
    Manual,
    Disabled,
}

impl ServiceStart {
    pub fn as_dword(self) -> u32 {
        match self {
            ServiceStart::Automatic => 2,
            ServiceStart::Manual => 3,
            ServiceStart::Disabled => 4,
        }
    }
}

/// Target executable of a GPU preference binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExeTarget {
    /// Resolve at apply time from config override or Steam library scan.
    Auto,
    Path(&'static str),
}

/// One atomic system mutation inside a tweak.
#[derive(Debug, Clone)]
pub enum Action {
    /// Write one named value in the configuration store.
    ConfigValue {
        hive: Hive,
        path: &'static str,
        name: &'static str,
        value: ValueData,
    },
    /// Activate a power scheme candidate. A tweak may carry several; the
    /// first one that activates wins and the rest are not attempted.
    PowerSchemeSwitch { candidate: &'static str },
    /// Bind an executable to a GPU preference string.
    GpuPreference {
        exe: ExeTarget,
        preference: &'static str,
    },
    /// Set a service startup policy.
    ServiceStartPolicy {
        service: &'static str,
        start: ServiceStart,
    },
}

/// A catalog entry. Immutable after construction; the mutable
/// recommended/applied/verified flags live in the engine's state map.
#[derive(Debug, Clone)]
pub struct Tweak {
    pub id: &'static str,
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub explanation: &'static str,
    pub risk: Risk,
    pub needs_elevation: bool,
    pub actions: Vec<Action>,
}

/// The full catalog, in stable declaration order.
pub fn catalog() -> Vec<Tweak> {
    data::all_tweaks()
}

/// Sorted unique category names with a synthetic "All" prepended.
pub fn categories(tweaks: &[Tweak]) -> Vec<String> {
    let set: BTreeSet<&str> = tweaks.iter().map(|t| t.category).collect();
    let mut out = vec!["All".to_string()];
    out.extend(set.into_iter().map(String::from));
    out
}

/// Look up a tweak by id.
pub fn find<'a>(tweaks: &'a [Tweak], id: &str) -> Option<&'a Tweak> {
    tweaks.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_pairwise_distinct() {
        let tweaks = catalog();
        let mut seen = HashSet::new();
        for t in &tweaks {
            assert!(seen.insert(t.id), "duplicate tweak id: {}", t.id);
        }
    }

    #[test]
    fn test_catalog_size_and_order_stable() {
        let a = catalog();
        let b = catalog();
        assert!(a.len() >= 40, "catalog unexpectedly small: {}", a.len());
        let ids_a: Vec<&str> = a.iter().map(|t| t.id).collect();
        let ids_b: Vec<&str> = b.iter().map(|t| t.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_categories_sorted_with_all_first() {
        let cats = categories(&catalog());
        assert_eq!(cats[0], "All");
        let rest = &cats[1..];
        let mut sorted = rest.to_vec();
        sorted.sort();
        assert_eq!(rest, sorted.as_slice());
        assert!(rest.contains(&"Gaming".to_string()));
    }

    #[test]
    fn test_service_start_dwords() {
        assert_eq!(ServiceStart::Automatic.as_dword(), 2);
        assert_eq!(ServiceStart::Manual.as_dword(), 3);
        assert_eq!(ServiceStart::Disabled.as_dword(), 4);
    }

    #[test]
    fn test_informational_tweak_has_no_actions() {
        let tweaks = catalog();
        let t = find(&tweaks, "cs2_launch_opts").unwrap();
        assert!(t.actions.is_empty());
    }

    #[test]
    fn test_power_plan_lists_candidates_in_order() {
        let tweaks = catalog();
        let t = find(&tweaks, "power_plan").unwrap();
        let candidates: Vec<&str> = t
            .actions
            .iter()
            .map(|a| match a {
                Action::PowerSchemeSwitch { candidate } => *candidate,
                other => panic!("unexpected action {:?}", other),
            })
            .collect();
        assert_eq!(candidates.len(), 2);
        // Ultimate Performance is attempted before High Performance.
        assert!(candidates[0].starts_with("e9a42b02"));
    }
}
