//! Apply, restore, and verify tweaks.
//!
//! The engine owns the mutable side of the system: a [`ConfigStore`] for
//! named values, a [`PowerScheme`] for scheme switches, and the durable
//! [`BackupStore`]. The catalog itself stays immutable; per-tweak flags live
//! in the engine's state map.

use std::collections::HashMap;

use crate::backup::{ActionBackup, BackupRecord, BackupStore};
use crate::catalog::{self, Action, ExeTarget, Tweak, GPU_PREFERENCE_PATH, SERVICES_PATH_PREFIX};
use crate::detect::HardwareSnapshot;
use crate::error::{Error, Result};
use crate::power::PowerScheme;
use crate::recommend;
use crate::store::{ConfigStore, Hive, ValueData};

/// Mutable per-tweak flags, kept apart from the immutable catalog entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TweakState {
    pub recommended: bool,
    pub applied: bool,
    /// None until a verification has run for this tweak.
    pub verified: Option<bool>,
}

/// What happened when a single tweak was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// At least one action took effect; a backup record exists.
    Applied { succeeded: usize, attempted: usize },
    /// The tweak carries no actions; nothing to do beyond marking it.
    Informational,
    /// The tweak requires elevation and the process does not have it.
    NeedsElevation,
    /// Every attempted action failed; nothing was changed or backed up.
    Failed { attempted: usize },
}

/// What happened when a single tweak was restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The backup record was replayed and removed.
    Restored { succeeded: usize, total: usize },
    /// No backup record exists for this tweak.
    NotApplied,
    NeedsElevation,
}

/// Progress events surfaced during batch operations.
#[derive(Debug, Clone)]
pub enum BatchEvent<'a> {
    Started { tweak: &'a Tweak, index: usize, total: usize },
    Finished { tweak: &'a Tweak, outcome: ApplyOutcome },
}

/// Tally of a batch apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub applied: usize,
    pub informational: usize,
    pub needs_elevation: usize,
    pub failed: usize,
}

pub struct TweakEngine<S: ConfigStore, P: PowerScheme> {
    store: S,
    power: P,
    backup: BackupStore,
    tweaks: Vec<Tweak>,
    states: HashMap<&'static str, TweakState>,
    /// Resolved target for [`ExeTarget::Auto`] GPU bindings.
    exe_path: Option<String>,
    elevated: bool,
}

impl<S: ConfigStore, P: PowerScheme> TweakEngine<S, P> {
    pub fn new(store: S, power: P, backup: BackupStore, elevated: bool) -> Self {
        let tweaks = catalog::catalog();
        let mut states: HashMap<&'static str, TweakState> = tweaks
            .iter()
            .map(|t| (t.id, TweakState::default()))
            .collect();
        // Tweaks with a surviving backup record are applied from last run.
        for t in &tweaks {
            if backup.contains(t.id) {
                if let Some(state) = states.get_mut(t.id) {
                    state.applied = true;
                }
            }
        }
        Self {
            store,
            power,
            backup,
            tweaks,
            states,
            exe_path: None,
            elevated,
        }
    }

    pub fn set_exe_path(&mut self, path: Option<String>) {
        self.exe_path = path;
    }

    pub fn tweaks(&self) -> &[Tweak] {
        &self.tweaks
    }

    pub fn state(&self, id: &str) -> Option<TweakState> {
        self.states.get(id).copied()
    }

    pub fn backup(&self) -> &BackupStore {
        &self.backup
    }

    /// Read-only view of the underlying store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn applied_count(&self) -> usize {
        self.states.values().filter(|s| s.applied).count()
    }

    pub fn recommended_count(&self) -> usize {
        self.states.values().filter(|s| s.recommended).count()
    }

    /// Recompute recommended flags from a hardware snapshot.
    pub fn mark_recommended(&mut self, hw: &HardwareSnapshot) {
        let ids = recommend::recommended_ids(hw);
        for (id, state) in &mut self.states {
            state.recommended = ids.contains(id);
        }
    }

    fn tweak(&self, id: &str) -> Result<Tweak> {
        catalog::find(&self.tweaks, id)
            .cloned()
            .ok_or_else(|| Error::UnknownTweak(id.to_string()))
    }

    fn resolve_exe(&self, target: &ExeTarget) -> Option<String> {
        match target {
            ExeTarget::Path(p) => Some((*p).to_string()),
            ExeTarget::Auto => self.exe_path.clone(),
        }
    }

    /// Apply one tweak. Best-effort across its actions: an action that fails
    /// is neither counted nor backed up, and the rest still run.
    pub fn apply(&mut self, id: &str) -> Result<ApplyOutcome> {
        let tweak = self.tweak(id)?;

        if tweak.needs_elevation && !self.elevated {
            return Ok(ApplyOutcome::NeedsElevation);
        }

        if tweak.actions.is_empty() {
            self.mark_applied(tweak.id, true);
            return Ok(ApplyOutcome::Informational);
        }

        let mut backups: Vec<ActionBackup> = Vec::new();
        let mut succeeded = 0usize;
        let mut attempted = 0usize;
        let mut power_done = false;

        for action in &tweak.actions {
            match action {
                Action::ConfigValue { hive, path, name, value } => {
                    attempted += 1;
                    let Ok(prior) = self.store.read_value(*hive, path, name) else {
                        continue;
                    };
                    if self.store.write_value(*hive, path, name, value).is_err() {
                        continue;
                    }
                    backups.push(ActionBackup::ConfigValue {
                        hive: *hive,
                        path: (*path).to_string(),
                        name: (*name).to_string(),
                        prior,
                    });
                    succeeded += 1;
                }
                Action::PowerSchemeSwitch { candidate } => {
                    // Candidates form one fallback chain: the first that
                    // activates ends the chain.
                    if power_done {
                        continue;
                    }
                    attempted += 1;
                    let previous = match self.power.active_scheme() {
                        Ok(p) => p,
                        Err(_) => continue,
                    };
                    if self.activate_scheme(candidate) {
                        if let Some(previous) = previous {
                            backups.push(ActionBackup::PowerScheme { previous });
                        }
                        succeeded += 1;
                        power_done = true;
                    }
                }
                Action::GpuPreference { exe, preference } => {
                    // An unresolvable auto target is a skip, not a failure.
                    let Some(exe) = self.resolve_exe(exe) else {
                        continue;
                    };
                    attempted += 1;
                    let Ok(prior) =
                        self.store.read_value(Hive::Hkcu, GPU_PREFERENCE_PATH, &exe)
                    else {
                        continue;
                    };
                    let value = ValueData::Text((*preference).to_string());
                    if self
                        .store
                        .write_value(Hive::Hkcu, GPU_PREFERENCE_PATH, &exe, &value)
                        .is_err()
                    {
                        continue;
                    }
                    backups.push(ActionBackup::GpuPreference { exe, prior });
                    succeeded += 1;
                }
                Action::ServiceStartPolicy { service, start } => {
                    attempted += 1;
                    let path = format!("{SERVICES_PATH_PREFIX}\\{service}");
                    let Ok(prior) = self.store.read_value(Hive::Hklm, &path, "Start") else {
                        continue;
                    };
                    let prior = prior.and_then(|v| match v {
                        ValueData::Dword(d) => Some(d),
                        ValueData::Text(_) => None,
                    });
                    let value = ValueData::Dword(start.as_dword());
                    if self
                        .store
                        .write_value(Hive::Hklm, &path, "Start", &value)
                        .is_err()
                    {
                        continue;
                    }
                    backups.push(ActionBackup::ServiceStartPolicy {
                        service: (*service).to_string(),
                        prior,
                    });
                    succeeded += 1;
                }
            }
        }

        if succeeded == 0 {
            return Ok(ApplyOutcome::Failed { attempted });
        }

        // A record from an earlier apply keeps the true pre-apply state;
        // never replace it.
        self.backup
            .insert_if_absent(tweak.id, BackupRecord::new(backups))?;
        self.mark_applied(tweak.id, true);
        // Immediate read-back so drift detection starts from a known state.
        let _ = self.verify(tweak.id);
        Ok(ApplyOutcome::Applied { succeeded, attempted })
    }

    fn activate_scheme(&mut self, guid: &str) -> bool {
        match self.power.set_active(guid) {
            Ok(true) => true,
            // The scheme may not exist yet; materialize and retry once.
            Ok(false) => {
                self.power.ensure_scheme(guid).unwrap_or(false)
                    && self.power.set_active(guid).unwrap_or(false)
            }
            Err(_) => false,
        }
    }

    /// Replay the backup record for one tweak and remove it.
    pub fn restore(&mut self, id: &str) -> Result<RestoreOutcome> {
        let tweak = self.tweak(id)?;

        if tweak.needs_elevation && !self.elevated {
            return Ok(RestoreOutcome::NeedsElevation);
        }

        let Some(record) = self.backup.get(tweak.id).cloned() else {
            // Informational tweaks have nothing recorded; just clear the flag.
            if tweak.actions.is_empty() {
                self.mark_applied(tweak.id, false);
            }
            return Ok(RestoreOutcome::NotApplied);
        };

        let total = record.actions.len();
        let mut succeeded = 0usize;
        for action in &record.actions {
            let ok = match action {
                ActionBackup::ConfigValue { hive, path, name, prior } => match prior {
                    Some(value) => self.store.write_value(*hive, path, name, value).is_ok(),
                    None => self.store.delete_value(*hive, path, name).is_ok(),
                },
                ActionBackup::PowerScheme { previous } => {
                    self.power.set_active(previous).unwrap_or(false)
                }
                ActionBackup::GpuPreference { exe, prior } => match prior {
                    Some(value) => self
                        .store
                        .write_value(Hive::Hkcu, GPU_PREFERENCE_PATH, exe, value)
                        .is_ok(),
                    None => self
                        .store
                        .delete_value(Hive::Hkcu, GPU_PREFERENCE_PATH, exe)
                        .is_ok(),
                },
                // Services always keep a Start value; only rewrite, never
                // delete, even when the pre-apply read came back empty.
                ActionBackup::ServiceStartPolicy { service, prior } => match prior {
                    Some(dword) => {
                        let path = format!("{SERVICES_PATH_PREFIX}\\{service}");
                        self.store
                            .write_value(Hive::Hklm, &path, "Start", &ValueData::Dword(*dword))
                            .is_ok()
                    }
                    None => true,
                },
            };
            if ok {
                succeeded += 1;
            }
        }

        self.backup.remove(tweak.id)?;
        self.mark_applied(tweak.id, false);
        Ok(RestoreOutcome::Restored { succeeded, total })
    }

    /// Apply when not applied, restore when applied.
    pub fn toggle(&mut self, id: &str) -> Result<ToggleOutcome> {
        let applied = self
            .state(id)
            .ok_or_else(|| Error::UnknownTweak(id.to_string()))?
            .applied;
        if applied {
            Ok(ToggleOutcome::Restored(self.restore(id)?))
        } else {
            Ok(ToggleOutcome::Applied(self.apply(id)?))
        }
    }

    /// Read back the tweak's target values and compare.
    ///
    /// Only stored values participate; a read that fails counts as a
    /// mismatch rather than an error. Power scheme switches and GPU
    /// bindings have no reliable read-back, so a tweak carrying nothing
    /// readable verifies true once applied. A tweak that is not applied
    /// verifies false without any adapter reads.
    pub fn verify(&mut self, id: &str) -> Result<bool> {
        let tweak = self.tweak(id)?;

        if !self.states.get(tweak.id).is_some_and(|s| s.applied) {
            return Ok(false);
        }

        let mut all_match = true;
        for action in &tweak.actions {
            match action {
                Action::ConfigValue { hive, path, name, value } => {
                    match self.store.read_value(*hive, path, name) {
                        Ok(current) if current.as_ref() == Some(value) => {}
                        _ => all_match = false,
                    }
                }
                Action::ServiceStartPolicy { service, start } => {
                    let path = format!("{SERVICES_PATH_PREFIX}\\{service}");
                    match self.store.read_value(Hive::Hklm, &path, "Start") {
                        Ok(current) if current == Some(ValueData::Dword(start.as_dword())) => {}
                        _ => all_match = false,
                    }
                }
                Action::GpuPreference { .. } | Action::PowerSchemeSwitch { .. } => {}
            }
        }

        if let Some(state) = self.states.get_mut(tweak.id) {
            state.verified = Some(all_match);
        }
        Ok(all_match)
    }

    /// Verify every applied tweak, returning (id, result) pairs.
    pub fn verify_applied(&mut self) -> Result<Vec<(&'static str, bool)>> {
        let ids: Vec<&'static str> = self
            .tweaks
            .iter()
            .map(|t| t.id)
            .filter(|id| self.states.get(id).is_some_and(|s| s.applied))
            .collect();
        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            results.push((id, self.verify(id)?));
        }
        Ok(results)
    }

    /// Apply a set of tweaks in the caller's order, reporting progress
    /// through the observer. A profile replays exactly as it was saved.
    /// Unknown ids are skipped silently so profiles written by newer builds
    /// stay loadable.
    pub fn apply_batch<F>(&mut self, ids: &[String], mut observer: F) -> Result<BatchReport>
    where
        F: FnMut(BatchEvent<'_>),
    {
        let selected: Vec<Tweak> = ids
            .iter()
            .filter_map(|id| catalog::find(&self.tweaks, id).cloned())
            .collect();
        let total = selected.len();

        let mut report = BatchReport::default();
        for (index, tweak) in selected.iter().enumerate() {
            observer(BatchEvent::Started { tweak, index, total });
            let outcome = self.apply(tweak.id)?;
            match outcome {
                ApplyOutcome::Applied { .. } => report.applied += 1,
                ApplyOutcome::Informational => report.informational += 1,
                ApplyOutcome::NeedsElevation => report.needs_elevation += 1,
                ApplyOutcome::Failed { .. } => report.failed += 1,
            }
            observer(BatchEvent::Finished { tweak, outcome });
        }
        Ok(report)
    }

    /// Apply everything the policy recommends for this machine.
    pub fn apply_recommended<F>(&mut self, hw: &HardwareSnapshot, observer: F) -> Result<BatchReport>
    where
        F: FnMut(BatchEvent<'_>),
    {
        self.mark_recommended(hw);
        let ids: Vec<String> = self
            .tweaks
            .iter()
            .filter(|t| self.states.get(t.id).is_some_and(|s| s.recommended))
            .map(|t| t.id.to_string())
            .collect();
        self.apply_batch(&ids, observer)
    }

    /// Restore every tweak with a backup record.
    pub fn restore_all(&mut self) -> Result<Vec<(String, RestoreOutcome)>> {
        let ids: Vec<String> = self.backup.ids().iter().map(|s| s.to_string()).collect();
        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let outcome = self.restore(&id)?;
            results.push((id, outcome));
        }
        Ok(results)
    }

    fn mark_applied(&mut self, id: &'static str, applied: bool) {
        if let Some(state) = self.states.get_mut(id) {
            state.applied = applied;
            if !applied {
                state.verified = None;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied(ApplyOutcome),
    Restored(RestoreOutcome),
}
