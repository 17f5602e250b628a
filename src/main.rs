use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use frametune::backup::BackupStore;
use frametune::catalog::Risk;
use frametune::cli::{Cli, Command, ProfileAction};
use frametune::config::{self, FrametuneConfig};
use frametune::detect::HardwareSnapshot;
use frametune::engine::{BatchEvent, RestoreOutcome, ToggleOutcome, TweakEngine};
use frametune::power::PowercfgAdapter;
use frametune::profile::ProfileStore;
use frametune::store::reg::RegStore;
use frametune::sysroot::SysRoot;
use frametune::{gamepath, output, recommend};

type Engine = TweakEngine<RegStore, PowercfgAdapter>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_ref());

    match cli.command {
        Command::List { category, recommended } => {
            cmd_list(&config, cli.json, category.as_deref(), recommended)?
        }
        Command::Categories => cmd_categories(cli.json),
        Command::Show { id } => cmd_show(&config, &id)?,
        Command::Apply { ids, recommended, profile, advanced, yes } => {
            cmd_apply(&config, ids, recommended, profile, advanced, yes)?
        }
        Command::Restore { ids, all } => cmd_restore(&config, ids, all)?,
        Command::Toggle { id } => cmd_toggle(&config, &id)?,
        Command::Verify => cmd_verify(&config, cli.json)?,
        Command::Status => cmd_status(&config, cli.json)?,
        Command::Detect => cmd_detect(cli.json),
        Command::Startup => cmd_startup(cli.json),
        Command::Profile { action } => cmd_profile(&config, action)?,
        Command::Completions { shell } => frametune::cli::print_completions(shell),
    }

    Ok(())
}

fn build_engine(config: &FrametuneConfig) -> Result<Engine> {
    let backup = match &config.backup.path {
        Some(path) => BackupStore::open(path)?,
        None => BackupStore::open_default()?,
    };
    let elevated = is_elevated();
    let mut engine = TweakEngine::new(RegStore::new(), PowercfgAdapter::new(), backup, elevated);

    let exe = config
        .game
        .exe_path
        .clone()
        .or_else(|| gamepath::locate_cs2(&mut RegStore::new()));
    engine.set_exe_path(exe);
    Ok(engine)
}

#[cfg(unix)]
fn is_elevated() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
fn is_elevated() -> bool {
    // Elevation shows up as write access to the machine hive; probing it is
    // the reliable check when euid does not exist.
    std::process::Command::new("reg")
        .args(["query", "HKU\\S-1-5-19"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn cmd_list(
    config: &FrametuneConfig,
    json: bool,
    category: Option<&str>,
    recommended: bool,
) -> Result<()> {
    let mut engine = build_engine(config)?;
    let hw = HardwareSnapshot::detect(&SysRoot::system());
    engine.mark_recommended(&hw);

    let rows: Vec<_> = engine
        .tweaks()
        .iter()
        .filter(|t| {
            category.is_none_or(|c| c.eq_ignore_ascii_case("all") || t.category.eq_ignore_ascii_case(c))
        })
        .map(|t| (t, engine.state(t.id).unwrap_or_default()))
        .collect();

    if json {
        output::print_tweak_list_json(&rows);
    } else {
        output::print_tweak_list(&rows, recommended);
    }
    Ok(())
}

fn cmd_categories(json: bool) {
    let categories = frametune::catalog::categories(&frametune::catalog::catalog());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&categories).unwrap_or_default()
        );
    } else {
        for category in categories {
            println!("  {category}");
        }
    }
}

fn cmd_show(config: &FrametuneConfig, id: &str) -> Result<()> {
    let engine = build_engine(config)?;
    let tweaks = engine.tweaks();
    let Some(tweak) = frametune::catalog::find(tweaks, id) else {
        anyhow::bail!("unknown tweak id: {id} (see `frametune list`)");
    };
    output::print_tweak_info(tweak, engine.state(id).unwrap_or_default());
    Ok(())
}

fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn run_batch(engine: &mut Engine, ids: &[String], yes: bool) -> Result<()> {
    if ids.is_empty() {
        println!("{}", "Nothing selected.".yellow());
        return Ok(());
    }

    println!("About to apply {} tweak(s).", ids.len());
    if !confirm("Continue?", yes)? {
        println!("Aborted.");
        return Ok(());
    }

    let bar = output::batch_progress(ids.len() as u64);
    let report = engine.apply_batch(ids, |event| match event {
        BatchEvent::Started { tweak, .. } => {
            bar.set_message(tweak.id.to_string());
        }
        BatchEvent::Finished { tweak, outcome } => {
            bar.println(format!(
                "  {:<32} {}",
                tweak.id,
                output::outcome_label(outcome)
            ));
            bar.inc(1);
        }
    })?;
    bar.finish_and_clear();
    output::print_batch_report(&report);
    Ok(())
}

fn cmd_apply(
    config: &FrametuneConfig,
    ids: Vec<String>,
    recommended: bool,
    profile: Option<String>,
    advanced: bool,
    yes: bool,
) -> Result<()> {
    let mut engine = build_engine(config)?;
    let yes = yes || config.apply.assume_yes;

    let ids: Vec<String> = if let Some(name) = profile {
        ProfileStore::open_default().load(&name)?.tweak_ids
    } else if recommended {
        let hw = HardwareSnapshot::detect(&SysRoot::system());
        engine.mark_recommended(&hw);
        let include_advanced = advanced || !config.apply.skip_advanced;
        engine
            .tweaks()
            .iter()
            .filter(|t| engine.state(t.id).is_some_and(|s| s.recommended))
            .filter(|t| include_advanced || t.risk == Risk::Safe)
            .map(|t| t.id.to_string())
            .collect()
    } else if ids.is_empty() {
        anyhow::bail!("specify tweak ids, --recommended, or --profile <name>");
    } else {
        ids
    };

    run_batch(&mut engine, &ids, yes)
}

fn cmd_restore(config: &FrametuneConfig, ids: Vec<String>, all: bool) -> Result<()> {
    let mut engine = build_engine(config)?;

    let results = if all {
        engine.restore_all()?
    } else {
        if ids.is_empty() {
            anyhow::bail!("specify tweak ids or --all");
        }
        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            let outcome = engine.restore(&id)?;
            results.push((id, outcome));
        }
        results
    };

    if results.is_empty() {
        println!("{}", "Nothing to restore.".yellow());
        return Ok(());
    }
    for (id, outcome) in results {
        match outcome {
            RestoreOutcome::Restored { succeeded, total } => {
                if succeeded == total {
                    println!("  {} {}", "✓".green().bold(), id);
                } else {
                    println!(
                        "  {} {} {}",
                        "!".yellow().bold(),
                        id,
                        format!("({succeeded}/{total} actions restored)").yellow()
                    );
                }
            }
            RestoreOutcome::NotApplied => {
                println!("  {} {} {}", "-".dimmed(), id, "(not applied)".dimmed());
            }
            RestoreOutcome::NeedsElevation => {
                println!("  {} {} {}", "!".yellow().bold(), id, "(needs admin)".yellow());
            }
        }
    }
    Ok(())
}

fn cmd_toggle(config: &FrametuneConfig, id: &str) -> Result<()> {
    let mut engine = build_engine(config)?;
    match engine.toggle(id)? {
        ToggleOutcome::Applied(outcome) => {
            println!("  {:<32} {}", id, output::outcome_label(outcome));
        }
        ToggleOutcome::Restored(RestoreOutcome::Restored { .. }) => {
            println!("  {:<32} {}", id, "restored".green());
        }
        ToggleOutcome::Restored(RestoreOutcome::NeedsElevation) => {
            println!("  {:<32} {}", id, "needs admin".yellow());
        }
        ToggleOutcome::Restored(RestoreOutcome::NotApplied) => {
            println!("  {:<32} {}", id, "not applied".dimmed());
        }
    }
    Ok(())
}

fn cmd_verify(config: &FrametuneConfig, json: bool) -> Result<()> {
    let mut engine = build_engine(config)?;
    let results = engine.verify_applied()?;
    if json {
        output::print_verify_json(&results);
    } else {
        output::print_verify_results(&results);
    }
    Ok(())
}

fn cmd_status(config: &FrametuneConfig, json: bool) -> Result<()> {
    let mut engine = build_engine(config)?;
    let hw = HardwareSnapshot::detect(&SysRoot::system());
    engine.mark_recommended(&hw);

    let applied = engine.applied_count();
    let recommended = engine.recommended_count();
    let elevated = is_elevated();

    if json {
        let output = serde_json::json!({
            "applied": applied,
            "recommended": recommended,
            "total": engine.tweaks().len(),
            "elevated": elevated,
            "backup_path": engine.backup().path(),
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return Ok(());
    }

    println!(
        "  {applied} of {} tweaks applied, {recommended} recommended for this machine",
        engine.tweaks().len()
    );
    println!(
        "  elevation: {}",
        if elevated { "yes".green() } else { "no".yellow() }
    );
    println!("  backups:   {}", engine.backup().path().display());
    if applied < recommended {
        println!(
            "\n  Run {} to see what is still recommended.",
            "frametune list --recommended".cyan()
        );
    }
    Ok(())
}

fn cmd_detect(json: bool) {
    let hw = HardwareSnapshot::detect(&SysRoot::system());
    if json {
        output::print_hardware_json(&hw);
        return;
    }
    output::print_hardware_summary(&hw);

    let ids = recommend::recommended_ids(&hw);
    println!();
    println!(
        "  {} {} tweaks recommended for this machine:",
        "→".bold(),
        ids.len()
    );
    for id in ids {
        println!("    {}", id.cyan());
    }
    println!(
        "\n  Run {} to apply them.",
        "frametune apply --recommended".cyan()
    );
}

fn cmd_startup(json: bool) {
    let entries = frametune::startup::scan(&mut RegStore::new());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        output::print_startup_entries(&entries);
    }
}

fn cmd_profile(config: &FrametuneConfig, action: ProfileAction) -> Result<()> {
    let store = ProfileStore::open_default();
    match action {
        ProfileAction::Save { name } => {
            let engine = build_engine(config)?;
            let ids: Vec<String> = engine
                .tweaks()
                .iter()
                .filter(|t| engine.state(t.id).is_some_and(|s| s.applied))
                .map(|t| t.id.to_string())
                .collect();
            if ids.is_empty() {
                anyhow::bail!("nothing applied; apply some tweaks before saving a profile");
            }
            let profile = store.save(&name, ids)?;
            println!(
                "Saved profile {} ({} tweaks).",
                profile.name.green(),
                profile.tweak_ids.len()
            );
        }
        ProfileAction::Load { name, yes } => {
            let profile = store.load(&name)?;
            let mut engine = build_engine(config)?;
            let yes = yes || config.apply.assume_yes;

            // Loading replaces the current state: everything applied now is
            // restored first, then the profile's selection goes on.
            let active = engine.backup().ids().len();
            let yes = if active > 0 {
                if !confirm(
                    &format!(
                        "Loading '{}' restores {active} currently applied tweak(s) first. Continue?",
                        profile.name
                    ),
                    yes,
                )? {
                    println!("Aborted.");
                    return Ok(());
                }
                engine.restore_all()?;
                // The prompt above already covered the whole operation.
                true
            } else {
                yes
            };
            run_batch(&mut engine, &profile.tweak_ids, yes)?;
        }
        ProfileAction::List => {
            let profiles = store.list()?;
            if profiles.is_empty() {
                println!("{}", "No saved profiles.".dimmed());
            }
            for profile in profiles {
                println!(
                    "  {:<24} {} tweaks, saved {}",
                    profile.name.cyan(),
                    profile.tweak_ids.len(),
                    profile.saved_at.dimmed()
                );
            }
        }
        ProfileAction::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted profile {name}.");
        }
    }
    Ok(())
}
