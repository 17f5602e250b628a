use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{Risk, Tweak};
use crate::detect::HardwareSnapshot;
use crate::engine::{ApplyOutcome, BatchReport, TweakState};
use crate::startup::StartupEntry;

const LABEL_W: usize = 14;

pub fn print_hardware_summary(hw: &HardwareSnapshot) {
    let mut rows: Vec<(&str, String)> = vec![
        (
            "CPU",
            if hw.cpu.name.is_empty() {
                "Unknown".to_string()
            } else {
                hw.cpu.name.clone()
            },
        ),
        (
            "Cores",
            format!(
                "{} physical / {} threads",
                hw.cpu.physical_cores, hw.cpu.logical_threads
            ),
        ),
        ("GPU", hw.gpu.name.clone()),
        ("RAM", format!("{} MB", hw.memory.total_mb)),
    ];
    if let Some(clock) = hw.cpu.max_clock_mhz {
        rows.push(("Max Clock", format!("{clock} MHz")));
    }
    if let Some(vram) = hw.gpu.vram_mb {
        rows.push(("VRAM", format!("{vram} MB")));
    }
    if !hw.storage.models.is_empty() {
        rows.push(("Storage", hw.storage.models.join(", ")));
    }
    rows.push((
        "Disk Type",
        match (hw.storage.has_nvme, hw.storage.has_ssd) {
            (true, _) => "NVMe SSD".to_string(),
            (false, true) => "SATA SSD".to_string(),
            (false, false) => "HDD".to_string(),
        },
    ));
    if let Some(board) = &hw.motherboard {
        rows.push(("Board", board.clone()));
    }
    if let Some(bios) = &hw.bios_version {
        let bios = match &hw.bios_date {
            Some(date) => format!("{bios} ({date})"),
            None => bios.clone(),
        };
        rows.push(("BIOS", bios));
    }
    if let Some(chassis) = &hw.chassis {
        rows.push(("Chassis", chassis.clone()));
    }

    // Box width from content
    let inner_w = rows
        .iter()
        .map(|(l, v)| l.len().max(LABEL_W) + 2 + v.len())
        .max()
        .unwrap_or(40);

    let title = "Hardware";
    let fill = inner_w.saturating_sub(1 + title.len());
    println!("╭─ {} {}╮", title.bold(), "─".repeat(fill));

    for (label, value) in &rows {
        let padded = format!("{:<w$}", label, w = LABEL_W);
        let pad = inner_w.saturating_sub(LABEL_W + 2 + value.len());
        println!("│ {}  {}{} │", padded.dimmed(), value, " ".repeat(pad));
    }

    println!("╰{}╯", "─".repeat(inner_w + 2));
}

pub fn print_hardware_json(hw: &HardwareSnapshot) {
    let output = serde_json::json!({
        "cpu": hw.cpu,
        "gpu": hw.gpu,
        "memory": hw.memory,
        "storage": hw.storage,
        "motherboard": hw.motherboard,
        "bios_version": hw.bios_version,
        "bios_date": hw.bios_date,
        "chassis": hw.chassis,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// One line per tweak, grouped under category headers.
pub fn print_tweak_list(rows: &[(&Tweak, TweakState)], recommended_only: bool) {
    let mut current_category = "";
    let mut shown = 0usize;

    for (tweak, state) in rows {
        if recommended_only && !state.recommended {
            continue;
        }
        if tweak.category != current_category {
            current_category = tweak.category;
            println!();
            println!("{}", current_category.bold().underline());
        }

        let marker = if state.applied {
            "✓".green().bold()
        } else if state.recommended {
            "★".yellow()
        } else {
            "·".dimmed()
        };

        let mut tags = Vec::new();
        if tweak.risk == Risk::Advanced {
            tags.push("advanced".red().to_string());
        }
        if tweak.needs_elevation {
            tags.push("admin".yellow().to_string());
        }
        if let Some(ok) = state.verified {
            tags.push(if ok {
                "verified".green().to_string()
            } else {
                "drifted".red().bold().to_string()
            });
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };

        println!("  {} {:<32} {}{}", marker, tweak.id.cyan(), tweak.name, tags);
        shown += 1;
    }

    if shown == 0 {
        println!("{}", "  Nothing to show.".dimmed());
    }
    println!();
}

pub fn print_tweak_list_json(rows: &[(&Tweak, TweakState)]) {
    let output: Vec<_> = rows
        .iter()
        .map(|(tweak, state)| {
            serde_json::json!({
                "id": tweak.id,
                "category": tweak.category,
                "name": tweak.name,
                "description": tweak.description,
                "risk": tweak.risk,
                "needs_elevation": tweak.needs_elevation,
                "recommended": state.recommended,
                "applied": state.applied,
                "verified": state.verified,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Full card for one tweak: description, rationale, flags.
pub fn print_tweak_info(tweak: &Tweak, state: TweakState) {
    println!();
    println!("{} {}", tweak.id.cyan().bold(), format!("({})", tweak.category).dimmed());
    println!("  {}", tweak.name.bold());
    println!();
    println!("  {}", tweak.description);
    println!();
    println!("  {} {}", "Why:".dimmed(), tweak.explanation);
    println!();
    let risk = match tweak.risk {
        Risk::Safe => "safe".green().to_string(),
        Risk::Advanced => "advanced".red().to_string(),
    };
    println!(
        "  risk: {}   elevation: {}   applied: {}   actions: {}",
        risk,
        if tweak.needs_elevation { "required".yellow().to_string() } else { "no".to_string() },
        if state.applied { "yes".green().to_string() } else { "no".to_string() },
        tweak.actions.len(),
    );
    println!();
}

pub fn print_verify_results(results: &[(&'static str, bool)]) {
    if results.is_empty() {
        println!(
            "{}",
            "No tweaks applied. Run `frametune apply` to get started.".yellow()
        );
        return;
    }
    for (id, ok) in results {
        if *ok {
            println!("  {} {}", "✓".green().bold(), id);
        } else {
            println!("  {} {} {}", "✗".red().bold(), id, "(drifted)".red());
        }
    }
}

pub fn print_verify_json(results: &[(&'static str, bool)]) {
    let output: Vec<_> = results
        .iter()
        .map(|(id, result)| serde_json::json!({ "id": id, "verified": result }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

pub fn print_startup_entries(entries: &[StartupEntry]) {
    if entries.is_empty() {
        println!("{}", "No startup programs found.".yellow());
        return;
    }
    for entry in entries {
        println!(
            "  {:<28} {:<18} {}",
            entry.name.bold(),
            entry.source.dimmed(),
            entry.command
        );
    }
    println!("\n  {} startup entries", entries.len());
}

/// Progress bar for batch operations, styled to sit inside the table output.
pub fn batch_progress(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("  {bar:30.cyan/dim} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn outcome_label(outcome: ApplyOutcome) -> String {
    match outcome {
        ApplyOutcome::Applied { succeeded, attempted } => {
            if succeeded == attempted {
                "applied".green().to_string()
            } else {
                format!("applied ({succeeded}/{attempted})").yellow().to_string()
            }
        }
        ApplyOutcome::Informational => "info only".dimmed().to_string(),
        ApplyOutcome::NeedsElevation => "needs admin".yellow().to_string(),
        ApplyOutcome::Failed { attempted: 0 } => "no applicable actions".dimmed().to_string(),
        ApplyOutcome::Failed { .. } => "failed".red().bold().to_string(),
    }
}

pub fn print_batch_report(report: &BatchReport) {
    println!();
    let mut parts = vec![format!("{} applied", report.applied).green().to_string()];
    if report.informational > 0 {
        parts.push(format!("{} informational", report.informational));
    }
    if report.needs_elevation > 0 {
        parts.push(
            format!("{} need elevation", report.needs_elevation)
                .yellow()
                .to_string(),
        );
    }
    if report.failed > 0 {
        parts.push(format!("{} failed", report.failed).red().to_string());
    }
    println!("  {}", parts.join(", "));

    if report.needs_elevation > 0 {
        println!(
            "  {}",
            "Re-run with elevation to apply the remaining tweaks.".yellow()
        );
    }
}
