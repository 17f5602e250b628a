use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "frametune",
    about = "Gaming performance tuning - apply, verify, and undo OS tweaks",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of formatted tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of the system/user files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List tweaks with their recommended/applied/verified state
    List {
        /// Only show tweaks in this category
        #[arg(long)]
        category: Option<String>,

        /// Only show tweaks recommended for this machine
        #[arg(long)]
        recommended: bool,
    },

    /// List tweak categories
    Categories,

    /// Show one tweak in detail: what it changes and why
    Show {
        /// Tweak id (see `frametune list`)
        id: String,
    },

    /// Apply tweaks by id, or everything recommended for this machine
    Apply {
        /// Tweak ids to apply
        ids: Vec<String>,

        /// Apply everything the hardware policy recommends
        #[arg(long, conflicts_with = "ids")]
        recommended: bool,

        /// Apply a saved profile
        #[arg(long, conflicts_with_all = ["ids", "recommended"], value_name = "NAME")]
        profile: Option<String>,

        /// Include advanced-risk tweaks in --recommended runs
        #[arg(long)]
        advanced: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Restore tweaks to their pre-apply state from the backup store
    Restore {
        /// Tweak ids to restore
        ids: Vec<String>,

        /// Restore everything with a backup record
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },

    /// Apply the tweak if inactive, restore it if active
    Toggle {
        /// Tweak id
        id: String,
    },

    /// Read back applied tweaks and report drift
    Verify,

    /// Summarize applied/recommended counts, elevation, and backup location
    Status,

    /// Detect hardware and show what would be recommended
    Detect,

    /// List programs configured to start with the OS
    Startup,

    /// Manage named tweak profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Save the currently applied tweaks as a named profile
    Save {
        /// Profile name (letters, digits, '-' and '_')
        name: String,
    },
    /// Apply a saved profile
    Load {
        name: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// List saved profiles
    List,
    /// Delete a saved profile
    Delete { name: String },
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: frametune completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "frametune",
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn apply_flags_parse() {
        let cli = Cli::parse_from(["frametune", "apply", "--recommended", "--yes"]);
        match cli.command {
            Command::Apply { recommended, yes, ids, .. } => {
                assert!(recommended);
                assert!(yes);
                assert!(ids.is_empty());
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn apply_ids_conflict_with_recommended() {
        let result =
            Cli::try_parse_from(["frametune", "apply", "disable_gamedvr", "--recommended"]);
        assert!(result.is_err());
    }
}
