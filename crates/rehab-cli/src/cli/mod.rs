use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rehab` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rehab",
    version,
    about = "Content administration for the rehab clinic site"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding `.rehab/` (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{ConditionCommands, GalleryCommands, SettingsCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_on_either_side() {
        let before = Cli::try_parse_from(["rehab", "--format", "table", "-l", "5", "dashboard"])
            .expect("cli should parse");
        assert_eq!(before.format, OutputFormat::Table);
        assert_eq!(before.limit, Some(5));
        assert!(matches!(before.command, Commands::Dashboard));

        let after = Cli::try_parse_from(["rehab", "sitemap", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(after.format, OutputFormat::Raw);
        assert!(after.quiet);
    }

    #[test]
    fn output_format_rejects_unknown_value() {
        assert!(Cli::try_parse_from(["rehab", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn settings_set_accepts_clearing_a_field() {
        let cli = Cli::try_parse_from([
            "rehab",
            "settings",
            "set",
            "--gallery-enabled",
            "false",
            "--phone-tertiary",
            "",
        ])
        .expect("cli should parse");
        let Commands::Settings {
            action: SettingsCommands::Set(args),
        } = cli.command
        else {
            panic!("expected settings set");
        };
        assert_eq!(args.gallery_enabled, Some(false));
        assert_eq!(args.phone_tertiary.as_deref(), Some(""));
        assert_eq!(args.email, None);
    }

    #[test]
    fn gallery_move_takes_a_direction() {
        let cli = Cli::try_parse_from(["rehab", "gallery", "move", "img-1", "up"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Gallery {
                action: GalleryCommands::Move { .. }
            }
        ));
        assert!(Cli::try_parse_from(["rehab", "gallery", "move", "img-1", "left"]).is_err());
    }

    #[test]
    fn condition_create_defaults_category() {
        let cli = Cli::try_parse_from(["rehab", "condition", "create", "--name", "Autism"])
            .expect("cli should parse");
        let Commands::Condition {
            action: ConditionCommands::Create { category, .. },
        } = cli.command
        else {
            panic!("expected condition create");
        };
        assert_eq!(category, "Pediatric");
    }
}
