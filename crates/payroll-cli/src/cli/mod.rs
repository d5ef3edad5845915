//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use payroll_core::domain::{EmployeeField, EmployeeId};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "payroll",
    bin_name = "payroll",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validated employee records",
    long_about = "Payroll keeps a small registry of employee records and \
                  rejects any attribute that breaks the field rules.",
    after_help = "EXAMPLES:\n\
        \x20 payroll add --first-name Frodo --last-name Baggins --description 'ring bearer' \\\n\
        \x20             --job-years 5 --job-title Hobbit --email frodo@shire.me\n\
        \x20 payroll list --format json\n\
        \x20 payroll update 1 --job-title 'Ring Bearer'\n\
        \x20 payroll completions bash > /usr/share/bash-completion/completions/payroll",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and store a new employee.
    #[command(
        visible_alias = "hire",
        about = "Add an employee",
        after_help = "EXAMPLES:\n\
            \x20 payroll add --first-name Samwise --last-name Gamgee --description gardener \\\n\
            \x20             --job-years 3 --job-title Gardener --email sam@shire.me"
    )]
    Add(AddArgs),

    /// Validate attributes without storing anything.
    #[command(
        about = "Check employee attributes",
        after_help = "EXAMPLES:\n\
            \x20 payroll check --first-name Frodo --email frodo@shire.me ...\n\
            \x20 payroll check --basic --first-name Frodo ...   # no e-mail rule"
    )]
    Check(CheckArgs),

    /// List stored employees.
    #[command(
        visible_alias = "ls",
        about = "List employees",
        after_help = "EXAMPLES:\n\
            \x20 payroll list\n\
            \x20 payroll list --format csv > employees.csv"
    )]
    List(ListArgs),

    /// Show a single employee.
    #[command(about = "Show an employee")]
    Show(ShowArgs),

    /// Change attributes of a stored employee.
    #[command(
        about = "Update an employee",
        after_help = "EXAMPLES:\n\
            \x20 payroll update 1 --job-title 'Ring Bearer'\n\
            \x20 payroll update 3 --job-years 4 --email samwise@shire.me"
    )]
    Update(UpdateArgs),

    /// Remove a stored employee.
    #[command(visible_alias = "rm", about = "Remove an employee")]
    Remove(RemoveArgs),

    /// Load the sample employees.
    #[command(about = "Load sample employees")]
    Seed(SeedArgs),

    /// Re-validate every stored employee.
    #[command(
        about = "Report stored employees that break the field rules",
        after_help = "EXAMPLES:\n\
            \x20 payroll audit\n\
            \x20 payroll audit --field email"
    )]
    Audit(AuditArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 payroll completions bash > ~/.local/share/bash-completion/completions/payroll\n\
            \x20 payroll completions zsh  > ~/.zfunc/_payroll\n\
            \x20 payroll completions fish > ~/.config/fish/completions/payroll.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the payroll configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 payroll config init\n\
            \x20 payroll config get storage.data_file\n\
            \x20 payroll config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Whether an explicit `--config` file must already exist.  Commands
    /// that create or locate the file do not need it.
    pub fn requires_config_file(&self) -> bool {
        !matches!(
            self,
            Commands::Config(ConfigCommands::Init { .. } | ConfigCommands::Path)
                | Commands::Completions(_)
        )
    }
}

// ── employee attributes ───────────────────────────────────────────────────────

/// Employee attributes as flags.  Every flag is optional; rules are enforced
/// by the domain, not by clap.
#[derive(Debug, Clone, Default, Args)]
pub struct EmployeeFields {
    #[arg(long = "first-name", value_name = "NAME", help = "First name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name", value_name = "NAME", help = "Last name")]
    pub last_name: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Description")]
    pub description: Option<String>,

    #[arg(
        long = "job-years",
        value_name = "YEARS",
        allow_negative_numbers = true,
        help = "Years in the job"
    )]
    pub job_years: Option<i32>,

    #[arg(long = "job-title", value_name = "TITLE", help = "Job title")]
    pub job_title: Option<String>,

    #[arg(long = "email", value_name = "ADDRESS", help = "E-mail address")]
    pub email: Option<String>,
}

// ── add / check ───────────────────────────────────────────────────────────────

/// Arguments for `payroll add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: EmployeeFields,
}

/// Arguments for `payroll check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub fields: EmployeeFields,

    /// Check as a basic record, which has no e-mail rule.
    #[arg(long = "basic", conflicts_with = "email", help = "Check without the e-mail rule")]
    pub basic: bool,
}

// ── list / show ───────────────────────────────────────────────────────────────

/// Arguments for `payroll list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.  Falls back to `output.list_format` from the config.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

/// Arguments for `payroll show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_name = "ID", help = "Employee id")]
    pub id: EmployeeId,

    /// Print the record as JSON.
    #[arg(long = "json", help = "Print as JSON")]
    pub json: bool,
}

// ── update / remove ───────────────────────────────────────────────────────────

/// Arguments for `payroll update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(value_name = "ID", help = "Employee id")]
    pub id: EmployeeId,

    #[command(flatten)]
    pub fields: EmployeeFields,
}

/// Arguments for `payroll remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(value_name = "ID", help = "Employee id")]
    pub id: EmployeeId,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Remove without asking")]
    pub yes: bool,
}

// ── seed ──────────────────────────────────────────────────────────────────────

/// Arguments for `payroll seed`.
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Add the samples even when the store already has employees.
    #[arg(long = "force", help = "Seed even if employees exist")]
    pub force: bool,
}

// ── audit ─────────────────────────────────────────────────────────────────────

/// Arguments for `payroll audit`.
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Only report records whose first broken rule is on this field.
    #[arg(
        long = "field",
        value_name = "FIELD",
        help = "Only report violations of one field (e.g. firstName, job-title)"
    )]
    pub field: Option<EmployeeField>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `payroll completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `payroll config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from([
            "payroll",
            "add",
            "--first-name",
            "Frodo",
            "--job-years",
            "5",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert_eq!(args.fields.first_name.as_deref(), Some("Frodo"));
        assert_eq!(args.fields.job_years, Some(5));
        assert!(args.fields.email.is_none());
    }

    #[test]
    fn negative_job_years_reach_the_domain() {
        let cli = Cli::parse_from(["payroll", "update", "2", "--job-years", "-1"]);
        let Commands::Update(args) = cli.command else {
            panic!("expected Update command");
        };
        assert_eq!(args.id, EmployeeId::new(2));
        assert_eq!(args.fields.job_years, Some(-1));
    }

    #[test]
    fn ids_must_be_numeric() {
        assert!(Cli::try_parse_from(["payroll", "show", "frodo"]).is_err());
    }

    #[test]
    fn basic_check_rejects_email() {
        let result = Cli::try_parse_from([
            "payroll",
            "check",
            "--basic",
            "--email",
            "frodo@shire.me",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn list_format_is_optional() {
        let cli = Cli::parse_from(["payroll", "list"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert!(args.format.is_none());

        let cli = Cli::parse_from(["payroll", "ls", "--format", "csv"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, Some(ListFormat::Csv));
    }

    #[test]
    fn audit_field_accepts_any_case_style() {
        let cli = Cli::parse_from(["payroll", "audit", "--field", "job-title"]);
        let Commands::Audit(args) = cli.command else {
            panic!("expected Audit command");
        };
        assert_eq!(args.field, Some(EmployeeField::JobTitle));

        assert!(Cli::try_parse_from(["payroll", "audit", "--field", "salary"]).is_err());
    }

    #[test]
    fn config_bootstrap_commands_tolerate_missing_file() {
        let init = Cli::parse_from(["payroll", "config", "init"]);
        assert!(!init.command.requires_config_file());
        let list = Cli::parse_from(["payroll", "config", "list"]);
        assert!(list.command.requires_config_file());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["payroll", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
