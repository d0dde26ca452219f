//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "redeem",
    bin_name = "redeem",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Find which of a user's tokens can pay for a course",
    long_about = "redeem checks a user's tokens against a course catalog. \
                  A token is eligible when its scope covers the course and \
                  its value is at least the course cost.",
    after_help = "EXAMPLES:\n\
        \x20 redeem eligible --user 1 --course 1\n\
        \x20 redeem eligible --user 1 --course 4 --explain\n\
        \x20 redeem courses --category programming\n\
        \x20 redeem --data ./data tokens --user 1\n\
        \x20 redeem completions bash > /usr/share/bash-completion/completions/redeem",
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
    /// List the tokens a user can redeem for a course.
    #[command(
        visible_alias = "e",
        about = "List tokens eligible for a course",
        after_help = "EXAMPLES:\n\
            \x20 redeem eligible --user 1 --course 5\n\
            \x20 redeem eligible -u 1 --course 3 --explain\n\
            \x20 redeem eligible -u 1 --course 1 --format json"
    )]
    Eligible(EligibleArgs),

    /// List catalog courses.
    #[command(
        visible_alias = "ls",
        about = "List catalog courses",
        after_help = "EXAMPLES:\n\
            \x20 redeem courses\n\
            \x20 redeem courses --category design\n\
            \x20 redeem courses --format list"
    )]
    Courses(CoursesArgs),

    /// List every token a user holds.
    #[command(
        about = "List a user's tokens",
        after_help = "EXAMPLES:\n\
            \x20 redeem tokens --user 1\n\
            \x20 redeem tokens -u 1 --format json"
    )]
    Tokens(TokensArgs),

    /// Initialise a redeem configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 redeem init           # user config directory\n\
            \x20 redeem init --local   # .redeem.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 redeem completions bash > ~/.local/share/bash-completion/completions/redeem\n\
            \x20 redeem completions zsh  > ~/.zfunc/_redeem\n\
            \x20 redeem completions fish > ~/.config/fish/completions/redeem.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the redeem configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 redeem config get defaults.user\n\
            \x20 redeem config list\n\
            \x20 redeem config path"
    )]
    Config(ConfigCommands),
}

// ── eligible ──────────────────────────────────────────────────────────────────

/// Arguments for `redeem eligible`.
#[derive(Debug, Args)]
pub struct EligibleArgs {
    /// User whose tokens are checked. Falls back to `defaults.user`.
    #[arg(short = 'u', long = "user", value_name = "ID", help = "User id")]
    pub user: Option<u64>,

    /// Course to redeem.
    #[arg(long = "course", value_name = "ID", help = "Course id")]
    pub course: u64,

    /// Show every held token with the reasons it was refused.
    #[arg(long = "explain", help = "Show every token with its verdict")]
    pub explain: bool,

    /// Output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

// ── courses ───────────────────────────────────────────────────────────────────

/// Arguments for `redeem courses`.
#[derive(Debug, Args)]
pub struct CoursesArgs {
    /// Only courses in this category (exact, case-sensitive).
    #[arg(long = "category", value_name = "NAME", help = "Filter by category")]
    pub category: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

// ── tokens ────────────────────────────────────────────────────────────────────

/// Arguments for `redeem tokens`.
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// User whose tokens are listed. Falls back to `defaults.user`.
    #[arg(short = 'u', long = "user", value_name = "ID", help = "User id")]
    pub user: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `redeem init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.redeem.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `redeem completions`.
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

/// Subcommands for `redeem config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.user`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_eligible_command() {
        let cli = Cli::parse_from(["redeem", "eligible", "--user", "1", "--course", "3"]);
        match cli.command {
            Commands::Eligible(args) => {
                assert_eq!(args.user, Some(1));
                assert_eq!(args.course, 3);
                assert!(!args.explain);
                assert_eq!(args.format, None);
            }
            other => panic!("expected Eligible, got {other:?}"),
        }
    }

    #[test]
    fn eligible_requires_course() {
        assert!(Cli::try_parse_from(["redeem", "eligible", "--user", "1"]).is_err());
    }

    #[test]
    fn ids_must_be_numeric() {
        assert!(Cli::try_parse_from(["redeem", "eligible", "-u", "x", "--course", "1"]).is_err());
        assert!(Cli::try_parse_from(["redeem", "eligible", "-u", "1", "--course", "-4"]).is_err());
    }

    #[test]
    fn aliases() {
        let cli = Cli::parse_from(["redeem", "e", "-u", "1", "--course", "1"]);
        assert!(matches!(cli.command, Commands::Eligible(_)));

        let cli = Cli::parse_from(["redeem", "ls", "--category", "design"]);
        match cli.command {
            Commands::Courses(args) => assert_eq!(args.category.as_deref(), Some("design")),
            other => panic!("expected Courses, got {other:?}"),
        }
    }

    #[test]
    fn data_flag_is_global() {
        let cli = Cli::parse_from(["redeem", "tokens", "-u", "1", "--data", "x.toml"]);
        assert_eq!(cli.global.data.as_deref(), Some(std::path::Path::new("x.toml")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["redeem", "--quiet", "--verbose", "courses"]);
        assert!(result.is_err());
    }
}
