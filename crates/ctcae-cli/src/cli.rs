//! CLI argument definitions for the CTCAE terminology tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ctcae",
    version,
    about = "CTCAE terminology lookup - resolve adverse events, grades, and attributions",
    long_about = "Look up CTCAE adverse-event terminology.\n\n\
                  Resolves attribution, grade, and adverse-event names case-insensitively,\n\
                  reports grade/event compatibility, and formats matches as coded values\n\
                  for clinical-data consumers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the static reference tables.
    Tables(TablesArgs),

    /// Resolve a name to its coded value.
    Lookup(LookupArgs),

    /// List the grade options an adverse event defines.
    Grades(GradesArgs),

    /// List the adverse events that define a severity grade.
    Events(EventsArgs),

    /// Check the validity of a grade and/or adverse-event name.
    Check(CheckArgs),

    /// Print the description of an adverse-event form field.
    Describe(DescribeArgs),
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Which table to print.
    #[arg(value_enum, default_value = "all")]
    pub table: TableArg,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// The record kind to resolve against.
    #[arg(value_enum)]
    pub kind: KindArg,

    /// The name to resolve (matched case-insensitively).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Print the coded value as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GradesArgs {
    /// Adverse-event term name.
    #[arg(value_name = "EVENT")]
    pub event: String,
}

#[derive(Parser)]
pub struct EventsArgs {
    /// Grade name (e.g., "Grade 3").
    #[arg(value_name = "GRADE")]
    pub grade: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Grade name to validate.
    #[arg(long = "grade", value_name = "GRADE")]
    pub grade: Option<String>,

    /// Adverse-event term name to validate.
    #[arg(long = "event", value_name = "EVENT")]
    pub event: Option<String>,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Field-kind label (toxicity, adverseEvent, grade, attribution).
    #[arg(value_name = "FIELD")]
    pub kind: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableArg {
    Attributions,
    Grades,
    Events,
    All,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Attribution,
    Grade,
    Event,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lookup_invocation() {
        let cli = Cli::try_parse_from(["ctcae", "lookup", "event", "Anemia", "--json"])
            .expect("parse lookup");
        match cli.command {
            Command::Lookup(args) => {
                assert!(matches!(args.kind, KindArg::Event));
                assert_eq!(args.name, "Anemia");
                assert!(args.json);
            }
            _ => panic!("expected lookup command"),
        }
    }

    #[test]
    fn parses_check_with_optional_flags() {
        let cli = Cli::try_parse_from(["ctcae", "check", "--grade", "Grade 3"])
            .expect("parse check");
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.grade.as_deref(), Some("Grade 3"));
                assert_eq!(args.event, None);
            }
            _ => panic!("expected check command"),
        }
    }
}
