use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const ALERT_HELP: &str = r#"View and search through current alerts.

The non-option section of arguments constructs a list of "Matcher Groups" that
will be used to filter your query. The following examples show this behaviour
in action:

alert-query alert query alertname=foo node=bar

    This query will match all alerts with the alertname=foo and node=bar label
    value pairs set.

alert-query alert query foo

    If a single argument is given and it is not a matcher (it has no '=', '!=',
    '=~' or '!~'), it is assumed to be the value of the alertname pair.

alert-query alert query 'alertname=~foo.*'

    As well as direct equality, regex matching is also supported. The '=~'
    syntax (similar to Prometheus) is used to represent a regex match. Regex
    matching can be used in combination with a direct match."#;

/// Query a Prometheus Alertmanager for alerts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Alertmanager to talk to
    #[arg(
        long = "alertmanager.url",
        env = "ALERTMANAGER_URL",
        value_name = "URL",
        global = true
    )]
    pub alertmanager_url: Option<String>,

    /// Output formatter (simple, extended, json) [default: simple]
    #[arg(short = 'o', long, value_name = "FORMATTER", global = true)]
    pub output: Option<String>,

    /// strftime-style format used for timestamps [default: "%Y-%m-%d %H:%M:%S %Z"]
    #[arg(long = "date.format", value_name = "FORMAT", global = true)]
    pub date_format: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// TOML config file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// When to use colors on the terminal
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn apply(self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {}
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View and search through current alerts
    #[command(long_about = ALERT_HELP)]
    Alert(AlertArgs),
}

/// `alert` runs `query` when no subcommand is named
#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true)]
pub struct AlertArgs {
    #[command(subcommand)]
    pub command: Option<AlertCommand>,

    #[command(flatten)]
    pub query: QueryArgs,
}

impl AlertArgs {
    pub fn query_args(&self) -> &QueryArgs {
        match &self.command {
            Some(AlertCommand::Query(args)) => args,
            None => &self.query,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AlertCommand {
    /// View and search through current alerts
    #[command(long_about = ALERT_HELP)]
    Query(QueryArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    /// Show inhibited alerts
    #[arg(short, long)]
    pub inhibited: bool,

    /// Show silenced alerts
    #[arg(short, long)]
    pub silenced: bool,

    /// Query filter
    #[arg(value_name = "MATCHER_GROUPS")]
    pub matcher_groups: Vec<String>,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
