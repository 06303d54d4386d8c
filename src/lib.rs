//! alert-query: query a Prometheus Alertmanager from the command line
//!
//! Matcher groups given on the command line are turned into a filter
//! expression ([`matcher::FilterExpression`]), sent to the Alertmanager alerts
//! API in a single request ([`query::AlertQuery`]) and the result is handed to
//! the renderer picked with `--output` ([`format::render_alerts`]).

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod matcher;
pub mod query;

pub use cli::{Cli, ColorMode, Commands, QueryArgs, cli_parse};
pub use client::{AlertSet, AlertSource, AlertmanagerClient, ExtendedAlert, QueryError, QueryOptions};
pub use error::Error;
pub use format::{AlertFormatter, FormatterRegistry, render_alerts};
pub use matcher::{FilterExpression, Matcher, MatcherGroup};
pub use query::AlertQuery;

use crate::config::{Settings, load_config};
use std::io::{self, Write};

/// Run `alert query` against `source`, rendering with the formatter named
/// `formatter_name` into `out`.
///
/// The formatter is looked up after the fetch, so an unknown name is only
/// reported once the alerts have been retrieved.
pub fn query_alerts(
    source: &dyn AlertSource,
    registry: &FormatterRegistry,
    formatter_name: &str,
    args: &QueryArgs,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let query = AlertQuery::new(
        &args.matcher_groups,
        QueryOptions::new(args.silenced, args.inhibited),
    );
    let alerts = query.execute(source)?;
    render_alerts(registry, formatter_name, alerts, out)
}

pub fn run(cli: &Cli) -> Result<(), Error> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, &config);

    if let Some(config_path) = &cli.config {
        tracing::info!(path = %config_path.display(), "loaded config file");
    }
    tracing::debug!(
        output = %settings.output,
        timeout_secs = settings.timeout.as_secs(),
        "effective settings"
    );

    match &cli.command {
        Commands::Alert(args) => {
            let base_url = settings.require_alertmanager_url()?;
            let client = AlertmanagerClient::new(base_url, settings.timeout)?;
            tracing::info!(url = %client.base_url(), "using alertmanager");

            let registry = FormatterRegistry::with_builtins(&settings.date_format);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            query_alerts(
                &client,
                &registry,
                &settings.output,
                args.query_args(),
                &mut out,
            )
        }
    }
}
