//! Alert renderers selected by name with `--output`
//!
//! Renderers are looked up in a [`FormatterRegistry`] handed in by the caller.
//! `simple`, `extended` and `json` are available through
//! [`FormatterRegistry::with_builtins`].

mod extended;
mod json;
mod simple;
mod table;

pub use extended::ExtendedFormatter;
pub use json::JsonFormatter;
pub use simple::SimpleFormatter;
pub use table::{DEFAULT_DATE_FORMAT, format_date};

use crate::client::{AlertSet, ExtendedAlert};
use crate::error::Error;
use std::collections::BTreeMap;
use std::io::Write;

pub const DEFAULT_FORMATTER: &str = "simple";

/// Renders a list of alerts
pub trait AlertFormatter {
    fn format_alerts(&self, alerts: &[ExtendedAlert], out: &mut dyn Write) -> anyhow::Result<()>;
}

/// Name to renderer mapping
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<String, Box<dyn AlertFormatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `simple`, `extended` and `json` renderers
    pub fn with_builtins(date_format: &str) -> Self {
        let mut registry = Self::new();
        registry.register("simple", SimpleFormatter::new(date_format));
        registry.register("extended", ExtendedFormatter::new(date_format));
        registry.register("json", JsonFormatter);
        registry
    }

    /// Register a renderer, replacing any previous one with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, formatter: F)
    where
        F: AlertFormatter + 'static,
    {
        self.formatters.insert(name.into(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn AlertFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }
}

/// Render `alerts` with the formatter registered as `name`.
///
/// Output is buffered and only written to `out` once rendering succeeded.
pub fn render_alerts(
    registry: &FormatterRegistry,
    name: &str,
    alerts: AlertSet,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let formatter = registry.get(name).ok_or_else(|| Error::UnknownFormatter {
        name: name.to_string(),
        available: registry.names().join(", "),
    })?;

    let mut buffer = Vec::new();
    formatter
        .format_alerts(&alerts, &mut buffer)
        .map_err(Error::Render)?;

    out.write_all(&buffer)?;
    out.flush()?;
    Ok(())
}
