use chrono::{DateTime, Utc};
use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};
use std::fmt::Write as _;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Borderless table in the style of a tab-aligned listing
pub(crate) fn create_plain_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.to_vec());
    table
}

/// Format a timestamp with a strftime-style pattern; missing timestamps are empty.
///
/// Fails when the pattern contains an unknown specifier.
pub fn format_date(ts: Option<DateTime<Utc>>, pattern: &str) -> anyhow::Result<String> {
    let Some(ts) = ts else {
        return Ok(String::new());
    };

    let mut out = String::new();
    write!(out, "{}", ts.format(pattern))
        .map_err(|_| anyhow::anyhow!("invalid date format '{}'", pattern))?;
    Ok(out)
}
