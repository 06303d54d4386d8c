use super::AlertFormatter;
use crate::client::ExtendedAlert;
use std::io::Write;

/// The alert list as a single-line JSON array
pub struct JsonFormatter;

impl AlertFormatter for JsonFormatter {
    fn format_alerts(&self, alerts: &[ExtendedAlert], out: &mut dyn Write) -> anyhow::Result<()> {
        serde_json::to_writer(&mut *out, alerts)?;
        writeln!(out)?;
        Ok(())
    }
}
