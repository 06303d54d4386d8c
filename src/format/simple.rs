use super::AlertFormatter;
use super::table::{create_plain_table, format_date};
use crate::client::ExtendedAlert;
use std::io::Write;

/// One line per alert: name, start time and summary annotation
pub struct SimpleFormatter {
    date_format: String,
}

impl SimpleFormatter {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }
}

impl AlertFormatter for SimpleFormatter {
    fn format_alerts(&self, alerts: &[ExtendedAlert], out: &mut dyn Write) -> anyhow::Result<()> {
        let mut table = create_plain_table(&["Alertname", "Starts At", "Summary"]);
        for alert in alerts {
            table.add_row(vec![
                alert.alertname().to_string(),
                format_date(alert.starts_at, &self.date_format)?,
                alert.summary().to_string(),
            ]);
        }
        writeln!(out, "{table}")?;
        Ok(())
    }
}
