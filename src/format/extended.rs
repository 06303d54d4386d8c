use super::AlertFormatter;
use super::table::{create_plain_table, format_date};
use crate::client::ExtendedAlert;
use std::collections::BTreeMap;
use std::io::Write;

/// Full label and annotation sets with both timestamps and the generator URL
pub struct ExtendedFormatter {
    date_format: String,
}

impl ExtendedFormatter {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }
}

impl AlertFormatter for ExtendedFormatter {
    fn format_alerts(&self, alerts: &[ExtendedAlert], out: &mut dyn Write) -> anyhow::Result<()> {
        let mut table = create_plain_table(&[
            "Labels",
            "Annotations",
            "Starts At",
            "Ends At",
            "Generator URL",
        ]);
        for alert in alerts {
            table.add_row(vec![
                format_pairs(&alert.labels),
                format_pairs(&alert.annotations),
                format_date(alert.starts_at, &self.date_format)?,
                format_date(alert.ends_at, &self.date_format)?,
                alert.generator_url.clone(),
            ]);
        }
        writeln!(out, "{table}")?;
        Ok(())
    }
}

/// `key="value"` pairs separated by spaces, sorted by key
fn format_pairs(pairs: &BTreeMap<String, String>) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={:?}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DEFAULT_DATE_FORMAT;

    #[test]
    fn test_format_pairs_sorted() {
        let alert = ExtendedAlert::new("foo").with_label("instance", "db-1");
        assert_eq!(
            format_pairs(&alert.labels),
            r#"alertname="foo" instance="db-1""#
        );
    }

    #[test]
    fn test_extended_includes_generator_url() {
        let mut alert = ExtendedAlert::new("foo").with_annotation("runbook", "http://wiki/foo");
        alert.generator_url = "http://prometheus:9090/graph".to_string();

        let mut out = Vec::new();
        ExtendedFormatter::new(DEFAULT_DATE_FORMAT)
            .format_alerts(&[alert], &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Generator URL"));
        assert!(text.contains("http://prometheus:9090/graph"));
        assert!(text.contains(r#"runbook="http://wiki/foo""#));
    }
}
