use crate::client::{AlertSet, AlertSource, QueryError, QueryOptions};
use crate::matcher::FilterExpression;

/// One `alert query` invocation: the filter to send and which suppressed
/// alerts to include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertQuery {
    pub filter: FilterExpression,
    pub options: QueryOptions,
}

impl AlertQuery {
    pub fn new<S: AsRef<str>>(matcher_groups: &[S], options: QueryOptions) -> Self {
        Self {
            filter: FilterExpression::from_matcher_groups(matcher_groups),
            options,
        }
    }

    /// Fetch the matching alerts with a single request. Failures are returned
    /// as-is; nothing is retried.
    pub fn execute(&self, source: &dyn AlertSource) -> Result<AlertSet, QueryError> {
        tracing::debug!(
            filter = %self.filter,
            silenced = self.options.silenced,
            inhibited = self.options.inhibited,
            "querying alerts"
        );

        let alerts = source.list_alerts(&self.filter, self.options)?;
        tracing::info!(count = alerts.len(), "fetched alerts");
        Ok(alerts)
    }
}
