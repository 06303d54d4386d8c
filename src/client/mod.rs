//! Access to the Alertmanager alerts API
//!
//! [`AlertSource`] is the seam between the query logic and the network:
//! [`AlertmanagerClient`] talks HTTP, tests substitute their own source.

pub mod error;
pub mod http;
pub mod types;

pub use error::QueryError;
pub use http::{AlertmanagerClient, DEFAULT_TIMEOUT};
pub use types::{AlertState, AlertStatus, ExtendedAlert};

use crate::matcher::FilterExpression;

/// Alerts returned for one query, in server order
pub type AlertSet = Vec<ExtendedAlert>;

/// Which suppressed alerts to include in a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub silenced: bool,
    pub inhibited: bool,
}

impl QueryOptions {
    pub fn new(silenced: bool, inhibited: bool) -> Self {
        Self {
            silenced,
            inhibited,
        }
    }
}

/// Something that can list alerts for a filter expression
pub trait AlertSource {
    fn list_alerts(
        &self,
        filter: &FilterExpression,
        options: QueryOptions,
    ) -> Result<AlertSet, QueryError>;
}
