use super::error::QueryError;
use super::{AlertSet, AlertSource, QueryOptions};
use crate::matcher::FilterExpression;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

pub const ALERTS_ENDPOINT: &str = "/api/v1/alerts";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status codes for which Alertmanager answers with an error envelope
const API_ERROR_CODES: [u16; 3] = [400, 422, 503];

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    status: ResponseStatus,
    #[serde(default)]
    data: Option<AlertSet>,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking HTTP client for the Alertmanager v1 API
#[derive(Debug, Clone)]
pub struct AlertmanagerClient {
    base_url: Url,
    http_client: reqwest::blocking::Client,
}

impl AlertmanagerClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, QueryError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(QueryError::Client)?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the alerts endpoint for a query.
    ///
    /// The endpoint is appended to any path prefix of the base URL.
    pub fn alerts_url(&self, filter: &FilterExpression, options: QueryOptions) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), ALERTS_ENDPOINT);
        url.set_path(&path);
        url.query_pairs_mut()
            .clear()
            .append_pair("filter", filter.as_str())
            .append_pair("silenced", &options.silenced.to_string())
            .append_pair("inhibited", &options.inhibited.to_string());
        url
    }
}

impl AlertSource for AlertmanagerClient {
    fn list_alerts(
        &self,
        filter: &FilterExpression,
        options: QueryOptions,
    ) -> Result<AlertSet, QueryError> {
        let url = self.alerts_url(filter, options);
        tracing::debug!(%url, "fetching alerts");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .map_err(|source| QueryError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|source| QueryError::Transport {
            url: url.to_string(),
            source,
        })?;

        let alerts = decode_response(status, &body)?;
        tracing::debug!(status, count = alerts.len(), "received alerts");
        Ok(alerts)
    }
}

/// Decode the response envelope of the alerts endpoint
fn decode_response(status: u16, body: &str) -> Result<AlertSet, QueryError> {
    let is_api_error = API_ERROR_CODES.contains(&status);
    if !(200..300).contains(&status) && !is_api_error {
        return Err(QueryError::Status {
            status,
            body: body.trim().to_string(),
        });
    }

    let response: ApiResponse =
        serde_json::from_str(body).map_err(|e| QueryError::Decode(e.to_string()))?;

    if is_api_error && response.status != ResponseStatus::Error {
        return Err(QueryError::Decode(format!(
            "inconsistent body for response code {}",
            status
        )));
    }

    match response.status {
        ResponseStatus::Success => Ok(response.data.unwrap_or_default()),
        ResponseStatus::Error => Err(QueryError::Api {
            error_type: response.error_type.unwrap_or_default(),
            message: response.error.unwrap_or_default(),
        }),
    }
}
