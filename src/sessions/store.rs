//! Supabase (`PostgREST`) access to the `sessions` and `session_order_of_day` tables.

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::StoreConfig;
use crate::sessions::error::StoreError;
use crate::sessions::types::{AgendaItem, Session};

/// Sessions table.
const SESSIONS_TABLE: &str = "sessions";
/// Order-of-day table.
const AGENDA_TABLE: &str = "session_order_of_day";
/// Upper bound on agenda rows fetched per session.
const AGENDA_LIMIT: usize = 100;
/// Error bodies are cut to this many characters before logging.
const ERROR_BODY_CHARS: usize = 200;

/// Read-only queries against the session store.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Sessions with `start <= opening_date < end`, newest first.
    ///
    /// # Errors
    /// Returns an error if the store is unconfigured, unreachable or answers badly.
    async fn sessions_between(
        &self,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        limit: usize,
    ) -> Result<Vec<Session>, StoreError>;

    /// Sessions with `opening_date >= start`, newest first.
    ///
    /// # Errors
    /// Same conditions as [`SessionSource::sessions_between`].
    async fn sessions_since(
        &self,
        start: DateTime<Tz>,
        limit: usize,
    ) -> Result<Vec<Session>, StoreError>;

    /// The newest sessions regardless of date.
    ///
    /// # Errors
    /// Same conditions as [`SessionSource::sessions_between`].
    async fn latest_sessions(&self, limit: usize) -> Result<Vec<Session>, StoreError>;

    /// Order of the day for one session, by `order_number`.
    ///
    /// # Errors
    /// Same conditions as [`SessionSource::sessions_between`].
    async fn agenda(&self, session_id: i64) -> Result<Vec<AgendaItem>, StoreError>;
}

/// `PostgREST` client for a Supabase project.
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: Option<Url>,
    api_key: Option<String>,
}

impl SupabaseStore {
    /// Create a store client from configuration.
    ///
    /// Missing credentials are not an error here; every query then fails
    /// with [`StoreError::NotConfigured`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn headers(api_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(key) = HeaderValue::from_str(api_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let (Some(base_url), Some(api_key)) = (&self.base_url, &self.api_key) else {
            return Err(StoreError::NotConfigured);
        };

        let url = build_query_url(base_url, table, params)?;
        tracing::debug!("store query: {}", url.path());

        let response = self
            .client
            .get(url)
            .headers(Self::headers(api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl SessionSource for SupabaseStore {
    async fn sessions_between(
        &self,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        limit: usize,
    ) -> Result<Vec<Session>, StoreError> {
        self.select(SESSIONS_TABLE, &between_params(start, end, limit))
            .await
    }

    async fn sessions_since(
        &self,
        start: DateTime<Tz>,
        limit: usize,
    ) -> Result<Vec<Session>, StoreError> {
        self.select(SESSIONS_TABLE, &since_params(start, limit)).await
    }

    async fn latest_sessions(&self, limit: usize) -> Result<Vec<Session>, StoreError> {
        self.select(SESSIONS_TABLE, &latest_params(limit)).await
    }

    async fn agenda(&self, session_id: i64) -> Result<Vec<AgendaItem>, StoreError> {
        self.select(AGENDA_TABLE, &agenda_params(session_id)).await
    }
}

/// Build `<base>/rest/v1/<table>?<params>`.
///
/// Repeated keys are kept, which is how `PostgREST` combines range filters.
fn build_query_url(base: &Url, table: &str, params: &[(&str, String)]) -> Result<Url, StoreError> {
    let root = base.as_str().trim_end_matches('/');
    let mut url = Url::parse(&format!("{root}/rest/v1/{table}"))?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

fn newest_first(limit: usize) -> [(&'static str, String); 2] {
    [
        ("order", "opening_date.desc".to_string()),
        ("limit", limit.to_string()),
    ]
}

fn between_params(start: DateTime<Tz>, end: DateTime<Tz>, limit: usize) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("opening_date", format!("gte.{}", start.to_rfc3339())),
        ("opening_date", format!("lt.{}", end.to_rfc3339())),
    ];
    params.extend(newest_first(limit));
    params
}

fn since_params(start: DateTime<Tz>, limit: usize) -> Vec<(&'static str, String)> {
    let mut params = vec![("opening_date", format!("gte.{}", start.to_rfc3339()))];
    params.extend(newest_first(limit));
    params
}

fn latest_params(limit: usize) -> Vec<(&'static str, String)> {
    newest_first(limit).into()
}

fn agenda_params(session_id: i64) -> Vec<(&'static str, String)> {
    vec![
        ("session_id", format!("eq.{session_id}")),
        ("order", "order_number.asc".to_string()),
        ("limit", AGENDA_LIMIT.to_string()),
    ]
}
