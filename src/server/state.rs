//! Application state shared across all request handlers.

use std::sync::Arc;

use serde::Serialize;

use crate::briefing::Briefing;
use crate::config::RadarConfig;
use crate::report;
use crate::sessions::{SessionFetcher, StoreError, SupabaseStore};

/// What `/debug/config` reports. Presence flags only, never secret values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigReport {
    /// `SUPABASE_URL` is set.
    pub supabase_url_configured: bool,
    /// `SUPABASE_KEY` is set.
    pub supabase_key_configured: bool,
    /// A model API key is set.
    pub gemini_key_configured: bool,
    /// Model name in use.
    pub gemini_model: String,
    /// Deploy environment label.
    pub environment: String,
}

impl ConfigReport {
    /// Summarize `config` without exposing credentials.
    #[must_use]
    pub fn from_config(config: &RadarConfig) -> Self {
        Self {
            supabase_url_configured: config.store.base_url.is_some(),
            supabase_key_configured: config.store.api_key.is_some(),
            gemini_key_configured: config.llm.api_key.is_some(),
            gemini_model: config.llm.model.clone(),
            environment: config.environment.clone(),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Summary pipelines.
    pub briefing: Briefing,
    /// Configuration presence report.
    pub config_report: ConfigReport,
}

impl AppState {
    /// Build the store client, pick the reporter and assemble the pipelines.
    ///
    /// # Errors
    /// Returns an error if the store HTTP client cannot be created.
    pub fn new(config: &RadarConfig) -> Result<Arc<Self>, StoreError> {
        let store = SupabaseStore::new(&config.store)?;
        if !config.store.is_configured() {
            tracing::warn!("Supabase credentials not configured; every summary will be empty");
        }

        let fetcher = SessionFetcher::new(Arc::new(store), config.timezone);
        let reporter = report::from_config(&config.llm);
        if reporter.model_configured() {
            tracing::info!("spoken reports written by {}", config.llm.model);
        } else {
            tracing::info!("spoken reports written from templates");
        }

        Ok(Self::with_briefing(Briefing::new(fetcher, reporter), config))
    }

    /// Wrap already assembled pipelines.
    #[must_use]
    pub fn with_briefing(briefing: Briefing, config: &RadarConfig) -> Arc<Self> {
        Arc::new(Self {
            briefing,
            config_report: ConfigReport::from_config(config),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_credentials() {
        let mut config = RadarConfig::default();
        config.llm.api_key = Some("model-key".to_string());

        let state = AppState::new(&config).unwrap();

        assert_eq!(
            state.config_report,
            ConfigReport {
                supabase_url_configured: false,
                supabase_key_configured: false,
                gemini_key_configured: true,
                gemini_model: "gemini-2.0-flash-exp".to_string(),
                environment: "local".to_string(),
            }
        );
    }
}
