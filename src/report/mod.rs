//! Spoken news reports from formatted session text.
//!
//! Two strategies behind [`NewsReporter`]:
//! - [`LlmReporter`]: chat-completions model, template fallback on failure
//! - [`TemplateReporter`]: deterministic templates only
//!
//! [`from_config`] picks one at startup.

pub mod fallback;
pub mod llm;
pub mod prompts;

pub use fallback::{NO_RECENT_SESSIONS, format_text_for_alexa};
pub use llm::{LlmClient, LlmError};
pub use prompts::PromptKind;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::LlmConfig;

/// Text to speak and how it was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Speech text.
    pub text: String,
    /// Whether the model wrote `text`.
    pub model_used: bool,
}

impl Report {
    fn from_template(sessions_text: &str, kind: PromptKind) -> Self {
        Self {
            text: format_text_for_alexa(sessions_text, kind),
            model_used: false,
        }
    }
}

/// Turns formatted session text into a spoken report. Never fails.
#[async_trait]
pub trait NewsReporter: Send + Sync {
    /// Produce the report for `kind`.
    async fn report(&self, sessions_text: &str, kind: PromptKind) -> Report;

    /// Whether a model is configured behind this reporter.
    fn model_configured(&self) -> bool;
}

/// Template-only reporter.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateReporter;

#[async_trait]
impl NewsReporter for TemplateReporter {
    async fn report(&self, sessions_text: &str, kind: PromptKind) -> Report {
        Report::from_template(sessions_text, kind)
    }

    fn model_configured(&self) -> bool {
        false
    }
}

/// Model-backed reporter that degrades to templates.
pub struct LlmReporter {
    client: LlmClient,
}

impl LlmReporter {
    /// Wrap a model client.
    #[must_use]
    pub const fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NewsReporter for LlmReporter {
    async fn report(&self, sessions_text: &str, kind: PromptKind) -> Report {
        let prompt = kind.render(sessions_text);

        match self.client.complete(&prompt).await {
            Ok(text) => {
                info!("{} generated the {kind} report", self.client.model());
                Report {
                    text,
                    model_used: true,
                }
            }
            Err(LlmError::EmptyResponse) => {
                warn!("model returned empty content, using template fallback");
                Report::from_template(sessions_text, kind)
            }
            Err(e) => {
                error!("error calling model API: {e}");
                Report::from_template(sessions_text, kind)
            }
        }
    }

    fn model_configured(&self) -> bool {
        true
    }
}

/// Select the reporter for this process.
///
/// A missing key, or a client that cannot be built, selects templates.
#[must_use]
pub fn from_config(config: &LlmConfig) -> Arc<dyn NewsReporter> {
    let Some(api_key) = config.api_key.as_deref() else {
        debug!("no model API key configured");
        return Arc::new(TemplateReporter);
    };

    match LlmClient::new(config, api_key) {
        Ok(client) => Arc::new(LlmReporter::new(client)),
        Err(e) => {
            error!("failed to initialize model client: {e}");
            Arc::new(TemplateReporter)
        }
    }
}
