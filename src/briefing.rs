//! The three spoken-summary pipelines behind the API.
//!
//! Each run is fetch, format, report. Nothing here fails: an unreachable
//! store yields a "no sessions" answer and a failing model yields the
//! template text.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use crate::report::{NO_RECENT_SESSIONS, NewsReporter, PromptKind};
use crate::sessions::{Session, SessionFetcher, format_sessions_for_llm};

/// Sessions read for "today".
pub const TODAY_LIMIT: usize = 10;
/// Sessions read when nothing happened today.
pub const FALLBACK_LIMIT: usize = 5;
/// Days looked back when nothing happened today.
pub const FALLBACK_DAYS: u32 = 1;
/// Sessions read for the recent-sessions summary.
pub const RECENT_LIMIT: usize = 5;
/// Days looked back for the recent-sessions summary.
pub const RECENT_DAYS: u32 = 3;
/// Spoken by the recent-sessions summary when nothing was found.
pub const NO_RECENT_SESSIONS_SHORT: &str = "Não encontrei sessões recentes.";

/// Envelope returned to the voice skill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpokenSummary {
    /// Text the assistant reads out.
    pub texto_alexa: String,
    /// Number of sessions behind the text.
    pub sessions_count: usize,
    /// Whether the model wrote the text.
    #[serde(rename = "gemini_used")]
    pub model_used: bool,
}

impl SpokenSummary {
    fn empty(text: &str) -> Self {
        Self {
            texto_alexa: text.to_string(),
            sessions_count: 0,
            model_used: false,
        }
    }
}

/// [`SpokenSummary`] for one calendar day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    /// Summary fields.
    #[serde(flatten)]
    pub summary: SpokenSummary,
    /// The day covered, `null` when nothing was found.
    pub date: Option<NaiveDate>,
}

/// Runs the pipelines over a fetcher and a reporter chosen at startup.
#[derive(Clone)]
pub struct Briefing {
    fetcher: SessionFetcher,
    reporter: Arc<dyn NewsReporter>,
}

impl Briefing {
    /// Assemble the pipelines.
    #[must_use]
    pub const fn new(fetcher: SessionFetcher, reporter: Arc<dyn NewsReporter>) -> Self {
        Self { fetcher, reporter }
    }

    /// Today's sessions, or those of the last day when there are none today.
    pub async fn daily_summary(&self, now: DateTime<Utc>) -> SpokenSummary {
        let mut sessions = self.fetcher.today(now, TODAY_LIMIT).await;
        if sessions.is_empty() {
            info!("no sessions today, looking back {FALLBACK_DAYS} day(s)");
            sessions = self
                .fetcher
                .recent(now, FALLBACK_DAYS, FALLBACK_LIMIT)
                .await;
        }

        if sessions.is_empty() {
            return SpokenSummary::empty(NO_RECENT_SESSIONS);
        }
        self.summarize(&sessions, PromptKind::DailySummary).await
    }

    /// Sessions from the last few days.
    pub async fn sessions_summary(&self, now: DateTime<Utc>) -> SpokenSummary {
        let sessions = self.fetcher.recent(now, RECENT_DAYS, RECENT_LIMIT).await;
        if sessions.is_empty() {
            return SpokenSummary::empty(NO_RECENT_SESSIONS_SHORT);
        }
        self.summarize(&sessions, PromptKind::SessionDetails).await
    }

    /// Sessions of the most recent day with any record, agenda included.
    pub async fn single_day_summary(&self) -> DaySummary {
        let day = self.fetcher.latest_day().await;
        if day.sessions.is_empty() {
            return DaySummary {
                summary: SpokenSummary::empty(NO_RECENT_SESSIONS),
                date: None,
            };
        }

        DaySummary {
            summary: self.summarize(&day.sessions, PromptKind::SingleDay).await,
            date: day.date,
        }
    }

    async fn summarize(&self, sessions: &[Session], kind: PromptKind) -> SpokenSummary {
        let text = format_sessions_for_llm(sessions, self.fetcher.timezone());
        let report = self.reporter.report(&text, kind).await;
        SpokenSummary {
            texto_alexa: report.text,
            sessions_count: sessions.len(),
            model_used: report.model_used,
        }
    }
}
