//! Date-window selection over a [`SessionSource`].
//!
//! Every method here is infallible: store failures are logged and turn into
//! empty results, which the pipelines report as "no sessions".

use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{debug, error, warn};

use crate::sessions::error::StoreError;
use crate::sessions::store::SessionSource;
use crate::sessions::types::Session;

/// Maximum sessions loaded for a single calendar day.
pub const DAY_LIMIT: usize = 20;

/// Sessions of the most recent day with any record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatestDay {
    /// Local calendar date of those sessions, when one was found.
    pub date: Option<NaiveDate>,
    /// Sessions of that day, newest first, agenda attached.
    pub sessions: Vec<Session>,
}

/// Fetches sessions by calendar window in a fixed time zone.
#[derive(Clone)]
pub struct SessionFetcher {
    source: Arc<dyn SessionSource>,
    tz: Tz,
}

impl SessionFetcher {
    /// Wrap a source; day boundaries are computed in `tz`.
    #[must_use]
    pub const fn new(source: Arc<dyn SessionSource>, tz: Tz) -> Self {
        Self { source, tz }
    }

    /// Time zone used for day boundaries.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Sessions opened during the local calendar day containing `now`.
    pub async fn today(&self, now: DateTime<Utc>, limit: usize) -> Vec<Session> {
        let date = now.with_timezone(&self.tz).date_naive();
        let Some((start, end)) = self.day_bounds(date) else {
            return Vec::new();
        };

        match self.source.sessions_between(start, end, limit).await {
            Ok(sessions) => {
                debug!("{} session(s) today ({date})", sessions.len());
                sessions
            }
            Err(e) => {
                log_store_failure("today's sessions", &e);
                Vec::new()
            }
        }
    }

    /// Sessions opened since the start of the local day `days` days before `now`.
    pub async fn recent(&self, now: DateTime<Utc>, days: u32, limit: usize) -> Vec<Session> {
        let today = now.with_timezone(&self.tz).date_naive();
        let Some(first_day) = today.checked_sub_days(Days::new(u64::from(days))) else {
            return Vec::new();
        };
        let start = start_of_day(self.tz, first_day);

        match self.source.sessions_since(start, limit).await {
            Ok(sessions) => {
                debug!("{} session(s) since {first_day}", sessions.len());
                sessions
            }
            Err(e) => {
                log_store_failure("recent sessions", &e);
                Vec::new()
            }
        }
    }

    /// All sessions of the most recent day that has any, each with its agenda.
    pub async fn latest_day(&self) -> LatestDay {
        let latest = match self.source.latest_sessions(1).await {
            Ok(latest) => latest,
            Err(e) => {
                log_store_failure("latest session", &e);
                return LatestDay::default();
            }
        };

        let Some(date) = latest.first().and_then(|s| s.opening_local_date(self.tz)) else {
            debug!("no dated session found");
            return LatestDay::default();
        };
        let Some((start, end)) = self.day_bounds(date) else {
            return LatestDay::default();
        };

        let mut sessions = match self.source.sessions_between(start, end, DAY_LIMIT).await {
            Ok(sessions) => sessions,
            Err(e) => {
                log_store_failure("last day sessions", &e);
                return LatestDay::default();
            }
        };

        for session in &mut sessions {
            let Some(session_id) = session.session_id else {
                continue;
            };
            match self.source.agenda(session_id).await {
                Ok(items) => session.agenda = items,
                Err(e) => warn!("agenda for session {session_id} unavailable: {e}"),
            }
        }

        LatestDay {
            date: Some(date),
            sessions,
        }
    }

    fn day_bounds(&self, date: NaiveDate) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        let next = date.succ_opt()?;
        Some((start_of_day(self.tz, date), start_of_day(self.tz, next)))
    }
}

/// First instant of `date` in `tz`.
fn start_of_day(tz: Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

fn log_store_failure(what: &str, err: &StoreError) {
    error!("error fetching {what}: {err}");
}
