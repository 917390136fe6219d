//! In-memory [`SessionSource`] shared by unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;

use crate::sessions::error::StoreError;
use crate::sessions::store::SessionSource;
use crate::sessions::types::{AgendaItem, Session};

/// Source that serves `rows` (newest first) and records the calls it gets.
#[derive(Default)]
pub struct FakeSource {
    pub rows: Vec<Session>,
    pub agenda: Vec<(i64, Vec<AgendaItem>)>,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_rows(rows: Vec<Session>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn window(&self, start: &DateTime<Tz>, end: Option<&DateTime<Tz>>, limit: usize) -> Vec<Session> {
        self.rows
            .iter()
            .filter(|session| {
                session
                    .opening_date
                    .as_deref()
                    .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                    .is_some_and(|at| at >= *start && end.is_none_or(|end| at < *end))
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SessionSource for FakeSource {
    async fn sessions_between(
        &self,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        limit: usize,
    ) -> Result<Vec<Session>, StoreError> {
        self.record(format!("between {} {}", start.to_rfc3339(), end.to_rfc3339()));
        self.check()?;
        Ok(self.window(&start, Some(&end), limit))
    }

    async fn sessions_since(
        &self,
        start: DateTime<Tz>,
        limit: usize,
    ) -> Result<Vec<Session>, StoreError> {
        self.record(format!("since {}", start.to_rfc3339()));
        self.check()?;
        Ok(self.window(&start, None, limit))
    }

    async fn latest_sessions(&self, limit: usize) -> Result<Vec<Session>, StoreError> {
        self.record(format!("latest {limit}"));
        self.check()?;
        Ok(self.rows.iter().take(limit).cloned().collect())
    }

    async fn agenda(&self, session_id: i64) -> Result<Vec<AgendaItem>, StoreError> {
        self.record(format!("agenda {session_id}"));
        self.agenda
            .iter()
            .find(|(id, _)| *id == session_id)
            .map(|(_, items)| items.clone())
            .ok_or(StoreError::NotConfigured)
    }
}

pub fn session(id: i64, opening: &str) -> Session {
    Session {
        session_id: Some(id),
        kind: Some("ORDINÁRIA".to_string()),
        title: Some(format!("{id}ª Sessão Ordinária")),
        opening_date: Some(opening.to_string()),
        legislature: Some("19ª Legislatura".to_string()),
        legislative_session: Some("1ª Sessão Legislativa".to_string()),
        agenda: Vec::new(),
    }
}

pub fn item(text: &str) -> AgendaItem {
    AgendaItem {
        ementa: Some(text.to_string()),
        ..AgendaItem::default()
    }
}
