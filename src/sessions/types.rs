//! Session records as projected from the remote store.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A council session row from the `sessions` table.
///
/// Every column is optional: the store is populated by a scraper and older
/// rows can miss fields. Unknown columns are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identifier assigned by the council portal.
    #[serde(default)]
    pub session_id: Option<i64>,
    /// Session kind, e.g. `ORDINÁRIA` or `SOLENE`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Opening timestamp as stored (RFC 3339 or naive ISO 8601).
    #[serde(default)]
    pub opening_date: Option<String>,
    /// Legislature label.
    #[serde(default)]
    pub legislature: Option<String>,
    /// Legislative session label.
    #[serde(default)]
    pub legislative_session: Option<String>,
    /// Order of the day, filled in by the fetcher when requested.
    #[serde(skip_deserializing, default)]
    pub agenda: Vec<AgendaItem>,
}

impl Session {
    /// Calendar date of the opening in `tz`.
    ///
    /// Offset-aware timestamps are converted to `tz`; naive ones are taken
    /// as already local.
    #[must_use]
    pub fn opening_local_date(&self, tz: Tz) -> Option<NaiveDate> {
        self.opening_date
            .as_deref()
            .and_then(|raw| parse_local_date(raw.trim(), tz))
    }
}

fn parse_local_date(raw: &str, tz: Tz) -> Option<NaiveDate> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&tz).date_naive());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.date());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.date());
    }
    raw.parse::<NaiveDate>().ok()
}

/// One row of `session_order_of_day`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Summary of the measure.
    #[serde(default)]
    pub ementa: Option<String>,
    /// Full text when no summary was captured.
    #[serde(default)]
    pub content: Option<String>,
    /// Vote outcome; `-` when none was recorded.
    #[serde(default)]
    pub result: Option<String>,
    /// Position within the agenda.
    #[serde(default)]
    pub order_number: Option<i64>,
}

impl AgendaItem {
    /// Text to read out: the trimmed `ementa`, else the trimmed `content`.
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        non_blank(self.ementa.as_deref()).or_else(|| non_blank(self.content.as_deref()))
    }

    /// Recorded outcome, ignoring blanks and the `-` placeholder.
    #[must_use]
    pub fn outcome(&self) -> Option<&str> {
        non_blank(self.result.as_deref()).filter(|r| *r != "-")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
