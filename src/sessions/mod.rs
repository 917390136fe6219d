//! Council session retrieval and text rendering.
//!
//! - Remote store access (Supabase / `PostgREST`)
//! - Calendar-window selection with graceful degradation
//! - Plain-text formatting for the report generator

pub mod error;
pub mod fetcher;
pub mod format;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use error::StoreError;
pub use fetcher::{LatestDay, SessionFetcher};
pub use format::format_sessions_for_llm;
pub use store::{SessionSource, SupabaseStore};
pub use types::{AgendaItem, Session};
