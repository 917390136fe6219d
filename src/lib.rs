//! Alexa skill backend for the Câmara Municipal de Campina Grande.
//!
//! Reads plenary sessions from Supabase, writes them out as plain text,
//! turns that into a short spoken report and serves it over HTTP.

#![deny(warnings)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(dead_code)]
#![deny(non_camel_case_types)]
#![deny(unused_imports)]
#![deny(unused_variables)]
#![deny(unused_must_use)]
#![deny(non_snake_case)]
#![deny(non_upper_case_globals)]
#![deny(nonstandard_style)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::unwrap_in_result)]
#![deny(clippy::module_inception)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::shadow_unrelated)]
#![deny(clippy::too_many_arguments)]
#![deny(clippy::cognitive_complexity)]
#![deny(overflowing_literals)]

/// Spoken-summary pipelines.
pub mod briefing;
/// Environment-driven settings.
pub mod config;
/// Spoken reports, model-backed or templated.
pub mod report;
/// HTTP server and API routes.
#[allow(clippy::unused_async)]
pub mod server;
/// Session retrieval and text rendering.
pub mod sessions;
/// Entry helpers to start the server.
pub mod start_camara_radar;
