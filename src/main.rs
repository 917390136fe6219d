//! Binary entrypoint that launches the Câmara Radar API server.

use std::process::ExitCode;

use camara_radar::start_camara_radar;

/// Serve the Alexa skill endpoints until interrupted.
fn main() -> ExitCode {
    start_camara_radar::run()
}
