use anyhow::Result;
use signup::cli::{start, telemetry};
use std::process::ExitCode;

// Main function
#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Start the program
    let action = start()?;

    // Handle the action
    let code = action.execute().await;

    telemetry::shutdown_tracer();

    code
}
