use std::io::{self, Write};
use std::process::ExitCode;

use envelope_dispatch::{Config, LogFormat, demo, observability};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(LogFormat::default());
            tracing::error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);

    match run(&config) {
        Ok(summary) => {
            tracing::info!(
                ok = summary.ok,
                domain_errors = summary.domain_errors,
                failures = summary.failures,
                "demo finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "demo aborted");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "no subscriber is available to report its own install failure"
)]
fn init_tracing(format: LogFormat) {
    if let Err(err) = observability::init_tracing(format) {
        eprintln!("tracing init skipped: {err}");
    }
}

fn run(config: &Config) -> Result<demo::DemoSummary, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Setting up a mock web server...")?;
    let server = demo::mock_server(&config.base_url)?;
    tracing::info!(base_url = %config.base_url, routes = server.route_count(), "mock server ready");

    let summary = demo::run(&server, &config.base_url, &mut out)?;
    out.flush()?;
    Ok(summary)
}
