// Entrypoint for the CLI application.
// - Keeps `main` small: parse the flags, create an API client, perform
//   the single creation request and report the outcome.
// - Returns `anyhow::Result`: a transport failure propagates out of
//   `main` and exits non-zero; remote validation errors are reported
//   and still exit zero.

use clap::Parser;
use sammy_cli::{api::{ApiClient, CreationRequest}, cli::Cli, outcome::Outcome};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger();

    // Create API client pointed at the challenge endpoint, or at the
    // URL in `SAMMY_API_URL` if set. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;
    let request = CreationRequest::new(cli.name, cli.category);

    log::debug!("creating {} of type {}", request.name, request.category);
    let body = api.create(&request)?;
    Outcome::classify(&body).report();
    Ok(())
}

/// Single-line leveled logging on stdout; `RUST_LOG` overrides the
/// default `info` filter.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
