use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use issuedesk::api::HttpTransport;
use issuedesk::console::StdConsole;
use issuedesk::display::TerminalChart;
use issuedesk::{Config, NavigationController};

const LOG_ENV: &str = "ISSUEDESK_LOG";

#[derive(Parser)]
#[command(name = "issuedesk")]
#[command(about = "Console client for the issue management service")]
#[command(version)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

async fn run() -> issuedesk::Result<()> {
    let config = Config::load()?;
    tracing::debug!(api = %config.api_base_url, "configuration loaded");

    let transport = HttpTransport::from_config(&config)?;
    let mut controller = NavigationController::new(transport, StdConsole::new(), TerminalChart)
        .with_clear_screen(config.clear_screen);
    controller.run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
