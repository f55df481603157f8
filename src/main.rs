use anyhow::Result;
use clap::Parser; // for cli
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scanit::client::ListClient;
use scanit::config::{Args, Command};
use scanit::session::{run_interactive, run_once, SessionSettings};
use scanit::state::ViewState;
use scanit::views::{render, LoadingMessages};

// Logs go to stderr, screens to stdout
fn init_logging(verbose: bool) {
    let default = if verbose { "scanit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // parse cli arguments
    let args = Args::parse();
    init_logging(args.verbose);

    let client = ListClient::new(&args.base_url, args.revision, args.timeout())?;
    info!(endpoint = client.endpoint(), revision = ?args.revision, "backend configured");

    match args.command.clone().unwrap_or(Command::Run) {
        Command::Run => {
            let settings = SessionSettings {
                splash: args.splash_delay(),
                reveal_delay: args.reveal_delay(),
            };
            let input = BufReader::new(tokio::io::stdin());
            run_interactive(input, std::io::stdout(), Arc::new(client), settings).await?;
        }
        Command::Generate { recipe, people, budget, tags } => {
            let app = run_once(Arc::new(client), recipe, people, budget, &tags, args.reveal_delay()).await?;
            print!("{}", render(&app, &LoadingMessages::default()));
            if app.view() == ViewState::Error {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
