//! Sales Chat CLI binary entry point.

use clap::Parser;
use sales_chat::cli::{chat, Cli, Commands};
use sales_chat::config::AgentConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(AgentConfig::from_env());

    let result = match cli.command {
        Commands::Chat => chat::handle_chat(config).await,
        Commands::Send(args) => chat::handle_send(config, args.message).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
