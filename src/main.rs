use clap::Parser;
use invite_report::cli::Cli;
use invite_report::config::RunConfig;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,reqwest=debug", // -vvv shows everything including dependencies
    };

    // Logs go to stderr; stdout is reserved for --dry-run report output.
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_writer(std::io::stderr)
        .init();

    debug!("invite-report started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RunConfig::from_cli(cli)?;
    invite_report::run::run(&config).await?;
    Ok(())
}
