use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rehab error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    bootstrap::enter_project(flags.project.as_deref())?;

    // Pure commands need neither config nor a database.
    match &cli.command {
        cli::Commands::Slugify(args) => return commands::slugify::handle(args, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        cli::Commands::Admin { action } => return commands::admin::handle(action, &flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;

    if matches!(cli.command, cli::Commands::Robots) {
        return commands::robots::handle(&config, &flags);
    }

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize rehab application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REHAB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
