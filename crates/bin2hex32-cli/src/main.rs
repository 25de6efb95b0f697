use anyhow::Result;
use clap::Parser;

mod cli;
mod convert;

fn main() -> Result<()> {
    init_tracing()?;
    let cli = cli::Cli::parse();

    convert::convert_file(&cli.input, &cli.output)?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Can't initialize tracing subscriber: {e}"))?;
    Ok(())
}
