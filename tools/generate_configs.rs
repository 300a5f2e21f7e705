//! Generate Configs — prints randomized plane cards for the `Planes/` config directory.
//!
//! Usage: generate_configs <count> <start_index> [--seed <n>] [--ranges <file.ron>] [--format text|ron]
use clap::Parser;
use plane_config_gen::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --log-level; logs go to stderr so
    // stdout carries only plane configs.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    cli.run(stdout.lock())?;
    Ok(())
}
