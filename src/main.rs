use clap::Parser;
use sill_catalog::cli::Cli;
use sill_catalog::commands;
use sill_catalog::config::SillConfig;
use sill_catalog::error::{ErrorFormatter, SillError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // stdout は JSON 出力に使うためログは stderr へ
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match SillConfig::load() {
        Ok(config) => config,
        Err(err) => exit_with(&ErrorFormatter::new(verbose), &err),
    };

    let formatter = if config.color {
        ErrorFormatter::new(verbose)
    } else {
        ErrorFormatter::with_color(verbose, false)
    };

    if let Err(err) = commands::dispatch(cli, config).await {
        exit_with(&formatter, &err);
    }
}

fn exit_with(formatter: &ErrorFormatter, err: &SillError) -> ! {
    eprintln!("{}", formatter.format(err));
    std::process::exit(1);
}
