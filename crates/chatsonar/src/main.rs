use chatsonar::cli::Cli;
use chatsonar::config::RunConfig;
use chatsonar::runner::run;
use chatsonar_classifiers::build_classifier;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = RunConfig::from_cli(&cli)?;
    info!("Input: {}", config.dataset_path.display());
    info!("Format: {:?}", config.format);

    let classifier = build_classifier(&config.classifier)?;
    let summary = run(&config, classifier.as_ref()).await?;

    println!(
        "Classified {} lines, results written to {}",
        summary.count,
        summary.output_path.display()
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chatsonar=debug,chatsonar_classifiers=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatsonar=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
