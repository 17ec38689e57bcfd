use anyhow::Context;
use clap::Parser;
use icon_gen::domain::ports::ConfigProvider;
use icon_gen::utils::{logger, validation::Validate};
use icon_gen::{CliConfig, IconError, IconGenerator, IconSpec, LocalStorage};

fn report(stage: &str, e: &IconError) {
    tracing::error!("{} failed: {}", stage, e);
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose());

    tracing::info!("Starting icon-gen");
    tracing::debug!("CLI config: {:?}", config);

    config
        .validate()
        .inspect_err(|e| report("Configuration validation", e))
        .context("invalid configuration")?;

    let storage = LocalStorage::new(config.output_dir());
    let generator = IconGenerator::new(storage);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let created = generator
        .run(&IconSpec::defaults(), &mut out)
        .inspect_err(|e| report("Icon generation", e))
        .context("icon generation failed")?;

    tracing::info!(
        "Generated {} icons in {}",
        created.len(),
        generator.storage().base_path().display()
    );
    Ok(())
}
