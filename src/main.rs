use clap::Parser;
use pmid_annotate::utils::{logger, validation::Validate};
use pmid_annotate::{AnnotationPipeline, CliConfig, EtlError};
use std::path::PathBuf;

async fn run(config: &CliConfig) -> Result<PathBuf, EtlError> {
    config.validate()?;
    let service = config.service_config()?;
    tracing::debug!("Service config: {:?}", service);

    let pipeline = AnnotationPipeline::from_config(&service, &config.output_dir)?;
    pipeline.run(&config.identifier()).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pmid-annotate");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(output_path) => {
            tracing::info!("✅ Annotation completed successfully!");
            println!("📁 Output saved to: {}", output_path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Annotation failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
