use blocked_services_gen::utils::{logger, validation::Validate};
use blocked_services_gen::{CliConfig, GenError, GeneratorEngine, LocalStorage, RegistryPipeline};
use clap::Parser;

fn fail(e: GenError) -> ! {
    tracing::error!(
        "Generation failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting blocked-services-gen");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let pipeline = match RegistryPipeline::new(LocalStorage::new(), config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    match GeneratorEngine::new(pipeline).run().await {
        Ok(output_path) => {
            tracing::info!("Done: {}", output_path.display());
        }
        Err(e) => fail(e),
    }
}
