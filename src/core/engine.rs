use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Drives a pipeline through its stages, one after the other.
pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<PathBuf> {
        tracing::info!("Fetching services registry");
        let model = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} services with {} rules",
            model.len(),
            model.rule_count()
        );

        let model = self.pipeline.transform(model);
        tracing::debug!("Sorted services and rules");

        let output_path = self.pipeline.load(model).await?;
        tracing::info!("Generated source written to {}", output_path.display());

        Ok(output_path)
    }
}
