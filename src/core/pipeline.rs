use crate::core::client::{RegistryClient, DEFAULT_TIMEOUT};
use crate::core::decoder::decode;
use crate::core::emitter::CodeEmitter;
use crate::core::normalizer::normalize;
use crate::core::{ConfigProvider, Pipeline, RegistryModel, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch and decode, normalize, then emit.
pub struct RegistryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: RegistryClient,
    emitter: CodeEmitter,
}

impl<S: Storage, C: ConfigProvider> RegistryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Self::with_timeout(storage, config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(storage: S, config: C, timeout: Duration) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            client: RegistryClient::new(timeout)?,
            emitter: CodeEmitter::new()?,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RegistryPipeline<S, C> {
    async fn extract(&self) -> Result<RegistryModel> {
        let body = self.client.fetch(self.config.source_url()).await?;
        decode(&body)
    }

    fn transform(&self, mut model: RegistryModel) -> RegistryModel {
        normalize(&mut model);
        model
    }

    async fn load(&self, model: RegistryModel) -> Result<PathBuf> {
        let path = self.config.output_path().to_path_buf();
        self.emitter.emit(&model, &self.storage, &path).await?;
        Ok(path)
    }
}
