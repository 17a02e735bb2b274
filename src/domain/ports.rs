use crate::domain::model::RegistryModel;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Replaces the file at `path` with `data`. Either the whole new content
    /// lands or the previous file is left as it was.
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn output_path(&self) -> &Path;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RegistryModel>;
    fn transform(&self, model: RegistryModel) -> RegistryModel;
    async fn load(&self, model: RegistryModel) -> Result<PathBuf>;
}
