use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use std::path::Path;

pub const DEFAULT_REGISTRY_URL: &str =
    "https://adguardteam.github.io/HostlistsRegistry/assets/services.json";

/// Where the generated source lands, relative to the directory the generator
/// is run from.
pub const OUTPUT_PATH: &str = "./src/filtering/service_list.rs";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "blocked-services-gen")]
#[command(about = "Generates the blocked services list from the services registry")]
pub struct CliConfig {
    #[arg(long, env = "URL", default_value = DEFAULT_REGISTRY_URL)]
    pub url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn output_path(&self) -> &Path {
        Path::new(OUTPUT_PATH)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        Ok(())
    }
}
