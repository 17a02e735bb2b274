pub mod client;
pub mod decoder;
pub mod emitter;
pub mod engine;
pub mod escape;
pub mod normalizer;
pub mod pipeline;
pub mod template;

pub use crate::domain::model::{RegistryModel, ServiceRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
