pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{efetch::EfetchClient, gilda::GildaClient, storage::LocalStorage};
pub use config::{service_config::ServiceConfig, CliConfig};
pub use core::{extract::extract_abstract, pipeline::AnnotationPipeline};
pub use domain::model::Identifier;
pub use utils::error::{EtlError, Result};
