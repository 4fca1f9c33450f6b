pub mod service_config;

use crate::domain::model::Identifier;
use crate::utils::error::Result;
use crate::utils::validation::{invalid_value, validate_non_empty_string, Validate};
use clap::Parser;
use self::service_config::{ProtocolPreference, ServiceConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pmid-annotate")]
#[command(
    about = "Fetch a PubMed abstract, run it through Gilda named entity recognition and save the JSON result"
)]
pub struct CliConfig {
    #[arg(help = "PubMed article ID")]
    pub pmid: String,

    #[arg(long, default_value = ".", help = "Directory receiving <PMID>.json")]
    pub output_dir: String,

    #[arg(long, help = "TOML file with service settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the eFetch endpoint URL")]
    pub efetch_url: Option<String>,

    #[arg(long, help = "Override the annotation service base URL")]
    pub annotator_base_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Disable HTTP/2 negotiation")]
    pub http1_only: bool,

    #[arg(long, help = "Keep response bodies of 4xx/5xx replies instead of failing")]
    pub no_raise_on_error_status: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn identifier(&self) -> Identifier {
        Identifier::new(self.pmid.clone())
    }

    /// 預設值 < TOML 檔案 < 命令列參數
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(url) = &self.efetch_url {
            config.efetch.url = url.clone();
        }
        if let Some(url) = &self.annotator_base_url {
            config.annotator.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.http.timeout_seconds = timeout;
        }
        if self.http1_only {
            config.http.protocol = ProtocolPreference::Http1Only;
        }
        if self.no_raise_on_error_status {
            config.http.raise_on_error_status = false;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pmid", &self.pmid)?;
        if self.output_dir.is_empty() || self.output_dir.contains('\0') {
            return Err(invalid_value(
                "output_dir",
                &self.output_dir,
                "Output directory must be a non-empty path without NUL bytes",
            ));
        }
        Ok(())
    }
}
