use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{invalid_value, parse_http_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";
pub const DEFAULT_GILDA_BASE_URL: &str = "https://grounding.indra.bio";
pub const DEFAULT_GILDA_ENDPOINT: &str = "/annotate";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub efetch: EfetchConfig,
    pub annotator: AnnotatorConfig,
    pub http: HttpClientConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfetchConfig {
    pub url: String,
    pub database: String,
    pub retmode: String,
}

impl Default for EfetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_EFETCH_URL.to_string(),
            database: "pubmed".to_string(),
            retmode: "xml".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    pub base_url: String,
    pub endpoint: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GILDA_BASE_URL.to_string(),
            endpoint: DEFAULT_GILDA_ENDPOINT.to_string(),
        }
    }
}

impl AnnotatorConfig {
    /// 組合 base_url 與 endpoint
    pub fn annotate_url(&self) -> Result<Url> {
        let base = parse_http_url("annotator.base_url", &self.base_url)?;

        base.join(&self.endpoint).map_err(|e| {
            invalid_value(
                "annotator.endpoint",
                &self.endpoint,
                format!("Cannot join endpoint to base URL: {}", e),
            )
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolPreference {
    /// 透過 ALPN 協商 HTTP/2，不支援時退回 HTTP/1.1
    #[default]
    Http2IfAvailable,
    Http1Only,
}

/// 每個網路元件各自持有的 HTTP 設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    pub timeout_seconds: u64,
    pub raise_on_error_status: bool,
    pub protocol: ProtocolPreference,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            raise_on_error_status: true,
            protocol: ProtocolPreference::Http2IfAvailable,
        }
    }
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| EtlError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("Cannot read {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未提供的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GILDA_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        parse_http_url("efetch.url", &self.efetch.url)?;
        self.annotator.annotate_url()?;

        if self.http.timeout_seconds == 0 {
            return Err(invalid_value(
                "http.timeout_seconds",
                "0",
                "Timeout must be at least one second",
            ));
        }
        Ok(())
    }
}
