use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("{service} request failed{}: {message}", status_suffix(.status))]
    RemoteServiceError {
        service: String,
        status: Option<u16>,
        message: String,
    },

    #[error("XML parse error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("Document is not valid UTF-8: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("Failed to write {}: {source}", .path.display())]
    IoWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Storage,
    Configuration,
}

impl EtlError {
    /// 由 reqwest 錯誤建立遠端服務錯誤，保留狀態碼 (若有)
    pub fn remote(service: &str, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };

        EtlError::RemoteServiceError {
            service: service.to_string(),
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::RemoteServiceError { .. } => ErrorCategory::Network,
            EtlError::XmlError(_) | EtlError::EncodingError(_) => ErrorCategory::Parse,
            EtlError::IoWriteError { .. } => ErrorCategory::Storage,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 程序結束碼，一律非零
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Parse => 4,
            ErrorCategory::Storage => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::RemoteServiceError {
                service,
                status: Some(status),
                ..
            } => format!("The {} service responded with HTTP {}", service, status),
            EtlError::RemoteServiceError { service, message, .. } => {
                format!("Could not reach the {} service ({})", service, message)
            }
            EtlError::XmlError(_) | EtlError::EncodingError(_) => {
                format!("The article metadata could not be parsed: {}", self)
            }
            EtlError::IoWriteError { path, .. } => {
                format!("Could not write annotation output to {}", path.display())
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and that the identifier exists, then try again"
            }
            ErrorCategory::Parse => "Verify the identifier refers to a PubMed article",
            ErrorCategory::Storage => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Run with --help to review the available options",
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|s| format!(" with status {}", s))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, EtlError>;
