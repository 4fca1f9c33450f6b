use crate::utils::error::{EtlError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn invalid_value(field: &str, value: &str, reason: impl Into<String>) -> EtlError {
    EtlError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 解析 URL，只接受 http / https
pub fn parse_http_url(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| invalid_value(field, raw, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid_value(
            field,
            raw,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid_value(
            field,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url() {
        assert!(parse_http_url("efetch.url", "https://eutils.ncbi.nlm.nih.gov").is_ok());
        assert!(parse_http_url("efetch.url", "http://127.0.0.1:8080/efetch.fcgi").is_ok());
        assert!(parse_http_url("efetch.url", "").is_err());
        assert!(parse_http_url("efetch.url", "invalid-url").is_err());

        let err = parse_http_url("efetch.url", "ftp://example.com").unwrap_err();
        assert!(matches!(
            err,
            EtlError::InvalidConfigValueError { ref field, .. } if field == "efetch.url"
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pmid", "12345").is_ok());
        assert!(validate_non_empty_string("pmid", "").is_err());
        assert!(validate_non_empty_string("pmid", "   ").is_err());
    }
}
