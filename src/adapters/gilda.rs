use crate::adapters::http::HttpTransport;
use crate::config::service_config::{AnnotatorConfig, HttpClientConfig};
use crate::domain::model::AnnotationResult;
use crate::domain::ports::Annotator;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

/// Gilda 命名實體辨識服務客戶端
/// https://grounding.indra.bio/apidocs
pub struct GildaClient {
    transport: HttpTransport,
    annotate_url: Url,
}

impl GildaClient {
    pub fn new(config: &AnnotatorConfig, http: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new("Gilda", http)?,
            annotate_url: config.annotate_url()?,
        })
    }
}

#[async_trait]
impl Annotator for GildaClient {
    async fn annotate(&self, text: &str) -> Result<AnnotationResult> {
        tracing::debug!(
            "Annotating {} characters via {}",
            text.chars().count(),
            self.annotate_url
        );

        let request = self
            .transport
            .client()
            .post(self.annotate_url.clone())
            .json(&AnnotateRequest { text });

        let body = self.transport.send(request).await?;
        tracing::debug!("Received {} bytes of annotations", body.len());

        Ok(AnnotationResult::new(body))
    }
}
