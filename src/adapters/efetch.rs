use crate::adapters::http::HttpTransport;
use crate::config::service_config::{EfetchConfig, HttpClientConfig};
use crate::domain::model::{Identifier, RawDocument};
use crate::domain::ports::MetadataFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;

/// NCBI E-utilities eFetch 客戶端
/// https://www.ncbi.nlm.nih.gov/books/NBK25499/#chapter4.EFetch
pub struct EfetchClient {
    transport: HttpTransport,
    config: EfetchConfig,
}

impl EfetchClient {
    pub fn new(config: EfetchConfig, http: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new("eFetch", http)?,
            config,
        })
    }
}

#[async_trait]
impl MetadataFetcher for EfetchClient {
    async fn fetch(&self, identifier: &Identifier) -> Result<RawDocument> {
        tracing::debug!("Fetching metadata for {} from {}", identifier, self.config.url);

        let request = self.transport.client().get(&self.config.url).query(&[
            ("db", self.config.database.as_str()),
            ("id", identifier.as_str()),
            ("retmode", self.config.retmode.as_str()),
        ]);

        let body = self.transport.send(request).await?;
        tracing::debug!("Received {} bytes of metadata", body.len());

        Ok(RawDocument::new(body))
    }
}
