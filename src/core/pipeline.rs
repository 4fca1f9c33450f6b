use crate::adapters::efetch::EfetchClient;
use crate::adapters::gilda::GildaClient;
use crate::adapters::storage::LocalStorage;
use crate::config::service_config::ServiceConfig;
use crate::core::extract::extract_abstract;
use crate::domain::model::Identifier;
use crate::domain::ports::{Annotator, MetadataFetcher, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// fetch → extract → annotate → persist
pub struct AnnotationPipeline<F: MetadataFetcher, A: Annotator, S: Storage> {
    fetcher: F,
    annotator: A,
    storage: S,
}

impl<F: MetadataFetcher, A: Annotator, S: Storage> AnnotationPipeline<F, A, S> {
    pub fn new(fetcher: F, annotator: A, storage: S) -> Self {
        Self {
            fetcher,
            annotator,
            storage,
        }
    }

    /// 依序執行各階段；任何錯誤直接往上傳，只有全部成功才寫檔
    pub async fn run(&self, identifier: &Identifier) -> Result<PathBuf> {
        tracing::info!("Annotating article {}", identifier);

        tracing::debug!("Fetching metadata...");
        let document = self.fetcher.fetch(identifier).await?;

        tracing::debug!("Extracting abstract from {} bytes...", document.len());
        let abstract_text = extract_abstract(&document)?;
        if abstract_text.is_empty() {
            tracing::warn!("No abstract text found for {}", identifier);
        }

        tracing::debug!("Running named entity recognition...");
        let annotations = self.annotator.annotate(&abstract_text).await?;

        let output_path = self
            .storage
            .write_file(&identifier.output_file_name(), annotations.as_bytes())
            .await?;

        tracing::info!(
            "Wrote {} bytes of annotations to {}",
            annotations.len(),
            output_path.display()
        );
        Ok(output_path)
    }
}

impl AnnotationPipeline<EfetchClient, GildaClient, LocalStorage> {
    /// 以 eFetch、Gilda 與本機檔案組裝管道
    pub fn from_config(config: &ServiceConfig, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let fetcher = EfetchClient::new(config.efetch.clone(), &config.http)?;
        let annotator = GildaClient::new(&config.annotator, &config.http)?;
        Ok(Self::new(fetcher, annotator, LocalStorage::new(output_dir)))
    }
}
