use crate::domain::model::{AnnotationResult, Identifier, RawDocument};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// 寫入 (覆寫) 檔案，回傳實際路徑
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, identifier: &Identifier) -> Result<RawDocument>;
}

#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<AnnotationResult>;
}
