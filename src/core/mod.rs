pub mod extract;
pub mod pipeline;

pub use crate::domain::model::{AnnotationResult, Identifier, RawDocument};
pub use crate::domain::ports::{Annotator, MetadataFetcher, Storage};
pub use crate::utils::error::Result;
