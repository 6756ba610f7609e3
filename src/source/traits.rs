use crate::model::SourceError;

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<String, SourceError>;
}
