use crate::model::SnapshotError;

/// Supplies the listing document for one run.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self) -> Result<String, SnapshotError>;
}
