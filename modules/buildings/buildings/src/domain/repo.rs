use async_trait::async_trait;
use buildings_sdk::models::{Building, BuildingFields};

use super::error::DomainError;

/// Persistence of building records.
///
/// Every operation acquires and releases its own storage connection.
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// All records ordered by name.
    async fn list_all(&self) -> Result<Vec<Building>, DomainError>;

    /// Insert a record; the store assigns the id.
    ///
    /// Fails with `InvalidNumber` or `DuplicateKey` without writing anything.
    async fn create(&self, fields: &BuildingFields) -> Result<Building, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Building>, DomainError>;

    /// Replace all writable fields. `Ok(None)` when `id` does not exist.
    async fn update(
        &self,
        id: i64,
        fields: &BuildingFields,
    ) -> Result<Option<Building>, DomainError>;

    /// Hard delete. `Ok(false)` when `id` does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
