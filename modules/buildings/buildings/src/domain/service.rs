use std::sync::Arc;

use buildings_sdk::models::{Building, BuildingForm};
use tracing::{debug, info};

use super::error::DomainError;
use super::repo::BuildingRepository;
use super::validator;

pub struct Service {
    repo: Arc<dyn BuildingRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn BuildingRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Returns `DomainError::Database` if the store cannot be read.
    pub async fn list_buildings(&self) -> Result<Vec<Building>, DomainError> {
        let buildings = self.repo.list_all().await?;
        debug!(count = buildings.len(), "Listed buildings");
        Ok(buildings)
    }

    /// # Errors
    /// Returns `DomainError::NotFound` if no record has this id.
    pub async fn get_building(&self, id: i64) -> Result<Building, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::not_found(id))
    }

    /// # Errors
    /// Returns `MissingField`, `InvalidNumber` or `DuplicateKey`; nothing is
    /// written in any of those cases.
    pub async fn create_building(&self, form: &BuildingForm) -> Result<Building, DomainError> {
        let fields = validator::validate(form)?;
        let building = self.repo.create(&fields).await?;
        info!(id = building.id, code = %building.building_code, "Building created");
        Ok(building)
    }

    /// A missing record is reported before anything about the form.
    ///
    /// # Errors
    /// `NotFound` if no record has this id, otherwise the same as
    /// [`Service::create_building`].
    pub async fn update_building(
        &self,
        id: i64,
        form: &BuildingForm,
    ) -> Result<Building, DomainError> {
        self.get_building(id).await?;
        let fields = validator::validate(form)?;
        let building = self
            .repo
            .update(id, &fields)
            .await?
            .ok_or(DomainError::not_found(id))?;
        info!(id, code = %building.building_code, "Building updated");
        Ok(building)
    }

    /// # Errors
    /// Returns `DomainError::NotFound` if no record has this id.
    pub async fn delete_building(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(DomainError::not_found(id));
        }
        info!(id, "Building deleted");
        Ok(())
    }
}
