use async_trait::async_trait;
use buildings_sdk::models::{Building, BuildingFields};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, TransactionTrait};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::repo::BuildingRepository;

use super::db::Gateway;
use super::entity::{self, Entity as BuildingEntity};
use super::mapper;

pub struct SeaOrmBuildingRepository {
    db: Gateway,
}

impl SeaOrmBuildingRepository {
    #[must_use]
    pub fn new(db: Gateway) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BuildingRepository for SeaOrmBuildingRepository {
    async fn list_all(&self) -> Result<Vec<Building>, DomainError> {
        self.db
            .with_connection(|conn| async move {
                let rows = BuildingEntity::find()
                    .order_by_asc(entity::Column::Name)
                    .order_by_asc(entity::Column::Id)
                    .all(&conn)
                    .await?;
                Ok::<_, DomainError>(rows.into_iter().map(Into::into).collect())
            })
            .await
    }

    async fn create(&self, fields: &BuildingFields) -> Result<Building, DomainError> {
        let active_model = mapper::new_active_model(fields)?;
        let code = fields.building_code.clone();

        self.db
            .with_connection(|conn| async move {
                let model = active_model
                    .insert(&conn)
                    .await
                    .map_err(|e| mapper::write_error(e, &code))?;
                debug!(id = model.id, "Inserted building row");
                Ok::<_, DomainError>(model.into())
            })
            .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Building>, DomainError> {
        self.db
            .with_connection(|conn| async move {
                let model = BuildingEntity::find_by_id(id).one(&conn).await?;
                Ok::<_, DomainError>(model.map(Into::into))
            })
            .await
    }

    async fn update(
        &self,
        id: i64,
        fields: &BuildingFields,
    ) -> Result<Option<Building>, DomainError> {
        let fields = fields.clone();

        self.db
            .with_connection(|conn| async move {
                // Dropping `txn` without commit rolls back.
                let txn = conn.begin().await?;
                let Some(existing) = BuildingEntity::find_by_id(id).one(&txn).await? else {
                    debug!(id, "Update target does not exist");
                    return Ok(None);
                };

                let mut active_model: entity::ActiveModel = existing.into();
                mapper::apply_fields(&mut active_model, &fields)?;
                let model = active_model
                    .update(&txn)
                    .await
                    .map_err(|e| mapper::write_error(e, &fields.building_code))?;
                txn.commit().await?;

                debug!(id, "Updated building row");
                Ok::<_, DomainError>(Some(model.into()))
            })
            .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        self.db
            .with_connection(|conn| async move {
                let result = BuildingEntity::delete_by_id(id).exec(&conn).await?;
                debug!(id, rows = result.rows_affected, "Deleted building row");
                Ok::<_, DomainError>(result.rows_affected > 0)
            })
            .await
    }
}
