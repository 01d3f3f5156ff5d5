use crate::api::rest::routes;
use crate::api::rest::views::{HtmlViews, ViewRenderer};
use crate::config::DatabaseConfig;
use crate::domain::service::Service;
use crate::infra::storage::db::Gateway;
use crate::infra::storage::sea_orm_repo::SeaOrmBuildingRepository;
use anyhow::Context as _;
use axum::Router;
use std::sync::Arc;
use tracing::info;

/// Wires the storage gateway, domain service and HTML views together.
pub struct BuildingsModule {
    service: Arc<Service>,
    views: Arc<dyn ViewRenderer>,
}

impl BuildingsModule {
    /// Prepare the database file and schema, then build the service.
    ///
    /// # Errors
    /// Fails if the database directory cannot be created or the schema
    /// cannot be initialized.
    pub async fn init(config: &DatabaseConfig) -> anyhow::Result<Self> {
        info!("Initializing Buildings module");

        let gateway = Gateway::new(config).with_context(|| {
            format!("failed to prepare database path {}", config.path.display())
        })?;

        info!(dsn = gateway.dsn(), "Running Buildings database migrations");
        gateway
            .initialize_schema()
            .await
            .context("failed to initialize database schema")?;

        let repo = SeaOrmBuildingRepository::new(gateway);
        let service = Arc::new(Service::new(Arc::new(repo)));

        info!("Buildings module initialized");
        Ok(Self {
            service,
            views: Arc::new(HtmlViews),
        })
    }

    /// Replace the built-in HTML renderer.
    #[must_use]
    pub fn with_views(mut self, views: Arc<dyn ViewRenderer>) -> Self {
        self.views = views;
        self
    }

    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering buildings routes");
        routes::register_routes(router, Arc::clone(&self.service), Arc::clone(&self.views))
    }
}
