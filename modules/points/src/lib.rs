//! Collection-point registry module.
//!
//! Exposes three REST operations over a relational store: atomic point
//! registration (`POST /points`), filtered deduplicated search
//! (`GET /points`) and the detail view (`GET /points/{id}`), plus the static
//! recyclable-item catalog (`GET /items`) and static serving of uploaded
//! images. Layered api/domain/infra; the domain owns the repository traits,
//! the infra implements them with sea-orm.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use config::PointsConfig;
use domain::service::{PointsService, ServiceConfig};
use infra::storage::{OrmItemsRepository, OrmPointsRepository};
use infra::uploads::ImageStore;

/// The concrete service type the REST handlers run against.
pub type Service = PointsService<OrmPointsRepository, OrmItemsRepository>;

/// Wire the module together: repositories, service and image store.
#[must_use]
pub fn build(db: DatabaseConnection, config: &PointsConfig) -> (Arc<Service>, Arc<ImageStore>) {
    let service = PointsService::new(
        db,
        Arc::new(OrmPointsRepository::new()),
        Arc::new(OrmItemsRepository::new()),
        ServiceConfig {
            public_url: config.public_url.clone(),
        },
    );
    let store = ImageStore::new(config.uploads_dir.clone());

    (Arc::new(service), Arc::new(store))
}
