#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Support module provides utilities shared across test binaries

//! Test support utilities for the points module integration tests.

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use ecoleta_points::config::PointsConfig;
use ecoleta_points::domain::service::RegisterPointInput;
use ecoleta_points::infra::storage::migrations::Migrator;
use ecoleta_points::infra::uploads::ImageStore;
use ecoleta_points::Service;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// A single pooled connection keeps the in-memory database alive and shared
/// across the whole test.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Wire a service (and image store) over the given database with defaults.
pub fn make_service(db: &DatabaseConnection) -> (Arc<Service>, Arc<ImageStore>) {
    ecoleta_points::build(db.clone(), &PointsConfig::default())
}

/// A valid registration submission; callers override what they test.
pub fn sample_input(items: &str) -> RegisterPointInput {
    RegisterPointInput {
        image: "photo.jpg".to_owned(),
        name: "Eco X".to_owned(),
        email: "contact@ecox.example".to_owned(),
        whatsapp: "11999990000".to_owned(),
        latitude: -23.686,
        longitude: -46.623,
        city: "Diadema".to_owned(),
        uf: "SP".to_owned(),
        items: items.to_owned(),
    }
}
