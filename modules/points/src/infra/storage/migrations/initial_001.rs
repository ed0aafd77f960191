use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r#"
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    image VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS points (
    id SERIAL PRIMARY KEY,
    image VARCHAR(255) NOT NULL,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    whatsapp VARCHAR(255) NOT NULL,
    latitude DOUBLE PRECISION NOT NULL,
    longitude DOUBLE PRECISION NOT NULL,
    city VARCHAR(255) NOT NULL,
    uf VARCHAR(2) NOT NULL
);

CREATE TABLE IF NOT EXISTS point_items (
    point_id INTEGER NOT NULL REFERENCES points(id),
    item_id INTEGER NOT NULL REFERENCES items(id),
    PRIMARY KEY (point_id, item_id)
);

CREATE INDEX IF NOT EXISTS idx_points_uf_city ON points(uf, city);
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    title VARCHAR(255) NOT NULL,
    image VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS points (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    image VARCHAR(255) NOT NULL,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    whatsapp VARCHAR(255) NOT NULL,
    latitude DOUBLE NOT NULL,
    longitude DOUBLE NOT NULL,
    city VARCHAR(255) NOT NULL,
    uf VARCHAR(2) NOT NULL,
    KEY idx_points_uf_city (uf, city)
);

CREATE TABLE IF NOT EXISTS point_items (
    point_id INTEGER NOT NULL,
    item_id INTEGER NOT NULL,
    PRIMARY KEY (point_id, item_id),
    FOREIGN KEY (point_id) REFERENCES points(id),
    FOREIGN KEY (item_id) REFERENCES items(id)
);
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    image TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS points (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    image TEXT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    whatsapp TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    city TEXT NOT NULL,
    uf TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS point_items (
    point_id INTEGER NOT NULL REFERENCES points(id),
    item_id INTEGER NOT NULL REFERENCES items(id),
    PRIMARY KEY (point_id, item_id)
);

CREATE INDEX IF NOT EXISTS idx_points_uf_city ON points(uf, city);
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = "DROP TABLE IF EXISTS point_items; DROP TABLE IF EXISTS points; DROP TABLE IF EXISTS items;";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
