pub mod entity;
mod items_sea_repo;
mod mapper;
pub mod migrations;
mod points_sea_repo;

pub use items_sea_repo::OrmItemsRepository;
pub use points_sea_repo::OrmPointsRepository;
