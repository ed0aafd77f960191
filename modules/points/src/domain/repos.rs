//! Repository traits owned by the domain.
//!
//! Methods are generic over [`sea_orm::ConnectionTrait`] so the same
//! implementation runs against a pooled connection or an open transaction;
//! the registration flow relies on that to keep its writes in one unit.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::domain::error::DomainError;
use crate::domain::model::{Item, NewPoint, Point, PointFilter};

#[async_trait]
pub trait PointsRepository: Send + Sync {
    /// Insert a point and return it with its generated id.
    async fn insert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        point: NewPoint,
    ) -> Result<Point, DomainError>;

    /// Insert one join row per item id, all referencing `point_id`.
    /// `item_ids` must be non-empty.
    async fn attach_items<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        point_id: i32,
        item_ids: &[i32],
    ) -> Result<(), DomainError>;

    /// Points matching the filter, deduplicated across the item join.
    async fn search<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &PointFilter,
    ) -> Result<Vec<Point>, DomainError>;

    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Point>, DomainError>;

    /// Titles of all items associated with the given point.
    async fn item_titles<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        point_id: i32,
    ) -> Result<Vec<String>, DomainError>;
}

#[async_trait]
pub trait ItemsRepository: Send + Sync {
    async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Item>, DomainError>;
}
