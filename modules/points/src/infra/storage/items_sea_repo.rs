use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::domain::error::DomainError;
use crate::domain::model::Item;
use crate::domain::repos::ItemsRepository;
use crate::infra::storage::entity::item;

/// ORM-based implementation of the `ItemsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmItemsRepository;

impl OrmItemsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ItemsRepository for OrmItemsRepository {
    async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Item>, DomainError> {
        let rows = item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
