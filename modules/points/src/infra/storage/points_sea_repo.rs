use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Set,
};

use crate::domain::error::DomainError;
use crate::domain::model::{NewPoint, Point, PointFilter};
use crate::domain::repos::PointsRepository;
use crate::infra::storage::entity::{item, point, point_item};

/// ORM-based implementation of the `PointsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmPointsRepository;

impl OrmPointsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PointsRepository for OrmPointsRepository {
    async fn insert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new_point: NewPoint,
    ) -> Result<Point, DomainError> {
        let am = point::ActiveModel {
            image: Set(new_point.image),
            name: Set(new_point.name),
            email: Set(new_point.email),
            whatsapp: Set(new_point.whatsapp),
            latitude: Set(new_point.latitude),
            longitude: Set(new_point.longitude),
            city: Set(new_point.city),
            uf: Set(new_point.uf),
            ..Default::default()
        };

        let model = am.insert(conn).await?;
        Ok(model.into())
    }

    async fn attach_items<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        point_id: i32,
        item_ids: &[i32],
    ) -> Result<(), DomainError> {
        let rows = item_ids.iter().map(|&item_id| point_item::ActiveModel {
            point_id: Set(point_id),
            item_id: Set(item_id),
        });

        let _ = point_item::Entity::insert_many(rows).exec(conn).await?;
        Ok(())
    }

    async fn search<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &PointFilter,
    ) -> Result<Vec<Point>, DomainError> {
        // Always joined to the item associations; DISTINCT keeps a point that
        // matches several items from appearing once per match.
        let mut query = point::Entity::find()
            .join(JoinType::InnerJoin, point::Relation::PointItem.def())
            .distinct();

        if !filter.items.is_empty() {
            query = query.filter(point_item::Column::ItemId.is_in(filter.items.iter().copied()));
        }
        if let Some(uf) = &filter.uf {
            query = query.filter(point::Column::Uf.eq(uf.as_str()));
        }
        if let Some(city) = &filter.city {
            query = query.filter(point::Column::City.eq(city.as_str()));
        }

        let rows = query.all(conn).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Point>, DomainError> {
        let found = point::Entity::find_by_id(id).one(conn).await?;
        Ok(found.map(Into::into))
    }

    async fn item_titles<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        point_id: i32,
    ) -> Result<Vec<String>, DomainError> {
        let rows = item::Entity::find()
            .join(JoinType::InnerJoin, item::Relation::PointItem.def())
            .filter(point_item::Column::PointId.eq(point_id))
            .all(conn)
            .await?;

        Ok(rows.into_iter().map(|m| m.title).collect())
    }
}
