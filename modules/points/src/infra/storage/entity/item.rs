use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::point_item::Entity")]
    PointItem,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::point_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointItem.def()
    }
}

impl Related<super::point::Entity> for Entity {
    fn to() -> RelationDef {
        super::point_item::Relation::Point.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::point_item::Relation::Item.def().rev())
    }
}
