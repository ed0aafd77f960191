use sea_orm::entity::prelude::*;

/// Join row between a point and an item it accepts; no independent identity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "point_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub point_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::point::Entity",
        from = "Column::PointId",
        to = "super::point::Column::Id"
    )]
    Point,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Point.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}
