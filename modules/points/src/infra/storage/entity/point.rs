use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub city: String,
    pub uf: String,
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

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        super::point_item::Relation::Item.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::point_item::Relation::Point.def().rev())
    }
}
