use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub route_name: String,
    #[sea_orm(unique)]
    pub bus_number: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub capacity: i32,
    pub current_location: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub stops: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
