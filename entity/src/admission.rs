use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_grade: String,
    pub dob: Date,
    pub parent_name: String,
    pub parent_phone: String,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub documents: Option<String>,
    pub applied_on: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
