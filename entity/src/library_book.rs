use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "library_book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    #[sea_orm(unique)]
    pub isbn: Option<String>,
    pub category: String,
    pub quantity: i32,
    pub available: i32,
    pub publication_year: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_issue::Entity")]
    BookIssue,
}

impl Related<super::book_issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookIssue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
