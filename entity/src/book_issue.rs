use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book_issue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub book_id: i32,
    pub issue_date: DateTimeUtc,
    pub due_date: DateTimeUtc,
    pub return_date: Option<DateTimeUtc>,
    /// One of `issued`, `returned`.
    pub status: String,
    pub fine: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::library_book::Entity",
        from = "Column::BookId",
        to = "super::library_book::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LibraryBook,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::library_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryBook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
