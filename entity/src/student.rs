use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub roll_number: String,
    pub class_grade: String,
    pub section: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub dob: Date,
    pub admission_date: DateTimeUtc,
    pub bus_route: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::fee::Entity")]
    Fee,
    #[sea_orm(has_many = "super::book_issue::Entity")]
    BookIssue,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fee.def()
    }
}

impl Related<super::book_issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookIssue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
