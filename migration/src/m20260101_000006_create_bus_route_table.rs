use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(BusRoute::Id))
                    .col(string_uniq(BusRoute::RouteName))
                    .col(string_uniq(BusRoute::BusNumber))
                    .col(string(BusRoute::DriverName))
                    .col(string(BusRoute::DriverPhone))
                    .col(integer(BusRoute::Capacity).default(50))
                    .col(string(BusRoute::CurrentLocation).default("School"))
                    .col(text_null(BusRoute::Stops))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusRoute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusRoute {
    Table,
    Id,
    RouteName,
    BusNumber,
    DriverName,
    DriverPhone,
    Capacity,
    CurrentLocation,
    Stops,
}
