use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationTime::Table)
                    .if_not_exists()
                    .col(pk_auto(ReservationTime::Id))
                    .col(time(ReservationTime::StartAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationTime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationTime {
    Table,
    Id,
    StartAt,
}
