use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Theme::Table)
                    .if_not_exists()
                    .col(pk_auto(Theme::Id))
                    .col(string(Theme::Name))
                    .col(string(Theme::Description))
                    .col(string(Theme::Thumbnail))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Theme::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Theme {
    Table,
    Id,
    Name,
    Description,
    Thumbnail,
}
