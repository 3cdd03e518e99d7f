use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_member_table::Member,
    m20250601_000002_create_reservation_time_table::ReservationTime,
    m20250601_000003_create_theme_table::Theme,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(date(Reservation::Date))
                    .col(integer(Reservation::MemberId))
                    .col(integer(Reservation::TimeId))
                    .col(integer(Reservation::ThemeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_member_id")
                            .from(Reservation::Table, Reservation::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_time_id")
                            .from(Reservation::Table, Reservation::TimeId)
                            .to(ReservationTime::Table, ReservationTime::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_theme_id")
                            .from(Reservation::Table, Reservation::ThemeId)
                            .to(Theme::Table, Theme::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Date,
    MemberId,
    TimeId,
    ThemeId,
}
