pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_member_table;
mod m20250601_000002_create_reservation_time_table;
mod m20250601_000003_create_theme_table;
mod m20250601_000004_create_reservation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_member_table::Migration),
            Box::new(m20250601_000002_create_reservation_time_table::Migration),
            Box::new(m20250601_000003_create_theme_table::Migration),
            Box::new(m20250601_000004_create_reservation_table::Migration),
        ]
    }
}
