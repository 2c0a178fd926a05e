pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_company_table;
mod m20250901_000002_create_user_table;
mod m20250901_000003_create_vehicle_table;
mod m20250901_000004_create_parking_table;
mod m20250901_000005_create_reservation_table;
mod m20250901_000006_create_payment_table;
mod m20250901_000007_create_event_table;
mod m20250901_000008_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_company_table::Migration),
            Box::new(m20250901_000002_create_user_table::Migration),
            Box::new(m20250901_000003_create_vehicle_table::Migration),
            Box::new(m20250901_000004_create_parking_table::Migration),
            Box::new(m20250901_000005_create_reservation_table::Migration),
            Box::new(m20250901_000006_create_payment_table::Migration),
            Box::new(m20250901_000007_create_event_table::Migration),
            Box::new(m20250901_000008_create_notification_table::Migration),
        ]
    }
}
