use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .col(ColumnDef::new(Event::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Event::EventType).string_len(32).not_null())
                    .col(ColumnDef::new(Event::UserId).uuid().not_null())
                    .col(ColumnDef::new(Event::VehicleId).uuid().not_null())
                    .col(ColumnDef::new(Event::ParkingId).uuid().not_null())
                    .col(ColumnDef::new(Event::ReservationId).uuid())
                    .col(ColumnDef::new(Event::Gate).string())
                    .col(ColumnDef::new(Event::QrCode).string())
                    .col(
                        ColumnDef::new(Event::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Event::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_user")
                            .from(Event::Table, Event::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_vehicle")
                            .from(Event::Table, Event::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_parking")
                            .from(Event::Table, Event::ParkingId)
                            .to(Parking::Table, Parking::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_reservation")
                            .from(Event::Table, Event::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    EventType,
    UserId,
    VehicleId,
    ParkingId,
    ReservationId,
    Gate,
    QrCode,
    Timestamp,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Parking {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    Id,
}
