use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .col(ColumnDef::new(Vehicle::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Vehicle::LicensePlate)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehicle::Make).string().not_null())
                    .col(ColumnDef::new(Vehicle::Model).string().not_null())
                    .col(ColumnDef::new(Vehicle::Year).integer().not_null())
                    .col(ColumnDef::new(Vehicle::Color).string())
                    .col(ColumnDef::new(Vehicle::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Vehicle::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicle::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_user")
                            .from(Vehicle::Table, Vehicle::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    LicensePlate,
    Make,
    Model,
    Year,
    Color,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
