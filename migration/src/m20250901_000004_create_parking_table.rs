use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parking::Table)
                    .col(ColumnDef::new(Parking::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Parking::Name).string().not_null())
                    .col(ColumnDef::new(Parking::Address).string().not_null())
                    .col(ColumnDef::new(Parking::Latitude).double())
                    .col(ColumnDef::new(Parking::Longitude).double())
                    .col(ColumnDef::new(Parking::Status).string_len(32).not_null())
                    .col(ColumnDef::new(Parking::Capacity).integer().not_null())
                    .col(ColumnDef::new(Parking::PricePerHour).double().not_null())
                    .col(ColumnDef::new(Parking::CompanyId).uuid().not_null())
                    .col(
                        ColumnDef::new(Parking::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Parking::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_company")
                            .from(Parking::Table, Parking::CompanyId)
                            .to(Company::Table, Company::Id)
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
            .drop_table(Table::drop().table(Parking::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Parking {
    Table,
    Id,
    Name,
    Address,
    Latitude,
    Longitude,
    Status,
    Capacity,
    PricePerHour,
    CompanyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
}
