use sea_orm_migration::{prelude::*, schema::*};

const IDX_APARTMENT_BLOCK: &str = "idx_parking_spot_apartment_block";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpot::Table)
                    .if_not_exists()
                    .col(pk_uuid(ParkingSpot::Id))
                    .col(string_uniq(ParkingSpot::ParkingSpotNumber))
                    .col(string_len_uniq(ParkingSpot::LicensePlateCar, 7))
                    .col(string(ParkingSpot::BrandCar))
                    .col(string(ParkingSpot::ModelCar))
                    .col(string(ParkingSpot::ColorCar))
                    .col(string(ParkingSpot::ResponsibleName))
                    .col(string(ParkingSpot::Apartment))
                    .col(string(ParkingSpot::Block))
                    .col(timestamp_with_time_zone(ParkingSpot::RegistrationDate))
                    .to_owned(),
            )
            .await?;

        // One spot per apartment/block pair
        manager
            .create_index(
                Index::create()
                    .name(IDX_APARTMENT_BLOCK)
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::Apartment)
                    .col(ParkingSpot::Block)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APARTMENT_BLOCK)
                    .table(ParkingSpot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ParkingSpot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingSpot {
    Table,
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    BrandCar,
    ModelCar,
    ColorCar,
    ResponsibleName,
    Apartment,
    Block,
    RegistrationDate,
}
