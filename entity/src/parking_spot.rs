use sea_orm::entity::prelude::*;

/// A registered parking spot and the vehicle occupying it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "parking_spot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub parking_spot_number: String,
    #[sea_orm(unique, column_type = "String(StringLen::N(7))")]
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
    pub registration_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
