//! Parking spot factory for creating test parking spot entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test parking spots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_spot::ParkingSpotFactory;
///
/// let spot = ParkingSpotFactory::new(&db)
///     .parking_spot_number("12")
///     .license_plate_car("ABC1234")
///     .build()
///     .await?;
/// ```
pub struct ParkingSpotFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    parking_spot_number: String,
    license_plate_car: String,
    brand_car: String,
    model_car: String,
    color_car: String,
    responsible_name: String,
    apartment: String,
    block: String,
    registration_date: DateTime<Utc>,
}

impl<'a> ParkingSpotFactory<'a> {
    /// Creates a new ParkingSpotFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - parking_spot_number: `"S{n}"`
    /// - license_plate_car: `"T{n}"` zero padded to 7 characters
    /// - apartment: `"{n}"`, block: `"A"`
    /// - registration_date: now
    ///
    /// where `n` is auto-incremented.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            parking_spot_number: format!("S{}", n),
            license_plate_car: format!("T{:06}", n % 1_000_000),
            brand_car: "Fiat".to_string(),
            model_car: "Uno".to_string(),
            color_car: "Red".to_string(),
            responsible_name: format!("Resident {}", n),
            apartment: n.to_string(),
            block: "A".to_string(),
            registration_date: Utc::now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn parking_spot_number(mut self, parking_spot_number: impl Into<String>) -> Self {
        self.parking_spot_number = parking_spot_number.into();
        self
    }

    pub fn license_plate_car(mut self, license_plate_car: impl Into<String>) -> Self {
        self.license_plate_car = license_plate_car.into();
        self
    }

    pub fn brand_car(mut self, brand_car: impl Into<String>) -> Self {
        self.brand_car = brand_car.into();
        self
    }

    pub fn responsible_name(mut self, responsible_name: impl Into<String>) -> Self {
        self.responsible_name = responsible_name.into();
        self
    }

    pub fn apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = apartment.into();
        self
    }

    pub fn block(mut self, block: impl Into<String>) -> Self {
        self.block = block.into();
        self
    }

    pub fn registration_date(mut self, registration_date: DateTime<Utc>) -> Self {
        self.registration_date = registration_date;
        self
    }

    /// Builds and inserts the parking spot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parking_spot::Model)` - Created parking spot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking_spot::Model, DbErr> {
        entity::parking_spot::ActiveModel {
            id: ActiveValue::Set(self.id),
            parking_spot_number: ActiveValue::Set(self.parking_spot_number),
            license_plate_car: ActiveValue::Set(self.license_plate_car),
            brand_car: ActiveValue::Set(self.brand_car),
            model_car: ActiveValue::Set(self.model_car),
            color_car: ActiveValue::Set(self.color_car),
            responsible_name: ActiveValue::Set(self.responsible_name),
            apartment: ActiveValue::Set(self.apartment),
            block: ActiveValue::Set(self.block),
            registration_date: ActiveValue::Set(self.registration_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a parking spot with default values.
///
/// Shorthand for `ParkingSpotFactory::new(db).build().await`.
pub async fn create_parking_spot(
    db: &DatabaseConnection,
) -> Result<entity::parking_spot::Model, DbErr> {
    ParkingSpotFactory::new(db).build().await
}
