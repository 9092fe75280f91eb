//! Parking spot data repository for database operations
//!
//! Provides the `ParkingSpotRepository` for managing parking spot records in the database.
//! Provides methods to create, find, list, update, and delete records, the existence
//! checks used to keep plates, spot numbers and apartment/block pairs unique, and the
//! conversion of entity models into domain models.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    pagination::{PageRequest, SortDirection, SortField},
    parking_spot::{ParkingSpot, ParkingSpotParam},
};

/// Repository providing database operations for parking spot management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting parking spot records.
pub struct ParkingSpotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkingSpotRepository<'a> {
    /// Creates a new ParkingSpotRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ParkingSpotRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new parking spot
    ///
    /// # Arguments
    /// - `param` - Caller-provided field values
    /// - `id` - Identifier for the new record
    /// - `registration_date` - Registration timestamp for the new record
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The stored record as a domain model
    /// - `Err(DbErr)` - Database error during insert, including unique index violations
    pub async fn create(
        &self,
        param: ParkingSpotParam,
        id: Uuid,
        registration_date: DateTime<Utc>,
    ) -> Result<ParkingSpot, DbErr> {
        let mut active_model = entity::parking_spot::ActiveModel {
            id: ActiveValue::Set(id),
            registration_date: ActiveValue::Set(registration_date),
            ..Default::default()
        };
        apply_param(&mut active_model, param);

        let entity = active_model.insert(self.db).await?;

        Ok(ParkingSpot::from_entity(entity))
    }

    /// Finds a parking spot by ID
    ///
    /// # Returns
    /// - `Ok(Some(ParkingSpot))` - The requested parking spot if found
    /// - `Ok(None)` - No parking spot with this ID
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, DbErr> {
        let entity = entity::prelude::ParkingSpot::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ParkingSpot::from_entity))
    }

    /// Gets one page of parking spots in the requested order
    ///
    /// Sorting on any field other than the ID adds the ID as ascending tie-breaker so
    /// consecutive pages never overlap.
    ///
    /// # Returns
    /// - `Ok((spots, total))` - Parking spots of the requested page and the total record count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<ParkingSpot>, u64), DbErr> {
        let mut query = entity::prelude::ParkingSpot::find()
            .order_by(sort_column(request.sort), sort_order(request.direction));
        if request.sort != SortField::Id {
            query = query.order_by_asc(entity::parking_spot::Column::Id);
        }

        let paginator = query.paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(request.page).await?;
        let spots = entities.into_iter().map(ParkingSpot::from_entity).collect();

        Ok((spots, total))
    }

    /// Overwrites the caller-writable fields of an existing parking spot
    ///
    /// The ID and registration date are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(ParkingSpot))` - The updated record
    /// - `Ok(None)` - No parking spot with this ID, nothing was written
    /// - `Err(DbErr)` - Database error during update, including unique index violations
    pub async fn update(
        &self,
        id: Uuid,
        param: ParkingSpotParam,
    ) -> Result<Option<ParkingSpot>, DbErr> {
        let Some(existing) = entity::prelude::ParkingSpot::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::parking_spot::ActiveModel = existing.into();
        apply_param(&mut active_model, param);

        let entity = active_model.update(self.db).await?;

        Ok(Some(ParkingSpot::from_entity(entity)))
    }

    /// Deletes the parking spot of the provided ID
    ///
    /// # Returns
    /// - `Ok(true)` - The parking spot was deleted
    /// - `Ok(false)` - No parking spot with this ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingSpot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any parking spot holds the given license plate
    pub async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LicensePlateCar.eq(license_plate_car))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any parking spot uses the given spot number
    pub async fn exists_by_parking_spot_number(
        &self,
        parking_spot_number: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingSpotNumber.eq(parking_spot_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the apartment/block pair already has a parking spot
    pub async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::Apartment.eq(apartment))
            .filter(entity::parking_spot::Column::Block.eq(block))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Copies every caller-writable field of `param` onto `active_model`
///
/// Shared by insert and update so both write exactly the same set of columns. `id` and
/// `registration_date` are never touched.
pub fn apply_param(active_model: &mut entity::parking_spot::ActiveModel, param: ParkingSpotParam) {
    active_model.parking_spot_number = ActiveValue::Set(param.parking_spot_number);
    active_model.license_plate_car = ActiveValue::Set(param.license_plate_car);
    active_model.brand_car = ActiveValue::Set(param.brand_car);
    active_model.model_car = ActiveValue::Set(param.model_car);
    active_model.color_car = ActiveValue::Set(param.color_car);
    active_model.responsible_name = ActiveValue::Set(param.responsible_name);
    active_model.apartment = ActiveValue::Set(param.apartment);
    active_model.block = ActiveValue::Set(param.block);
}

fn sort_column(field: SortField) -> entity::parking_spot::Column {
    use entity::parking_spot::Column;

    match field {
        SortField::Id => Column::Id,
        SortField::ParkingSpotNumber => Column::ParkingSpotNumber,
        SortField::LicensePlateCar => Column::LicensePlateCar,
        SortField::BrandCar => Column::BrandCar,
        SortField::ModelCar => Column::ModelCar,
        SortField::ColorCar => Column::ColorCar,
        SortField::ResponsibleName => Column::ResponsibleName,
        SortField::Apartment => Column::Apartment,
        SortField::Block => Column::Block,
        SortField::RegistrationDate => Column::RegistrationDate,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}
