//! Domain & parameter models for parking spot operations
//!
//! Defines the parking spot domain model, the validated parameter model built from the
//! request DTO, and the conversions from entity and into DTOs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::parking_spot::{PaginatedParkingSpotsDto, ParkingSpotDto, ParkingSpotRecordDto},
    server::{
        error::validation::{FieldError, ValidationError, NOT_BLANK},
        model::pagination::Page,
    },
};

pub const LICENSE_PLATE_MAX_LEN: usize = 7;

/// The parking spot domain model
///
/// A registered spot, the vehicle parked in it, the occupant responsible for it and the
/// apartment/block the spot belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    pub id: Uuid,
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
    pub registration_date: DateTime<Utc>,
}

impl ParkingSpot {
    /// Converts an entity model to the parking spot domain model
    pub fn from_entity(entity: entity::parking_spot::Model) -> Self {
        Self {
            id: entity.id,
            parking_spot_number: entity.parking_spot_number,
            license_plate_car: entity.license_plate_car,
            brand_car: entity.brand_car,
            model_car: entity.model_car,
            color_car: entity.color_car,
            responsible_name: entity.responsible_name,
            apartment: entity.apartment,
            block: entity.block,
            registration_date: entity.registration_date,
        }
    }

    pub fn into_dto(self) -> ParkingSpotRecordDto {
        ParkingSpotRecordDto {
            id: self.id,
            parking_spot_number: self.parking_spot_number,
            license_plate_car: self.license_plate_car,
            brand_car: self.brand_car,
            model_car: self.model_car,
            color_car: self.color_car,
            responsible_name: self.responsible_name,
            apartment: self.apartment,
            block: self.block,
            registration_date: self.registration_date,
        }
    }
}

impl Page<ParkingSpot> {
    pub fn into_dto(self) -> PaginatedParkingSpotsDto {
        let page = self.map(ParkingSpot::into_dto);

        PaginatedParkingSpotsDto {
            content: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total_items,
            total_pages: page.total_pages,
            sort: page.sort,
        }
    }
}

/// Validated parameters for registering or updating a parking spot
///
/// Holds every caller-writable field. The ID and registration date are never part of
/// the parameters; they are assigned by the service on registration only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpotParam {
    pub parking_spot_number: String,
    pub license_plate_car: String,
    pub brand_car: String,
    pub model_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}

impl ParkingSpotParam {
    /// Validates a request DTO into parameters
    ///
    /// All fields must be present and contain a non-whitespace character; the license
    /// plate may hold at most `LICENSE_PLATE_MAX_LEN` characters. Values are kept as sent.
    ///
    /// # Returns
    /// - `Ok(ParkingSpotParam)` - Every field passed validation
    /// - `Err(ValidationError)` - Every failing field, in declaration order
    pub fn from_dto(dto: ParkingSpotDto) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let parking_spot_number =
            require_non_blank("parkingSpotNumber", dto.parking_spot_number, &mut errors);
        let license_plate_car =
            require_non_blank("licensePlateCar", dto.license_plate_car, &mut errors);
        if license_plate_car.chars().count() > LICENSE_PLATE_MAX_LEN {
            errors.push(FieldError::new(
                "licensePlateCar",
                format!("size must be between 0 and {}", LICENSE_PLATE_MAX_LEN),
            ));
        }
        let brand_car = require_non_blank("brandCar", dto.brand_car, &mut errors);
        let model_car = require_non_blank("modelCar", dto.model_car, &mut errors);
        let color_car = require_non_blank("colorCar", dto.color_car, &mut errors);
        let responsible_name =
            require_non_blank("responsibleName", dto.responsible_name, &mut errors);
        let apartment = require_non_blank("apartment", dto.apartment, &mut errors);
        let block = require_non_blank("block", dto.block, &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError { fields: errors });
        }

        Ok(Self {
            parking_spot_number,
            license_plate_car,
            brand_car,
            model_car,
            color_car,
            responsible_name,
            apartment,
            block,
        })
    }
}

fn require_non_blank(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            errors.push(FieldError::new(field, NOT_BLANK));
            String::new()
        }
    }
}
