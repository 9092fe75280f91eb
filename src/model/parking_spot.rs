use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for registering or updating a parking spot.
///
/// Every field is required and must not be blank. Fields are optional at the
/// deserialization level so that a missing field is reported as a validation
/// failure for that field instead of a generic body rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotDto {
    #[serde(default)]
    pub parking_spot_number: Option<String>,
    /// At most 7 characters
    #[serde(default)]
    pub license_plate_car: Option<String>,
    #[serde(default)]
    pub brand_car: Option<String>,
    #[serde(default)]
    pub model_car: Option<String>,
    #[serde(default)]
    pub color_car: Option<String>,
    #[serde(default)]
    pub responsible_name: Option<String>,
    #[serde(default)]
    pub apartment: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
}

/// A stored parking spot record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotRecordDto {
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

/// One page of parking spot records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedParkingSpotsDto {
    pub content: Vec<ParkingSpotRecordDto>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Applied ordering as `field,direction`
    pub sort: String,
}
