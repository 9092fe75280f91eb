use crate::server::{
    error::{parking_spot::ParkingSpotError, AppError},
    model::{
        pagination::{PageRequest, SortDirection, SortField},
        parking_spot::ParkingSpotParam,
    },
    service::parking_spot::ParkingSpotService,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod update;

/// Parameters for a registration with the given unique values
fn param(spot: &str, plate: &str, apartment: &str, block: &str) -> ParkingSpotParam {
    ParkingSpotParam {
        parking_spot_number: spot.to_string(),
        license_plate_car: plate.to_string(),
        brand_car: "Chevrolet".to_string(),
        model_car: "Onix".to_string(),
        color_car: "White".to_string(),
        responsible_name: "Carlos Lima".to_string(),
        apartment: apartment.to_string(),
        block: block.to_string(),
    }
}
