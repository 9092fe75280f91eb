use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        parking_spot::{PaginatedParkingSpotsDto, ParkingSpotDto, ParkingSpotRecordDto},
    },
    server::{
        error::AppError,
        model::{pagination::PageRequest, parking_spot::ParkingSpotParam},
        service::parking_spot::ParkingSpotService,
        state::AppState,
    },
};

/// Tag for grouping parking spot endpoints in OpenAPI documentation
pub static PARKING_SPOT_TAG: &str = "parking_spot";

pub const DELETED_MESSAGE: &str = "Parking spot deleted successfully.";

#[derive(Debug, Deserialize)]
pub struct ListParkingSpotsParam {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

/// Converts the raw JSON extraction result into validated parameters
///
/// Malformed bodies become a 400 with the rejection reason; well-formed bodies go through
/// field validation.
fn parse_body(
    payload: Result<Json<ParkingSpotDto>, JsonRejection>,
) -> Result<ParkingSpotParam, AppError> {
    let Json(dto) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    Ok(ParkingSpotParam::from_dto(dto)?)
}

/// Register a new parking spot.
///
/// Rejects the registration when the license plate, the spot number or the
/// apartment/block pair is already registered, checked in that order.
///
/// # Returns
/// - `201 Created` - The stored parking spot
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `409 Conflict` - Plate, spot number or apartment/block already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/parking-spot",
    tag = PARKING_SPOT_TAG,
    request_body = ParkingSpotDto,
    responses(
        (status = 201, description = "Parking Spot created successfully", body = ParkingSpotRecordDto),
        (status = 400, description = "One or more parameters are incorrect, check and try again.", body = ValidationErrorDto),
        (status = 409, description = "CONFLICT: Parking Spot data provided", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_parking_spot(
    State(state): State<AppState>,
    payload: Result<Json<ParkingSpotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = parse_body(payload)?;

    let spot = ParkingSpotService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(spot.into_dto())))
}

/// Get a page of parking spots.
///
/// Ordered by ID ascending unless `sort` says otherwise.
///
/// # Returns
/// - `200 OK` - The requested page
/// - `400 Bad Request` - Malformed query, unknown sort field or direction, or page out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/parking-spot",
    tag = PARKING_SPOT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10, max: 2000)"),
        ("sort" = Option<String>, Query, description = "Sort as `field` or `field,asc|desc` (default: id,asc)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved parking spots", body = PaginatedParkingSpotsDto),
        (status = 400, description = "Malformed query, invalid sort expression or page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parking_spots(
    State(state): State<AppState>,
    query: Result<Query<ListParkingSpotsParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request = PageRequest::new(params.page, params.size, params.sort.as_deref())?;

    let page = ParkingSpotService::new(&state.db).list(request).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a parking spot by ID.
///
/// # Returns
/// - `200 OK` - The parking spot
/// - `404 Not Found` - No parking spot with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/parking-spot/{id}",
    tag = PARKING_SPOT_TAG,
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved parking spot", body = ParkingSpotRecordDto),
        (status = 404, description = "Parking Spot not found.", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let spot = ParkingSpotService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(spot.into_dto())))
}

/// Update a parking spot.
///
/// Overwrites every field except the ID and registration date. The registration
/// uniqueness checks are not repeated; only the store's unique indexes apply.
///
/// # Returns
/// - `200 OK` - The updated parking spot
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `404 Not Found` - No parking spot with this ID
/// - `409 Conflict` - Values collide with another parking spot
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/parking-spot/{id}",
    tag = PARKING_SPOT_TAG,
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    request_body = ParkingSpotDto,
    responses(
        (status = 200, description = "Successfully updated parking spot", body = ParkingSpotRecordDto),
        (status = 400, description = "One or more parameters are incorrect, check and try again.", body = ValidationErrorDto),
        (status = 404, description = "Parking Spot not found.", body = String, content_type = "text/plain"),
        (status = 409, description = "Values collide with another parking spot", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ParkingSpotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = parse_body(payload)?;

    let spot = ParkingSpotService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(spot.into_dto())))
}

/// Delete a parking spot.
///
/// # Returns
/// - `200 OK` - The parking spot was deleted
/// - `404 Not Found` - No parking spot with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/parking-spot/{id}",
    tag = PARKING_SPOT_TAG,
    params(
        ("id" = Uuid, Path, description = "Parking spot ID")
    ),
    responses(
        (status = 200, description = "Parking spot deleted successfully.", body = String, content_type = "text/plain"),
        (status = 404, description = "Parking Spot not found.", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    ParkingSpotService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, DELETED_MESSAGE))
}
