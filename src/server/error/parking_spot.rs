use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures specific to parking spot registration and lookup.
///
/// The conflict variants are ordered the way registration checks them: license plate,
/// then spot number, then apartment/block.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkingSpotError {
    /// A vehicle with the same license plate is already registered.
    #[error("CONFLICT: There is already a vehicle registered with this license plate.")]
    LicensePlateInUse,

    /// The parking spot number is already assigned.
    #[error("CONFLICT: Parking spot is already in use!")]
    SpotNumberInUse,

    /// The apartment/block pair already owns a parking spot.
    #[error("CONFLICT: Parking spot already registered for this apartment or block!")]
    UnitAlreadyRegistered,

    /// The store rejected the write on a unique index without a more specific cause
    /// being identifiable (concurrent registration, or an update onto another record's
    /// plate, spot number or unit).
    #[error("CONFLICT: Parking spot data is already registered.")]
    AlreadyRegistered,

    /// No parking spot exists with the requested ID.
    #[error("Parking Spot not found.")]
    NotFound,
}

/// Converts parking spot errors into plain-text HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For every conflict variant
impl IntoResponse for ParkingSpotError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::LicensePlateInUse
            | Self::SpotNumberInUse
            | Self::UnitAlreadyRegistered
            | Self::AlreadyRegistered => StatusCode::CONFLICT,
        };

        tracing::debug!("{}", self);

        (status, self.to_string()).into_response()
    }
}
