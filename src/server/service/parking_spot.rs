use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::parking_spot::ParkingSpotRepository,
    error::{parking_spot::ParkingSpotError, AppError},
    model::{
        pagination::{Page, PageRequest},
        parking_spot::{ParkingSpot, ParkingSpotParam},
    },
};

/// Parking spot registration and management.
///
/// Registration enforces, in order, that the license plate, the spot number and the
/// apartment/block pair are not yet registered. Updates skip those checks and rely on
/// the unique indexes of the store alone.
pub struct ParkingSpotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkingSpotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new parking spot
    ///
    /// Assigns a fresh ID and stamps the registration date with the current UTC time.
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The stored parking spot
    /// - `Err(AppError::ParkingSpotErr(LicensePlateInUse))` - Plate already registered
    /// - `Err(AppError::ParkingSpotErr(SpotNumberInUse))` - Spot number already registered
    /// - `Err(AppError::ParkingSpotErr(UnitAlreadyRegistered))` - Apartment/block already registered
    /// - `Err(AppError::ParkingSpotErr(AlreadyRegistered))` - Unique index violation with no
    ///   identifiable cause
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: ParkingSpotParam) -> Result<ParkingSpot, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        if let Some(conflict) = find_conflict(&repo, &param).await? {
            return Err(settle_conflict(&repo, &param, conflict).await?.into());
        }

        let spot = match repo.create(param.clone(), Uuid::new_v4(), Utc::now()).await {
            Ok(spot) => spot,
            Err(err) if is_unique_violation(&err) => {
                let conflict =
                    settle_conflict(&repo, &param, ParkingSpotError::AlreadyRegistered).await?;
                return Err(conflict.into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            "Registered parking spot {} ({}) for {}/{}",
            spot.parking_spot_number,
            spot.id,
            spot.apartment,
            spot.block
        );

        Ok(spot)
    }

    /// Gets one page of parking spots
    pub async fn list(&self, request: PageRequest) -> Result<Page<ParkingSpot>, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        let (spots, total) = repo.get_paginated(&request).await?;

        Ok(Page::new(spots, total, &request))
    }

    /// Gets a parking spot by ID
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The requested parking spot
    /// - `Err(AppError::ParkingSpotErr(NotFound))` - No parking spot with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, id: Uuid) -> Result<ParkingSpot, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        let spot = repo
            .find_by_id(id)
            .await?
            .ok_or(ParkingSpotError::NotFound)?;

        Ok(spot)
    }

    /// Overwrites every caller-writable field of a parking spot
    ///
    /// Does not run the registration uniqueness checks. A write that collides with another
    /// record on a unique index is reported as `AlreadyRegistered`.
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The updated parking spot
    /// - `Err(AppError::ParkingSpotErr(NotFound))` - No parking spot with this ID
    /// - `Err(AppError::ParkingSpotErr(AlreadyRegistered))` - Unique index violation
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: Uuid, param: ParkingSpotParam) -> Result<ParkingSpot, AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        let spot = match repo.update(id, param).await {
            Ok(Some(spot)) => spot,
            Ok(None) => return Err(ParkingSpotError::NotFound.into()),
            Err(err) if is_unique_violation(&err) => {
                return Err(ParkingSpotError::AlreadyRegistered.into())
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Updated parking spot {}", spot.id);

        Ok(spot)
    }

    /// Permanently removes a parking spot
    ///
    /// # Returns
    /// - `Ok(())` - The parking spot was deleted
    /// - `Err(AppError::ParkingSpotErr(NotFound))` - No parking spot with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = ParkingSpotRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(ParkingSpotError::NotFound.into());
        }

        tracing::info!("Deleted parking spot {}", id);

        Ok(())
    }
}

/// Runs the registration uniqueness checks in priority order
///
/// Stops at the first check that fails.
///
/// # Returns
/// - `Ok(Some(ParkingSpotError))` - The first conflict found
/// - `Ok(None)` - No conflict
/// - `Err(DbErr)` - Database error during a check
async fn find_conflict(
    repo: &ParkingSpotRepository<'_>,
    param: &ParkingSpotParam,
) -> Result<Option<ParkingSpotError>, DbErr> {
    if repo
        .exists_by_license_plate_car(&param.license_plate_car)
        .await?
    {
        return Ok(Some(ParkingSpotError::LicensePlateInUse));
    }

    if repo
        .exists_by_parking_spot_number(&param.parking_spot_number)
        .await?
    {
        return Ok(Some(ParkingSpotError::SpotNumberInUse));
    }

    if repo
        .exists_by_apartment_and_block(&param.apartment, &param.block)
        .await?
    {
        return Ok(Some(ParkingSpotError::UnitAlreadyRegistered));
    }

    Ok(None)
}

/// Re-runs the uniqueness checks once a conflict has been observed
///
/// A concurrent registration may commit while the checks or the insert are in flight,
/// so the first observed conflict can belong to a lower-priority check. Every record
/// involved is committed by the time a conflict is seen, so a second full pass reports
/// the conflict a sequential caller would get.
///
/// # Returns
/// - `Ok(ParkingSpotError)` - The highest-priority conflict, or `observed` if the second
///   pass finds none
/// - `Err(DbErr)` - Database error during a check
async fn settle_conflict(
    repo: &ParkingSpotRepository<'_>,
    param: &ParkingSpotParam,
    observed: ParkingSpotError,
) -> Result<ParkingSpotError, DbErr> {
    Ok(find_conflict(repo, param).await?.unwrap_or(observed))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
