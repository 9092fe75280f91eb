use super::*;

/// Tests overwriting a parking spot.
///
/// Verifies that every writable field changes, the ID and registration date stay, and
/// the new values are visible on a subsequent fetch.
///
/// Expected: Ok(ParkingSpot) with new values
#[tokio::test]
async fn updates_parking_spot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    let created = service.create(param("12", "ABC1234", "101", "A")).await?;

    let mut new_values = param("20", "NEW0001", "201", "B");
    new_values.color_car = "Blue".to_string();
    let updated = service.update(created.id, new_values).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.registration_date, created.registration_date);
    assert_eq!(updated.color_car, "Blue");

    let fetched = service.get(created.id).await?;
    assert_eq!(fetched.parking_spot_number, "20");
    assert_eq!(fetched.license_plate_car, "NEW0001");
    assert_eq!(fetched.apartment, "201");
    assert_eq!(fetched.block, "B");
    assert_eq!(fetched.color_car, "Blue");
    assert_eq!(fetched.registration_date, created.registration_date);

    Ok(())
}

/// Tests that updates skip the registration checks.
///
/// Re-submitting a record's own plate, spot number and unit would fail every
/// registration check, yet the update goes through.
///
/// Expected: Ok(ParkingSpot)
#[tokio::test]
async fn does_not_run_registration_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    let created = service.create(param("12", "ABC1234", "101", "A")).await?;

    let mut same_values = param("12", "ABC1234", "101", "A");
    same_values.responsible_name = "Ana Costa".to_string();
    let updated = service.update(created.id, same_values).await?;

    assert_eq!(updated.responsible_name, "Ana Costa");

    Ok(())
}

/// Tests an update colliding with another record.
///
/// Expected: Err(AlreadyRegistered) with both records unchanged
#[tokio::test]
async fn rejects_collision_with_other_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ParkingSpotService::new(db);
    service.create(param("12", "ABC1234", "101", "A")).await?;
    let other = service.create(param("13", "XYZ9999", "102", "B")).await?;

    let result = service
        .update(other.id, param("12", "XYZ9999", "102", "B"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ParkingSpotErr(ParkingSpotError::AlreadyRegistered))
    ));
    assert_eq!(service.get(other.id).await?.parking_spot_number, "13");

    Ok(())
}

/// Tests updating an unknown ID.
///
/// Expected: Err(NotFound) with nothing written
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_parking_spot(db).await?;

    let service = ParkingSpotService::new(db);
    let result = service
        .update(Uuid::new_v4(), param("99", "NEW0001", "909", "Z"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ParkingSpotErr(ParkingSpotError::NotFound))
    ));
    assert_eq!(entity::prelude::ParkingSpot::find().count(db).await?, 1);
    let unchanged = entity::prelude::ParkingSpot::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(unchanged, existing);

    Ok(())
}
