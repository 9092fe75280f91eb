use super::*;

/// Tests inserting a new parking spot.
///
/// Verifies that the repository stores every field, the provided ID and the
/// provided registration date.
///
/// Expected: Ok with the stored parking spot
#[tokio::test]
async fn creates_parking_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ParkingSpot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let registration_date = Utc::now();

    let repo = ParkingSpotRepository::new(db);
    let spot = repo
        .create(param("12", "ABC1234", "101", "A"), id, registration_date)
        .await?;

    assert_eq!(spot.id, id);
    assert_eq!(spot.parking_spot_number, "12");
    assert_eq!(spot.license_plate_car, "ABC1234");
    assert_eq!(spot.brand_car, "Volkswagen");
    assert_eq!(spot.model_car, "Gol");
    assert_eq!(spot.color_car, "Black");
    assert_eq!(spot.responsible_name, "Maria Silva");
    assert_eq!(spot.apartment, "101");
    assert_eq!(spot.block, "A");
    assert!((spot.registration_date - registration_date).abs() < Duration::milliseconds(1));

    // Verify parking spot exists in database
    let db_spot = entity::prelude::ParkingSpot::find_by_id(id).one(db).await?;
    assert!(db_spot.is_some());
    assert_eq!(db_spot.unwrap().license_plate_car, "ABC1234");

    Ok(())
}

/// Tests the unique index on license plates.
///
/// Verifies that the store itself rejects a second record with an existing plate,
/// independently of any service-level check.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_license_plate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::parking_spot::ParkingSpotFactory::new(db)
        .license_plate_car("ABC1234")
        .build()
        .await?;

    let repo = ParkingSpotRepository::new(db);
    let result = repo
        .create(param("13", "ABC1234", "102", "B"), Uuid::new_v4(), Utc::now())
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::ParkingSpot::find().count(db).await?, 1);

    Ok(())
}

/// Tests the unique index on spot numbers.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_spot_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::parking_spot::ParkingSpotFactory::new(db)
        .parking_spot_number("12")
        .build()
        .await?;

    let repo = ParkingSpotRepository::new(db);
    let result = repo
        .create(param("12", "XYZ9999", "103", "C"), Uuid::new_v4(), Utc::now())
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the composite unique index on apartment and block.
///
/// Verifies that the same apartment may exist in different blocks, but a repeated
/// apartment/block pair is rejected.
///
/// Expected: Ok for a new block, Err with a unique constraint violation for a repeated pair
#[tokio::test]
async fn rejects_duplicate_apartment_and_block() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::parking_spot::ParkingSpotFactory::new(db)
        .apartment("101")
        .block("A")
        .build()
        .await?;

    let repo = ParkingSpotRepository::new(db);

    let other_block = repo
        .create(param("20", "QWE0002", "101", "B"), Uuid::new_v4(), Utc::now())
        .await;
    assert!(other_block.is_ok());

    let same_unit = repo
        .create(param("14", "QWE0001", "101", "A"), Uuid::new_v4(), Utc::now())
        .await;
    assert!(matches!(
        same_unit.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
