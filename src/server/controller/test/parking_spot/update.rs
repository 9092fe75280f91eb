use super::*;

/// Tests updating a parking spot over HTTP.
///
/// Expected: 200 with the new values, same ID and registration date
#[tokio::test]
async fn returns_updated_record() {
    let app = spawn_app().await;
    let created = factory::create_parking_spot(app.db()).await.unwrap();

    let response = app
        .client
        .put(app.url(&format!("/parking-spot/{}", created.id)))
        .json(&dto("77", "NEW0001", "303", "C"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let record: ParkingSpotRecordDto = response.json().await.unwrap();
    assert_eq!(record.id, created.id);
    assert_eq!(record.registration_date, created.registration_date);
    assert_eq!(record.parking_spot_number, "77");
    assert_eq!(record.license_plate_car, "NEW0001");
    assert_eq!(record.brand_car, "Renault");
}

/// Tests updating an unknown ID.
///
/// Expected: 404 with the not found message
#[tokio::test]
async fn returns_not_found_message() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url(&format!("/parking-spot/{}", Uuid::new_v4())))
        .json(&dto("77", "NEW0001", "303", "C"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Parking Spot not found.");
}

/// Tests an update taking another record's license plate.
///
/// Expected: 409 with the generic conflict message
#[tokio::test]
async fn returns_conflict_on_collision() {
    let app = spawn_app().await;
    factory::parking_spot::ParkingSpotFactory::new(app.db())
        .license_plate_car("ABC1234")
        .build()
        .await
        .unwrap();
    let other = factory::create_parking_spot(app.db()).await.unwrap();

    let response = app
        .client
        .put(app.url(&format!("/parking-spot/{}", other.id)))
        .json(&dto("77", "ABC1234", "303", "C"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        response.text().await.unwrap(),
        "CONFLICT: Parking spot data is already registered."
    );
}

/// Tests field validation on update.
///
/// Expected: 400 before the ID is looked up
#[tokio::test]
async fn returns_field_errors() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url(&format!("/parking-spot/{}", Uuid::new_v4())))
        .json(&ParkingSpotDto {
            color_car: Some(String::new()),
            ..dto("77", "NEW0001", "303", "C")
        })
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ValidationErrorDto = response.json().await.unwrap();
    assert_eq!(error.fields.len(), 1);
    assert_eq!(error.fields[0].field, "colorCar");
}
