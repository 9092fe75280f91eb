use super::*;

/// Tests fetching a parking spot over HTTP.
///
/// Expected: 200 with the record
#[tokio::test]
async fn returns_record() {
    let app = spawn_app().await;
    let created = factory::parking_spot::ParkingSpotFactory::new(app.db())
        .license_plate_car("ABC1234")
        .build()
        .await
        .unwrap();

    let response = app
        .client
        .get(app.url(&format!("/parking-spot/{}", created.id)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let record: ParkingSpotRecordDto = response.json().await.unwrap();
    assert_eq!(record.id, created.id);
    assert_eq!(record.license_plate_car, "ABC1234");
}

/// Tests fetching an unknown ID.
///
/// Expected: 404 with the not found message
#[tokio::test]
async fn returns_not_found_message() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url(&format!("/parking-spot/{}", Uuid::new_v4())))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Parking Spot not found.");
}

/// Tests a path segment that is not a UUID.
///
/// Expected: 400
#[tokio::test]
async fn rejects_malformed_id() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/parking-spot/not-a-uuid"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
