use super::*;

/// Tests the default listing over HTTP.
///
/// Expected: 200 with the first 10 records ordered by ID
#[tokio::test]
async fn returns_first_page_by_default() {
    let app = spawn_app().await;

    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::create_parking_spot(app.db()).await.unwrap().id);
    }
    ids.sort();

    let response = app
        .client
        .get(app.url("/parking-spot"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: PaginatedParkingSpotsDto = response.json().await.unwrap();
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 10);
    assert_eq!(page.total_elements, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.sort, "id,asc");
    let returned: Vec<Uuid> = page.content.iter().map(|r| r.id).collect();
    assert_eq!(returned, ids[..10]);
}

/// Tests the page, size and sort query parameters.
///
/// Expected: 200 with the requested slice in the requested order
#[tokio::test]
async fn applies_query_parameters() {
    let app = spawn_app().await;

    for name in ["Ana", "Bruno", "Clara", "Diego"] {
        factory::parking_spot::ParkingSpotFactory::new(app.db())
            .responsible_name(name)
            .build()
            .await
            .unwrap();
    }

    let response = app
        .client
        .get(app.url("/parking-spot?page=0&size=3&sort=responsibleName,DESC"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: PaginatedParkingSpotsDto = response.json().await.unwrap();
    let names: Vec<&str> = page
        .content
        .iter()
        .map(|r| r.responsible_name.as_str())
        .collect();
    assert_eq!(names, vec!["Diego", "Clara", "Bruno"]);
    assert_eq!(page.size, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.sort, "responsibleName,desc");
}

/// Tests an unknown sort field.
///
/// Expected: 400 with an error message
#[tokio::test]
async fn rejects_unknown_sort_field() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/parking-spot?sort=password"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = response.json().await.unwrap();
    assert!(error.error.contains("password"));
}

/// Tests a page whose row offset does not fit the store.
///
/// Expected: 400 with an error message for both the largest page and an offset past
/// the signed 64-bit range
#[tokio::test]
async fn rejects_page_out_of_range() {
    let app = spawn_app().await;

    for query in [
        "page=18446744073709551615",
        "page=1000000000000000000&size=2000",
    ] {
        let response = app
            .client
            .get(app.url(&format!("/parking-spot?{}", query)))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorDto = response.json().await.unwrap();
        assert!(error.error.contains("out of range"));
    }
}

/// Tests a query parameter that does not parse.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn rejects_malformed_query() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/parking-spot?page=abc"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = response.json().await.unwrap();
    assert!(!error.error.is_empty());
}
