use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::parking_spot::{
        self, create_parking_spot, delete_parking_spot, get_parking_spot, get_parking_spots,
        update_parking_spot,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Parking Control API", description = "Parking spot registration"),
    paths(
        parking_spot::create_parking_spot,
        parking_spot::get_parking_spots,
        parking_spot::get_parking_spot,
        parking_spot::update_parking_spot,
        parking_spot::delete_parking_spot,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/parking-spot",
            post(create_parking_spot).get(get_parking_spots),
        )
        .route(
            "/parking-spot/{id}",
            get(get_parking_spot)
                .put(update_parking_spot)
                .delete(delete_parking_spot),
        )
        .route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
