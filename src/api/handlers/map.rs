use actix_web::{web, HttpResponse, Responder};

use crate::models::{grid::GridMap, request::MapResponse};

/// GET /get-map
/// Returns the raw contents of the built-in map.
#[utoipa::path(
    get,
    path = "/get-map",
    tag = "map",
    responses(
        (status = 200, description = "Map rows as tile codes (G grass, W water, P player start)", body = MapResponse),
    )
)]
pub async fn get_map(grid: web::Data<GridMap>) -> impl Responder {
    HttpResponse::Ok().json(MapResponse {
        map: grid.cells().clone(),
    })
}
