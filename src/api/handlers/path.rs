use actix_web::{web, HttpResponse, Responder};

use crate::{
    logic::navigator::find_route,
    models::{
        grid::GridMap,
        request::{PathRequest, PathResponse},
    },
};

/// POST /calculate-path
/// Walks from `start` towards `goal` on the built-in map.
/// An unreachable goal is not an error: the returned path just ends early.
#[utoipa::path(
    post,
    path = "/calculate-path",
    tag = "path",
    request_body = PathRequest,
    responses(
        (status = 200, description = "Walked route, possibly ending short of the goal", body = PathResponse),
        (status = 400, description = "Request body is not well-formed JSON; the body is the decoder's message", body = String, content_type = "text/plain"),
    )
)]
pub async fn calculate_path(grid: web::Data<GridMap>, body: web::Bytes) -> impl Responder {
    let PathRequest { start, goal } = match PathRequest::from_body(&body) {
        Ok(request) => request,
        Err(message) => {
            log::debug!("rejected request body: {message}");
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(message);
        }
    };
    let path = find_route(&grid, start, goal);
    HttpResponse::Ok().json(PathResponse { path })
}
