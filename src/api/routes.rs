use actix_web::web;

use crate::api::handlers::{calculate_path, get_map};

/// Both endpoints answer whatever the request method.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/get-map", web::route().to(get_map))
        .route("/calculate-path", web::route().to(calculate_path));
}
