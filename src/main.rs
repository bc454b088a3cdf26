use std::io;

use actix_web::{middleware, web, App, HttpServer};
use gridwalk::{
    api::{openapi::ApiDoc, routes::configure},
    config::Settings,
    data::maps::default_map,
};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let grid = web::Data::new(
        default_map().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
    );
    let bind_addr = settings.bind_addr();
    info!(
        "Map loaded: {} rows x {} cols, player start {:?}",
        grid.rows(),
        grid.cols(),
        grid.player_start()
    );

    info!("Gridwalk API started at http://{bind_addr}");
    info!("   GET  /get-map");
    info!("   POST /calculate-path");
    info!("   Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(grid.clone())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    });
    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }
    server.bind(&bind_addr)?.run().await
}
