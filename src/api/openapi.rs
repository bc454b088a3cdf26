use utoipa::OpenApi;

use crate::models::{
    request::{MapResponse, PathRequest, PathResponse},
    terrain::Terrain,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gridwalk API",
        description = "Serves a fixed tile map and walks a greedy orthogonal route between two of its cells.",
        version = "0.1.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::map::get_map,
        crate::api::handlers::path::calculate_path,
    ),
    components(
        schemas(Terrain, MapResponse, PathRequest, PathResponse)
    ),
    tags(
        (name = "map",  description = "Map contents"),
        (name = "path", description = "Route calculation"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_operations() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/get-map"));
        assert!(doc.paths.paths.contains_key("/calculate-path"));
    }
}
