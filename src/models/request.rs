use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{terrain::Terrain, Cell, Matrix};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapResponse {
    /// Raw map contents, one array of tile codes per row.
    #[schema(value_type = Vec<Vec<Terrain>>)]
    pub map: Matrix<Terrain>,
}

/// Body of `POST /calculate-path`. Coordinates are not bounds-checked and a
/// missing cell is the origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PathRequest {
    #[serde(default)]
    #[schema(value_type = Vec<i64>, example = json!([2, 2]))]
    pub start: Cell,
    #[serde(default)]
    #[schema(value_type = Vec<i64>, example = json!([0, 0]))]
    pub goal: Cell,
}

impl PathRequest {
    /// Decodes the first JSON value of a request body; anything after it is ignored.
    /// A top-level `null` is the all-zero request. On failure the decoder's
    /// message is returned.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<PathRequest>>()
            .next()
        {
            Some(Ok(request)) => Ok(request.unwrap_or_default()),
            Some(Err(e)) => Err(e.to_string()),
            None => Err("request body is empty".into()),
        }
    }
}

/// The walked route. When its last cell is not the goal, no complete path was found.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PathResponse {
    #[schema(value_type = Vec<Vec<i64>>, example = json!([[2, 2], [1, 2], [0, 2], [0, 1], [0, 0]]))]
    pub path: Vec<Cell>,
}
