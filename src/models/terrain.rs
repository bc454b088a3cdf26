use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label of a single map tile. Serialised as its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Terrain {
    #[serde(rename = "G")]
    Grass,
    #[serde(rename = "W")]
    Water,
    /// Initial player position; walkable like grass.
    #[serde(rename = "P")]
    PlayerStart,
}

impl Terrain {
    pub fn is_walkable(self) -> bool {
        !matches!(self, Terrain::Water)
    }
}
