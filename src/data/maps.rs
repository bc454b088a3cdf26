use crate::models::grid::GridMap;

use crate::models::terrain::Terrain::{Grass as G, PlayerStart as P, Water as W};

/// The built-in 5x5 map served by the API. Water sits at (1,1) and (1,3),
/// the player starts at (2,2).
pub fn default_map() -> Result<GridMap, String> {
    GridMap::new(vec![
        vec![G, G, G, G, G],
        vec![G, W, G, W, G],
        vec![G, G, P, G, G],
        vec![G, G, G, G, G],
        vec![G, G, G, G, G],
    ])
}
