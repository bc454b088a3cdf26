use crate::models::{terrain::Terrain, Cell, Matrix};

/// The fixed terrain map. Rectangular and at least 1x1; never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    cells: Matrix<Terrain>,
}

impl GridMap {
    pub fn new(cells: Matrix<Terrain>) -> Result<Self, String> {
        let rows = cells.len();
        if rows == 0 {
            return Err("Map must contain at least one row.".into());
        }
        let cols = cells[0].len();
        if cols == 0 {
            return Err("Map rows must not be empty.".into());
        }
        if let Some((r, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(format!(
                "Map must be rectangular: row {r} has {} cell(s), expected {cols}.",
                row.len()
            ));
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &Matrix<Terrain> {
        &self.cells
    }

    /// Terrain at the given position, `None` when it lies outside the map.
    pub fn terrain_at(&self, row: i64, col: i64) -> Option<Terrain> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        self.cells.get(r)?.get(c).copied()
    }

    /// Out-of-bounds positions are never walkable.
    pub fn is_walkable(&self, row: i64, col: i64) -> bool {
        self.terrain_at(row, col)
            .map(Terrain::is_walkable)
            .unwrap_or(false)
    }

    /// First `PlayerStart` tile in row-major order.
    pub fn player_start(&self) -> Option<Cell> {
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|t| *t == Terrain::PlayerStart)
                .map(|c| Cell::new(r as i64, c as i64))
        })
    }
}
