use std::fmt;

use serde::{
    de::{self, IgnoredAny, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

pub mod grid;
pub mod request;
pub mod terrain;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A (row, col) position on the map.
///
/// Coordinates are signed: requests may name positions outside the grid and
/// those are carried through untouched. On the wire a cell is an array
/// `[row, col]`. Decoding is lenient about its length: missing entries and
/// `null` read as 0, entries past the second are skipped, and a `null` cell
/// is the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[i64; 2]")]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    pub fn distance(&self, other: &Cell) -> u64 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<[i64; 2]> for Cell {
    fn from([row, col]: [i64; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for [i64; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of integer coordinates")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Cell, A::Error> {
        let row = seq.next_element::<Option<i64>>()?;
        let col = match row {
            Some(_) => seq.next_element::<Option<i64>>()?,
            None => None,
        };
        if col.is_some() {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
        }
        Ok(Cell::new(row.flatten().unwrap_or(0), col.flatten().unwrap_or(0)))
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Cell, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_cell_serializes_as_pair() {
        let json = serde_json::to_string(&Cell::new(2, -1)).unwrap();
        assert_eq!(json, "[2,-1]");
    }

    #[test]
    fn test_short_array_is_zero_padded() {
        assert_eq!(parse("[]").unwrap(), Cell::new(0, 0));
        assert_eq!(parse("[3]").unwrap(), Cell::new(3, 0));
    }

    #[test]
    fn test_extra_elements_are_dropped() {
        assert_eq!(parse("[1,2,3]").unwrap(), Cell::new(1, 2));
        assert_eq!(parse(r#"[1,2,"x",{"y":[]}]"#).unwrap(), Cell::new(1, 2));
    }

    #[test]
    fn test_null_reads_as_zero() {
        assert_eq!(parse("null").unwrap(), Cell::default());
        assert_eq!(parse("[null,4]").unwrap(), Cell::new(0, 4));
    }

    #[test]
    fn test_non_integer_coordinates_are_rejected() {
        assert!(parse(r#""somewhere""#).is_err());
        assert!(parse(r#"{"row":1,"col":2}"#).is_err());
        assert!(parse(r#"["1",2]"#).is_err());
        assert!(parse("[1.5,2]").is_err());
    }

    #[test]
    fn test_distance_is_manhattan() {
        assert_eq!(Cell::new(2, 2).distance(&Cell::new(0, 0)), 4);
        assert_eq!(Cell::new(-1, 3).distance(&Cell::new(1, 3)), 2);
    }
}
