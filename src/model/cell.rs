//! Cell values and identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid (0-based column `x`, row `y`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub x: usize,
    pub y: usize,
}

impl CellPosition {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Presentation identifier for this position
    pub const fn id(self) -> CellId {
        CellId::from_xy(self.x, self.y)
    }
}

/// Stable 1-based "column-row" identifier used to address the presentation layer
///
/// Column 3, row 2 (0-based `x = 2, y = 1`) displays as `"3-2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    column: usize,
    row: usize,
}

impl CellId {
    /// Build an identifier from 0-based coordinates
    pub const fn from_xy(x: usize, y: usize) -> Self {
        Self {
            column: x + 1,
            row: y + 1,
        }
    }

    /// 1-based column number
    pub const fn column(self) -> usize {
        self.column
    }

    /// 1-based row number
    pub const fn row(self) -> usize {
        self.row
    }

    /// The 0-based position this identifier addresses
    pub const fn position(self) -> CellPosition {
        CellPosition::new(self.column - 1, self.row - 1)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.column, self.row)
    }
}

/// A value stored in a cell
///
/// The grid never interprets these; it only stores and reports them.
/// Unset cells are represented as `Option::None` at the storage level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            // Integral numbers print without a trailing ".0"
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_id_is_one_based() {
        assert_eq!(CellId::from_xy(2, 1).to_string(), "3-2");
        assert_eq!(CellId::from_xy(0, 0).to_string(), "1-1");
    }

    #[test]
    fn test_cell_id_round_trips_position() {
        let pos = CellPosition::new(4, 7);
        assert_eq!(pos.id().position(), pos);
        assert_eq!(pos.id().column(), 5);
        assert_eq!(pos.id().row(), 8);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(CellValue::Number(0.0).to_string(), "0");
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(-3.0).to_string(), "-3");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_untagged_deserialize() {
        let values: Vec<Option<CellValue>> =
            serde_json::from_str(r#"[1, "two", null, true, 2.5]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Some(CellValue::Number(1.0)),
                Some(CellValue::text("two")),
                None,
                Some(CellValue::Bool(true)),
                Some(CellValue::Number(2.5)),
            ]
        );
    }
}
