//! Row partitioning for row-major grids

/// Row lengths for a grid of `cell_count` cells laid out `column_count` wide
///
/// Every row but the last holds exactly `column_count` cells; the last row
/// holds whatever remains. An empty grid has no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    lengths: Vec<usize>,
}

impl RowLayout {
    /// Partition `cell_count` cells into rows of at most `column_count`
    ///
    /// `column_count` must be at least 1; callers validate that first.
    pub fn partition(cell_count: usize, column_count: usize) -> Self {
        debug_assert!(column_count >= 1);

        let mut lengths = Vec::with_capacity(cell_count.div_ceil(column_count.max(1)));
        let mut remaining = cell_count;
        while remaining > 0 {
            let in_row = column_count.min(remaining);
            lengths.push(in_row);
            remaining -= in_row;
        }

        Self { lengths }
    }

    pub fn row_lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn row_count(&self) -> usize {
        self.lengths.len()
    }

    pub fn cell_count(&self) -> usize {
        self.lengths.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_uneven() {
        let layout = RowLayout::partition(5, 2);
        assert_eq!(layout.row_lengths(), &[2, 2, 1]);
        assert_eq!(layout.row_count(), 3);
        assert_eq!(layout.cell_count(), 5);
    }

    #[test]
    fn test_partition_even() {
        assert_eq!(RowLayout::partition(6, 3).row_lengths(), &[3, 3]);
    }

    #[test]
    fn test_partition_empty() {
        let layout = RowLayout::partition(0, 4);
        assert_eq!(layout.row_count(), 0);
        assert_eq!(layout.cell_count(), 0);
    }

    #[test]
    fn test_partition_fewer_cells_than_columns() {
        assert_eq!(RowLayout::partition(3, 10).row_lengths(), &[3]);
    }
}
