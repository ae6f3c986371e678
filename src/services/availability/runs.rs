//! Contiguous-run detection within a day column.
//!
//! Each query scans up and down from the cell on demand. At grid sizes of a few
//! hundred cells this is cheap enough to run for every cell on every frame; a
//! much larger grid would want run boundaries maintained incrementally as the
//! selection changes.

use crate::models::grid::SlotId;

use super::selection::SelectionSet;
use super::time_index::TimeIndex;

/// Maximal vertical block of selected rows in one column, `[start_row, end_row_exclusive)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub column: usize,
    pub start_row: usize,
    pub end_row_exclusive: usize,
}

impl Run {
    pub fn len(&self) -> usize {
        self.end_row_exclusive - self.start_row
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row carrying the run's label. Even-length runs pick the earlier of the two middle rows.
    pub fn midpoint(&self) -> usize {
        (self.start_row + self.end_row_exclusive - 1) / 2
    }
}

/// Text drawn once per run, on its midpoint cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLabel {
    pub start_label: String,
    pub end_label: String,
}

pub fn run_for(selection: &SelectionSet, slot: SlotId, total_rows: usize) -> Option<Run> {
    if !selection.contains(slot) {
        return None;
    }

    let column = slot.column;

    let mut start_row = slot.row;
    while start_row > 0 && selection.contains(SlotId::new(start_row - 1, column)) {
        start_row -= 1;
    }

    let mut end_row_exclusive = slot.row + 1;
    while end_row_exclusive < total_rows
        && selection.contains(SlotId::new(end_row_exclusive, column))
    {
        end_row_exclusive += 1;
    }

    Some(Run {
        column,
        start_row,
        end_row_exclusive,
    })
}

pub fn is_midpoint(selection: &SelectionSet, slot: SlotId, total_rows: usize) -> bool {
    run_for(selection, slot, total_rows).is_some_and(|run| run.midpoint() == slot.row)
}

pub fn block_label(selection: &SelectionSet, index: &TimeIndex, slot: SlotId) -> Option<BlockLabel> {
    let run = run_for(selection, slot, index.total_rows())?;
    if run.midpoint() != slot.row {
        return None;
    }

    Some(BlockLabel {
        start_label: index.time_of_row(run.start_row),
        end_label: index.time_of_row(run.end_row_exclusive),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::GridConfig;
    use chrono::NaiveDate;

    const ROWS: usize = 48;

    fn column_selection(column: usize, rows: &[usize]) -> SelectionSet {
        rows.iter().map(|&row| SlotId::new(row, column)).collect()
    }

    #[test]
    fn test_unselected_cell_has_no_run() {
        let selection = column_selection(0, &[3, 4]);
        assert_eq!(run_for(&selection, SlotId::new(5, 0), ROWS), None);
        assert_eq!(run_for(&selection, SlotId::new(3, 1), ROWS), None);
    }

    #[test]
    fn test_run_extends_both_directions() {
        let selection = column_selection(2, &[4, 5, 6, 7, 9]);
        let run = run_for(&selection, SlotId::new(6, 2), ROWS).unwrap();
        assert_eq!(
            run,
            Run {
                column: 2,
                start_row: 4,
                end_row_exclusive: 8
            }
        );
        assert_eq!(run.len(), 4);
    }

    #[test]
    fn test_run_stops_at_grid_edges() {
        let selection = column_selection(0, &[0, 1, 46, 47]);
        assert_eq!(run_for(&selection, SlotId::new(1, 0), ROWS).unwrap().start_row, 0);
        assert_eq!(
            run_for(&selection, SlotId::new(46, 0), ROWS).unwrap().end_row_exclusive,
            48
        );
    }

    #[test]
    fn test_even_run_midpoint_biases_earlier() {
        let selection = column_selection(0, &[4, 5, 6, 7]);
        assert!(is_midpoint(&selection, SlotId::new(5, 0), ROWS));
        assert!(!is_midpoint(&selection, SlotId::new(6, 0), ROWS));
    }

    #[test]
    fn test_single_cell_run_is_its_own_midpoint() {
        let selection = column_selection(3, &[10]);
        assert!(is_midpoint(&selection, SlotId::new(10, 3), ROWS));
    }

    #[test]
    fn test_exactly_one_midpoint_per_run() {
        let selection = column_selection(1, &[0, 1, 2, 5, 6, 10, 11, 12, 13, 14]);
        let midpoints: Vec<usize> = (0..ROWS)
            .filter(|&row| is_midpoint(&selection, SlotId::new(row, 1), ROWS))
            .collect();
        assert_eq!(midpoints, vec![1, 5, 12]);
    }

    #[test]
    fn test_block_label_on_midpoint_only() {
        let index = TimeIndex::new(
            GridConfig::default(),
            NaiveDate::from_ymd_opt(2025, 11, 26).unwrap(),
        );
        let selection = column_selection(0, &[4, 5, 6, 7]);

        assert_eq!(
            block_label(&selection, &index, SlotId::new(5, 0)),
            Some(BlockLabel {
                start_label: "09:00".to_string(),
                end_label: "10:00".to_string(),
            })
        );
        assert_eq!(block_label(&selection, &index, SlotId::new(4, 0)), None);
        assert_eq!(block_label(&selection, &index, SlotId::new(8, 0)), None);
    }
}
