//! Run-length encoding of the selection into per-day intervals.

use crate::models::availability::AvailabilityInterval;
use crate::models::grid::SlotId;

use super::selection::SelectionSet;
use super::time_index::TimeIndex;

/// Flatten the selection into intervals, columns left to right and runs top to
/// bottom within each column. An empty selection yields an empty list.
pub fn compile(selection: &SelectionSet, index: &TimeIndex) -> Vec<AvailabilityInterval> {
    let mut intervals = Vec::new();

    for column in 0..index.columns() {
        let rows = selection.rows_in_column(column);
        let Some((&first, rest)) = rows.split_first() else {
            continue;
        };

        let day = index.date_of_column(column);
        let mut start_row = first;
        let mut prev_row = first;

        for &row in rest.iter().chain(std::iter::once(&usize::MAX)) {
            if row == prev_row + 1 {
                prev_row = row;
                continue;
            }

            intervals.push(AvailabilityInterval {
                day,
                start: index.slot_time(start_row),
                end: index.slot_time(prev_row + 1),
            });
            start_row = row;
            prev_row = row;
        }
    }

    log::debug!(
        "Compiled {} selected slots into {} availability intervals",
        selection.len(),
        intervals.len()
    );

    intervals
}

/// Inverse of [`compile`]: the cells covered by `intervals`.
///
/// Intervals on days or at times outside the grid are skipped.
pub fn expand(intervals: &[AvailabilityInterval], index: &TimeIndex) -> SelectionSet {
    let config = index.config();
    let grid_start = config.start_hour * 60;

    intervals
        .iter()
        .filter_map(|interval| {
            let offset = (interval.day - index.anchor()).num_days();
            let column = usize::try_from(offset).ok().filter(|c| *c < index.columns())?;
            Some((interval, column))
        })
        .flat_map(|(interval, column)| {
            let first = interval.start.minutes().saturating_sub(grid_start) / config.slot_minutes;
            let last = interval.end.minutes().saturating_sub(grid_start) / config.slot_minutes;
            (first as usize..last as usize).map(move |row| SlotId::new(row, column))
        })
        .filter(|slot| config.contains(*slot))
        .collect()
}
