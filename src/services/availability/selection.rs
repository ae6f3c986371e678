//! The set of booked grid cells.

use std::collections::BTreeSet;

use crate::models::grid::{DragMode, SlotId};

/// Booked cells. Everything the grid displays is derived from this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    slots: BTreeSet<SlotId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.slots.contains(&slot)
    }

    pub fn add(&mut self, slot: SlotId) {
        self.slots.insert(slot);
    }

    pub fn remove(&mut self, slot: SlotId) {
        self.slots.remove(&slot);
    }

    /// Without a mode, flips membership. With a mode, forces the outcome, so
    /// re-adding a present slot or removing an absent one changes nothing.
    pub fn toggle(&mut self, slot: SlotId, mode: Option<DragMode>) {
        let mode = mode.unwrap_or(if self.contains(slot) {
            DragMode::Remove
        } else {
            DragMode::Add
        });

        match mode {
            DragMode::Add => self.add(slot),
            DragMode::Remove => self.remove(slot),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Row-major order: by row, then column.
    pub fn iter(&self) -> impl Iterator<Item = &SlotId> {
        self.slots.iter()
    }

    /// Selected rows of one column, ascending.
    pub fn rows_in_column(&self, column: usize) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .slots
            .iter()
            .filter(|slot| slot.column == column)
            .map(|slot| slot.row)
            .collect();
        rows.sort_unstable();
        rows
    }
}

impl FromIterator<SlotId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = SlotId>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_without_mode_flips() {
        let mut selection = SelectionSet::new();
        let slot = SlotId::new(3, 1);
        selection.toggle(slot, None);
        assert!(selection.contains(slot));
        selection.toggle(slot, None);
        assert!(!selection.contains(slot));
    }

    #[test]
    fn test_forced_add_is_idempotent() {
        let mut selection = SelectionSet::new();
        let slot = SlotId::new(0, 0);
        selection.toggle(slot, Some(DragMode::Add));
        selection.toggle(slot, Some(DragMode::Add));
        assert!(selection.contains(slot));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_forced_remove_on_absent_slot_is_noop() {
        let mut selection: SelectionSet = [SlotId::new(1, 1)].into_iter().collect();
        let before = selection.clone();
        selection.toggle(SlotId::new(2, 2), Some(DragMode::Remove));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_rows_in_column_sorted_and_filtered() {
        let selection: SelectionSet = [
            SlotId::new(9, 2),
            SlotId::new(1, 2),
            SlotId::new(4, 0),
            SlotId::new(5, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(selection.rows_in_column(2), vec![1, 5, 9]);
        assert_eq!(selection.rows_in_column(0), vec![4]);
        assert!(selection.rows_in_column(3).is_empty());
    }

    #[test]
    fn test_iter_is_row_major_regardless_of_insertion_order() {
        let selection: SelectionSet = [
            SlotId::new(7, 0),
            SlotId::new(2, 4),
            SlotId::new(2, 1),
            SlotId::new(0, 5),
        ]
        .into_iter()
        .collect();
        let order: Vec<SlotId> = selection.iter().copied().collect();
        assert_eq!(
            order,
            vec![
                SlotId::new(0, 5),
                SlotId::new(2, 1),
                SlotId::new(2, 4),
                SlotId::new(7, 0),
            ]
        );
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut selection: SelectionSet = [SlotId::new(0, 0), SlotId::new(1, 0)].into_iter().collect();
        selection.clear();
        assert!(selection.is_empty());
    }
}
