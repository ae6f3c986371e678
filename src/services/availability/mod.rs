//! Availability grid: a drag-to-select weekly time grid and its compilation
//! into booked intervals.

pub mod compiler;
pub mod geometry;
pub mod gesture;
pub mod runs;
pub mod selection;
pub mod time_index;

use chrono::NaiveDate;

use crate::models::availability::AvailabilityInterval;
use crate::models::grid::{GridConfig, SlotId};

use self::geometry::CellLocator;
use self::gesture::{GridEvent, GridState, HoverTooltip};
use self::runs::BlockLabel;
use self::selection::SelectionSet;
use self::time_index::TimeIndex;

/// One availability-screen session: the grid shape plus the interactive state.
#[derive(Debug, Clone)]
pub struct AvailabilityGrid {
    index: TimeIndex,
    state: GridState,
}

impl AvailabilityGrid {
    pub fn new(config: GridConfig, today: NaiveDate) -> Self {
        Self {
            index: TimeIndex::new(config, today),
            state: GridState::new(),
        }
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    pub fn tooltip(&self) -> Option<&HoverTooltip> {
        self.state.tooltip.as_ref()
    }

    pub fn is_selected(&self, slot: SlotId) -> bool {
        self.state.selection.contains(slot)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn handle(&mut self, event: GridEvent, locator: &dyn CellLocator) {
        let state = std::mem::take(&mut self.state);
        self.state = gesture::reduce(state, event, &self.index, locator);
    }

    pub fn block_label(&self, slot: SlotId) -> Option<BlockLabel> {
        runs::block_label(&self.state.selection, &self.index, slot)
    }

    pub fn compile(&self) -> Vec<AvailabilityInterval> {
        compiler::compile(&self.state.selection, &self.index)
    }

    /// Drop every booked slot and any drag in progress.
    pub fn clear(&mut self) {
        self.state = GridState::new();
    }
}
