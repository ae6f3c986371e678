//! Gesture controller for the availability grid.
//!
//! Pointer and touch input is folded into [`GridState`] by [`reduce`], a pure
//! function of the previous state and one [`GridEvent`]. The UI owns the state
//! value and hands it back in on every event, so the whole drag behaviour can be
//! driven from tests without a rendering surface.
//!
//! A drag fixes its [`DragMode`] on the cell where it starts: starting on a free
//! cell books every cell the pointer crosses, starting on a booked cell frees
//! them, whatever each crossed cell held before.

use crate::models::grid::{DragMode, SlotId};

use super::geometry::{CellLocator, Point};
use super::selection::SelectionSet;
use super::time_index::TimeIndex;

/// Offset between the pointer and the floating tooltip's anchor.
pub const TOOLTIP_OFFSET: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragMode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverTooltip {
    pub label: String,
    pub position: Point,
}

/// Everything the availability screen mutates while the user interacts with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridState {
    pub selection: SelectionSet,
    pub drag: DragState,
    pub tooltip: Option<HoverTooltip>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridEvent {
    /// Mouse button pressed over a cell.
    PointerDown { slot: SlotId },
    /// Mouse entered a cell.
    PointerEnter { slot: SlotId, position: Point },
    /// Mouse moved within a cell.
    PointerMove { slot: SlotId, position: Point },
    /// Mouse left a cell (it may be entering a neighbour).
    PointerLeaveCell,
    /// Mouse button released anywhere.
    PointerUp,
    /// Mouse left the grid container.
    PointerLeaveGrid,
    /// Finger landed on a cell.
    TouchStart { slot: SlotId },
    /// Finger moved; the covering cell is found by hit-testing `position`.
    TouchMove { position: Point },
    TouchEnd,
}

pub fn reduce(
    mut state: GridState,
    event: GridEvent,
    index: &TimeIndex,
    locator: &dyn CellLocator,
) -> GridState {
    let config = index.config();

    match event {
        GridEvent::PointerDown { slot } | GridEvent::TouchStart { slot } => {
            if !config.contains(slot) {
                log::debug!("Ignoring gesture start outside grid at {}", slot);
                return state;
            }
            let mode = if state.selection.contains(slot) {
                DragMode::Remove
            } else {
                DragMode::Add
            };
            state.drag = DragState::Dragging(mode);
            state.selection.toggle(slot, Some(mode));
        }
        GridEvent::PointerEnter { slot, position } => {
            if !config.contains(slot) {
                return state;
            }
            if let DragState::Dragging(mode) = state.drag {
                state.selection.toggle(slot, Some(mode));
            }
            state.tooltip = Some(tooltip_for(index, slot, position));
        }
        GridEvent::PointerMove { slot, position } => {
            if state.tooltip.is_some() && config.contains(slot) {
                state.tooltip = Some(tooltip_for(index, slot, position));
            }
        }
        GridEvent::PointerLeaveCell => {
            // Leave/enter pairs fire on every cell boundary mid-drag.
            if !state.is_dragging() {
                state.tooltip = None;
            }
        }
        GridEvent::PointerUp | GridEvent::TouchEnd => {
            state.drag = DragState::Idle;
        }
        GridEvent::PointerLeaveGrid => {
            state.drag = DragState::Idle;
            state.tooltip = None;
        }
        GridEvent::TouchMove { position } => {
            let DragState::Dragging(mode) = state.drag else {
                return state;
            };
            match locator.cell_at(position) {
                Some(slot) if config.contains(slot) => state.selection.toggle(slot, Some(mode)),
                Some(slot) => log::debug!("Ignoring touch outside grid at {}", slot),
                None => {}
            }
        }
    }

    state
}

fn tooltip_for(index: &TimeIndex, slot: SlotId, position: Point) -> HoverTooltip {
    HoverTooltip {
        label: index.row_range_label(slot.row),
        position: position.offset(TOOLTIP_OFFSET, TOOLTIP_OFFSET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::GridConfig;
    use crate::services::availability::geometry::GridGeometry;
    use chrono::NaiveDate;

    fn index() -> TimeIndex {
        TimeIndex::new(
            GridConfig::default(),
            NaiveDate::from_ymd_opt(2025, 11, 26).unwrap(),
        )
    }

    fn geometry() -> GridGeometry {
        GridGeometry::new(Point::new(0.0, 0.0), 50.0, 10.0, 48, 6)
    }

    fn run(state: GridState, events: &[GridEvent]) -> GridState {
        let index = index();
        let geometry = geometry();
        events
            .iter()
            .fold(state, |state, event| reduce(state, *event, &index, &geometry))
    }

    fn enter(row: usize, column: usize) -> GridEvent {
        GridEvent::PointerEnter {
            slot: SlotId::new(row, column),
            position: Point::new(column as f32 * 50.0 + 5.0, row as f32 * 10.0 + 5.0),
        }
    }

    #[test]
    fn test_mouse_down_on_free_cell_starts_add_drag() {
        let state = run(
            GridState::new(),
            &[GridEvent::PointerDown {
                slot: SlotId::new(3, 0),
            }],
        );
        assert_eq!(state.drag, DragState::Dragging(DragMode::Add));
        assert!(state.selection.contains(SlotId::new(3, 0)));
    }

    #[test]
    fn test_add_drag_keeps_already_selected_cells() {
        let mut start = GridState::new();
        start.selection.add(SlotId::new(5, 2));

        let state = run(
            start,
            &[
                GridEvent::PointerDown {
                    slot: SlotId::new(4, 2),
                },
                GridEvent::PointerLeaveCell,
                enter(5, 2),
                GridEvent::PointerLeaveCell,
                enter(6, 2),
                GridEvent::PointerUp,
            ],
        );

        for row in 4..=6 {
            assert!(state.selection.contains(SlotId::new(row, 2)));
        }
        assert_eq!(state.selection.len(), 3);
        assert_eq!(state.drag, DragState::Idle);
    }

    #[test]
    fn test_remove_drag_clears_crossed_cells() {
        let start = GridState {
            selection: [SlotId::new(0, 1), SlotId::new(1, 1), SlotId::new(3, 1)]
                .into_iter()
                .collect(),
            ..GridState::default()
        };

        let state = run(
            start,
            &[
                GridEvent::PointerDown {
                    slot: SlotId::new(0, 1),
                },
                enter(1, 1),
                enter(2, 1),
                GridEvent::PointerUp,
            ],
        );

        assert!(!state.selection.contains(SlotId::new(0, 1)));
        assert!(!state.selection.contains(SlotId::new(1, 1)));
        assert!(!state.selection.contains(SlotId::new(2, 1)));
        assert!(state.selection.contains(SlotId::new(3, 1)));
    }

    #[test]
    fn test_enter_without_drag_only_updates_tooltip() {
        let state = run(GridState::new(), &[enter(4, 0)]);
        assert!(state.selection.is_empty());
        let tooltip = state.tooltip.expect("tooltip shown on hover");
        assert_eq!(tooltip.label, "09:00 - 09:15");
        assert_eq!(tooltip.position, Point::new(15.0, 55.0));
    }

    #[test]
    fn test_pointer_move_follows_cursor_only_when_tooltip_visible() {
        let moved = GridEvent::PointerMove {
            slot: SlotId::new(0, 0),
            position: Point::new(20.0, 3.0),
        };
        let hidden = run(GridState::new(), &[moved]);
        assert_eq!(hidden.tooltip, None);

        let shown = run(GridState::new(), &[enter(0, 0), moved]);
        assert_eq!(shown.tooltip.unwrap().position, Point::new(30.0, 13.0));
    }

    #[test]
    fn test_tooltip_survives_cell_leave_during_drag() {
        let state = run(
            GridState::new(),
            &[
                enter(2, 0),
                GridEvent::PointerDown {
                    slot: SlotId::new(2, 0),
                },
                GridEvent::PointerLeaveCell,
            ],
        );
        assert!(state.tooltip.is_some());

        let idle = run(state, &[GridEvent::PointerUp, GridEvent::PointerLeaveCell]);
        assert_eq!(idle.tooltip, None);
    }

    #[test]
    fn test_leaving_grid_ends_drag_and_hides_tooltip() {
        let state = run(
            GridState::new(),
            &[
                GridEvent::PointerDown {
                    slot: SlotId::new(0, 0),
                },
                enter(1, 0),
                GridEvent::PointerLeaveGrid,
                enter(2, 0),
            ],
        );
        assert!(!state.is_dragging());
        assert!(!state.selection.contains(SlotId::new(2, 0)));
        assert_eq!(state.selection.len(), 2);
    }

    #[test]
    fn test_touch_drag_hit_tests_finger_position() {
        let state = run(
            GridState::new(),
            &[
                GridEvent::TouchStart {
                    slot: SlotId::new(10, 3),
                },
                GridEvent::TouchMove {
                    position: Point::new(175.0, 115.0),
                },
                GridEvent::TouchMove {
                    position: Point::new(175.0, 125.0),
                },
                GridEvent::TouchMove {
                    position: Point::new(900.0, 125.0),
                },
                GridEvent::TouchEnd,
            ],
        );

        assert_eq!(state.selection.rows_in_column(3), vec![10, 11, 12]);
        assert_eq!(state.selection.len(), 3);
        assert_eq!(state.drag, DragState::Idle);
    }

    #[test]
    fn test_touch_move_ignores_cells_the_grid_does_not_have() {
        // Geometry laid out for more rows than the grid configuration holds
        let oversized = GridGeometry::new(Point::new(0.0, 0.0), 50.0, 10.0, 60, 6);
        let index = index();
        let state = [
            GridEvent::TouchStart {
                slot: SlotId::new(47, 0),
            },
            GridEvent::TouchMove {
                position: Point::new(25.0, 485.0),
            },
            GridEvent::TouchMove {
                position: Point::new(25.0, 535.0),
            },
        ]
        .iter()
        .fold(GridState::new(), |state, event| {
            reduce(state, *event, &index, &oversized)
        });

        assert!(state.is_dragging());
        assert_eq!(state.selection.rows_in_column(0), vec![47]);
    }

    #[test]
    fn test_touch_move_without_drag_is_ignored() {
        let state = run(
            GridState::new(),
            &[GridEvent::TouchMove {
                position: Point::new(5.0, 5.0),
            }],
        );
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_out_of_bounds_slots_are_ignored() {
        let state = run(
            GridState::new(),
            &[GridEvent::PointerDown {
                slot: SlotId::new(48, 0),
            }],
        );
        assert!(!state.is_dragging());
        assert!(state.selection.is_empty());
    }
}
