// Test fixtures - reusable test data
// Provides consistent intake data and grid helpers across test files

#![allow(dead_code)]

use artisan_intake::models::grid::{GridConfig, SlotId};
use artisan_intake::services::availability::geometry::{GridGeometry, Point};
use artisan_intake::services::availability::gesture::GridEvent;
use artisan_intake::services::availability::AvailabilityGrid;
use chrono::NaiveDate;

pub const CELL_WIDTH: f32 = 50.0;
pub const CELL_HEIGHT: f32 = 12.0;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday Nov 26, 2025, the grid's "today"
    pub fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()
    }

    /// Saturday Dec 28, 2024, a grid spanning the new year
    pub fn year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()
    }
}

/// Sample client data
pub mod clients {
    use artisan_intake::models::intake::{Contact, DwellingType, LocationForm, Parking};

    pub fn contact() -> Contact {
        Contact {
            last_name: "Dupont".to_string(),
            first_name: "Jean".to_string(),
            email: "jean.dupont@email.com".to_string(),
            phone: "0612345678".to_string(),
        }
    }

    pub fn apartment() -> LocationForm {
        LocationForm {
            number: "24".to_string(),
            street: "Rue de la Paix".to_string(),
            postal_code: "75010".to_string(),
            city: "Paris".to_string(),
            dwelling: DwellingType::Appartement,
            floor: "3".to_string(),
            access_code1: "B12#".to_string(),
            access_code2: String::new(),
            notes: "Interphone en panne".to_string(),
            parking: Parking::Non,
        }
    }
}

/// The default 08:00-20:00, 15 min, 6 day grid anchored on [`dates::anchor`].
pub fn default_grid() -> AvailabilityGrid {
    AvailabilityGrid::new(GridConfig::default(), dates::anchor())
}

pub fn geometry_for(grid: &AvailabilityGrid) -> GridGeometry {
    GridGeometry::new(
        Point::default(),
        CELL_WIDTH,
        CELL_HEIGHT,
        grid.index().total_rows(),
        grid.index().columns(),
    )
}

/// Centre of a cell in viewport coordinates.
pub fn cell_center(slot: SlotId) -> Point {
    Point::new(
        slot.column as f32 * CELL_WIDTH + CELL_WIDTH / 2.0,
        slot.row as f32 * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

/// Mouse drag down `column` from `first_row` to `last_row` inclusive.
pub fn mouse_drag(grid: &mut AvailabilityGrid, column: usize, first_row: usize, last_row: usize) {
    let geometry = geometry_for(grid);
    let start = SlotId::new(first_row, column);

    grid.handle(
        GridEvent::PointerEnter {
            slot: start,
            position: cell_center(start),
        },
        &geometry,
    );
    grid.handle(GridEvent::PointerDown { slot: start }, &geometry);
    for row in first_row + 1..=last_row {
        let slot = SlotId::new(row, column);
        grid.handle(GridEvent::PointerLeaveCell, &geometry);
        grid.handle(
            GridEvent::PointerEnter {
                slot,
                position: cell_center(slot),
            },
            &geometry,
        );
    }
    grid.handle(GridEvent::PointerUp, &geometry);
}

/// Finger drag down `column` from `first_row` to `last_row` inclusive.
pub fn touch_drag(grid: &mut AvailabilityGrid, column: usize, first_row: usize, last_row: usize) {
    let geometry = geometry_for(grid);

    grid.handle(
        GridEvent::TouchStart {
            slot: SlotId::new(first_row, column),
        },
        &geometry,
    );
    for row in first_row + 1..=last_row {
        grid.handle(
            GridEvent::TouchMove {
                position: cell_center(SlotId::new(row, column)),
            },
            &geometry,
        );
    }
    grid.handle(GridEvent::TouchEnd, &geometry);
}
