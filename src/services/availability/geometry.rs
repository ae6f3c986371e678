//! Toolkit-agnostic cell hit-testing.
//!
//! Touch input does not deliver per-cell enter events, so the gesture
//! controller resolves the cell under a finger from its coordinates through
//! [`CellLocator`].

use crate::models::grid::SlotId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CellRect {
    /// Half-open on the right and bottom edges so neighbouring cells never both match.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Resolves the grid cell covering a viewport position.
pub trait CellLocator {
    fn cell_at(&self, point: Point) -> Option<SlotId>;
}

/// Uniform grid laid out from `origin`, row-major, with equal-sized cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin: Point,
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: usize,
    pub columns: usize,
}

impl GridGeometry {
    pub fn new(origin: Point, cell_width: f32, cell_height: f32, rows: usize, columns: usize) -> Self {
        Self {
            origin,
            cell_width,
            cell_height,
            rows,
            columns,
        }
    }

    /// Split a bounding box evenly into `rows × columns` cells.
    pub fn fit(bounds: CellRect, rows: usize, columns: usize) -> Self {
        Self::new(
            Point::new(bounds.x, bounds.y),
            bounds.width / columns.max(1) as f32,
            bounds.height / rows.max(1) as f32,
            rows,
            columns,
        )
    }

    pub fn bounds(&self) -> CellRect {
        CellRect {
            x: self.origin.x,
            y: self.origin.y,
            width: self.cell_width * self.columns as f32,
            height: self.cell_height * self.rows as f32,
        }
    }

    /// Points along the segment `from → to`, at most half a cell apart and
    /// ending on `to`. Pointer samples can be several cells apart.
    pub fn trace(&self, from: Point, to: Point) -> Vec<Point> {
        let step = (self.cell_width.min(self.cell_height) / 2.0).max(1.0);
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let steps = ((dx * dx + dy * dy).sqrt() / step).ceil().max(1.0) as usize;

        (1..=steps)
            .map(|i| {
                let t = i as f32 / steps as f32;
                Point::new(from.x + dx * t, from.y + dy * t)
            })
            .collect()
    }

    pub fn cell_rect(&self, slot: SlotId) -> CellRect {
        CellRect {
            x: self.origin.x + slot.column as f32 * self.cell_width,
            y: self.origin.y + slot.row as f32 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }
}

impl CellLocator for GridGeometry {
    fn cell_at(&self, point: Point) -> Option<SlotId> {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return None;
        }
        if !self.bounds().contains(point) {
            return None;
        }

        let column = ((point.x - self.origin.x) / self.cell_width).floor() as usize;
        let row = ((point.y - self.origin.y) / self.cell_height).floor() as usize;

        // Float rounding at the far edge can land one past the last index.
        Some(SlotId::new(row.min(self.rows - 1), column.min(self.columns - 1)))
    }
}
