//! Availability grid screen.
//!
//! The grid is painted in one allocated rect. Each frame the raw pointer and
//! touch input is translated into [`GridEvent`]s for the grid's gesture
//! reducer, then the updated selection is drawn.

use egui::{
    Align2, Color32, CursorIcon, Event, FontId, PointerButton, Pos2, Rect, RichText, Sense, Stroke,
    TouchId, TouchPhase,
};

use crate::models::grid::SlotId;
use crate::services::availability::geometry::{CellLocator, CellRect, GridGeometry, Point};
use crate::services::availability::gesture::GridEvent;
use crate::services::availability::runs::BlockLabel;
use crate::services::availability::AvailabilityGrid;

const HEADER_HEIGHT: f32 = 36.0;
const HOUR_COLUMN_WIDTH: f32 = 44.0;
const FOOTNOTE_HEIGHT: f32 = 24.0;

const SELECTED_FILL: Color32 = Color32::from_rgba_premultiplied(35, 78, 148, 153);
const CELL_LINE: Color32 = Color32::from_rgb(228, 228, 231);
const GRID_BORDER: Color32 = Color32::from_rgb(212, 212, 216);

/// What earlier input showed of the pointer, to synthesise enter/leave and
/// to trace the path between samples.
#[derive(Debug, Default)]
pub struct GridPointer {
    hovered: Option<SlotId>,
    inside: bool,
    last: Option<Point>,
    /// Finger driving the current touch drag, and where it was last seen.
    touch: Option<(TouchId, Point)>,
}

impl GridPointer {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

fn to_cell_rect(rect: Rect) -> CellRect {
    CellRect {
        x: rect.left(),
        y: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn to_rect(cell: CellRect) -> Rect {
    Rect::from_min_size(Pos2::new(cell.x, cell.y), egui::vec2(cell.width, cell.height))
}

/// Turn this frame's input into gesture events for the grid laid out by `geometry`.
///
/// Every pointer and touch sample is replayed in order, and the path between
/// consecutive samples is traced so a fast drag still crosses each cell.
fn collect_events(ui: &egui::Ui, geometry: &GridGeometry, pointer: &mut GridPointer) -> Vec<GridEvent> {
    let (input, touches) = ui.input(|i| (i.events.clone(), i.any_touches()));
    // Touch screens also send emulated mouse events alongside the touches
    let has_touch = input.iter().any(|event| matches!(event, Event::Touch { .. }));
    let mut events = Vec::new();

    for event in input {
        match event {
            Event::Touch { id, phase, pos, .. } => {
                track_touch(geometry, pointer, id, phase, to_point(pos), &mut events);
            }
            _ if has_touch || pointer.touch.is_some() => {}
            Event::PointerMoved(pos) => track_mouse(geometry, pointer, to_point(pos), &mut events),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                let pos = to_point(pos);
                track_mouse(geometry, pointer, pos, &mut events);
                if !pressed {
                    events.push(GridEvent::PointerUp);
                } else if let Some(slot) = geometry.cell_at(pos) {
                    events.push(GridEvent::PointerDown { slot });
                }
            }
            Event::PointerGone => leave_grid(pointer, &mut events),
            _ => {}
        }
    }

    if pointer.touch.is_some() && !touches {
        pointer.touch = None;
        events.push(GridEvent::TouchEnd);
    }

    events
}

fn track_mouse(geometry: &GridGeometry, pointer: &mut GridPointer, to: Point, events: &mut Vec<GridEvent>) {
    let from = pointer.last.unwrap_or(to);

    for position in geometry.trace(from, to) {
        let slot = geometry.cell_at(position);
        if slot != pointer.hovered {
            if pointer.hovered.is_some() {
                events.push(GridEvent::PointerLeaveCell);
            }
            if let Some(slot) = slot {
                events.push(GridEvent::PointerEnter { slot, position });
            }
        } else if let Some(slot) = slot {
            events.push(GridEvent::PointerMove { slot, position });
        }
        pointer.hovered = slot;

        let inside = slot.is_some();
        if pointer.inside && !inside {
            events.push(GridEvent::PointerLeaveGrid);
        }
        pointer.inside = inside;
    }

    pointer.last = Some(to);
}

fn track_touch(
    geometry: &GridGeometry,
    pointer: &mut GridPointer,
    id: TouchId,
    phase: TouchPhase,
    position: Point,
    events: &mut Vec<GridEvent>,
) {
    match (phase, pointer.touch) {
        (TouchPhase::Start, None) => {
            pointer.touch = Some((id, position));
            if let Some(slot) = geometry.cell_at(position) {
                events.push(GridEvent::TouchStart { slot });
            }
        }
        (TouchPhase::Move, Some((finger, last))) if finger == id => {
            events.extend(
                geometry
                    .trace(last, position)
                    .into_iter()
                    .map(|position| GridEvent::TouchMove { position }),
            );
            pointer.touch = Some((id, position));
        }
        (TouchPhase::End | TouchPhase::Cancel, Some((finger, _))) if finger == id => {
            pointer.touch = None;
            events.push(GridEvent::TouchEnd);
        }
        // Other fingers
        _ => {}
    }
}

fn leave_grid(pointer: &mut GridPointer, events: &mut Vec<GridEvent>) {
    if pointer.hovered.take().is_some() {
        events.push(GridEvent::PointerLeaveCell);
    }
    if pointer.inside {
        events.push(GridEvent::PointerLeaveGrid);
    }
    pointer.inside = false;
    pointer.last = None;
}

/// The cell area of the grid inside the rect allocated for the whole screen.
fn grid_body(outer: Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(outer.left() + HOUR_COLUMN_WIDTH, outer.top() + HEADER_HEIGHT),
        outer.max,
    )
}

fn paint_block_label(painter: &egui::Painter, cell: Rect, label: &BlockLabel) {
    let text = format!("{}\n{}", label.start_label, label.end_label);
    let galley = painter.layout_no_wrap(text, FontId::proportional(11.0), Color32::BLACK);
    let frame = Rect::from_center_size(cell.center(), galley.size() + egui::vec2(12.0, 6.0));

    painter.rect(frame, 8.0, Color32::WHITE, Stroke::new(1.0, Color32::BLACK));
    painter.galley(frame.center() - galley.size() / 2.0, galley, Color32::BLACK);
}

fn paint_tooltip(ctx: &egui::Context, label: &str, position: Point) {
    egui::Area::new(egui::Id::new("availability_tooltip"))
        .fixed_pos(Pos2::new(position.x, position.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(Color32::WHITE)
                .stroke(Stroke::new(1.0, Color32::BLACK))
                .rounding(8.0)
                .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(label).size(11.0).strong().color(Color32::BLACK));
                });
        });
}

pub fn render_availability(
    ui: &mut egui::Ui,
    grid: &mut AvailabilityGrid,
    pointer: &mut GridPointer,
) -> egui::Response {
    let size = (ui.available_size() - egui::vec2(0.0, FOOTNOTE_HEIGHT)).max(egui::Vec2::ZERO);
    let response = ui.allocate_response(size, Sense::click_and_drag());
    let outer = response.rect;

    let body = grid_body(outer);
    let rows = grid.index().total_rows();
    let columns = grid.index().columns();
    let geometry = GridGeometry::fit(to_cell_rect(body), rows, columns);

    for event in collect_events(ui, &geometry, pointer) {
        grid.handle(event, &geometry);
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    let painter = ui.painter_at(outer);

    // Day headers
    for column in 0..columns {
        let header = grid.index().column_header(column);
        let x = body.left() + geometry.cell_width * (column as f32 + 0.5);
        painter.text(
            Pos2::new(x, outer.top() + 10.0),
            Align2::CENTER_CENTER,
            header.day_number.to_string(),
            FontId::proportional(14.0),
            Color32::BLACK,
        );
        painter.text(
            Pos2::new(x, outer.top() + 26.0),
            Align2::CENTER_CENTER,
            header.label,
            FontId::proportional(10.0),
            Color32::BLACK,
        );
    }

    // Cells, then the block labels on top of them
    let mut labels = Vec::new();
    for row in 0..rows {
        if let Some(hour) = grid.index().hour_label(row) {
            let y = body.top() + geometry.cell_height * (row as f32 + 0.5);
            painter.text(
                Pos2::new(body.left() - 4.0, y),
                Align2::RIGHT_CENTER,
                hour,
                FontId::proportional(10.0),
                Color32::BLACK,
            );
        }

        for column in 0..columns {
            let slot = SlotId::new(row, column);
            let cell = to_rect(geometry.cell_rect(slot));
            let fill = if grid.is_selected(slot) {
                SELECTED_FILL
            } else {
                Color32::WHITE
            };
            painter.rect(cell, 0.0, fill, Stroke::new(0.5, CELL_LINE));

            if let Some(label) = grid.block_label(slot) {
                labels.push((cell, label));
            }
        }
    }
    painter.rect_stroke(body, 0.0, Stroke::new(1.0, GRID_BORDER));

    for (cell, label) in &labels {
        paint_block_label(&painter, *cell, label);
    }

    ui.horizontal(|ui| {
        ui.label(RichText::new("Glissez votre doigt sur les plages horaires disponibles.").small());
        if !grid.selection().is_empty() && ui.small_button("Tout effacer").clicked() {
            grid.clear();
            pointer.reset();
        }
    });

    if let Some(tooltip) = grid.tooltip() {
        paint_tooltip(ui.ctx(), &tooltip.label, tooltip.position);
    }

    response
}
