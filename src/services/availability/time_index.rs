//! Row/column ↔ wall-clock mapping for the availability grid.

use chrono::{Datelike, NaiveDate};

use crate::models::availability::SlotTime;
use crate::models::grid::GridConfig;
use crate::utils::date;

/// Header shown above a day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub day_number: u32,
    pub label: String,
}

/// Maps grid rows to times of day and grid columns to dates.
///
/// Column 0 is the anchor date (the day the grid was opened); the anchor is
/// captured once so a session that crosses midnight keeps consistent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeIndex {
    config: GridConfig,
    anchor: NaiveDate,
}

impl TimeIndex {
    pub fn new(config: GridConfig, anchor: NaiveDate) -> Self {
        Self { config, anchor }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn total_rows(&self) -> usize {
        self.config.total_rows()
    }

    pub fn columns(&self) -> usize {
        self.config.columns()
    }

    /// Start time of `row`. `row == total_rows` is allowed and yields the end of the day.
    pub fn slot_time(&self, row: usize) -> SlotTime {
        SlotTime::from_minutes(self.config.start_hour * 60 + row as u32 * self.config.slot_minutes)
    }

    pub fn time_of_row(&self, row: usize) -> String {
        self.slot_time(row).to_string()
    }

    pub fn row_range_label(&self, row: usize) -> String {
        format!("{} - {}", self.time_of_row(row), self.time_of_row(row + 1))
    }

    pub fn date_of_column(&self, column: usize) -> NaiveDate {
        date::add_days(self.anchor, column)
    }

    /// `"HH:00"` on rows that open an hour, `None` on the others.
    pub fn hour_label(&self, row: usize) -> Option<String> {
        let slots_per_hour = self.config.slots_per_hour();
        if row % slots_per_hour != 0 {
            return None;
        }
        let hour = self.config.start_hour as usize + row / slots_per_hour;
        Some(format!("{:02}:00", hour))
    }

    pub fn column_header(&self, column: usize) -> ColumnHeader {
        let date = self.date_of_column(column);
        let label = if column == 0 {
            "Aujourd’hui".to_string()
        } else {
            date::short_weekday_fr(date.weekday()).to_string()
        };
        ColumnHeader {
            day_number: date::day_number(date),
            label,
        }
    }
}
