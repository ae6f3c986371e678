// Grid module
// Availability grid dimensions and slot identifiers

use serde::{Deserialize, Serialize};

pub const DEFAULT_START_HOUR: u32 = 8;
pub const DEFAULT_END_HOUR: u32 = 20;
pub const DEFAULT_SLOT_MINUTES: u32 = 15;
pub const DEFAULT_DAY_COUNT: u32 = 6;

/// Shape of the availability grid: which hours are shown, how finely they are
/// sliced, and how many consecutive days (starting today) are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub start_hour: u32,
    /// Exclusive upper bound of the visible day.
    pub end_hour: u32,
    pub slot_minutes: u32,
    pub day_count: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            day_count: DEFAULT_DAY_COUNT,
        }
    }
}

impl GridConfig {
    /// Create a grid configuration, rejecting shapes the grid cannot render.
    ///
    /// # Examples
    /// ```
    /// use artisan_intake::models::grid::GridConfig;
    ///
    /// let config = GridConfig::new(8, 20, 15, 6).unwrap();
    /// assert_eq!(config.total_rows(), 48);
    /// assert!(GridConfig::new(20, 8, 15, 6).is_err());
    /// ```
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        slot_minutes: u32,
        day_count: u32,
    ) -> Result<Self, String> {
        let config = Self {
            start_hour,
            end_hour,
            slot_minutes,
            day_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.end_hour <= self.start_hour {
            return Err(format!(
                "Grid end hour ({}) must be after start hour ({})",
                self.end_hour, self.start_hour
            ));
        }

        if self.end_hour > 24 {
            return Err(format!("Grid end hour ({}) cannot exceed 24", self.end_hour));
        }

        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(format!(
                "Slot length ({} min) must evenly divide an hour",
                self.slot_minutes
            ));
        }

        if self.day_count == 0 {
            return Err("Grid must show at least one day".to_string());
        }

        Ok(())
    }

    pub fn slots_per_hour(&self) -> usize {
        (60 / self.slot_minutes) as usize
    }

    pub fn total_rows(&self) -> usize {
        ((self.end_hour - self.start_hour) * 60 / self.slot_minutes) as usize
    }

    pub fn columns(&self) -> usize {
        self.day_count as usize
    }

    pub fn cell_count(&self) -> usize {
        self.total_rows() * self.columns()
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        slot.row < self.total_rows() && slot.column < self.columns()
    }

    /// Every slot of the grid, row-major (the order cells are laid out on screen).
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        let columns = self.columns();
        (0..self.total_rows())
            .flat_map(move |row| (0..columns).map(move |column| SlotId::new(row, column)))
    }
}

/// One cell of the grid: a fixed time-of-day row on a fixed day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub row: usize,
    pub column: usize,
}

impl SlotId {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

/// Whether a drag gesture is booking or releasing slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Add,
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_48_rows_and_6_columns() {
        let config = GridConfig::default();
        assert_eq!(config.total_rows(), 48);
        assert_eq!(config.columns(), 6);
        assert_eq!(config.cell_count(), 288);
        assert_eq!(config.slots_per_hour(), 4);
    }

    #[test]
    fn test_validate_rejects_inverted_hours() {
        assert!(GridConfig::new(10, 10, 15, 6).is_err());
        assert!(GridConfig::new(12, 9, 15, 6).is_err());
    }

    #[test]
    fn test_validate_rejects_slot_not_dividing_hour() {
        assert!(GridConfig::new(8, 20, 7, 6).is_err());
        assert!(GridConfig::new(8, 20, 0, 6).is_err());
        assert!(GridConfig::new(8, 20, 45, 6).is_err());
        assert!(GridConfig::new(8, 20, 20, 6).is_ok());
    }

    #[test]
    fn test_validate_rejects_past_midnight_and_zero_days() {
        assert!(GridConfig::new(8, 25, 15, 6).is_err());
        assert!(GridConfig::new(0, 24, 30, 6).is_ok());
        assert!(GridConfig::new(8, 20, 15, 0).is_err());
    }

    #[test]
    fn test_contains_checks_both_axes() {
        let config = GridConfig::default();
        assert!(config.contains(SlotId::new(47, 5)));
        assert!(!config.contains(SlotId::new(48, 0)));
        assert!(!config.contains(SlotId::new(0, 6)));
    }

    #[test]
    fn test_slots_iterates_row_major() {
        let config = GridConfig::new(8, 9, 30, 2).unwrap();
        let slots: Vec<SlotId> = config.slots().collect();
        assert_eq!(
            slots,
            vec![
                SlotId::new(0, 0),
                SlotId::new(0, 1),
                SlotId::new(1, 0),
                SlotId::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_slot_id_display_matches_row_dash_column() {
        assert_eq!(SlotId::new(12, 3).to_string(), "12-3");
    }
}
