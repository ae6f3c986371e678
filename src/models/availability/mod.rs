// Availability module
// Compiled booking intervals handed to the submission service

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time on the grid, stored as minutes since midnight.
///
/// Unlike `chrono::NaiveTime` this can represent `24:00`, which is the end of
/// the last row when a grid runs until midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(u32);

impl SlotTime {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub fn minute(&self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for SlotTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid time '{}': expected HH:MM", s))?;
        let hour: u32 = hour
            .parse()
            .map_err(|_| format!("Invalid hour in '{}'", s))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| format!("Invalid minute in '{}'", s))?;

        if minute >= 60 || hour > 24 || (hour == 24 && minute > 0) {
            return Err(format!("Time '{}' is out of range", s));
        }

        Ok(Self::from_hm(hour, minute))
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One contiguous block of availability on a single day.
///
/// Serializes as `{ "day": "YYYY-MM-DD", "start": "HH:MM", "end": "HH:MM" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityInterval {
    pub day: NaiveDate,
    pub start: SlotTime,
    pub end: SlotTime,
}

impl AvailabilityInterval {
    pub fn new(day: NaiveDate, start: SlotTime, end: SlotTime) -> Result<Self, String> {
        if end <= start {
            return Err(format!(
                "Availability end ({}) must be after start ({})",
                end, start
            ));
        }
        Ok(Self { day, start, end })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }
}
