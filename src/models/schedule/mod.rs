//! Schedule grid parameters.
//!
//! Days of the week, the block size of a grid row, the start time of the
//! first row, and the fuzziness applied to block boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::time::{format_minute_label, parse_minute_label, MINUTES_PER_DAY};

/// Start of the grid when no (valid) start time is configured: 8:00 AM.
pub const DEFAULT_START_MINUTE: u32 = 8 * 60;

/// Fuzziness is capped at this fraction of the block size (1/4 = 25%).
pub const FUZZINESS_DIVISOR: u32 = 4;

/// Upper bound of the fuzziness slider, independent of block size.
pub const FUZZINESS_SLIDER_MAX: u32 = 60;

/// A day column of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in grid column order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    pub fn from_label(label: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|day| day.label() == label)
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Day::Sat | Day::Sun)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Duration of one grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockSize {
    #[serde(rename = "30 minutes")]
    ThirtyMinutes,
    #[default]
    #[serde(rename = "1 hour")]
    OneHour,
    #[serde(rename = "2 hours")]
    TwoHours,
}

impl BlockSize {
    pub const ALL: [BlockSize; 3] = [
        BlockSize::ThirtyMinutes,
        BlockSize::OneHour,
        BlockSize::TwoHours,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            BlockSize::ThirtyMinutes => 30,
            BlockSize::OneHour => 60,
            BlockSize::TwoHours => 120,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockSize::ThirtyMinutes => "30 minutes",
            BlockSize::OneHour => "1 hour",
            BlockSize::TwoHours => "2 hours",
        }
    }

    pub fn from_label(label: &str) -> Option<BlockSize> {
        BlockSize::ALL
            .into_iter()
            .find(|size| size.label() == label.trim())
    }

    /// Parse a label, falling back to one hour for anything unrecognized.
    pub fn parse_or_default(label: &str) -> BlockSize {
        BlockSize::from_label(label).unwrap_or_else(|| {
            log::debug!("Unknown block size {:?}, using 1 hour", label);
            BlockSize::default()
        })
    }

    /// Number of grid rows needed to cover a whole day.
    pub fn slots_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.minutes()) as usize
    }

    /// Largest fuzziness allowed for this block size, in whole minutes.
    pub fn max_fuzziness(&self) -> u32 {
        self.minutes() / FUZZINESS_DIVISOR
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Start time choices offered by the schedule setup panel (12:00 AM to 11:00 AM).
pub fn start_time_options() -> Vec<(u32, String)> {
    (0..12)
        .map(|hour| {
            let minute = hour * 60;
            (minute, format_minute_label(minute))
        })
        .collect()
}

/// Parse a start time label such as "8:00 AM", defaulting to 8:00 AM.
pub fn start_minute_or_default(label: Option<&str>) -> u32 {
    match label.and_then(parse_minute_label) {
        Some(minute) => minute,
        None => {
            log::debug!("Unknown start time {:?}, using 8:00 AM", label);
            DEFAULT_START_MINUTE
        }
    }
}

/// Outcome of a fuzziness change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzinessUpdate {
    /// The requested value was within bounds and applied as-is
    Accepted(u32),
    /// The requested value exceeded the cap; the cap was applied instead
    Clamped { requested: u32, applied: u32 },
}

impl FuzzinessUpdate {
    pub fn applied(&self) -> u32 {
        match self {
            FuzzinessUpdate::Accepted(value) => *value,
            FuzzinessUpdate::Clamped { applied, .. } => *applied,
        }
    }

    pub fn was_clamped(&self) -> bool {
        matches!(self, FuzzinessUpdate::Clamped { .. })
    }
}

/// Block size, start time and fuzziness for the week grid.
///
/// Fuzziness never exceeds a quarter of the block size; out-of-range values
/// are corrected rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleParameters {
    block_size: BlockSize,
    start_minute: u32,
    fuzziness_minutes: u32,
}

impl Default for ScheduleParameters {
    fn default() -> Self {
        Self {
            block_size: BlockSize::default(),
            start_minute: DEFAULT_START_MINUTE,
            fuzziness_minutes: 0,
        }
    }
}

impl ScheduleParameters {
    pub fn new(block_size: BlockSize, start_minute: u32, fuzziness_minutes: u32) -> Self {
        let mut params = Self {
            block_size,
            start_minute: start_minute % MINUTES_PER_DAY,
            fuzziness_minutes: 0,
        };
        params.set_fuzziness(fuzziness_minutes);
        params
    }

    /// Build parameters from the labels used by the setup panel and config file.
    pub fn from_labels(block_size: Option<&str>, start_time: Option<&str>, fuzziness: u32) -> Self {
        let block_size = block_size
            .map(BlockSize::parse_or_default)
            .unwrap_or_default();
        Self::new(block_size, start_minute_or_default(start_time), fuzziness)
    }

    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    pub fn block_minutes(&self) -> u32 {
        self.block_size.minutes()
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn start_label(&self) -> String {
        format_minute_label(self.start_minute)
    }

    pub fn fuzziness_minutes(&self) -> u32 {
        self.fuzziness_minutes
    }

    pub fn max_fuzziness(&self) -> u32 {
        self.block_size.max_fuzziness()
    }

    /// Change the block size, re-applying the fuzziness cap.
    pub fn set_block_size(&mut self, block_size: BlockSize) -> FuzzinessUpdate {
        self.block_size = block_size;
        self.set_fuzziness(self.fuzziness_minutes)
    }

    pub fn set_start_minute(&mut self, start_minute: u32) {
        self.start_minute = start_minute % MINUTES_PER_DAY;
    }

    /// Request a fuzziness value; anything above the cap is clamped to it.
    pub fn set_fuzziness(&mut self, requested: u32) -> FuzzinessUpdate {
        let cap = self.max_fuzziness();
        let update = if requested > cap {
            FuzzinessUpdate::Clamped {
                requested,
                applied: cap,
            }
        } else {
            FuzzinessUpdate::Accepted(requested)
        };
        self.fuzziness_minutes = update.applied();
        update
    }
}
