//! Time-slot generation for one day of the week grid.
//!
//! A day is always covered by `1440 / block_minutes` slots, starting at the
//! configured start time and wrapping past midnight.

use crate::models::schedule::{BlockSize, ScheduleParameters};
use crate::utils::time::{format_minute_label, MINUTES_PER_DAY};

/// One row of the week grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Position of the row, 0-based
    pub index: usize,
    /// Minute of the day the slot starts at, in `0..1440`
    pub minute_of_day: u32,
    /// Display label, e.g. "9:00 AM"
    pub label: String,
}

/// Iterator over the slots of one day.
///
/// Clone before consuming to walk the same sequence again, or build a
/// fresh one with [`time_slots`].
#[derive(Debug, Clone)]
pub struct TimeSlots {
    start_minute: u32,
    step: u32,
    next: usize,
    count: usize,
}

impl Iterator for TimeSlots {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let minute_of_day = (self.start_minute + index as u32 * self.step) % MINUTES_PER_DAY;
        Some(TimeSlot {
            index,
            minute_of_day,
            label: format_minute_label(minute_of_day),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSlots {}

/// Slots for a day starting at `start_minute`, one per `block_size`.
pub fn time_slots(start_minute: u32, block_size: BlockSize) -> TimeSlots {
    TimeSlots {
        start_minute: start_minute % MINUTES_PER_DAY,
        step: block_size.minutes(),
        next: 0,
        count: block_size.slots_per_day(),
    }
}

/// Slots for the grid described by `params`.
pub fn slots_for(params: &ScheduleParameters) -> TimeSlots {
    time_slots(params.start_minute(), params.block_size())
}

/// Just the labels, in row order.
pub fn slot_labels(params: &ScheduleParameters) -> Vec<String> {
    slots_for(params).map(|slot| slot.label).collect()
}
