//! Time-slot availability.
//!
//! DESIGN
//! ======
//! The `Scheduler` trait is the seam for a real booking backend. The shipped
//! `FixtureScheduler` is a development fixture only: it keeps roughly 70% of
//! the canonical slot list per date, but derives the choice from a stable
//! hash of (date, slot) so the same date always reports the same
//! availability. A production deployment implements this trait against the
//! actual scheduling system.

use std::hash::{DefaultHasher, Hash, Hasher};

use async_trait::async_trait;
use time::Date;

/// Canonical half-hour appointment slots, 9:00 AM through 7:00 PM.
pub const TIME_SLOTS: [&str; 21] = [
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM",
    "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM", "5:00 PM", "5:30 PM",
    "6:00 PM", "6:30 PM", "7:00 PM",
];

#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Slots still open on the given date, in canonical order.
    async fn available_slots(&self, date: Date) -> Vec<String>;
}

/// Deterministic stand-in for a real scheduling backend.
pub struct FixtureScheduler;

impl FixtureScheduler {
    fn slot_open(date: Date, slot: &str) -> bool {
        let mut hasher = DefaultHasher::new();
        date.to_julian_day().hash(&mut hasher);
        slot.hash(&mut hasher);
        hasher.finish() % 10 < 7
    }
}

#[async_trait]
impl Scheduler for FixtureScheduler {
    async fn available_slots(&self, date: Date) -> Vec<String> {
        TIME_SLOTS
            .iter()
            .filter(|slot| Self::slot_open(date, slot))
            .map(|slot| (*slot).to_owned())
            .collect()
    }
}

#[cfg(test)]
#[path = "scheduling_test.rs"]
mod tests;
