use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};

/// +05:30, Indian Standard Time.
pub const KOCHI_UTC_OFFSET_MINUTES: i32 = 330;

/// source of the local wall-clock instant used to evaluate positions.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// reads the system clock and shifts it to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> SystemClock {
        SystemClock { offset }
    }

    /// `None` when the offset is outside of +/- 24 hours.
    pub fn from_offset_minutes(minutes: i32) -> Option<SystemClock> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(SystemClock::new)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::from_offset_minutes(KOCHI_UTC_OFFSET_MINUTES)
            .unwrap_or_else(|| SystemClock::new(Utc.fix()))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> FixedClock {
        FixedClock(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
