use chrono::{Datelike, NaiveDateTime, Weekday};
use kmetro_core::util::ServiceTime;

/// the number of departures listed when no limit is given.
pub const DEFAULT_DEPARTURE_LIMIT: usize = 6;

/// a request for the next trips from `origin` to `destination` after `reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureQuery {
    pub origin: String,
    pub destination: String,
    pub reference: NaiveDateTime,
    pub limit: usize,
}

impl DepartureQuery {
    pub fn new(origin: &str, destination: &str, reference: NaiveDateTime) -> DepartureQuery {
        DepartureQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            reference,
            limit: DEFAULT_DEPARTURE_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> DepartureQuery {
        self.limit = limit;
        self
    }

    /// the reference time of day. trips leaving at or before it have departed.
    pub fn reference_time(&self) -> ServiceTime {
        ServiceTime::from_naive_time(&self.reference.time())
    }

    pub fn weekday(&self) -> Weekday {
        self.reference.weekday()
    }
}
