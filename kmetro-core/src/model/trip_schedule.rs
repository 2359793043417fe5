use serde::Serialize;

use crate::util::ServiceTime;

/// scheduled arrival and departure of one trip at one stop.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StopTime {
    pub stop_id: String,
    pub arrival: ServiceTime,
    pub departure: ServiceTime,
    /// distance traveled along the trip from its first stop
    pub distance_traveled: f64,
}

/// the ordered stop-time entries of a single trip, as listed in `stop_times.json`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TripSchedule {
    pub trip_id: String,
    pub stop_times: Vec<StopTime>,
}

impl TripSchedule {
    /// index of the first visit to `stop_id` on this trip.
    pub fn position_of(&self, stop_id: &str) -> Option<usize> {
        self.stop_times.iter().position(|st| st.stop_id == stop_id)
    }

    /// indices of `origin` and `destination` if this trip carries a passenger
    /// from one to the other, i.e. both are served and origin comes first.
    pub fn serves(&self, origin: &str, destination: &str) -> Option<(usize, usize)> {
        let from = self.position_of(origin)?;
        let to = self.position_of(destination)?;
        (from < to).then_some((from, to))
    }

    /// adjacent stop pairs in travel order.
    pub fn segments(&self) -> impl Iterator<Item = (&StopTime, &StopTime)> {
        self.stop_times.windows(2).map(|w| (&w[0], &w[1]))
    }

    pub fn first(&self) -> Option<&StopTime> {
        self.stop_times.first()
    }

    pub fn last(&self) -> Option<&StopTime> {
        self.stop_times.last()
    }
}
