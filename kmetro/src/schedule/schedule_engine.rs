use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};
use itertools::Itertools;
use kmetro_core::dataset::Dataset;
use kmetro_core::model::Direction;
use kmetro_core::util::ServiceTime;

use super::{BoardDirection, BoardEntry, Departure, DepartureQuery, ItineraryStop, StationBoard};

/// answers timetable questions over a loaded dataset. every query is a pure
/// function of the dataset and its arguments.
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    dataset: Arc<Dataset>,
}

impl ScheduleEngine {
    pub fn new(dataset: Arc<Dataset>) -> ScheduleEngine {
        ScheduleEngine { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// next departures from the query origin to its destination.
    ///
    /// a trip is listed when it serves origin before destination, leaves the
    /// origin strictly after the reference time and its service runs on the
    /// reference weekday. results are ordered by departure time, then trip id,
    /// and hold at most one entry per trip.
    pub fn next_departures(&self, query: &DepartureQuery) -> Vec<Departure> {
        let now = query.reference_time();
        let weekday = query.weekday();
        let fare = self.dataset.fare(&query.origin, &query.destination);

        let departures = self
            .dataset
            .schedules()
            .iter()
            .filter_map(|schedule| {
                let (from, to) = schedule.serves(&query.origin, &query.destination)?;
                let origin = schedule.stop_times.get(from)?;
                let destination = schedule.stop_times.get(to)?;
                if origin.departure <= now {
                    return None;
                }
                if !self.dataset.trip_runs_on(&schedule.trip_id, weekday) {
                    return None;
                }
                let trip = self.dataset.trip(&schedule.trip_id)?;
                Some(Departure::new(
                    &schedule.trip_id,
                    trip.direction,
                    origin,
                    destination,
                    fare,
                ))
            })
            .unique_by(|d| d.trip_id.clone())
            .sorted_by(|a, b| {
                a.departure_time
                    .cmp(&b.departure_time)
                    .then_with(|| a.trip_id.cmp(&b.trip_id))
            })
            .take(query.limit)
            .collect_vec();

        log::debug!(
            "{} departures from {} to {} after {}",
            departures.len(),
            query.origin,
            query.destination,
            query.reference
        );
        departures
    }

    /// upcoming departures from one station, at most `limit` per direction.
    /// returns `None` when the station is unknown.
    pub fn station_board(
        &self,
        stop_id: &str,
        reference: NaiveDateTime,
        limit: usize,
    ) -> Option<StationBoard> {
        let station = self.dataset.station(stop_id)?;
        let now = ServiceTime::from_naive_time(&reference.time());
        let weekday = reference.weekday();

        let candidates = self
            .dataset
            .schedules()
            .iter()
            .filter_map(|schedule| {
                let idx = schedule.position_of(stop_id)?;
                // a trip ending here does not depart from here
                if idx + 1 >= schedule.stop_times.len() {
                    return None;
                }
                let stop_time = schedule.stop_times.get(idx)?;
                if stop_time.departure <= now
                    || !self.dataset.trip_runs_on(&schedule.trip_id, weekday)
                {
                    return None;
                }
                let trip = self.dataset.trip(&schedule.trip_id)?;
                Some((trip.direction, &schedule.trip_id, stop_time.departure))
            })
            .unique_by(|(_, trip_id, _)| *trip_id)
            .into_group_map_by(|(direction, _, _)| *direction);

        let directions = Direction::ALL
            .iter()
            .map(|direction| {
                let departures = candidates
                    .get(direction)
                    .map(|entries| {
                        entries
                            .iter()
                            .sorted_by(|a, b| a.2.cmp(&b.2).then_with(|| a.1.cmp(b.1)))
                            .take(limit)
                            .map(|(_, trip_id, time)| BoardEntry::new(trip_id, *time))
                            .collect_vec()
                    })
                    .unwrap_or_default();
                BoardDirection {
                    direction: *direction,
                    label: direction.label(),
                    departures,
                }
            })
            .collect_vec();

        Some(StationBoard {
            stop_id: station.stop_id.clone(),
            station_name: station.name.clone(),
            reference,
            directions,
        })
    }

    /// the stops of `trip_id` from `origin` through `destination`, inclusive.
    /// empty when the trip is unknown or does not carry a rider between them.
    pub fn itinerary(&self, trip_id: &str, origin: &str, destination: &str) -> Vec<ItineraryStop> {
        let Some(schedule) = self.dataset.schedule(trip_id) else {
            return vec![];
        };
        let Some((from, to)) = schedule.serves(origin, destination) else {
            return vec![];
        };
        schedule.stop_times[from..=to]
            .iter()
            .map(|st| ItineraryStop::new(st, self.dataset.station_name(&st.stop_id)))
            .collect_vec()
    }

    pub fn fare(&self, origin: &str, destination: &str) -> Option<u32> {
        self.dataset.fare(origin, destination)
    }
}
