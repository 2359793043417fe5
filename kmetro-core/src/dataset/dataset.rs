use std::{collections::HashMap, str::FromStr};

use chrono::Weekday;
use geo::Point;

use crate::dataset::{
    raw::{RawDataset, RawShape, RawStop, RawTrip, RawTripStops},
    DatasetError, DatasetResource,
};
use crate::model::{
    Direction, FareTable, ServiceCalendar, Shape, ShapePoint, Station, StopTime, Trip,
    TripSchedule,
};
use crate::util::ServiceTime;

/// an immutable, validated snapshot of the static dataset.
///
/// built once per load and shared behind an `Arc` by every query engine.
#[derive(Debug)]
pub struct Dataset {
    stations: Vec<Station>,
    station_lookup: HashMap<String, usize>,
    shapes: Vec<Shape>,
    shape_lookup: HashMap<String, usize>,
    schedules: Vec<TripSchedule>,
    schedule_lookup: HashMap<String, usize>,
    trips: HashMap<String, Trip>,
    calendar: HashMap<String, ServiceCalendar>,
    fares: FareTable,
}

impl Dataset {
    /// stations in published (line) order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, stop_id: &str) -> Option<&Station> {
        self.station_lookup
            .get(stop_id)
            .and_then(|idx| self.stations.get(*idx))
    }

    pub fn station_name(&self, stop_id: &str) -> Option<&str> {
        self.station(stop_id).map(|s| s.name.as_str())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, shape_id: &str) -> Option<&Shape> {
        self.shape_lookup
            .get(shape_id)
            .and_then(|idx| self.shapes.get(*idx))
    }

    /// the first published shape, which draws the whole line.
    pub fn primary_shape(&self) -> Option<&Shape> {
        self.shapes.first()
    }

    /// the shape a trip runs along. trips without a `shape_id` use the
    /// primary shape; a `shape_id` that names no shape yields `None`.
    pub fn shape_for_trip(&self, trip_id: &str) -> Option<&Shape> {
        match &self.trip(trip_id)?.shape_id {
            Some(shape_id) => self.shape(shape_id),
            None => self.primary_shape(),
        }
    }

    pub fn schedules(&self) -> &[TripSchedule] {
        &self.schedules
    }

    pub fn schedule(&self, trip_id: &str) -> Option<&TripSchedule> {
        self.schedule_lookup
            .get(trip_id)
            .and_then(|idx| self.schedules.get(*idx))
    }

    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.get(trip_id)
    }

    pub fn service_calendar(&self, service_id: &str) -> Option<&ServiceCalendar> {
        self.calendar.get(service_id)
    }

    /// true if the trip's service runs on `weekday` according to the service
    /// calendar. unknown trips and unknown services never run.
    pub fn trip_runs_on(&self, trip_id: &str, weekday: Weekday) -> bool {
        self.trip(trip_id)
            .and_then(|trip| self.service_calendar(&trip.service_id))
            .map(|calendar| calendar.runs_on(weekday))
            .unwrap_or(false)
    }

    pub fn fares(&self) -> &FareTable {
        &self.fares
    }

    pub fn fare(&self, origin: &str, destination: &str) -> Option<u32> {
        self.fares.lookup(origin, destination)
    }
}

impl TryFrom<RawDataset> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        let stations = raw.stops.stops.into_iter().map(station).collect::<Vec<_>>();
        let station_lookup = index_by(&stations, |s| &s.stop_id, DatasetResource::Stops);

        let shapes = raw
            .shapes
            .shapes
            .into_iter()
            .map(shape)
            .collect::<Result<Vec<_>, _>>()?;
        let shape_lookup = index_by(&shapes, |s| &s.shape_id, DatasetResource::Shapes);

        let schedules = raw
            .stop_times
            .trips
            .into_iter()
            .map(|t| trip_schedule(t.trip))
            .collect::<Result<Vec<_>, _>>()?;
        let schedule_lookup = index_by(&schedules, |s| &s.trip_id, DatasetResource::StopTimes);

        for schedule in schedules.iter() {
            for st in schedule.stop_times.iter() {
                if !station_lookup.contains_key(&st.stop_id) {
                    log::warn!(
                        "trip '{}' references unknown stop '{}'",
                        schedule.trip_id,
                        st.stop_id
                    );
                }
            }
        }

        let trips = raw
            .trips
            .trips
            .into_iter()
            .map(|t| trip(t).map(|trip| (trip.trip_id.clone(), trip)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        let calendar = raw
            .calendar
            .service_calendar
            .into_iter()
            .map(|c| (c.service_id.clone(), c))
            .collect::<HashMap<_, _>>();

        for trip in trips.values() {
            if !calendar.contains_key(&trip.service_id) {
                log::warn!(
                    "trip '{}' has service_id '{}' with no calendar entry",
                    trip.trip_id,
                    trip.service_id
                );
            }
        }

        log::debug!(
            "built dataset with {} stations, {} shapes, {} trip schedules, {} trips, {} services, {} fare rules",
            stations.len(),
            shapes.len(),
            schedules.len(),
            trips.len(),
            calendar.len(),
            raw.fares.fares.len()
        );

        Ok(Dataset {
            stations,
            station_lookup,
            shapes,
            shape_lookup,
            schedules,
            schedule_lookup,
            trips,
            calendar,
            fares: FareTable::new(raw.fares.fares),
        })
    }
}

fn station(raw: RawStop) -> Station {
    Station {
        stop_id: raw.stop_id,
        name: raw.stop_name,
        location: Point::new(raw.stop_lon, raw.stop_lat),
        translations: raw.translations,
        wheelchair_accessible: raw.wheelchair_boarding == 1,
    }
}

fn shape(raw: RawShape) -> Result<Shape, DatasetError> {
    let points = raw
        .points
        .into_iter()
        .map(|p| ShapePoint {
            location: Point::from(p.coordinates),
            distance_traveled: p.distance_traveled,
        })
        .collect();
    Shape::new(raw.shape_id, points).map_err(|msg| DatasetError::MalformedData {
        resource: DatasetResource::Shapes,
        msg,
    })
}

fn trip_schedule(raw: RawTripStops) -> Result<TripSchedule, DatasetError> {
    let stop_times = raw
        .stops
        .into_iter()
        .map(|st| {
            let parse = |value: &str| {
                ServiceTime::from_str(value).map_err(|e| DatasetError::MalformedData {
                    resource: DatasetResource::StopTimes,
                    msg: format!("trip '{}', stop '{}': {e}", raw.id, st.0),
                })
            };
            Ok(StopTime {
                arrival: parse(&st.1)?,
                departure: parse(&st.2)?,
                stop_id: st.0,
                distance_traveled: st.3,
            })
        })
        .collect::<Result<Vec<_>, DatasetError>>()?;
    Ok(TripSchedule {
        trip_id: raw.id,
        stop_times,
    })
}

fn trip(raw: RawTrip) -> Result<Trip, DatasetError> {
    let direction =
        Direction::try_from(raw.direction_id).map_err(|msg| DatasetError::MalformedData {
            resource: DatasetResource::Trips,
            msg: format!("trip '{}': {msg}", raw.trip_id),
        })?;
    Ok(Trip {
        trip_id: raw.trip_id,
        direction,
        service_id: raw.service_id,
        shape_id: raw.shape_id,
    })
}

/// positional index keyed by id. the first record with a given id wins.
fn index_by<T>(
    items: &[T],
    key: impl Fn(&T) -> &String,
    resource: DatasetResource,
) -> HashMap<String, usize> {
    let mut lookup = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let id = key(item);
        if lookup.contains_key(id) {
            log::warn!("duplicate id '{id}' in {resource}, keeping the first record");
        } else {
            lookup.insert(id.clone(), idx);
        }
    }
    lookup
}
