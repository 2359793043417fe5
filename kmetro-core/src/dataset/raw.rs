//! serde mirrors of the published JSON files. these are converted into the
//! model types by [`crate::dataset::Dataset`] and are not used elsewhere.
use serde::Deserialize;

use crate::model::{FareRule, ServiceCalendar, Translation};
use crate::util::geo_codec::LatLon;

#[derive(Deserialize, Debug)]
pub struct RawStops {
    pub stops: Vec<RawStop>,
}

#[derive(Deserialize, Debug)]
pub struct RawStop {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    #[serde(default)]
    pub translations: Vec<Translation>,
    /// GTFS `wheelchair_boarding`, where 1 means accessible
    #[serde(default)]
    pub wheelchair_boarding: u8,
}

#[derive(Deserialize, Debug)]
pub struct RawShapes {
    pub shapes: Vec<RawShape>,
}

#[derive(Deserialize, Debug)]
pub struct RawShape {
    pub shape_id: String,
    pub points: Vec<RawShapePoint>,
}

#[derive(Deserialize, Debug)]
pub struct RawShapePoint {
    pub coordinates: LatLon,
    #[serde(alias = "shape_dist_traveled", alias = "distance")]
    pub distance_traveled: f64,
}

#[derive(Deserialize, Debug)]
pub struct RawStopTimes {
    pub trips: Vec<RawTripStopTimes>,
}

#[derive(Deserialize, Debug)]
pub struct RawTripStopTimes {
    pub trip: RawTripStops,
}

#[derive(Deserialize, Debug)]
pub struct RawTripStops {
    pub id: String,
    pub stops: Vec<RawStopTime>,
}

/// `[stop_id, arrival_time, departure_time, distance_traveled]`
#[derive(Deserialize, Debug)]
pub struct RawStopTime(pub String, pub String, pub String, pub f64);

#[derive(Deserialize, Debug)]
pub struct RawTrips {
    pub trips: Vec<RawTrip>,
}

#[derive(Deserialize, Debug)]
pub struct RawTrip {
    pub trip_id: String,
    pub direction_id: u8,
    pub service_id: String,
    #[serde(default)]
    pub shape_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RawCalendar {
    pub service_calendar: Vec<ServiceCalendar>,
}

#[derive(Deserialize, Debug)]
pub struct RawFares {
    pub fares: Vec<FareRule>,
}

/// all six resources, parsed but not yet validated.
#[derive(Debug)]
pub struct RawDataset {
    pub stops: RawStops,
    pub shapes: RawShapes,
    pub stop_times: RawStopTimes,
    pub trips: RawTrips,
    pub calendar: RawCalendar,
    pub fares: RawFares,
}
