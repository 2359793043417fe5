use chrono::NaiveDateTime;
use geo::Point;
use kmetro_core::model::Direction;
use kmetro_core::util::geo_codec::serialize_lat_lon;
use serde::Serialize;

use super::{MarkerStyle, TrainStatus};

/// estimated state of one active trip at an instant.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrainPosition {
    pub trip_id: String,
    pub status: TrainStatus,
    #[serde(serialize_with = "serialize_lat_lon")]
    pub location: Point<f64>,
    pub direction: Direction,
    /// the stop the train is at, or last left
    pub from_stop: String,
    /// the next stop on the trip
    pub to_stop: String,
    /// share of the current hop covered, only set while in transit
    pub progress: Option<f64>,
    pub marker: MarkerStyle,
}

/// every active train at one instant.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    pub at: NaiveDateTime,
    pub selected: Option<String>,
    pub trains: Vec<TrainPosition>,
}

impl PositionSnapshot {
    pub fn train(&self, trip_id: &str) -> Option<&TrainPosition> {
        self.trains.iter().find(|t| t.trip_id == trip_id)
    }
}
