use serde::Serialize;

use crate::model::Direction;

/// a single scheduled run, as listed in `trips.json`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub trip_id: String,
    pub direction: Direction,
    pub service_id: String,
    pub shape_id: Option<String>,
}
