use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the six static JSON files that make up a dataset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetResource {
    Stops,
    Shapes,
    StopTimes,
    Trips,
    Calendar,
    Fares,
}

impl DatasetResource {
    pub const ALL: [DatasetResource; 6] = [
        DatasetResource::Stops,
        DatasetResource::Shapes,
        DatasetResource::StopTimes,
        DatasetResource::Trips,
        DatasetResource::Calendar,
        DatasetResource::Fares,
    ];

    /// file name relative to the dataset root.
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetResource::Stops => "stops.json",
            DatasetResource::Shapes => "shapes.json",
            DatasetResource::StopTimes => "stop_times.json",
            DatasetResource::Trips => "trips.json",
            DatasetResource::Calendar => "calendar.json",
            DatasetResource::Fares => "fare.json",
        }
    }
}

impl Display for DatasetResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
