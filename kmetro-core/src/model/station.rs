use geo::Point;
use serde::{Deserialize, Serialize};

use crate::util::geo_codec::serialize_lat_lon;

/// a translated label for one field of a station, as published in the dataset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub field_name: String,
    pub translation: String,
}

/// a metro station. loaded once from `stops.json` and never mutated.
#[derive(Serialize, Debug, Clone)]
pub struct Station {
    /// dataset identifier, e.g. `ALVA`
    pub stop_id: String,
    /// display name
    pub name: String,
    /// station coordinate with x = longitude, y = latitude
    #[serde(serialize_with = "serialize_lat_lon")]
    pub location: Point<f64>,
    pub translations: Vec<Translation>,
    pub wheelchair_accessible: bool,
}

impl Station {
    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }

    /// all translations of the station name joined for display, e.g. `ആലുവ`.
    pub fn translated_names(&self) -> String {
        self.translations
            .iter()
            .map(|t| t.translation.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
