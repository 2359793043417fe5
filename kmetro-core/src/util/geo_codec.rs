//! serde helpers for writing `geo::Point` values as `{ "lat", "lon" }`
//! objects rather than the `{ "x", "y" }` layout geo uses by default.
use geo::{LineString, Point};
use serde::{ser::SerializeSeq, Deserialize, Serialize, Serializer};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<&Point<f64>> for LatLon {
    fn from(value: &Point<f64>) -> Self {
        LatLon {
            lat: value.y(),
            lon: value.x(),
        }
    }
}

impl From<LatLon> for Point<f64> {
    fn from(value: LatLon) -> Self {
        Point::new(value.lon, value.lat)
    }
}

pub fn serialize_lat_lon<S>(point: &Point<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    LatLon::from(point).serialize(serializer)
}

pub fn serialize_lat_lon_path<S>(path: &LineString<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(path.0.len()))?;
    for point in path.points() {
        seq.serialize_element(&LatLon::from(&point))?;
    }
    seq.end()
}
