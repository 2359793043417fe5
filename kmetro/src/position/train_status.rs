use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    /// standing at the platform between arrival and departure
    AtStation,
    /// running between two consecutive stops
    InTransit,
}
