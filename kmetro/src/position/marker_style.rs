use kmetro_core::model::Direction;
use serde::Serialize;

use super::TrainStatus;

const THRIPPUNITHURA_FILL: &str = "#2563eb";
const ALUVA_FILL: &str = "#F44336";
const SELECTED_FILL: &str = "#32cd32";
const AT_STATION_OUTLINE: &str = "#FFD700";

/// colors used to draw a train marker.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub fill: &'static str,
    pub outline: &'static str,
}

impl MarkerStyle {
    /// a selected train is highlighted regardless of its direction. a train
    /// standing at a station gets a gold outline.
    pub fn new(direction: Direction, status: TrainStatus, selected: bool) -> MarkerStyle {
        let fill = match (selected, direction) {
            (true, _) => SELECTED_FILL,
            (false, Direction::Thrippunithura) => THRIPPUNITHURA_FILL,
            (false, Direction::Aluva) => ALUVA_FILL,
        };
        let outline = match status {
            TrainStatus::AtStation => AT_STATION_OUTLINE,
            TrainStatus::InTransit => fill,
        };
        MarkerStyle { fill, outline }
    }
}
