use chrono::NaiveDateTime;
use kmetro_core::model::Direction;
use kmetro_core::util::ServiceTime;
use serde::Serialize;

/// departures listed per direction on a station board.
pub const DEFAULT_BOARD_LIMIT: usize = 3;

/// the next departures from a single station, one list per direction.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationBoard {
    pub stop_id: String,
    pub station_name: String,
    pub reference: NaiveDateTime,
    pub directions: Vec<BoardDirection>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoardDirection {
    pub direction: Direction,
    pub label: &'static str,
    pub departures: Vec<BoardEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoardEntry {
    pub trip_id: String,
    pub departure_time: ServiceTime,
    /// 12-hour clock, e.g. `9:08 AM`
    pub display_time: String,
}

impl StationBoard {
    pub fn direction(&self, direction: Direction) -> Option<&BoardDirection> {
        self.directions.iter().find(|d| d.direction == direction)
    }
}

impl BoardEntry {
    pub fn new(trip_id: &str, departure_time: ServiceTime) -> BoardEntry {
        BoardEntry {
            trip_id: trip_id.to_string(),
            departure_time,
            display_time: departure_time.format_12h(false),
        }
    }
}
