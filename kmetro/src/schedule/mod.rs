mod departure;
mod departure_query;
mod itinerary;
mod schedule_engine;
mod station_board;

pub use departure::Departure;
pub use departure_query::{DepartureQuery, DEFAULT_DEPARTURE_LIMIT};
pub use itinerary::ItineraryStop;
pub use schedule_engine::ScheduleEngine;
pub use station_board::{BoardDirection, BoardEntry, StationBoard, DEFAULT_BOARD_LIMIT};
