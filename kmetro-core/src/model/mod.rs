mod direction;
mod fare_table;
mod service_calendar;
mod shape;
mod station;
mod trip;
mod trip_schedule;

pub use direction::Direction;
pub use fare_table::{FareRule, FareTable};
pub use service_calendar::{ServiceCalendar, ServiceDays};
pub use shape::{PathOrientation, Shape, ShapePoint};
pub use station::{Station, Translation};
pub use trip::Trip;
pub use trip_schedule::{StopTime, TripSchedule};
