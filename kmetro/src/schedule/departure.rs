use kmetro_core::model::{Direction, StopTime};
use kmetro_core::util::{time_ops, ServiceTime};
use serde::Serialize;

/// one upcoming trip between an origin and a destination.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Departure {
    pub trip_id: String,
    pub origin: String,
    pub destination: String,
    /// departure time at the origin
    pub departure_time: ServiceTime,
    /// arrival time at the destination
    pub arrival_time: ServiceTime,
    pub direction: Direction,
    pub direction_label: &'static str,
    /// may be negative for a trip that crosses midnight
    pub duration_minutes: i64,
    /// ticket price, `None` when no fare rule covers the pair
    pub fare: Option<u32>,
}

impl Departure {
    pub fn new(
        trip_id: &str,
        direction: Direction,
        origin: &StopTime,
        destination: &StopTime,
        fare: Option<u32>,
    ) -> Departure {
        Departure {
            trip_id: trip_id.to_string(),
            origin: origin.stop_id.clone(),
            destination: destination.stop_id.clone(),
            departure_time: origin.departure,
            arrival_time: destination.arrival,
            direction,
            direction_label: direction.label(),
            duration_minutes: time_ops::duration_minutes(&origin.departure, &destination.arrival),
            fare,
        }
    }

    /// e.g. `9:08 AM - 9:22 AM`
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.departure_time.format_12h(false),
            self.arrival_time.format_12h(false)
        )
    }

    pub fn duration_label(&self) -> String {
        time_ops::format_duration(self.duration_minutes)
    }

    /// the fare as shown to riders, `₹ 30` or `Unavailable`.
    pub fn fare_label(&self) -> String {
        match self.fare {
            Some(price) => format!("₹ {price}"),
            None => String::from("Unavailable"),
        }
    }
}
