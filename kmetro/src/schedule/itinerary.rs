use kmetro_core::model::StopTime;
use kmetro_core::util::{time_ops, ServiceTime};
use serde::Serialize;

/// one stop of a trip between a rider's origin and destination.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ItineraryStop {
    pub stop_id: String,
    pub station_name: Option<String>,
    pub arrival: ServiceTime,
    pub departure: ServiceTime,
    pub dwell_seconds: i64,
    pub dwell_label: String,
}

impl ItineraryStop {
    pub fn new(stop_time: &StopTime, station_name: Option<&str>) -> ItineraryStop {
        let dwell_seconds = time_ops::dwell_seconds(&stop_time.arrival, &stop_time.departure);
        ItineraryStop {
            stop_id: stop_time.stop_id.clone(),
            station_name: station_name.map(String::from),
            arrival: stop_time.arrival,
            departure: stop_time.departure,
            dwell_seconds,
            dwell_label: time_ops::format_dwell(dwell_seconds),
        }
    }
}
