use crate::util::ServiceTime;

/// travel duration in whole minutes between a departure and an arrival.
///
/// the difference is taken on minute-of-day values, so seconds are ignored on
/// both ends. a result below zero means the trip crosses midnight; it is
/// reported as-is.
pub fn duration_minutes(departure: &ServiceTime, arrival: &ServiceTime) -> i64 {
    i64::from(arrival.minute_of_day()) - i64::from(departure.minute_of_day())
}

pub fn format_duration(minutes: i64) -> String {
    format!("{minutes} Mins")
}

/// time spent standing at a stop, in seconds.
pub fn dwell_seconds(arrival: &ServiceTime, departure: &ServiceTime) -> i64 {
    arrival.seconds_until(departure)
}

/// dwell under a minute is shown in seconds, anything longer in whole minutes.
pub fn format_dwell(seconds: i64) -> String {
    if seconds < 60 {
        format!("{seconds} Secs")
    } else {
        format!("{} Mins", seconds / 60)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_duration_ignores_seconds() {
        let dep = ServiceTime::from_hms(9, 0, 30);
        let arr = ServiceTime::from_hms(9, 22, 0);
        assert_eq!(duration_minutes(&dep, &arr), 22);
        assert_eq!(format_duration(22), "22 Mins");
    }

    #[test]
    fn test_duration_across_midnight_is_not_corrected() {
        let dep = ServiceTime::from_hms(23, 50, 0);
        let arr = ServiceTime::from_hms(0, 10, 0);
        assert_eq!(duration_minutes(&dep, &arr), -1420);
    }

    #[test]
    fn test_dwell_formatting() {
        let arr = ServiceTime::from_hms(8, 8, 0);
        assert_eq!(format_dwell(dwell_seconds(&arr, &ServiceTime::from_hms(8, 8, 30))), "30 Secs");
        assert_eq!(format_dwell(dwell_seconds(&arr, &arr)), "0 Secs");
        assert_eq!(format_dwell(dwell_seconds(&arr, &ServiceTime::from_hms(8, 10, 59))), "2 Mins");
        assert_eq!(format_dwell(60), "1 Mins");
    }
}
