use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use super::KmetroAppError;
use crate::position::Clock;

/// parses a clock time given as `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| format!("invalid time '{s}', expected HH:MM or HH:MM:SS"))
}

/// the instant a query refers to. missing parts are taken from `clock`.
pub fn reference_instant(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    clock: &dyn Clock,
) -> NaiveDateTime {
    let now = clock.now();
    NaiveDateTime::new(
        date.unwrap_or_else(|| now.date()),
        time.unwrap_or_else(|| now.time()),
    )
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), KmetroAppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// one compact JSON document per line, used for streamed output.
pub fn write_json_line<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
) -> Result<(), KmetroAppError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::position::FixedClock;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:00"), Ok(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert_eq!(parse_time("21:15:30"), Ok(NaiveTime::from_hms_opt(21, 15, 30).unwrap()));
        assert!(parse_time("9am").is_err());
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_reference_instant_fills_from_clock() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 8)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(reference_instant(None, None, &clock), now);

        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        assert_eq!(
            reference_instant(Some(sunday), Some(time), &clock),
            NaiveDateTime::new(sunday, time)
        );
        assert_eq!(
            reference_instant(None, Some(time), &clock),
            NaiveDateTime::new(now.date(), time)
        );
    }
}
