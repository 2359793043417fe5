use std::{fmt::Display, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

const SECONDS_PER_DAY: u32 = 86_400;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid service time '{0}', expected HH:MM:SS")]
pub struct ServiceTimeError(pub String);

/// a wall-clock time of the service day, stored as seconds since midnight.
///
/// no timezone is attached. hours past 23 are accepted as written in the
/// dataset, but no cross-midnight correction is applied anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceTime(u32);

impl ServiceTime {
    pub const fn from_seconds(seconds: u32) -> ServiceTime {
        ServiceTime(seconds)
    }

    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> ServiceTime {
        ServiceTime(hours * 3600 + minutes * 60 + seconds)
    }

    /// like [`ServiceTime::from_hms`], but `None` when the total does not fit.
    pub fn checked_from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<ServiceTime> {
        hours
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minutes.checked_mul(60)?))
            .and_then(|s| s.checked_add(seconds))
            .map(ServiceTime)
    }

    /// the time-of-day of a chrono value, truncated to whole seconds.
    pub fn from_naive_time(time: &NaiveTime) -> ServiceTime {
        ServiceTime(time.num_seconds_from_midnight())
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// whole minutes since midnight, dropping the seconds component.
    pub fn minute_of_day(&self) -> u32 {
        self.0 / 60
    }

    /// signed number of seconds from `self` to `later`.
    pub fn seconds_until(&self, later: &ServiceTime) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }

    /// this time folded into a single day.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0 % SECONDS_PER_DAY, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// renders as a 12-hour clock string such as `9:05 AM`, or `9:05:30 AM`
    /// when `include_seconds` is set.
    pub fn format_12h(&self, include_seconds: bool) -> String {
        let format = if include_seconds {
            "%-I:%M:%S %p"
        } else {
            "%-I:%M %p"
        };
        self.to_naive_time().format(format).to_string()
    }
}

impl FromStr for ServiceTime {
    type Err = ServiceTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ServiceTimeError(s.to_string());
        let parts = s
            .trim()
            .split(':')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [h, m, sec] if *m < 60 && *sec < 60 => {
                ServiceTime::checked_from_hms(*h, *m, *sec).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}

impl Display for ServiceTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

impl Serialize for ServiceTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServiceTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let time_str: String = String::deserialize(deserializer)?;
        ServiceTime::from_str(&time_str).map_err(|e| D::Error::custom(format!("{e}")))
    }
}
