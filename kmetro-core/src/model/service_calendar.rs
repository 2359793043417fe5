use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// per-weekday service flags for one service id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceCalendar {
    pub service_id: String,
    pub days: ServiceDays,
}

impl ServiceCalendar {
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.days.monday,
            Weekday::Tue => self.days.tuesday,
            Weekday::Wed => self.days.wednesday,
            Weekday::Thu => self.days.thursday,
            Weekday::Fri => self.days.friday,
            Weekday::Sat => self.days.saturday,
            Weekday::Sun => self.days.sunday,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_runs_on_weekend_only() {
        let calendar = ServiceCalendar {
            service_id: String::from("WE"),
            days: ServiceDays {
                sunday: true,
                ..Default::default()
            },
        };
        assert!(calendar.runs_on(Weekday::Sun));
        assert!(!calendar.runs_on(Weekday::Sat));
        assert!(!calendar.runs_on(Weekday::Mon));
    }
}
