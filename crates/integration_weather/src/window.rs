//! Forecast date windows
//!
//! "Today" is evaluated in the provider timezone so that a request shortly
//! after midnight in Zurich already targets the new day.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use chrono_tz::Tz;
use domain::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of `now` in `timezone`
#[must_use]
pub fn today_in(timezone: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&timezone).date_naive()
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, DomainError> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or_else(|| DomainError::InvalidDateTime(format!("{date} shifted by {days} days")))
}

/// Friday to Sunday of the weekend a sunshine forecast targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendWindow {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeekendWindow {
    /// Window for `today`
    ///
    /// Monday to Friday target the coming Friday, Saturday stays in the
    /// current weekend (yesterday's Friday) and Sunday moves on to next
    /// Friday.
    pub fn containing_or_after(today: NaiveDate) -> Result<Self, DomainError> {
        // Sunday = 1 .. Saturday = 7
        let weekday = i64::from(today.weekday().number_from_sunday());
        let offset = if today.weekday() == Weekday::Sun {
            // next Friday; six days ahead would start the window on a Saturday
            5
        } else {
            6 - weekday
        };
        let friday = shift(today, offset)?;
        Ok(Self {
            friday,
            saturday: shift(friday, 1)?,
            sunday: shift(friday, 2)?,
        })
    }

    #[must_use]
    pub fn start_date(&self) -> String {
        self.friday.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_date(&self) -> String {
        self.sunday.format(DATE_FORMAT).to_string()
    }

    /// `(friday, saturday, sunday)` as `YYYY-MM-DD`
    #[must_use]
    pub fn labels(&self) -> (String, String, String) {
        (
            self.start_date(),
            self.saturday.format(DATE_FORMAT).to_string(),
            self.end_date(),
        )
    }
}

/// Monday to Sunday of the current week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeekWindow {
    pub fn containing(today: NaiveDate) -> Result<Self, DomainError> {
        let from_monday = i64::from(today.weekday().num_days_from_monday());
        let monday = shift(today, -from_monday)?;
        Ok(Self {
            monday,
            sunday: shift(monday, 6)?,
        })
    }

    #[must_use]
    pub fn start_date(&self) -> String {
        self.monday.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_date(&self) -> String {
        self.sunday.format(DATE_FORMAT).to_string()
    }
}
