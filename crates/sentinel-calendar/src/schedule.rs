//! Business schedule configuration.
//!
//! A schedule is immutable configuration supplied by the caller: weekday
//! and weekend open windows in fractional civil hours, a holiday set, and
//! the UTC offset of the organization's civil timezone. It is validated at
//! construction; the engine refuses to evaluate against an invalid one.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Result, ScheduleError};

/// Open window of one day type, in fractional civil hours.
///
/// `start_hour = 8.5` means 08:30. Invariant: `0 <= start < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayWindow {
    /// Start of day, fractional hours from civil midnight.
    pub start_hour: f64,
    /// End of day, fractional hours from civil midnight.
    pub end_hour: f64,
}

impl DayWindow {
    /// Creates a validated day window.
    pub fn new(start_hour: f64, end_hour: f64) -> Result<Self> {
        let window = Self {
            start_hour,
            end_hour,
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks the window invariant.
    pub fn validate(&self) -> Result<()> {
        let in_day = |h: f64| h.is_finite() && (0.0..=24.0).contains(&h);
        if !in_day(self.start_hour) || !in_day(self.end_hour) || self.start_hour >= self.end_hour {
            return Err(ScheduleError::InvalidWindow {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }
        Ok(())
    }

    /// Returns the window bounds as civil times of day.
    ///
    /// An end of exactly 24.0 maps to the last representable second of the
    /// day; fractional hours are resolved to whole seconds.
    pub(crate) fn times(&self) -> (NaiveTime, NaiveTime) {
        (to_time(self.start_hour), to_time(self.end_hour))
    }
}

fn to_time(hour: f64) -> NaiveTime {
    let secs = (hour * 3600.0).round() as u32;
    let secs = secs.min(24 * 3600 - 1);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Whether and how weekend hours count toward business time.
///
/// Both policies appear in the domain, so this is explicit configuration
/// rather than a hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendHours {
    /// Saturdays and Sundays accrue no business time at all.
    Excluded,
    /// Saturdays and Sundays accrue time within this (usually reduced)
    /// window.
    Window(DayWindow),
}

/// Immutable business-hours configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSchedule {
    /// Minutes east of UTC of the organization's civil timezone.
    ///
    /// All window math converts instants through this offset, regardless of
    /// the storage timezone of the input.
    pub utc_offset_minutes: i32,

    /// Open window on Monday through Friday.
    pub weekday: DayWindow,

    /// Weekend policy.
    pub weekend: WeekendHours,

    /// Dates treated as fully non-business.
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
}

impl BusinessSchedule {
    /// Creates a validated schedule.
    pub fn new(
        utc_offset_minutes: i32,
        weekday: DayWindow,
        weekend: WeekendHours,
        holidays: BTreeSet<NaiveDate>,
    ) -> Result<Self> {
        let schedule = Self {
            utc_offset_minutes,
            weekday,
            weekend,
            holidays,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Checks every window and the offset.
    ///
    /// Deserialized schedules must be validated before use; the engine
    /// config does this on construction.
    pub fn validate(&self) -> Result<()> {
        self.weekday.validate()?;
        if let WeekendHours::Window(window) = &self.weekend {
            window.validate()?;
        }
        self.offset()?;
        Ok(())
    }

    /// Returns the civil-timezone offset.
    pub(crate) fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or(ScheduleError::InvalidOffset {
            minutes: self.utc_offset_minutes,
        })
    }

    /// Returns the civil date containing the given instant.
    pub fn civil_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self.offset() {
            Ok(offset) => instant.with_timezone(&offset).date_naive(),
            // validate() rejects bad offsets; fall back to UTC rather than
            // panic if an unvalidated schedule slips through.
            Err(_) => instant.date_naive(),
        }
    }

    /// Returns the window configured for the given date, before holidays
    /// are considered.
    fn window_for(&self, date: NaiveDate) -> Option<DayWindow> {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => match self.weekend {
                WeekendHours::Excluded => None,
                WeekendHours::Window(window) => Some(window),
            },
            _ => Some(self.weekday),
        }
    }

    /// Returns true if the date has a non-empty business window.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.holidays.contains(&date) && self.window_for(date).is_some()
    }

    /// Returns the business window of the given civil date as absolute
    /// instants, or `None` if the date has an empty window (a holiday, or
    /// a weekend under [`WeekendHours::Excluded`]).
    pub fn business_window(&self, date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if self.holidays.contains(&date) {
            return None;
        }
        let window = self.window_for(date)?;
        let offset = self.offset().ok()?;
        let (start, end) = window.times();
        let to_utc = |time: NaiveTime| {
            offset
                .from_local_datetime(&date.and_time(time))
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        };
        Some((to_utc(start)?, to_utc(end)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn schedule(offset_minutes: i32, weekend: WeekendHours) -> BusinessSchedule {
        BusinessSchedule::new(
            offset_minutes,
            DayWindow::new(8.5, 17.5).unwrap(),
            weekend,
            BTreeSet::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_day_window_rejects_inverted() {
        assert!(DayWindow::new(17.0, 9.0).is_err());
        assert!(DayWindow::new(9.0, 9.0).is_err());
    }

    #[test]
    fn test_day_window_rejects_out_of_day() {
        assert!(DayWindow::new(-1.0, 9.0).is_err());
        assert!(DayWindow::new(9.0, 25.0).is_err());
        assert!(DayWindow::new(f64::NAN, 9.0).is_err());
    }

    #[test]
    fn test_schedule_rejects_bad_weekend_window() {
        let result = BusinessSchedule::new(
            0,
            DayWindow { start_hour: 8.5, end_hour: 17.5 },
            WeekendHours::Window(DayWindow { start_hour: 16.0, end_hour: 8.5 }),
            BTreeSet::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schedule_rejects_bad_offset() {
        let result = BusinessSchedule::new(
            26 * 60,
            DayWindow { start_hour: 8.5, end_hour: 17.5 },
            WeekendHours::Excluded,
            BTreeSet::new(),
        );
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::InvalidOffset { minutes: 26 * 60 }
        );
    }

    #[test]
    fn test_weekday_window_bounds() {
        let s = schedule(0, WeekendHours::Excluded);
        // 2024-03-01 is a Friday
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (start, end) = s.business_window(date).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap());
    }

    #[test]
    fn test_weekend_excluded_has_no_window() {
        let s = schedule(0, WeekendHours::Excluded);
        // 2024-03-02 is a Saturday
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        assert!(s.business_window(saturday).is_none());
        assert!(!s.is_business_day(saturday));
    }

    #[test]
    fn test_weekend_window_applies_on_saturday() {
        let weekend = WeekendHours::Window(DayWindow::new(8.5, 16.0).unwrap());
        let s = schedule(0, weekend);
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        let (start, end) = s.business_window(saturday).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 2, 16, 0, 0).unwrap());
        assert!(s.is_business_day(saturday));
    }

    #[test]
    fn test_holiday_has_empty_window() {
        let mut s = schedule(0, WeekendHours::Excluded);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        s.holidays.insert(date);

        assert!(s.business_window(date).is_none());
        assert!(!s.is_business_day(date));
    }

    #[test]
    fn test_offset_shifts_window_into_utc() {
        // Civil zone UTC+2: a civil 08:30 start is 06:30 UTC.
        let s = schedule(120, WeekendHours::Excluded);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let (start, _) = s.business_window(date).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 0).unwrap());
    }

    #[test]
    fn test_civil_date_uses_offset() {
        let s = schedule(120, WeekendHours::Excluded);
        // 23:30 UTC on March 1st is already March 2nd in UTC+2.
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();

        assert_eq!(
            s.civil_date(instant),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_schedule_serialization_roundtrip() {
        let weekend = WeekendHours::Window(DayWindow::new(8.5, 16.0).unwrap());
        let mut s = schedule(60, weekend);
        s.holidays
            .insert(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());

        let json = serde_json::to_string(&s).unwrap();
        let back: BusinessSchedule = serde_json::from_str(&json).unwrap();

        assert_eq!(back, s);
        assert!(back.validate().is_ok());
    }
}
