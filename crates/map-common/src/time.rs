//! Time handling for model runs: initial times, forecast offsets, and the
//! compact retrieval keys the data server expects.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Model run time as callers supply it.
///
/// Scripted callers hold a real timestamp; interactive callers usually paste
/// the compact `YYMMDDHH` token straight off a data server listing. Both
/// resolve to the same retrieval key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InitialTime {
    /// Structured run time in UTC.
    Utc(DateTime<Utc>),
    /// Pre-formatted `YYMMDDHH` token, used verbatim after trimming.
    Token(String),
}

impl InitialTime {
    /// Recover a structured timestamp where possible.
    ///
    /// Tokens must be exactly eight digits; two-digit years map to 2000-2099.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            InitialTime::Utc(dt) => Some(*dt),
            InitialTime::Token(s) => parse_token(s.trim()),
        }
    }
}

impl From<DateTime<Utc>> for InitialTime {
    fn from(dt: DateTime<Utc>) -> Self {
        InitialTime::Utc(dt)
    }
}

impl From<&str> for InitialTime {
    fn from(s: &str) -> Self {
        InitialTime::Token(s.to_string())
    }
}

impl From<String> for InitialTime {
    fn from(s: String) -> Self {
        InitialTime::Token(s)
    }
}

/// Construct the retrieval key for one forecast step.
///
/// The data server names files `YYMMDDHH.FFF`: the run time as a compact
/// two-digit-year token, then `.` and the forecast hour zero-padded to three
/// digits. Hours above 999 widen the field, they are never truncated.
pub fn model_filename(initial_time: &InitialTime, forecast_hour: u32) -> String {
    match initial_time {
        InitialTime::Utc(dt) => format!("{}.{:03}", dt.format("%y%m%d%H"), forecast_hour),
        InitialTime::Token(s) => format!("{}.{:03}", s.trim(), forecast_hour),
    }
}

fn parse_token(s: &str) -> Option<DateTime<Utc>> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let num = |range: std::ops::Range<usize>| s[range].parse::<u32>().ok();
    let (yy, mm, dd, hh) = (num(0..2)?, num(2..4)?, num(4..6)?, num(6..8)?);
    let naive = NaiveDate::from_ymd_opt(2000 + yy as i32, mm, dd)?.and_hms_opt(hh, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Reference time plus forecast offset for one product frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidTime {
    /// Model run/reference time
    pub reference_time: DateTime<Utc>,
    /// Forecast hour offset from reference time
    pub forecast_hour: u32,
}

impl ValidTime {
    pub fn new(reference_time: DateTime<Utc>, forecast_hour: u32) -> Self {
        Self {
            reference_time,
            forecast_hour,
        }
    }

    /// The time the forecast is valid for (reference + offset).
    pub fn valid_datetime(&self) -> DateTime<Utc> {
        self.reference_time + Duration::hours(self.forecast_hour as i64)
    }

    /// Figure-header stamps: initial time, forecast hour, valid time.
    pub fn stamps(&self) -> TimeStamp {
        TimeStamp {
            initial: format!("Init {}", self.reference_time.format("%Y-%m-%d %H:%M UTC")),
            forecast: format!("FH {:03}", self.forecast_hour),
            valid: format!("Valid {}", self.valid_datetime().format("%Y-%m-%d %H:%M UTC")),
        }
    }
}

/// The three header strings drawn above a product frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStamp {
    pub initial: String,
    pub forecast: String,
    pub valid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        let dt = InitialTime::from("18042008").as_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2018, 4, 20, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_token_trims_whitespace() {
        let dt = InitialTime::from(" 18042008 ").as_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2018, 4, 20, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_token_rejects_malformed() {
        assert!(InitialTime::from("1804200").as_datetime().is_none());
        assert!(InitialTime::from("18point8").as_datetime().is_none());
        assert!(InitialTime::from("18134008").as_datetime().is_none());
    }

    #[test]
    fn test_valid_datetime_offsets_by_forecast_hour() {
        let vt = ValidTime::new(Utc.with_ymd_and_hms(2018, 4, 20, 8, 0, 0).unwrap(), 24);
        assert_eq!(
            vt.valid_datetime(),
            Utc.with_ymd_and_hms(2018, 4, 21, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_stamps() {
        let vt = ValidTime::new(Utc.with_ymd_and_hms(2018, 4, 20, 8, 0, 0).unwrap(), 3);
        let stamps = vt.stamps();
        assert_eq!(stamps.initial, "Init 2018-04-20 08:00 UTC");
        assert_eq!(stamps.forecast, "FH 003");
        assert_eq!(stamps.valid, "Valid 2018-04-20 11:00 UTC");
    }
}
