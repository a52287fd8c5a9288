//! Translation of a local date range into the UTC query window.

use chrono::{
    DateTime,
    MappedLocalTime,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeDelta,
    TimeZone,
    Utc,
};
use serde::{Serialize, Serializer};

use crate::prelude::*;

/// Bucket code for hourly prices.
pub const DEFAULT_INTERVAL: u8 = 4;

/// Electricity.
const USAGE_TYPE: u8 = 1;

/// The API wants milliseconds but ignores them, so the suffixes are literal.
const FROM_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";
const TILL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.999Z";

/// Query parameters of the `energyprices` endpoint.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryWindow {
    /// Local midnight of the start date.
    #[serde(rename = "fromDate", serialize_with = "serialize_from")]
    pub from: DateTime<Utc>,

    /// Local `23:59:59` of the end date.
    #[serde(rename = "tillDate", serialize_with = "serialize_till")]
    pub till: DateTime<Utc>,

    pub interval: u8,

    #[serde(rename = "usageType")]
    pub usage_type: u8,

    #[serde(rename = "inclBtw")]
    pub include_vat: bool,
}

impl QueryWindow {
    pub fn try_new<Tz: TimeZone>(
        start: NaiveDate,
        end: NaiveDate,
        interval: u8,
        include_vat: bool,
        timezone: &Tz,
    ) -> Result<Self> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).context("invalid end of day")?;
        Ok(Self {
            from: to_utc(start.and_time(NaiveTime::MIN), timezone)?,
            till: to_utc(end.and_time(end_of_day), timezone)?,
            interval,
            usage_type: USAGE_TYPE,
            include_vat,
        })
    }

    /// Wire representation of [`QueryWindow::from`].
    #[must_use]
    pub fn from_date(&self) -> String {
        self.from.format(FROM_FORMAT).to_string()
    }

    /// Wire representation of [`QueryWindow::till`].
    #[must_use]
    pub fn till_date(&self) -> String {
        self.till.format(TILL_FORMAT).to_string()
    }
}

/// Localize the naive time.
///
/// A time repeated by a backward transition resolves to its first occurrence, for both ends
/// of the window. A time skipped by a forward transition moves past the gap.
fn to_utc<Tz: TimeZone>(local: NaiveDateTime, timezone: &Tz) -> Result<DateTime<Utc>> {
    match timezone.from_local_datetime(&local) {
        MappedLocalTime::Single(time) | MappedLocalTime::Ambiguous(time, _) => {
            Ok(time.with_timezone(&Utc))
        }
        MappedLocalTime::None => timezone
            .from_local_datetime(&(local + TimeDelta::hours(1)))
            .earliest()
            .map(|time| time.with_timezone(&Utc))
            .with_context(|| format!("`{local}` does not exist in the local timezone")),
    }
}

fn serialize_from<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(FROM_FORMAT))
}

fn serialize_till<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TILL_FORMAT))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono_tz::{
        America::{Havana, Santiago},
        Europe::Amsterdam,
    };

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn utc_window_ok() -> Result {
        let window = QueryWindow::try_new(date(2023, 5, 1), date(2023, 5, 2), 4, true, &Utc)?;
        assert_eq!(window.from_date(), "2023-05-01T00:00:00.000Z");
        assert_eq!(window.till_date(), "2023-05-02T23:59:59.999Z");
        assert_eq!(window.usage_type, 1);
        Ok(())
    }

    #[test]
    fn summer_time_window_ok() -> Result {
        let window =
            QueryWindow::try_new(date(2023, 5, 1), date(2023, 5, 2), 4, true, &Amsterdam)?;
        assert_eq!(window.from_date(), "2023-04-30T22:00:00.000Z");
        assert_eq!(window.till_date(), "2023-05-02T21:59:59.999Z");
        Ok(())
    }

    #[test]
    fn winter_time_window_ok() -> Result {
        let window =
            QueryWindow::try_new(date(2023, 1, 15), date(2023, 1, 15), 4, true, &Amsterdam)?;
        assert_eq!(window.from_date(), "2023-01-14T23:00:00.000Z");
        assert_eq!(window.till_date(), "2023-01-15T22:59:59.999Z");
        Ok(())
    }

    #[test]
    fn clock_change_day_ok() -> Result {
        let window =
            QueryWindow::try_new(date(2023, 3, 26), date(2023, 3, 26), 4, false, &Amsterdam)?;
        assert_eq!(window.from_date(), "2023-03-25T23:00:00.000Z");
        assert_eq!(window.till_date(), "2023-03-26T21:59:59.999Z");
        Ok(())
    }

    #[test]
    fn nonexistent_midnight_moves_forward() -> Result {
        // Cuba springs forward at midnight, the day starts at 01:00 CDT.
        let window = QueryWindow::try_new(date(2023, 3, 12), date(2023, 3, 12), 4, true, &Havana)?;
        assert_eq!(window.from_date(), "2023-03-12T05:00:00.000Z");
        assert_eq!(window.till_date(), "2023-03-13T03:59:59.999Z");
        Ok(())
    }

    #[test]
    fn repeated_end_of_day_takes_first_occurrence() -> Result {
        // Chile falls back at midnight, 23:00–24:00 happens twice.
        let window =
            QueryWindow::try_new(date(2023, 4, 1), date(2023, 4, 1), 4, true, &Santiago)?;
        assert_eq!(window.from_date(), "2023-04-01T03:00:00.000Z");
        assert_eq!(window.till_date(), "2023-04-02T02:59:59.999Z");
        Ok(())
    }

    #[test]
    fn query_string_ok() -> Result {
        let window = QueryWindow::try_new(date(2023, 5, 1), date(2023, 5, 2), 4, false, &Utc)?;
        let query: BTreeMap<String, String> = serde_qs::from_str(&serde_qs::to_string(&window)?)?;
        assert_eq!(query["fromDate"], "2023-05-01T00:00:00.000Z");
        assert_eq!(query["tillDate"], "2023-05-02T23:59:59.999Z");
        assert_eq!(query["interval"], "4");
        assert_eq!(query["usageType"], "1");
        assert_eq!(query["inclBtw"], "false");
        assert_eq!(query.len(), 5);
        Ok(())
    }
}
