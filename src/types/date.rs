// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::Local;
use chrono::NaiveDate;
use chrono::TimeDelta;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::Fallible;
use crate::types::timestamp::Timestamp;

const FORMAT: &str = "%Y-%m-%d";

/// A calendar date, without a time zone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn parse(s: &str) -> Fallible<Self> {
        Ok(Self(NaiveDate::parse_from_str(s, FORMAT)?))
    }

    /// Shift the date by a (possibly negative) number of days. Saturates at
    /// the ends of the representable range.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = TimeDelta::try_days(days).and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(date) => Self(date),
            None if days < 0 => Self(NaiveDate::MIN),
            None => Self(NaiveDate::MAX),
        }
    }

    /// The number of calendar days from `earlier` to `self`. Negative if
    /// `earlier` is actually later.
    pub fn days_since(self, earlier: Date) -> i64 {
        (self.0 - earlier.0).num_days()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Records may hold either a plain date or a full RFC 3339 timestamp. A
/// timestamp is read as its calendar day in the local time zone.
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        match Date::parse(&string) {
            Ok(date) => Ok(date),
            Err(_) => Timestamp::parse(&string)
                .map(Timestamp::local_date)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
pub fn ymd(year: i32, month: u32, day: u32) -> Date {
    Date::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_days() {
        let date = ymd(2024, 12, 31);
        assert_eq!(date.add_days(1), ymd(2025, 1, 1));
        assert_eq!(date.add_days(-31), ymd(2024, 11, 30));
        assert_eq!(date.add_days(0), date);
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(ymd(2025, 1, 1).add_days(i64::MAX), Date::new(NaiveDate::MAX));
        assert_eq!(ymd(2025, 1, 1).add_days(i64::MIN), Date::new(NaiveDate::MIN));
    }

    #[test]
    fn test_days_since() {
        assert_eq!(ymd(2025, 3, 1).days_since(ymd(2025, 2, 1)), 28);
        assert_eq!(ymd(2025, 2, 1).days_since(ymd(2025, 3, 1)), -28);
    }

    #[test]
    fn test_serde() -> Fallible<()> {
        let date = ymd(2025, 7, 4);
        let json = serde_json::to_string(&date)?;
        assert_eq!(json, "\"2025-07-04\"");
        let back: Date = serde_json::from_str(&json)?;
        assert_eq!(back, date);
        assert!(serde_json::from_str::<Date>("\"07/04/2025\"").is_err());
        Ok(())
    }

    #[test]
    fn test_deserialize_timestamp() -> Fallible<()> {
        let json = "\"2025-07-04T12:00:00.000Z\"";
        let date: Date = serde_json::from_str(json)?;
        assert_eq!(date, Timestamp::parse("2025-07-04T12:00:00Z")?.local_date());
        assert!(serde_json::from_str::<Date>("\"2025-07-04T99:00:00Z\"").is_err());
        Ok(())
    }
}
