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
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// The length of a reading challenge. Serialized as the number of months.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Duration {
    ThreeMonths,
    SixMonths,
    NineMonths,
    TwelveMonths,
    TwentyFourMonths,
}

impl Duration {
    pub const ALL: [Duration; 5] = [
        Duration::ThreeMonths,
        Duration::SixMonths,
        Duration::NineMonths,
        Duration::TwelveMonths,
        Duration::TwentyFourMonths,
    ];

    pub fn months(self) -> u32 {
        match self {
            Duration::ThreeMonths => 3,
            Duration::SixMonths => 6,
            Duration::NineMonths => 9,
            Duration::TwelveMonths => 12,
            Duration::TwentyFourMonths => 24,
        }
    }

    /// The number of days in the plan for this duration.
    pub fn total_days(self) -> usize {
        match self {
            Duration::ThreeMonths => 91,
            Duration::SixMonths => 182,
            Duration::NineMonths => 273,
            Duration::TwelveMonths => 365,
            Duration::TwentyFourMonths => 730,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Duration::ThreeMonths => "3 Months",
            Duration::SixMonths => "6 Months",
            Duration::NineMonths => "9 Months",
            Duration::TwelveMonths => "12 Months",
            Duration::TwentyFourMonths => "24 Months",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Duration::ThreeMonths => "An intense, sprint-like pace.",
            Duration::SixMonths => "A focused and steady journey.",
            Duration::NineMonths => "A comfortable and thorough reading.",
            Duration::TwelveMonths => "Read through in one year.",
            Duration::TwentyFourMonths => "A slow, meditative pace.",
        }
    }
}

impl TryFrom<u32> for Duration {
    type Error = ErrorReport;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Duration::ThreeMonths),
            6 => Ok(Duration::SixMonths),
            9 => Ok(Duration::NineMonths),
            12 => Ok(Duration::TwelveMonths),
            24 => Ok(Duration::TwentyFourMonths),
            _ => fail(format!(
                "invalid duration: {value} (expected 3, 6, 9, 12 or 24 months)."
            )),
        }
    }
}

impl From<Duration> for u32 {
    fn from(value: Duration) -> Self {
        value.months()
    }
}

impl FromStr for Duration {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: u32 = match s.trim().parse() {
            Ok(months) => months,
            Err(_) => return fail(format!("invalid duration: {s:?} is not a number.")),
        };
        Duration::try_from(months)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-month", self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_day_table() {
        let days: Vec<usize> = Duration::ALL.iter().map(|d| d.total_days()).collect();
        assert_eq!(days, vec![91, 182, 273, 365, 730]);
    }

    #[test]
    fn test_parse() -> Fallible<()> {
        assert_eq!("12".parse::<Duration>()?, Duration::TwelveMonths);
        assert_eq!(" 3 ".parse::<Duration>()?, Duration::ThreeMonths);
        assert!("5".parse::<Duration>().is_err());
        assert!("twelve".parse::<Duration>().is_err());
        Ok(())
    }

    #[test]
    fn test_serde_as_months() -> Fallible<()> {
        assert_eq!(serde_json::to_string(&Duration::TwentyFourMonths)?, "24");
        let d: Duration = serde_json::from_str("9")?;
        assert_eq!(d, Duration::NineMonths);
        assert!(serde_json::from_str::<Duration>("10").is_err());
        Ok(())
    }
}
