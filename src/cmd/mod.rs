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

pub mod challenge;
pub mod passage;
pub mod plan;
pub mod progress;
pub mod status;

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;

use crate::error::ErrorReport;
use crate::error::Fallible;

const NO_CHALLENGE: &str = "no active challenge. Start one with `bible-sprint start <MONTHS>`.";

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Convert a 1-based day number from the command line into a plan index.
fn day_index(day: usize) -> Fallible<usize> {
    day.checked_sub(1)
        .ok_or_else(|| ErrorReport::new("days are numbered from 1."))
}

fn not_in_plan(day: usize) -> ErrorReport {
    ErrorReport::new(&format!("day {day} is not in the plan."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index() -> Fallible<()> {
        assert_eq!(day_index(1)?, 0);
        assert_eq!(day_index(365)?, 364);
        assert_eq!(
            day_index(0).unwrap_err().to_string(),
            "error: days are numbered from 1."
        );
        Ok(())
    }
}
