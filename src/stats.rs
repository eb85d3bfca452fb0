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

use serde::Serialize;

use crate::types::challenge::Challenge;
use crate::types::date::Date;
use crate::types::progress::ProgressEntry;

/// Pacing statistics for a challenge. Derived on every read, never stored.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Percentage of plan days completed, in `[0, 100]`.
    pub percent_complete: f64,
    /// Calendar days since the challenge started. Never negative.
    pub days_since_start: i64,
    pub total_days: usize,
    /// The date the challenge finished, or is projected to finish.
    pub estimated_end_date: Date,
}

impl Stats {
    /// The stats shown when there is no active challenge.
    pub fn empty(today: Date) -> Self {
        Self {
            percent_complete: 0.0,
            days_since_start: 0,
            total_days: 0,
            estimated_end_date: today,
        }
    }
}

/// How a single plan day looks relative to today.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DayStatus {
    Completed,
    /// In the past and not completed.
    Behind,
    /// Scheduled for today and not completed yet.
    Today,
    Upcoming,
}

pub fn compute_stats(
    challenge: &Challenge,
    ledger: &[ProgressEntry],
    total_days: usize,
    today: Date,
) -> Stats {
    let days_since_start = days_since_start(challenge, today);
    let completed = completed_count(ledger);
    let percent_complete = if total_days > 0 {
        (100.0 * completed as f64 / total_days as f64).min(100.0)
    } else {
        0.0
    };
    let estimated_end_date = if completed >= total_days {
        latest_completion(ledger).unwrap_or(today)
    } else if completed == 0 {
        on_schedule_end(today, total_days, days_since_start)
    } else {
        match observed_pace(completed, days_since_start + 1) {
            Some(pace) => {
                let remaining = (total_days - completed) as f64;
                today.add_days((remaining / pace).ceil() as i64)
            }
            None => on_schedule_end(today, total_days, days_since_start),
        }
    };
    Stats {
        percent_complete,
        days_since_start,
        total_days,
        estimated_end_date,
    }
}

pub fn days_since_start(challenge: &Challenge, today: Date) -> i64 {
    today.days_since(challenge.start_date).max(0)
}

pub fn completed_count(ledger: &[ProgressEntry]) -> usize {
    ledger.iter().filter(|entry| entry.completed).count()
}

/// Readings per day over `elapsed_days`. `None` when there is no usable pace,
/// which callers treat as "no progress yet".
pub fn observed_pace(completed: usize, elapsed_days: i64) -> Option<f64> {
    if elapsed_days <= 0 {
        return None;
    }
    let pace = completed as f64 / elapsed_days as f64;
    if pace > 0.0 && pace.is_finite() {
        Some(pace)
    } else {
        None
    }
}

/// The end date assuming the reader starts today and keeps to the plan.
fn on_schedule_end(today: Date, total_days: usize, days_since_start: i64) -> Date {
    today.add_days(total_days as i64 - days_since_start - 1)
}

fn latest_completion(ledger: &[ProgressEntry]) -> Option<Date> {
    ledger
        .iter()
        .filter(|entry| entry.completed)
        .filter_map(|entry| entry.date_completed)
        .max()
        .map(|ts| ts.local_date())
}

pub fn day_status(index: usize, completed: bool, days_since_start: i64) -> DayStatus {
    let index = index as i64;
    if completed {
        DayStatus::Completed
    } else if index < days_since_start {
        DayStatus::Behind
    } else if index == days_since_start {
        DayStatus::Today
    } else {
        DayStatus::Upcoming
    }
}
