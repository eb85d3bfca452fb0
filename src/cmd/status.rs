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

use crate::cmd::OutputFormat;
use crate::error::Fallible;
use crate::plan::ReadingDay;
use crate::profile::Profile;
use crate::stats::DayStatus;
use crate::stats::Stats;
use crate::stats::completed_count;
use crate::store::Store;
use crate::tracker::Tracker;
use crate::types::challenge::Challenge;
use crate::types::date::Date;

pub fn print_status(directory: Option<String>, format: OutputFormat, today: Date) -> Fallible<()> {
    let profile = Profile::open(directory, today)?;
    let report = status_report(&profile.tracker, today);
    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport<'a> {
    challenge: Option<&'a Challenge>,
    stats: Stats,
    completed_days: usize,
    behind_days: usize,
    todays_reading: Option<&'a ReadingDay>,
    current_reading: Option<&'a ReadingDay>,
}

fn status_report<S: Store>(tracker: &Tracker<S>, today: Date) -> StatusReport<'_> {
    let behind_days = tracker
        .day_statuses(today)
        .into_iter()
        .filter(|status| *status == DayStatus::Behind)
        .count();
    StatusReport {
        challenge: tracker.challenge(),
        stats: tracker.stats(today),
        completed_days: completed_count(tracker.ledger()),
        behind_days,
        todays_reading: tracker.todays_reading(today),
        current_reading: tracker.current_reading(),
    }
}

fn render_text(report: &StatusReport) -> String {
    let Some(challenge) = report.challenge else {
        return "No active challenge. Start one with `bible-sprint start <MONTHS>`.\n".to_string();
    };
    let stats = &report.stats;
    let mut out = format!(
        "{} challenge, started {}.\n",
        challenge.duration, challenge.start_date
    );
    if report.completed_days >= stats.total_days {
        out.push_str("Challenge complete!\n");
    } else if let Some(reading) = report.todays_reading {
        out.push_str(&format!(
            "Today (day {} of {}): {}\n",
            reading.day, stats.total_days, reading.label
        ));
    }
    out.push_str(&format!(
        "Progress: {:.1}% ({} of {} days read)\n",
        stats.percent_complete, report.completed_days, stats.total_days
    ));
    if report.behind_days > 0 {
        out.push_str(&format!("Days behind: {}\n", report.behind_days));
    }
    out.push_str(&format!("Est. finish: {}\n", stats.estimated_end_date));
    if let Some(reading) = report.current_reading {
        out.push_str(&format!(
            "Bookmark: day {}, {}\n",
            reading.day, reading.label
        ));
    }
    out
}
