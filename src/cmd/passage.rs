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

use crate::cmd::NO_CHALLENGE;
use crate::cmd::day_index;
use crate::cmd::not_in_plan;
use crate::config::ReaderConfig;
use crate::error::Fallible;
use crate::error::fail;
use crate::passage::passages;
use crate::plan::ReadingDay;
use crate::profile::Profile;
use crate::types::date::Date;

pub fn print_passages(directory: Option<String>, day: Option<usize>, today: Date) -> Fallible<()> {
    let profile = Profile::open(directory, today)?;
    let tracker = &profile.tracker;
    if tracker.challenge().is_none() {
        return fail(NO_CHALLENGE);
    }
    let reading = match day {
        Some(day) => tracker
            .plan()
            .get(day_index(day)?)
            .ok_or_else(|| not_in_plan(day))?,
        None => tracker
            .current_reading()
            .ok_or_else(|| not_in_plan(tracker.cursor() + 1))?,
    };
    print!("{}", render_passages(reading, &profile.config.reader));
    Ok(())
}

fn render_passages(reading: &ReadingDay, config: &ReaderConfig) -> String {
    let mut out = format!("Day {}: {}\n", reading.day, reading.label);
    for passage in passages(reading) {
        out.push_str(&format!("  {}\n    {}\n", passage.query, passage.url(config)));
    }
    out
}
