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

use crate::canon::all_chapters;
use crate::cmd::OutputFormat;
use crate::error::Fallible;
use crate::plan::ReadingDay;
use crate::plan::generate_plan;
use crate::types::duration::Duration;

pub fn print_plan(duration: Duration, format: OutputFormat) -> Fallible<()> {
    let plan = generate_plan(duration);
    match format {
        OutputFormat::Text => print!("{}", render_plan(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

pub fn print_plans() {
    print!("{}", render_plans());
}

fn render_plan(plan: &[ReadingDay]) -> String {
    plan.iter()
        .map(|day| {
            let count = day.chapter_count();
            let noun = if count == 1 { "chapter" } else { "chapters" };
            format!("Day {:>3}: {} ({count} {noun})\n", day.day, day.label)
        })
        .collect()
}

fn render_plans() -> String {
    let chapters = all_chapters().len() as f64;
    Duration::ALL
        .iter()
        .map(|duration| {
            let days = duration.total_days();
            format!(
                "{:>2}  {:<9}  {days} days, ~{:.1} chapters a day. {}\n",
                duration.months(),
                duration.title(),
                chapters / days as f64,
                duration.description()
            )
        })
        .collect()
}
