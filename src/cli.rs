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

use clap::Parser;

use crate::cmd::OutputFormat;
use crate::cmd::challenge::reset_challenge;
use crate::cmd::challenge::start_challenge;
use crate::cmd::passage::print_passages;
use crate::cmd::plan::print_plan;
use crate::cmd::plan::print_plans;
use crate::cmd::progress::move_cursor;
use crate::cmd::progress::toggle_day;
use crate::cmd::status::print_status;
use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::duration::Duration;
use crate::types::timestamp::Timestamp;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Start a new reading challenge, replacing any existing one.
    Start {
        /// Length of the challenge in months: 3, 6, 9, 12 or 24.
        months: Duration,
        /// Path to the data directory. Defaults to the current directory.
        #[arg(short, long)]
        directory: Option<String>,
    },
    /// Show today's reading and pacing statistics.
    Status {
        #[arg(short, long)]
        directory: Option<String>,
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Mark a day as read, or unmark it if it already is.
    Toggle {
        /// The day number, starting from 1.
        day: usize,
        #[arg(short, long)]
        directory: Option<String>,
    },
    /// Move the bookmark to a day.
    Goto {
        /// The day number, starting from 1.
        day: usize,
        #[arg(short, long)]
        directory: Option<String>,
    },
    /// Delete the challenge and all progress.
    Reset {
        #[arg(short, long)]
        directory: Option<String>,
    },
    /// Print the reading plan for a duration.
    Plan {
        months: Duration,
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the available plans.
    Plans,
    /// Print where to fetch the text of a day's reading.
    Passage {
        /// The day number. Defaults to the bookmarked day.
        day: Option<usize>,
        #[arg(short, long)]
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    let now = Timestamp::now();
    let today: Date = now.local_date();
    match cli {
        Command::Start { months, directory } => start_challenge(directory, months, now),
        Command::Status { directory, format } => print_status(directory, format, today),
        Command::Toggle { day, directory } => toggle_day(directory, day, now),
        Command::Goto { day, directory } => move_cursor(directory, day, today),
        Command::Reset { directory } => reset_challenge(directory, today),
        Command::Plan { months, format } => print_plan(months, format),
        Command::Plans => {
            print_plans();
            Ok(())
        }
        Command::Passage { day, directory } => print_passages(directory, day, today),
    }
}
