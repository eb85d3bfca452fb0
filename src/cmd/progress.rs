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
use crate::error::ErrorKind;
use crate::error::Fallible;
use crate::error::fail;
use crate::profile::Profile;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

pub fn toggle_day(directory: Option<String>, day: usize, now: Timestamp) -> Fallible<()> {
    let index = day_index(day)?;
    let mut profile = Profile::open(directory, now.local_date())?;
    if profile.tracker.challenge().is_none() {
        return fail(NO_CHALLENGE);
    }
    let completed = match profile.tracker.toggle_day(index, now) {
        Ok(completed) => completed,
        Err(e) => match e.kind() {
            ErrorKind::IndexOutOfRange { .. } => return Err(not_in_plan(day)),
            ErrorKind::Other => return Err(e),
        },
    };
    if completed {
        println!("Day {day} complete! Great job on your progress.");
    } else {
        println!("Day {day} marked as unread.");
    }
    Ok(())
}

pub fn move_cursor(directory: Option<String>, day: usize, today: Date) -> Fallible<()> {
    let index = day_index(day)?;
    let mut profile = Profile::open(directory, today)?;
    if profile.tracker.challenge().is_none() {
        return fail(NO_CHALLENGE);
    }
    if !profile.tracker.set_cursor(index)? {
        return Err(not_in_plan(day));
    }
    if let Some(reading) = profile.tracker.current_reading() {
        println!("Day {}: {}", reading.day, reading.label);
    }
    Ok(())
}
