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

use serde::Deserialize;
use serde::Serialize;

use crate::plan::ReadingDay;
use crate::types::timestamp::Timestamp;

/// Completion record for a single day of the plan.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// The plan day this entry tracks.
    pub day: usize,
    pub completed: bool,
    /// When the day was marked complete. `None` iff not completed, unless the
    /// ledger was written by hand.
    pub date_completed: Option<Timestamp>,
}

impl ProgressEntry {
    pub fn pending(day: usize) -> Self {
        Self {
            day,
            completed: false,
            date_completed: None,
        }
    }

    /// Flip the completion state. Newly completed entries are stamped with
    /// `now`; un-completed entries lose their stamp.
    pub fn toggle(&mut self, now: Timestamp) {
        self.completed = !self.completed;
        self.date_completed = if self.completed { Some(now) } else { None };
    }
}

/// A fresh, all-pending ledger for the given plan.
pub fn empty_ledger(plan: &[ReadingDay]) -> Vec<ProgressEntry> {
    plan.iter().map(|day| ProgressEntry::pending(day.day)).collect()
}
