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

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::plan::PlanCache;
use crate::plan::ReadingDay;
use crate::stats::DayStatus;
use crate::stats::Stats;
use crate::stats::compute_stats;
use crate::stats::day_status;
use crate::stats::days_since_start;
use crate::store::CHALLENGE_KEY;
use crate::store::CURSOR_KEY;
use crate::store::PROGRESS_KEY;
use crate::store::Store;
use crate::types::challenge::Challenge;
use crate::types::date::Date;
use crate::types::duration::Duration;
use crate::types::progress::ProgressEntry;
use crate::types::progress::empty_ledger;
use crate::types::timestamp::Timestamp;

/// Tracks progress through a reading challenge.
///
/// The tracker owns the challenge, the completion ledger and the cursor. The
/// plan itself is never stored: it is regenerated from the challenge's
/// duration whenever the tracker is loaded. Every mutation writes its records
/// to the store in one batch before it changes the in-memory state, so a
/// failed write leaves both the store and the tracker as they were.
pub struct Tracker<S: Store> {
    store: S,
    plans: PlanCache,
    active: Option<Active>,
}

struct Active {
    challenge: Challenge,
    plan: Arc<[ReadingDay]>,
    ledger: Vec<ProgressEntry>,
    cursor: usize,
}

impl<S: Store> Tracker<S> {
    /// Load the tracker's state from the store. Missing or unreadable records
    /// load as "no active challenge".
    pub fn load(store: S, today: Date) -> Self {
        let mut plans = PlanCache::new();
        let active = load_active(&store, &mut plans, today);
        Self {
            store,
            plans,
            active,
        }
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.active.as_ref().map(|active| &active.challenge)
    }

    /// The plan for the active challenge, or an empty plan.
    pub fn plan(&self) -> &[ReadingDay] {
        match &self.active {
            Some(active) => &active.plan[..],
            None => &[],
        }
    }

    pub fn ledger(&self) -> &[ProgressEntry] {
        match &self.active {
            Some(active) => &active.ledger[..],
            None => &[],
        }
    }

    pub fn cursor(&self) -> usize {
        self.active.as_ref().map_or(0, |active| active.cursor)
    }

    /// The reading the cursor points at.
    pub fn current_reading(&self) -> Option<&ReadingDay> {
        self.plan().get(self.cursor())
    }

    /// The reading scheduled for today. Once the schedule has run out, this
    /// is the last day of the plan.
    pub fn todays_reading(&self, today: Date) -> Option<&ReadingDay> {
        let active = self.active.as_ref()?;
        let index = days_since_start(&active.challenge, today) as usize;
        active.plan.get(index.min(active.plan.len().checked_sub(1)?))
    }

    pub fn stats(&self, today: Date) -> Stats {
        match &self.active {
            Some(active) => {
                compute_stats(&active.challenge, &active.ledger, active.plan.len(), today)
            }
            None => Stats::empty(today),
        }
    }

    /// The status of every day in the plan, index-aligned with it.
    pub fn day_statuses(&self, today: Date) -> Vec<DayStatus> {
        match &self.active {
            Some(active) => {
                let elapsed = days_since_start(&active.challenge, today);
                active
                    .ledger
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| day_status(index, entry.completed, elapsed))
                    .collect()
            }
            None => Vec::new(),
        }
    }

    /// Start a new challenge, replacing any existing one.
    pub fn start_challenge(&mut self, duration: Duration, now: Timestamp) -> Fallible<()> {
        let challenge = Challenge {
            duration,
            start_date: now.local_date(),
        };
        let plan = self.plans.get(duration);
        let ledger = empty_ledger(&plan);
        self.store.write_all(&[
            encode_record(CHALLENGE_KEY, &challenge)?,
            encode_record(PROGRESS_KEY, &ledger)?,
            encode_record(CURSOR_KEY, &0usize)?,
        ])?;
        log::debug!(
            "Started {duration} challenge on {} with {} days.",
            challenge.start_date,
            plan.len()
        );
        self.active = Some(Active {
            challenge,
            plan,
            ledger,
            cursor: 0,
        });
        Ok(())
    }

    /// Flip the completion state of the day at `index`. Returns whether the
    /// day is now completed.
    pub fn toggle_day(&mut self, index: usize, now: Timestamp) -> Fallible<bool> {
        let Some(active) = self.active.as_mut() else {
            return Err(ErrorReport::index_out_of_range(index, 0));
        };
        if index >= active.ledger.len() {
            return Err(ErrorReport::index_out_of_range(index, active.ledger.len()));
        }
        let mut ledger = active.ledger.clone();
        ledger[index].toggle(now);
        let completed = ledger[index].completed;
        write_record(&mut self.store, PROGRESS_KEY, &ledger)?;
        log::debug!(
            "Day {} marked {}.",
            ledger[index].day,
            if completed { "complete" } else { "incomplete" }
        );
        active.ledger = ledger;
        Ok(completed)
    }

    /// Move the cursor. Out-of-range indices are ignored; returns whether the
    /// cursor was moved.
    pub fn set_cursor(&mut self, index: usize) -> Fallible<bool> {
        let Some(active) = self.active.as_mut() else {
            return Ok(false);
        };
        if index >= active.plan.len() {
            log::debug!("Ignoring cursor move to {index}.");
            return Ok(false);
        }
        write_record(&mut self.store, CURSOR_KEY, &index)?;
        active.cursor = index;
        Ok(true)
    }

    /// Forget the challenge and all progress.
    pub fn reset_challenge(&mut self) -> Fallible<()> {
        self.store.erase_all(&[CHALLENGE_KEY, PROGRESS_KEY, CURSOR_KEY])?;
        log::debug!("Challenge reset.");
        self.active = None;
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn load_active(store: &impl Store, plans: &mut PlanCache, today: Date) -> Option<Active> {
    let challenge: Challenge = match read_record(store, CHALLENGE_KEY) {
        Ok(Some(challenge)) => challenge,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Ignoring unreadable challenge record: {e}");
            return None;
        }
    };
    let plan = plans.get(challenge.duration);
    let ledger = match read_record::<Vec<ProgressEntry>>(store, PROGRESS_KEY) {
        Ok(Some(ledger)) => reconcile_ledger(ledger, &plan),
        Ok(None) => empty_ledger(&plan),
        Err(e) => {
            log::warn!("Ignoring challenge with unreadable progress record: {e}");
            return None;
        }
    };
    let cursor = match read_record::<usize>(store, CURSOR_KEY) {
        Ok(Some(cursor)) => cursor,
        Ok(None) => days_since_start(&challenge, today) as usize,
        Err(e) => {
            log::warn!("Ignoring unreadable cursor record: {e}");
            days_since_start(&challenge, today) as usize
        }
    };
    let cursor = clamp_cursor(cursor, plan.len());
    Some(Active {
        challenge,
        plan,
        ledger,
        cursor,
    })
}

/// Make the ledger index-aligned with the plan.
fn reconcile_ledger(mut ledger: Vec<ProgressEntry>, plan: &[ReadingDay]) -> Vec<ProgressEntry> {
    if ledger.len() != plan.len() {
        log::warn!(
            "Progress record has {} entries but the plan has {} days.",
            ledger.len(),
            plan.len()
        );
        ledger.truncate(plan.len());
        let missing = &plan[ledger.len()..];
        ledger.extend(missing.iter().map(|day| ProgressEntry::pending(day.day)));
    }
    ledger
}

fn clamp_cursor(cursor: usize, plan_len: usize) -> usize {
    cursor.min(plan_len.saturating_sub(1))
}

fn read_record<T: DeserializeOwned>(store: &impl Store, key: &str) -> Fallible<Option<T>> {
    match store.read(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn encode_record<'k, T: Serialize + ?Sized>(
    key: &'k str,
    value: &T,
) -> Fallible<(&'k str, String)> {
    Ok((key, serde_json::to_string(value)?))
}

fn write_record<T: Serialize + ?Sized>(store: &mut impl Store, key: &str, value: &T) -> Fallible<()> {
    store.write_all(&[encode_record(key, value)?])
}
