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

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::canon::ChapterRef;
use crate::canon::all_chapters;
use crate::types::duration::Duration;

/// The chapters of one book assigned to a single day.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSpan {
    pub book: &'static str,
    pub chapters: Vec<u32>,
}

/// One day's reading assignment.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDay {
    /// The 1-based day number.
    pub day: usize,
    /// Human-readable range, e.g. "Genesis 1-3".
    pub label: String,
    /// The day's chapters grouped by book, in reading order.
    pub book_spans: Vec<BookSpan>,
}

impl ReadingDay {
    pub fn chapter_count(&self) -> usize {
        self.book_spans.iter().map(|span| span.chapters.len()).sum()
    }
}

/// Generate the reading plan for the given duration.
pub fn generate_plan(duration: Duration) -> Vec<ReadingDay> {
    partition(all_chapters(), duration.total_days())
}

/// Split `chapters` into `total_days` contiguous slices of as-equal-as-possible
/// size. Day `d` gets `floor((d-1)*C/T)..floor(d*C/T)`. Days whose slice is
/// empty are left out, so the result may be shorter than `total_days`.
pub fn partition(chapters: &[ChapterRef], total_days: usize) -> Vec<ReadingDay> {
    let mut plan = Vec::with_capacity(total_days);
    if total_days == 0 {
        return plan;
    }
    let total = chapters.len();
    // The running pointer into `chapters` is `numerator / total_days`. Keeping
    // it as an exact fraction means the last day always ends at `total`.
    let mut numerator: usize = 0;
    for day in 1..=total_days {
        let start = numerator / total_days;
        numerator += total;
        let end = numerator / total_days;
        if let Some(reading) = reading_day(day, &chapters[start..end]) {
            plan.push(reading);
        }
    }
    plan
}

fn reading_day(day: usize, chapters: &[ChapterRef]) -> Option<ReadingDay> {
    let first = chapters.first()?;
    let last = chapters.last()?;
    Some(ReadingDay {
        day,
        label: label(first, last),
        book_spans: book_spans(chapters),
    })
}

/// Format the label for a reading that runs from `first` to `last`.
pub fn label(first: &ChapterRef, last: &ChapterRef) -> String {
    if first.book == last.book {
        if first.chapter == last.chapter {
            format!("{} {}", first.book, first.chapter)
        } else {
            format!("{} {}-{}", first.book, first.chapter, last.chapter)
        }
    } else {
        format!(
            "{} {} - {} {}",
            first.book, first.chapter, last.book, last.chapter
        )
    }
}

fn book_spans(chapters: &[ChapterRef]) -> Vec<BookSpan> {
    let mut spans: Vec<BookSpan> = Vec::new();
    for chapter in chapters {
        match spans.iter_mut().find(|span| span.book == chapter.book) {
            Some(span) => span.chapters.push(chapter.chapter),
            None => spans.push(BookSpan {
                book: chapter.book,
                chapters: vec![chapter.chapter],
            }),
        }
    }
    spans
}

/// Memoizes generated plans by duration. Plans are pure functions of the
/// duration, so a cached plan never goes stale.
#[derive(Default)]
pub struct PlanCache {
    plans: HashMap<Duration, Arc<[ReadingDay]>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, duration: Duration) -> Arc<[ReadingDay]> {
        self.plans
            .entry(duration)
            .or_insert_with(|| {
                log::debug!("Generating {duration} plan.");
                generate_plan(duration).into()
            })
            .clone()
    }
}
