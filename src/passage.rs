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

//! Passage requests handed to the verse-text fetcher. The fetch itself is the
//! presentation layer's business; this module only says what to ask for.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use serde::Serialize;

use crate::config::ReaderConfig;
use crate::plan::BookSpan;
use crate::plan::ReadingDay;

/// Characters escaped in a passage path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b',')
    .remove(b'.')
    .remove(b'_');

/// A request for the text of some chapters of a single book.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub book: &'static str,
    /// Reference understood by the lookup service, e.g. "Genesis 1-3".
    pub query: String,
}

impl Passage {
    pub fn from_span(span: &BookSpan) -> Self {
        Self {
            book: span.book,
            query: format!("{} {}", span.book, chapter_ranges(&span.chapters)),
        }
    }

    /// The URL to fetch this passage from.
    pub fn url(&self, config: &ReaderConfig) -> String {
        let base = config.base_url.trim_end_matches('/');
        let path = utf8_percent_encode(&self.query, SEGMENT);
        match &config.translation {
            Some(translation) => format!(
                "{base}/{path}?translation={}",
                utf8_percent_encode(translation, SEGMENT)
            ),
            None => format!("{base}/{path}"),
        }
    }
}

/// One passage per book in the day's reading.
pub fn passages(day: &ReadingDay) -> Vec<Passage> {
    day.book_spans.iter().map(Passage::from_span).collect()
}

/// Compress chapter numbers into ranges: `[1, 2, 3, 5]` becomes `"1-3,5"`.
fn chapter_ranges(chapters: &[u32]) -> String {
    let mut runs: Vec<(u32, u32)> = Vec::new();
    for &chapter in chapters {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == chapter => *end = chapter,
            _ => runs.push((chapter, chapter)),
        }
    }
    runs.iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::generate_plan;
    use crate::types::duration::Duration;

    fn span(book: &'static str, chapters: &[u32]) -> BookSpan {
        BookSpan {
            book,
            chapters: chapters.to_vec(),
        }
    }

    #[test]
    fn test_query() {
        assert_eq!(
            Passage::from_span(&span("Genesis", &[1, 2, 3])).query,
            "Genesis 1-3"
        );
        assert_eq!(Passage::from_span(&span("Jude", &[1])).query, "Jude 1");
        assert_eq!(
            Passage::from_span(&span("Psalms", &[1, 2, 5, 7, 8])).query,
            "Psalms 1-2,5,7-8"
        );
    }

    #[test]
    fn test_url() {
        let passage = Passage::from_span(&span("1 Samuel", &[4, 5]));
        let mut config = ReaderConfig::default();
        assert_eq!(passage.url(&config), "https://bible-api.com/1%20Samuel%204-5");
        config.base_url = "http://localhost:8080/".to_string();
        config.translation = Some("kjv".to_string());
        assert_eq!(
            passage.url(&config),
            "http://localhost:8080/1%20Samuel%204-5?translation=kjv"
        );
    }

    #[test]
    fn test_multi_book_day() {
        let plan = generate_plan(Duration::TwelveMonths);
        let day = plan
            .iter()
            .find(|day| day.label.starts_with("Malachi 4"))
            .unwrap();
        let queries: Vec<String> = passages(day).into_iter().map(|p| p.query).collect();
        assert_eq!(queries, vec!["Malachi 4", "Matthew 1-2"]);
    }
}
