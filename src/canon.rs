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

//! The canonical chapter inventory: the 66 books of the Protestant canon in
//! order, with their chapter counts.

use std::sync::LazyLock;

pub struct Book {
    pub name: &'static str,
    pub chapters: u32,
}

const fn book(name: &'static str, chapters: u32) -> Book {
    Book { name, chapters }
}

pub const BOOKS: [Book; 66] = [
    book("Genesis", 50),
    book("Exodus", 40),
    book("Leviticus", 27),
    book("Numbers", 36),
    book("Deuteronomy", 34),
    book("Joshua", 24),
    book("Judges", 21),
    book("Ruth", 4),
    book("1 Samuel", 31),
    book("2 Samuel", 24),
    book("1 Kings", 22),
    book("2 Kings", 25),
    book("1 Chronicles", 29),
    book("2 Chronicles", 36),
    book("Ezra", 10),
    book("Nehemiah", 13),
    book("Esther", 10),
    book("Job", 42),
    book("Psalms", 150),
    book("Proverbs", 31),
    book("Ecclesiastes", 12),
    book("Song of Solomon", 8),
    book("Isaiah", 66),
    book("Jeremiah", 52),
    book("Lamentations", 5),
    book("Ezekiel", 48),
    book("Daniel", 12),
    book("Hosea", 14),
    book("Joel", 3),
    book("Amos", 9),
    book("Obadiah", 1),
    book("Jonah", 4),
    book("Micah", 7),
    book("Nahum", 3),
    book("Habakkuk", 3),
    book("Zephaniah", 3),
    book("Haggai", 2),
    book("Zechariah", 14),
    book("Malachi", 4),
    book("Matthew", 28),
    book("Mark", 16),
    book("Luke", 24),
    book("John", 21),
    book("Acts", 28),
    book("Romans", 16),
    book("1 Corinthians", 16),
    book("2 Corinthians", 13),
    book("Galatians", 6),
    book("Ephesians", 6),
    book("Philippians", 4),
    book("Colossians", 4),
    book("1 Thessalonians", 5),
    book("2 Thessalonians", 3),
    book("1 Timothy", 6),
    book("2 Timothy", 4),
    book("Titus", 3),
    book("Philemon", 1),
    book("Hebrews", 13),
    book("James", 5),
    book("1 Peter", 5),
    book("2 Peter", 3),
    book("1 John", 5),
    book("2 John", 1),
    book("3 John", 1),
    book("Jude", 1),
    book("Revelation", 22),
];

/// A single chapter of a single book.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChapterRef {
    pub book: &'static str,
    pub chapter: u32,
}

static CHAPTERS: LazyLock<Vec<ChapterRef>> = LazyLock::new(|| {
    BOOKS
        .iter()
        .flat_map(|book| {
            (1..=book.chapters).map(move |chapter| ChapterRef {
                book: book.name,
                chapter,
            })
        })
        .collect()
});

/// Every chapter of every book, in canonical order.
pub fn all_chapters() -> &'static [ChapterRef] {
    &CHAPTERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_size() {
        assert_eq!(all_chapters().len(), 1189);
    }

    #[test]
    fn test_inventory_order() {
        let chapters = all_chapters();
        assert_eq!(
            chapters[0],
            ChapterRef {
                book: "Genesis",
                chapter: 1
            }
        );
        assert_eq!(
            chapters[928],
            ChapterRef {
                book: "Malachi",
                chapter: 4
            }
        );
        assert_eq!(
            chapters[929],
            ChapterRef {
                book: "Matthew",
                chapter: 1
            }
        );
        assert_eq!(
            chapters[1188],
            ChapterRef {
                book: "Revelation",
                chapter: 22
            }
        );
    }

    #[test]
    fn test_chapters_are_consecutive_per_book() {
        let mut offset = 0;
        for book in BOOKS.iter() {
            for n in 1..=book.chapters {
                let chapter = all_chapters()[offset];
                assert_eq!(chapter.book, book.name);
                assert_eq!(chapter.chapter, n);
                offset += 1;
            }
        }
    }
}
