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

pub mod memory;
pub mod sqlite;

use crate::error::Fallible;

pub const CHALLENGE_KEY: &str = "bible_sprint_challenge";
pub const PROGRESS_KEY: &str = "bible_sprint_progress";
pub const CURSOR_KEY: &str = "bible_sprint_current_index";

/// A durable key-value store. Each key holds one independently readable
/// record. Writes and erases are applied in batches: a batch either takes
/// effect completely or not at all.
pub trait Store {
    /// Read a record. Returns `None` if the key has never been written or
    /// has been erased.
    fn read(&self, key: &str) -> Fallible<Option<String>>;

    /// Write every record in `records`, replacing any previous values.
    fn write_all(&mut self, records: &[(&str, String)]) -> Fallible<()>;

    /// Erase every key in `keys`. Erasing a missing key is not an error.
    fn erase_all(&mut self, keys: &[&str]) -> Fallible<()>;

    fn write(&mut self, key: &str, value: &str) -> Fallible<()> {
        self.write_all(&[(key, value.to_string())])
    }

    fn erase(&mut self, key: &str) -> Fallible<()> {
        self.erase_all(&[key])
    }
}
