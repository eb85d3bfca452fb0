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

use std::env::current_dir;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::sqlite::SqliteStore;
use crate::tracker::Tracker;
use crate::types::date::Date;

pub const DATABASE_FILE: &str = "bible-sprint.db";

/// A data directory: its config file and the tracker backed by its
/// database.
pub struct Profile {
    pub config: Config,
    pub tracker: Tracker<SqliteStore>,
}

impl Profile {
    pub fn open(directory: Option<String>, today: Date) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory)?;

        let db_path: PathBuf = directory.join(DATABASE_FILE);
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        log::debug!("Opening {db_path}.");
        let store = SqliteStore::new(db_path)?;
        let tracker = Tracker::load(store, today);

        Ok(Self { config, tracker })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::duration::Duration;
    use crate::types::timestamp::Timestamp;

    #[test]
    fn test_non_existent_directory() {
        let result = Profile::open(Some("./derpherp".to_string()), Date::today());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_progress_persists_between_opens() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().display().to_string();
        let now = Timestamp::now();
        let today = now.local_date();
        {
            let mut profile = Profile::open(Some(path.clone()), today)?;
            assert!(profile.tracker.challenge().is_none());
            profile.tracker.start_challenge(Duration::SixMonths, now)?;
            profile.tracker.toggle_day(1, now)?;
        }
        let profile = Profile::open(Some(path), today)?;
        assert!(dir.path().join(DATABASE_FILE).exists());
        assert_eq!(
            profile.tracker.challenge().map(|c| c.duration),
            Some(Duration::SixMonths)
        );
        assert!(profile.tracker.ledger()[1].completed);
        Ok(())
    }
}
