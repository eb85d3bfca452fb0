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

use crate::error::Fallible;
use crate::profile::Profile;
use crate::types::date::Date;
use crate::types::duration::Duration;
use crate::types::timestamp::Timestamp;

pub fn start_challenge(
    directory: Option<String>,
    duration: Duration,
    now: Timestamp,
) -> Fallible<()> {
    let mut profile = Profile::open(directory, now.local_date())?;
    profile.tracker.start_challenge(duration, now)?;
    println!(
        "Your {duration} reading plan has begun: {} days.",
        profile.tracker.plan().len()
    );
    if let Some(reading) = profile.tracker.current_reading() {
        println!("Day {}: {}", reading.day, reading.label);
    }
    Ok(())
}

pub fn reset_challenge(directory: Option<String>, today: Date) -> Fallible<()> {
    let mut profile = Profile::open(directory, today)?;
    profile.tracker.reset_challenge()?;
    println!("Challenge reset. You can start a new challenge anytime.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_start_then_reset() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().display().to_string();
        let now = Timestamp::now();
        let today = now.local_date();

        start_challenge(Some(path.clone()), Duration::NineMonths, now)?;
        let profile = Profile::open(Some(path.clone()), today)?;
        assert_eq!(profile.tracker.plan().len(), 273);
        drop(profile);

        reset_challenge(Some(path.clone()), today)?;
        let profile = Profile::open(Some(path), today)?;
        assert!(profile.tracker.challenge().is_none());
        Ok(())
    }

    #[test]
    fn test_non_existent_directory() {
        let result = start_challenge(
            Some("./derpherp".to_string()),
            Duration::ThreeMonths,
            Timestamp::now(),
        );
        assert!(result.is_err());
    }
}
