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

use crate::error::Fallible;
use crate::store::Store;

/// A store that lives only as long as the process.
#[derive(Default, Clone)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn write_all(&mut self, records: &[(&str, String)]) -> Fallible<()> {
        for (key, value) in records {
            self.records.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    fn erase_all(&mut self, keys: &[&str]) -> Fallible<()> {
        for key in keys {
            self.records.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_erase() -> Fallible<()> {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("a")?, None);
        store.write("a", "1")?;
        store.write("a", "2")?;
        assert_eq!(store.read("a")?, Some("2".to_string()));
        store.erase("a")?;
        store.erase("a")?;
        assert_eq!(store.read("a")?, None);
        assert!(store.is_empty());

        store.write_all(&[("a", "1".to_string()), ("b", "2".to_string())])?;
        assert_eq!(store.read("b")?, Some("2".to_string()));
        store.erase_all(&["a", "b", "c"])?;
        assert!(store.is_empty());
        Ok(())
    }
}
