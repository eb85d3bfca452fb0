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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::store::Store;
use crate::types::timestamp::Timestamp;

/// A store backed by a single table in a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating schema in {database_path}.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }
}

impl Store for SqliteStore {
    fn read(&self, key: &str) -> Fallible<Option<String>> {
        let sql = "select value from records where key = ?;";
        let value: Option<String> = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn write_all(&mut self, records: &[(&str, String)]) -> Fallible<()> {
        let sql = "insert into records (key, value, updated_at) values (?, ?, ?) on conflict (key) do update set value = excluded.value, updated_at = excluded.updated_at;";
        let now = Timestamp::now();
        let tx = self.conn.transaction()?;
        for (key, value) in records {
            log::debug!("Writing record {key}.");
            tx.execute(sql, (key, value, &now))?;
        }
        tx.commit()?;
        Ok(())
    }

    fn erase_all(&mut self, keys: &[&str]) -> Fallible<()> {
        let tx = self.conn.transaction()?;
        for key in keys {
            log::debug!("Erasing record {key}.");
            tx.execute("delete from records where key = ?;", [key])?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["records"], |row| row.get(0))?;
    Ok(count > 0)
}
