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

//! A Bible reading plan generator and progress tracker.
//!
//! [`plan::generate_plan`] splits the 1189 chapters of the canon into daily
//! readings for a 3, 6, 9, 12 or 24 month challenge. [`tracker::Tracker`]
//! keeps the user's progress through a challenge in a [`store::Store`] and
//! derives pacing statistics from it.

pub mod canon;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod passage;
pub mod plan;
pub mod profile;
pub mod stats;
pub mod store;
pub mod tracker;
pub mod types;
