// Copyright 2024 FastLabs Developers
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

use crate::Level;

/// A filter that lets through records at least as severe as the specified level.
///
/// From least to most severe, the levels are:
///
/// - `Trace`
/// - `Debug`
/// - `Info`
/// - `Warn`
/// - `Error`
/// - `Fatal`
///
/// If `MinLevel` is set to `Warn`, it will allow `Warn`, `Error`, and `Fatal` logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLevel(pub Level);

impl Default for MinLevel {
    fn default() -> Self {
        MinLevel(Level::Trace)
    }
}

impl MinLevel {
    /// Whether a record at `level` passes this filter.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.0
    }
}

impl From<Level> for MinLevel {
    fn from(level: Level) -> Self {
        MinLevel(level)
    }
}
