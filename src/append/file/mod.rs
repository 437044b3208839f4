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

//! Log files with optional size-based rotation.
//!
//! Rotated files are named `<path>-<N>`, with `N` starting at 1 for each file and increasing by
//! one per rotation. Numbering is not persisted: a new process starts again at 1 and may
//! overwrite a rotated file left by an earlier run.
//!
//! # Examples
//!
//! ```no_run
//! use logfan::append::file::RotationPolicy;
//!
//! let mut logger = logfan::builder().build();
//! let policy = RotationPolicy::by_size(200).unwrap();
//! logger.add_log_file("logs/example.log", Some(policy)).unwrap();
//!
//! logfan::info!(logger, "This line goes to stderr and to logs/example.log.");
//!
//! logger.close_all_log_files().unwrap();
//! ```

mod destination;
mod registry;
mod rotation;

pub use self::destination::LogFile;
pub use self::registry::DEFAULT_MAX_DESTINATIONS;
pub use self::registry::DestinationId;
pub use self::registry::Registry;
pub use self::rotation::RotationKind;
pub use self::rotation::RotationPolicy;
