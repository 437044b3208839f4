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

//! Logfan is a small logging core that fans every record out to stderr and to a fixed set of log
//! files, each with optional size-based rotation.
//!
//! # Overview
//!
//! A [`Logger`] owns its configuration and destinations. Every record that passes the minimum
//! level is timestamped once, written to stderr in a short colored form, and appended to each log
//! file in a full form with the date. Dispatch never fails: problems such as a line that does not
//! fit the line buffer or a rotation that cannot rename a file are reported to a [`Trap`] and the
//! remaining destinations still get the record.
//!
//! # Examples
//!
//! Log to stderr only:
//!
//! ```
//! let mut logger = logfan::Logger::default();
//!
//! logfan::info!(logger, "This is an info message.");
//! ```
//!
//! Log to stderr and a rotated file, in UTC:
//!
//! ```no_run
//! use logfan::Level;
//! use logfan::append::file::RotationPolicy;
//!
//! let mut logger = logfan::builder()
//!     .use_utc(true)
//!     .min_level(Level::Info)
//!     .build();
//! logger
//!     .add_log_file("app.log", Some(RotationPolicy::by_size(200).unwrap()))
//!     .unwrap();
//!
//! for i in 0..10 {
//!     logfan::info!(logger, "iteration {i}");
//! }
//!
//! logger.close_all_log_files().unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod filter;
pub mod layout;
pub mod trap;

mod clock;
mod color;
pub use color::LevelColor;

mod error;
pub use error::Error;
pub use error::ErrorKind;

mod exclusive;
pub use exclusive::ExclusiveFn;
pub use exclusive::Exclusivity;

mod logger;
pub use logger::Logger;
pub use logger::LoggerBuilder;
pub use logger::builder;

mod record;
pub use record::Level;
pub use record::Record;

mod macros;

pub use append::Stderr;
pub use layout::Layout;
pub use trap::Trap;
