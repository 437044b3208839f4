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

use std::fmt;
use std::path::Path;

use crate::Error;
use crate::Exclusivity;
use crate::Level;
use crate::Record;
use crate::append::Stderr;
use crate::append::file::DestinationId;
use crate::append::file::Registry;
use crate::append::file::RotationPolicy;
use crate::clock::Clock;
use crate::filter::MinLevel;
use crate::layout::Layout;
use crate::layout::LineBuffer;
use crate::trap::Trap;

/// A logger that writes every enabled record to stderr and to each registered log file.
///
/// A logger is an owned value: configuration and dispatch both take `&mut self`, so one logger
/// is never used by two threads at once. Wrap it in a mutex to share it, or install it as the
/// global `log` logger with [`setup_log_crate`](crate::bridge::log::setup_log_crate).
///
/// # Examples
///
/// ```no_run
/// use logfan::Level;
/// use logfan::append::file::RotationPolicy;
///
/// let mut logger = logfan::Logger::default();
/// logger.set_use_utc_time(true);
/// logger.set_minimum_level(Level::Info);
/// logger
///     .add_log_file("app.log", Some(RotationPolicy::by_size(1024 * 1024).unwrap()))
///     .unwrap();
///
/// logfan::warn!(logger, "disk usage at {}%", 91);
///
/// logger.close_all_log_files().unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    pub(super) use_utc: bool,
    pub(super) min_level: MinLevel,
    pub(super) registry: Registry,
    pub(super) stderr: Stderr,
    pub(super) file_layout: Box<dyn Layout>,
    pub(super) trap: Box<dyn Trap>,
    pub(super) exclusivity: Exclusivity,
    pub(super) clock: Clock,
    pub(super) short_buf: LineBuffer,
    pub(super) full_buf: LineBuffer,
}

impl Default for Logger {
    fn default() -> Self {
        crate::builder().build()
    }
}

impl Logger {
    /// Render timestamps of subsequent records in UTC (`true`) or in the system time zone.
    pub fn set_use_utc_time(&mut self, use_utc: bool) {
        self.use_utc = use_utc;
    }

    /// Drop subsequent records below `level`.
    pub fn set_minimum_level(&mut self, level: Level) {
        self.min_level = MinLevel(level);
    }

    /// The current level threshold.
    pub fn min_level(&self) -> Level {
        self.min_level.0
    }

    /// Whether timestamps are rendered in UTC.
    pub fn use_utc_time(&self) -> bool {
        self.use_utc
    }

    /// The registered log files.
    pub fn destinations(&self) -> &Registry {
        &self.registry
    }

    /// Open `path` for appending, creating it if missing, and register it in the first free
    /// slot. The parent directory must exist.
    ///
    /// The policy's suffix restarts at 1, so the first rotation renames `path` to `<path>-1`.
    ///
    /// # Errors
    ///
    /// * [`InvalidParam`](crate::ErrorKind::InvalidParam) if the path is empty or the policy is
    ///   invalid.
    /// * [`CapacityExceeded`](crate::ErrorKind::CapacityExceeded) if every slot is taken.
    /// * [`CannotOpenFile`](crate::ErrorKind::CannotOpenFile) if the file cannot be opened.
    ///
    /// The logger is unchanged on error.
    pub fn add_log_file(
        &mut self,
        path: impl AsRef<Path>,
        policy: Option<RotationPolicy>,
    ) -> Result<DestinationId, Error> {
        self.registry.add(path.as_ref(), policy)
    }

    /// Close every open log file in slot order.
    ///
    /// Closed files keep their slots and are skipped by dispatch. Calling this again only closes
    /// files added since.
    ///
    /// # Errors
    ///
    /// Return [`CannotCloseFile`](crate::ErrorKind::CannotCloseFile) for the first file that
    /// fails to close; files after it stay open.
    pub fn close_all_log_files(&mut self) -> Result<(), Error> {
        self.registry.close_all()
    }

    /// Removing a single log file is not supported.
    ///
    /// The failure is also reported to the trap, since callers commonly ignore it.
    ///
    /// # Errors
    ///
    /// Always return [`Unsupported`](crate::ErrorKind::Unsupported).
    pub fn remove_log_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let result = self.registry.remove(path.as_ref());
        if let Err(err) = &result {
            self.trap.trap(err);
        }
        result
    }

    /// Whether a record at `level` would be dispatched.
    pub fn enabled(&self, level: Level) -> bool {
        self.min_level.enabled(level)
    }

    /// Dispatch one record.
    ///
    /// Records below the minimum level are dropped without side effects. Otherwise the record is
    /// timestamped once, written to stderr and then appended to every log file in slot order,
    /// rotating a file first when the line would not fit. Failures are reported to the trap and
    /// never stop the remaining destinations.
    ///
    /// The file line is rendered once for all log files. If that rendering fails, the error is
    /// reported once and covers every file; none of them gets the record.
    ///
    /// Prefer the [`log!`](crate::log!) family of macros, which fill in the call site.
    pub fn log(&mut self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if !self.min_level.enabled(level) {
            return;
        }

        let _guard = self.exclusivity.enter();

        let time = self.clock.now_zoned(self.use_utc);
        let record = Record::new(level, file, line, args, time);

        if let Err(err) = self.stderr.append(&record, &mut self.short_buf) {
            self.trap.trap(&err);
        }

        if !self.registry.has_active() {
            return;
        }

        self.full_buf.clear();
        if let Err(err) = self.file_layout.format(&record, &mut self.full_buf) {
            self.trap.trap(&err);
            return;
        }

        let line = self.full_buf.as_str();
        for file in self.registry.iter_mut().filter(|file| !file.is_closed()) {
            if let Err(err) = file.append_line(line) {
                self.trap.trap(&err);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
