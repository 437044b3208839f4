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

//! Forward records of the [`log`] crate to a [`Logger`].

use std::cell::Cell;

use parking_lot::Mutex;

use crate::Level;
use crate::Logger;

thread_local! {
    // set while this thread is inside the bridge
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as dispatching until dropped.
///
/// Formatting a record may run code that logs again. That nested record would wait on the lock
/// this thread already holds, so it is dropped instead.
struct ReentryGuard(());

impl ReentryGuard {
    fn enter() -> Option<ReentryGuard> {
        DISPATCHING.with(|flag| {
            if flag.replace(true) {
                None
            } else {
                Some(ReentryGuard(()))
            }
        })
    }
}

impl Drop for ReentryGuard {
    fn drop(&mut self) {
        DISPATCHING.with(|flag| flag.set(false));
    }
}

struct LogCrateLogger {
    logger: Mutex<Logger>,
}

impl LogCrateLogger {
    fn new(logger: Logger) -> Self {
        LogCrateLogger {
            logger: Mutex::new(logger),
        }
    }
}

fn level_from(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let Some(_guard) = ReentryGuard::enter() else {
            return false;
        };
        self.logger.lock().enabled(level_from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let Some(_guard) = ReentryGuard::enter() else {
            return;
        };
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        self.logger
            .lock()
            .log(level_from(record.level()), file, line, *record.args());
    }

    // every line is flushed as it is written
    fn flush(&self) {}
}

/// Install `logger` as the global logger of the log crate.
///
/// The logger is moved behind a mutex, so records from any thread are dispatched one at a time.
/// A record logged while another record is being formatted on the same thread, e.g. from a
/// `Display` impl, is dropped.
/// `log` has no fatal level; its `Error` maps to [`Level::Error`].
///
/// This function will set the global maximum log level to `Trace`. The logger's own minimum level
/// still applies. To override this, call [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// let logger = logfan::builder().build();
/// if logfan::bridge::log::try_setup_log_crate(logger).is_err() {
///     eprintln!("failed to set logger");
/// }
/// log::info!("forwarded to logfan");
/// ```
pub fn try_setup_log_crate(logger: Logger) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogCrateLogger::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Install `logger` as the global logger of the log crate.
///
/// See [`try_setup_log_crate`] for details.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate(logger: Logger) {
    try_setup_log_crate(logger).expect(
        "logfan::bridge::log::setup_log_crate must be called before the log crate global logger initialized",
    )
}
