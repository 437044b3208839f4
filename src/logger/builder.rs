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

use std::num::NonZeroUsize;

use crate::Exclusivity;
use crate::Level;
use crate::Logger;
use crate::append::Stderr;
use crate::append::file::DEFAULT_MAX_DESTINATIONS;
use crate::append::file::Registry;
use crate::clock::Clock;
use crate::filter::MinLevel;
use crate::layout::DEFAULT_LINE_CAPACITY;
use crate::layout::Layout;
use crate::layout::LineBuffer;
use crate::layout::PlainTextLayout;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// Create a new [`LoggerBuilder`] with the default configuration.
///
/// # Examples
///
/// ```
/// use logfan::Level;
///
/// let mut logger = logfan::builder()
///     .use_utc(false)
///     .min_level(Level::Info)
///     .build();
///
/// logfan::debug!(logger, "dropped by the level gate");
/// logfan::info!(logger, "written to stderr");
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        use_utc: true,
        min_level: MinLevel::default(),
        max_destinations: DEFAULT_MAX_DESTINATIONS,
        line_capacity: DEFAULT_LINE_CAPACITY,
        stderr: Stderr::default(),
        file_layout: Box::new(PlainTextLayout::default()),
        trap: Box::new(DefaultTrap::default()),
        exclusivity: Exclusivity::default(),
        clock: Clock::DefaultClock,
    }
}

/// A builder for configuring a [`Logger`].
///
/// The defaults are: UTC timestamps, every level enabled, 8 log file slots, 512 bytes per line, the
/// colored [`TextLayout`](crate::layout::TextLayout) on stderr, the
/// [`PlainTextLayout`] for log files, the [`DefaultTrap`] and no exclusivity hook.
#[must_use = "call `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    use_utc: bool,
    min_level: MinLevel,
    max_destinations: NonZeroUsize,
    line_capacity: NonZeroUsize,
    stderr: Stderr,
    file_layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
    exclusivity: Exclusivity,
    clock: Clock,
}

impl LoggerBuilder {
    /// Render timestamps in UTC (`true`, the default) or in the system time zone.
    pub fn use_utc(mut self, use_utc: bool) -> Self {
        self.use_utc = use_utc;
        self
    }

    /// Drop every record below `level`.
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = MinLevel(level);
        self
    }

    /// The number of log file slots.
    pub fn max_destinations(mut self, max_destinations: NonZeroUsize) -> Self {
        self.max_destinations = max_destinations;
        self
    }

    /// The maximum rendered line length in bytes, exclusive. Longer lines are not written.
    pub fn line_capacity(mut self, line_capacity: NonZeroUsize) -> Self {
        self.line_capacity = line_capacity;
        self
    }

    /// Replace the stderr destination, e.g. to change its layout.
    pub fn stderr(mut self, stderr: Stderr) -> Self {
        self.stderr = stderr;
        self
    }

    /// Set the layout shared by all log files.
    pub fn file_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.file_layout = layout.into();
        self
    }

    /// Set the trap that receives dispatch failures.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Set how dispatches are serialized. See [`Exclusivity`].
    pub fn exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = exclusivity;
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        Logger {
            use_utc: self.use_utc,
            min_level: self.min_level,
            registry: Registry::new(self.max_destinations),
            stderr: self.stderr,
            file_layout: self.file_layout,
            trap: self.trap,
            exclusivity: self.exclusivity,
            clock: self.clock,
            short_buf: LineBuffer::new(self.line_capacity),
            full_buf: LineBuffer::new(self.line_capacity),
        }
    }
}
