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

use colored::Color;

use crate::Error;
use crate::color::LevelColor;
use crate::layout::Layout;
use crate::layout::LineBuffer;
use crate::record::Record;

/// A terse layout for the terminal, with optionally colored levels.
///
/// Output format:
///
/// ```text
/// 22:44:57 ERROR src/main.rs:51 Hello error!
/// 22:44:57 WARN  src/main.rs:52 Hello warn!
/// 22:44:57 INFO  src/main.rs:53 Hello info!
/// ```
///
/// By default, log levels are colored. Call [`no_color`](TextLayout::no_color) to disable
/// coloring.
///
/// # Examples
///
/// ```
/// use logfan::layout::TextLayout;
///
/// let layout = TextLayout::default().no_color();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
}

impl TextLayout {
    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Customize the color of the fatal level.
    pub fn fatal_color(mut self, color: Color) -> Self {
        self.colors.fatal = color;
        self
    }

    /// Customize the color of the error level.
    pub fn error_color(mut self, color: Color) -> Self {
        self.colors.error = color;
        self
    }

    /// Customize the color of the warn level.
    pub fn warn_color(mut self, color: Color) -> Self {
        self.colors.warn = color;
        self
    }

    /// Customize the color of the info level.
    pub fn info_color(mut self, color: Color) -> Self {
        self.colors.info = color;
        self
    }

    /// Customize the color of the debug level.
    pub fn debug_color(mut self, color: Color) -> Self {
        self.colors.debug = color;
        self
    }

    /// Customize the color of the trace level.
    pub fn trace_color(mut self, color: Color) -> Self {
        self.colors.trace = color;
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record, buf: &mut LineBuffer) -> Result<(), Error> {
        let time = record.time().strftime("%H:%M:%S");
        let level = self
            .colors
            .colorize_record_level(self.no_color, record.level());
        let file = record.file();
        let line = record.line();
        let message = record.args();

        buf.render(format_args!("{time} {level} {file}:{line} {message}"))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::num::NonZeroUsize;

    use jiff::Timestamp;
    use jiff::Zoned;
    use jiff::tz;
    use jiff::tz::TimeZone;

    use super::*;
    use crate::ErrorKind;
    use crate::Level;

    fn utc(ts: &str) -> Zoned {
        ts.parse::<Timestamp>().unwrap().to_zoned(TimeZone::UTC)
    }

    fn render(
        capacity: usize,
        level: Level,
        time: Zoned,
        args: fmt::Arguments,
    ) -> Result<String, Error> {
        let record = Record::new(level, "src/main.rs", 42, args, time);
        let mut buf = LineBuffer::new(NonZeroUsize::new(capacity).unwrap());
        TextLayout::default().no_color().format(&record, &mut buf)?;
        Ok(buf.as_str().to_owned())
    }

    #[test]
    fn test_short_line() {
        let line = render(
            512,
            Level::Info,
            utc("2024-08-10T17:12:52Z"),
            format_args!("iteration {}: {} + {} = {}", 0, 12, 30, 42),
        )
        .unwrap();
        insta::assert_snapshot!(line, @"17:12:52 INFO  src/main.rs:42 iteration 0: 12 + 30 = 42");
    }

    #[test]
    fn test_short_line_uses_record_time_zone() {
        let line = render(
            512,
            Level::Fatal,
            "2024-08-10T09:12:52Z"
                .parse::<Timestamp>()
                .unwrap()
                .to_zoned(TimeZone::fixed(tz::offset(8))),
            format_args!("boom"),
        )
        .unwrap();
        assert_eq!(line, "17:12:52 FATAL src/main.rs:42 boom");
    }

    #[test]
    fn test_short_line_overflow() {
        let message = "x".repeat(32);

        // "17:12:52 WARN  src/main.rs:42 " is 30 bytes, so the full line is 62 bytes
        let line = render(
            63,
            Level::Warn,
            utc("2024-08-10T17:12:52Z"),
            format_args!("{message}"),
        )
        .unwrap();
        assert_eq!(line.len(), 62);

        let err = render(
            62,
            Level::Warn,
            utc("2024-08-10T17:12:52Z"),
            format_args!("{message}"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferOverflow);
    }
}
