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

use crate::Error;
use crate::layout::Layout;
use crate::layout::LineBuffer;
use crate::record::Record;

/// A plain text layout with a full date and time, used for log files.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57 ERROR src/main.rs:51 Hello error!
/// 2024-08-11 22:44:57 WARN  src/main.rs:52 Hello warn!
/// 2024-08-11 22:44:57 INFO  src/main.rs:53 Hello info!
/// ```
///
/// # Examples
///
/// ```
/// use logfan::layout::PlainTextLayout;
///
/// let layout = PlainTextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct PlainTextLayout {}

impl Layout for PlainTextLayout {
    fn format(&self, record: &Record, buf: &mut LineBuffer) -> Result<(), Error> {
        let time = record.time().strftime("%Y-%m-%d %H:%M:%S");
        let level = record.level();
        let file = record.file();
        let line = record.line();
        let message = record.args();

        buf.render(format_args!("{time} {level:<5} {file}:{line} {message}"))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use jiff::Timestamp;
    use jiff::tz::TimeZone;

    use super::*;
    use crate::Level;

    fn render(level: Level, file: &str, line: u32, args: fmt::Arguments) -> (String, String) {
        let time = "2024-08-10T07:02:09Z"
            .parse::<Timestamp>()
            .unwrap()
            .to_zoned(TimeZone::UTC);
        let record = Record::new(level, file, line, args, time);

        let mut first = LineBuffer::default();
        let mut second = LineBuffer::default();
        PlainTextLayout::default().format(&record, &mut first).unwrap();
        PlainTextLayout::default().format(&record, &mut second).unwrap();
        (first.as_str().to_owned(), second.as_str().to_owned())
    }

    #[test]
    fn test_full_line() {
        let (line, _) = render(Level::Error, "src/lib.rs", 7, format_args!("x={}", 5));
        insta::assert_snapshot!(line, @"2024-08-10 07:02:09 ERROR src/lib.rs:7 x=5");
    }

    #[test]
    fn test_same_arguments_render_into_every_buffer() {
        let (first, second) = render(Level::Debug, "a.rs", 3, format_args!("{}-{}", "a", 1));
        assert_eq!(first, "2024-08-10 07:02:09 DEBUG a.rs:3 a-1");
        assert_eq!(first, second);
    }
}
