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

//! Layouts for formatting log records into bounded lines.

use std::fmt;
use std::num::NonZeroUsize;

use crate::Error;
use crate::ErrorKind;
use crate::record::Record;

mod plain_text;
mod text;

pub use self::plain_text::PlainTextLayout;
pub use self::text::TextLayout;

/// The default capacity of a [`LineBuffer`], in bytes.
pub const DEFAULT_LINE_CAPACITY: NonZeroUsize = NonZeroUsize::new(512).unwrap();

/// A layout for formatting log records.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Render the record as a single line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::BufferOverflow`] if the line does not fit `buf`, or
    /// [`ErrorKind::FormatError`] if any part of the record fails to render.
    fn format(&self, record: &Record, buf: &mut LineBuffer) -> Result<(), Error>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A line buffer with a fixed capacity.
///
/// A rendered line must stay strictly shorter than the capacity. Writes that would reach it are
/// refused as a whole: the buffer is left empty and the failure is reported as
/// [`ErrorKind::BufferOverflow`], so a line is never truncated.
#[derive(Debug)]
pub struct LineBuffer {
    line: String,
    capacity: usize,
    overflowed: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_CAPACITY)
    }
}

impl LineBuffer {
    /// Create an empty line buffer holding lines shorter than `capacity` bytes.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            line: String::with_capacity(capacity),
            capacity,
            overflowed: false,
        }
    }

    /// The capacity of this buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The rendered line.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// The length of the rendered line in bytes.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Discard the rendered line.
    pub fn clear(&mut self) {
        self.line.clear();
        self.overflowed = false;
    }

    /// Append formatted text to the line.
    ///
    /// On failure the whole line is discarded.
    pub fn render(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        let Err(err) = fmt::Write::write_fmt(self, args) else {
            return Ok(());
        };

        let overflowed = self.overflowed;
        self.clear();
        if overflowed {
            Err(Error::new(
                ErrorKind::BufferOverflow,
                "rendered log line does not fit the line buffer",
            )
            .with_context("capacity", self.capacity))
        } else {
            Err(Error::new(ErrorKind::FormatError, "failed to render log line").with_source(err))
        }
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.line.len() + s.len() >= self.capacity {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.line.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(capacity: usize) -> LineBuffer {
        LineBuffer::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_line_shorter_than_capacity_fits() {
        let mut buf = buffer(8);
        buf.render(format_args!("{}", "1234567")).unwrap();
        assert_eq!(buf.as_str(), "1234567");
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn test_line_reaching_capacity_overflows() {
        let mut buf = buffer(8);
        let err = buf.render(format_args!("{}", "12345678")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferOverflow);
        assert_eq!(err.context("capacity"), Some("8"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overflow_across_pieces_discards_everything() {
        let mut buf = buffer(10);
        let err = buf
            .render(format_args!("{} {}", "abcd", "efghij"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferOverflow);
        assert!(buf.is_empty());

        // the buffer is reusable after an overflow
        buf.render(format_args!("ok")).unwrap();
        assert_eq!(buf.as_str(), "ok");
    }

    #[test]
    fn test_failing_display_is_a_format_error() {
        struct Broken;

        impl fmt::Display for Broken {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let mut buf = buffer(64);
        let err = buf.render(format_args!("value={}", Broken)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatError);
        assert!(buf.is_empty());
    }
}
