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
use std::io;
use std::io::Write;

use crate::Error;
use crate::layout::Layout;
use crate::layout::LineBuffer;
use crate::layout::TextLayout;
use crate::record::Record;

/// The stderr destination. Every record that passes the level gate is written here, and the
/// stream is flushed before the dispatch moves on.
///
/// Unix convention is to send diagnostics to stderr so they never mix with a program's regular
/// output.
///
/// # Examples
///
/// ```
/// use logfan::append::Stderr;
/// use logfan::layout::TextLayout;
///
/// let stderr = Stderr::default().with_layout(TextLayout::default().no_color());
/// ```
pub struct Stderr {
    layout: Box<dyn Layout>,
    writer: Box<dyn Write + Send + 'static>,
}

impl Default for Stderr {
    fn default() -> Self {
        Self {
            layout: Box::new(TextLayout::default()),
            writer: Box::new(io::stderr()),
        }
    }
}

impl fmt::Debug for Stderr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stderr")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Stderr {
    /// Set the layout for the [`Stderr`] destination.
    ///
    /// Default to [`TextLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Redirect the lines to another writer instead of the process stderr.
    ///
    /// This is mostly useful for capturing output in tests.
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    pub(crate) fn append(&mut self, record: &Record, buf: &mut LineBuffer) -> Result<(), Error> {
        buf.clear();
        self.layout.format(record, buf)?;
        super::write_line(&mut self.writer, buf.as_str())
    }
}
