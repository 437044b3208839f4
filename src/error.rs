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

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Bad caller input, e.g. a zero-size rotation policy or an empty path.
    InvalidParam,
    /// The destination registry is full.
    CapacityExceeded,
    /// A log file could not be opened.
    CannotOpenFile,
    /// A log file could not be closed.
    CannotCloseFile,
    /// A log file could not be renamed during rotation.
    CannotRenameFile,
    /// The timestamp or the message failed to render.
    FormatError,
    /// The rendered line would not fit the line buffer.
    BufferOverflow,
    /// A stream could not be flushed after a write.
    StreamFlushFailed,
    /// A write to a stream failed, or the destination has no usable handle.
    WriteFailed,
    /// The operation is not supported.
    Unsupported,
}

impl ErrorKind {
    /// Return the string representation of the `ErrorKind`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidParam => "InvalidParam",
            ErrorKind::CapacityExceeded => "CapacityExceeded",
            ErrorKind::CannotOpenFile => "CannotOpenFile",
            ErrorKind::CannotCloseFile => "CannotCloseFile",
            ErrorKind::CannotRenameFile => "CannotRenameFile",
            ErrorKind::FormatError => "FormatError",
            ErrorKind::BufferOverflow => "BufferOverflow",
            ErrorKind::StreamFlushFailed => "StreamFlushFailed",
            ErrorKind::WriteFailed => "WriteFailed",
            ErrorKind::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The error struct of logfan.
pub struct Error {
    kind: ErrorKind,
    message: String,
    sources: Vec<anyhow::Error>,
    context: Vec<(&'static str, String)>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.sources.is_empty() {
            write!(f, ", sources: [")?;
            for (i, source) in self.sources.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{source}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("sources", &self.sources);
            return de.finish();
        }

        write!(f, "{}: {}", self.kind, self.message)?;
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }
        if !self.sources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sources:")?;
            for source in self.sources.iter() {
                writeln!(f, "   {source:#}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.sources.first().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            sources: vec![],
            context: vec![],
        }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Add one more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return the value of the first context entry with the given key.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Add one more source in error.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.sources.push(src.into());
        self
    }

    /// Return an iterator over all sources of this error.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = &(dyn std::error::Error + 'static)> {
        self.sources.iter().map(|v| v.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_display_includes_kind_context_and_sources() {
        let err = Error::new(ErrorKind::CannotOpenFile, "failed to open log file")
            .with_context("path", "logs/app.log")
            .with_source(io::Error::new(io::ErrorKind::NotFound, "no such file"));

        assert_eq!(
            err.to_string(),
            "failed to open log file (CannotOpenFile), context: { path: logs/app.log }, \
             sources: [no such file]"
        );
        assert_eq!(err.kind(), ErrorKind::CannotOpenFile);
        assert_eq!(err.context("path"), Some("logs/app.log"));
        assert_eq!(err.context("missing"), None);
        assert_eq!(err.sources().len(), 1);
    }

    #[test]
    fn test_source_is_first_source() {
        use std::error::Error as _;

        let plain = Error::new(ErrorKind::Unsupported, "nope");
        assert!(plain.source().is_none());

        let wrapped = Error::new(ErrorKind::WriteFailed, "failed to write")
            .with_source(io::Error::other("disk full"));
        assert_eq!(wrapped.source().unwrap().to_string(), "disk full");
    }
}
