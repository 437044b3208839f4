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

//! Destinations for rendered log lines: stderr and registered log files.

use std::io::Write;

use crate::Error;
use crate::ErrorKind;

pub mod file;
mod stdio;

pub use self::stdio::Stderr;

/// Write `line` followed by a newline in one `write_all`, then flush, so the line is delivered
/// before returning.
fn write_line(writer: &mut (impl Write + ?Sized), line: &str) -> Result<(), Error> {
    let mut bytes = Vec::with_capacity(line.len() + 1);
    bytes.extend_from_slice(line.as_bytes());
    bytes.push(b'\n');

    writer.write_all(&bytes).map_err(|err| {
        Error::new(ErrorKind::WriteFailed, "failed to write log line").with_source(err)
    })?;
    writer.flush().map_err(|err| {
        Error::new(ErrorKind::StreamFlushFailed, "failed to flush log line").with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct Failing {
        fail_write: bool,
    }

    impl Write for Failing {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_write {
                Err(io::Error::other("write refused"))
            } else {
                Ok(buf.len())
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush refused"))
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "hello").unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[derive(Default)]
    struct Recording {
        writes: Vec<Vec<u8>>,
    }

    impl Write for Recording {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_and_newline_go_out_in_one_write() {
        let mut out = Recording::default();
        write_line(&mut out, "hello").unwrap();
        write_line(&mut out, "world").unwrap();
        assert_eq!(out.writes, vec![b"hello\n".to_vec(), b"world\n".to_vec()]);
    }

    #[test]
    fn test_write_line_error_kinds() {
        let err = write_line(&mut Failing { fail_write: true }, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailed);

        let err = write_line(&mut Failing { fail_write: false }, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StreamFlushFailed);
    }
}
