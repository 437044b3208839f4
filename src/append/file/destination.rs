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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::mem;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::ErrorKind;
use crate::append::file::RotationPolicy;
use crate::append::write_line;

#[derive(Debug)]
enum Handle {
    Open(File),
    /// Closed on request; the destination is inert.
    Closed,
    /// Lost by a rotation that failed midway; every write fails until the caller intervenes.
    Broken,
}

/// A log file registered with a [`Logger`](crate::Logger).
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    handle: Handle,
    // bytes written through the current handle
    current_size: usize,
    policy: Option<RotationPolicy>,
}

impl LogFile {
    pub(crate) fn open(path: PathBuf, policy: Option<RotationPolicy>) -> Result<Self, Error> {
        let file = open_file(&path)?;
        Ok(LogFile {
            path,
            handle: Handle::Open(file),
            current_size: 0,
            policy,
        })
    }

    /// The path the file was registered with. Rotations rename away from this path and then
    /// reopen it, so it always names the active file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written since the active file was opened.
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// The rotation policy, if any.
    pub fn policy(&self) -> Option<&RotationPolicy> {
        self.policy.as_ref()
    }

    /// Whether the file accepts writes.
    pub fn is_open(&self) -> bool {
        matches!(self.handle, Handle::Open(_))
    }

    /// Whether the file was closed by [`Logger::close_all_log_files`](crate::Logger::close_all_log_files).
    pub fn is_closed(&self) -> bool {
        matches!(self.handle, Handle::Closed)
    }

    /// Whether a failed rotation left the file without a usable handle.
    pub fn is_broken(&self) -> bool {
        matches!(self.handle, Handle::Broken)
    }

    pub(crate) fn should_rotate(&self, pending: usize) -> bool {
        self.policy
            .as_ref()
            .is_some_and(|policy| policy.should_rotate(self.current_size, pending))
    }

    /// Rotate if the line would not fit, then write it.
    pub(crate) fn append_line(&mut self, line: &str) -> Result<(), Error> {
        if self.should_rotate(line.len()) {
            self.rotate()?;
        }
        self.write_line(line)
    }

    pub(crate) fn write_line(&mut self, line: &str) -> Result<(), Error> {
        let Handle::Open(file) = &mut self.handle else {
            return Err(self.unusable());
        };

        write_line(file, line).map_err(|err| err.with_context("path", self.path.display()))?;
        self.current_size += line.len() + 1;
        Ok(())
    }

    /// Close the active file, rename it to `<path>-<suffix>` and reopen `path` fresh.
    ///
    /// This is not atomic. If any step after releasing the old handle fails, the file is left
    /// broken.
    pub(crate) fn rotate(&mut self) -> Result<(), Error> {
        let Some(policy) = self.policy.as_mut() else {
            return Ok(());
        };
        let target = policy.rotated_path(&self.path)?;

        let file = match mem::replace(&mut self.handle, Handle::Broken) {
            Handle::Open(file) => file,
            handle => {
                self.handle = handle;
                return Err(self.unusable());
            }
        };
        file.sync_all().map_err(|err| {
            Error::new(ErrorKind::CannotCloseFile, "failed to close log file for rotation")
                .with_context("path", self.path.display())
                .with_source(err)
        })?;
        drop(file);

        fs::rename(&self.path, &target).map_err(|err| {
            Error::new(ErrorKind::CannotRenameFile, "failed to rename log file")
                .with_context("path", self.path.display())
                .with_context("target", target.display())
                .with_source(err)
        })?;
        policy.advance();

        self.handle = Handle::Open(open_file(&self.path)?);
        self.current_size = 0;
        Ok(())
    }

    /// Close the file. Closing a file that is already closed or broken succeeds.
    pub(crate) fn close(&mut self) -> Result<(), Error> {
        match mem::replace(&mut self.handle, Handle::Closed) {
            Handle::Open(file) => {
                if let Err(err) = file.sync_all() {
                    self.handle = Handle::Open(file);
                    return Err(Error::new(ErrorKind::CannotCloseFile, "failed to close log file")
                        .with_context("path", self.path.display())
                        .with_source(err));
                }
                Ok(())
            }
            Handle::Closed | Handle::Broken => Ok(()),
        }
    }

    fn unusable(&self) -> Error {
        let state = match self.handle {
            Handle::Open(_) => "open",
            Handle::Closed => "closed",
            Handle::Broken => "broken",
        };
        Error::new(ErrorKind::WriteFailed, "log file has no usable handle")
            .with_context("path", self.path.display())
            .with_context("state", state)
    }
}

fn open_file(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|err| {
            Error::new(ErrorKind::CannotOpenFile, "failed to open log file")
                .with_context("path", path.display())
                .with_source(err)
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn open(dir: &TempDir, policy: Option<RotationPolicy>) -> LogFile {
        LogFile::open(dir.path().join("app.log"), policy).unwrap()
    }

    #[test]
    fn test_write_accounts_for_newline() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let mut file = open(&dir, None);

        file.write_line("hello").unwrap();
        file.write_line("world!").unwrap();
        assert_eq!(file.current_size(), 13);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "hello\nworld!\n");
    }

    #[test]
    fn test_without_policy_never_rotates() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let mut file = open(&dir, None);

        let line = "x".repeat(1000);
        for _ in 0..100 {
            assert!(!file.should_rotate(line.len()));
            file.append_line(&line).unwrap();
        }
        assert_eq!(file.current_size(), 100 * 1001);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_rotate_renames_and_reopens() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let mut file = open(&dir, Some(RotationPolicy::by_size(10).unwrap()));

        file.write_line("first").unwrap();
        file.rotate().unwrap();
        assert_eq!(file.current_size(), 0);
        assert_eq!(file.policy().unwrap().suffix(), 2);
        file.write_line("second").unwrap();

        let rotated = dir.path().join("app.log-1");
        assert_eq!(fs::read_to_string(rotated).unwrap(), "first\n");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "second\n");
    }

    #[test]
    fn test_failed_rename_breaks_the_file() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let mut file = open(&dir, Some(RotationPolicy::by_size(10).unwrap()));

        // a non-empty directory at the target name makes the rename fail
        let blocker = dir.path().join("app.log-1");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "").unwrap();

        let err = file.rotate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CannotRenameFile);
        assert!(file.is_broken());
        assert_eq!(file.policy().unwrap().suffix(), 1);

        let err = file.append_line("lost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailed);
        assert_eq!(err.context("state"), Some("broken"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let mut file = open(&dir, None);

        file.close().unwrap();
        assert!(file.is_closed());
        file.close().unwrap();
        assert!(file.is_closed());

        let err = file.write_line("late").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailed);
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let err = LogFile::open(dir.path().join("missing").join("app.log"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CannotOpenFile);
    }
}
