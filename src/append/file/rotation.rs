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

use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::ErrorKind;

/// Bytes reserved for the `-<suffix>` appended to a rotated file name.
const ROTATED_SUFFIX_BUDGET: usize = 11;

/// Defines what triggers the rotation of a log file.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum RotationKind {
    /// Rotate when the next line would bring the file to its maximum size.
    Size,
}

/// A rotation policy for one log file.
///
/// The policy is moved into the destination it is attached to, so it is attached at most once
/// and cannot be swapped while in use.
///
/// # Examples
///
/// ```
/// use logfan::append::file::RotationPolicy;
///
/// let policy = RotationPolicy::by_size(1024 * 1024).unwrap();
/// assert_eq!(policy.suffix(), 1);
///
/// assert!(RotationPolicy::by_size(0).is_err());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RotationPolicy {
    kind: RotationKind,
    max_size: usize,
    suffix: u64,
}

impl RotationPolicy {
    /// Create a policy that rotates a file before it reaches `max_size` bytes.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::InvalidParam`] if `max_size` is zero.
    pub fn by_size(max_size: usize) -> Result<Self, Error> {
        let policy = RotationPolicy {
            kind: RotationKind::Size,
            max_size,
            suffix: 1,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The rotation trigger.
    pub fn kind(&self) -> RotationKind {
        self.kind
    }

    /// The maximum size of a log file in bytes.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The suffix the next rotated file will get.
    pub fn suffix(&self) -> u64 {
        self.suffix
    }

    /// Whether a file holding `current_size` bytes must rotate before a line of `pending` bytes
    /// and its newline land.
    pub fn should_rotate(&self, current_size: usize, pending: usize) -> bool {
        match self.kind {
            RotationKind::Size => {
                current_size.saturating_add(pending).saturating_add(1) >= self.max_size
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        match self.kind {
            RotationKind::Size if self.max_size == 0 => Err(Error::new(
                ErrorKind::InvalidParam,
                "size based rotation policy requires a max size greater than 0",
            )),
            RotationKind::Size => Ok(()),
        }
    }

    pub(crate) fn reset_suffix(&mut self) {
        self.suffix = 1;
    }

    /// The name `path` is renamed to by the next rotation: `<path>-<suffix>`.
    pub(crate) fn rotated_path(&self, path: &Path) -> Result<PathBuf, Error> {
        let suffix = format!("-{}", self.suffix);
        if suffix.len() > ROTATED_SUFFIX_BUDGET {
            return Err(Error::new(
                ErrorKind::BufferOverflow,
                "rotated file name does not fit its reserved length",
            )
            .with_context("path", path.display())
            .with_context("suffix", self.suffix));
        }

        let mut target = path.as_os_str().to_owned();
        target.push(suffix);
        Ok(PathBuf::from(target))
    }

    pub(crate) fn advance(&mut self) {
        self.suffix += 1;
    }
}
