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
use std::path::Path;

use crate::Error;
use crate::ErrorKind;
use crate::append::file::LogFile;
use crate::append::file::RotationPolicy;

/// The default number of log files a logger can hold.
pub const DEFAULT_MAX_DESTINATIONS: NonZeroUsize = NonZeroUsize::new(8).unwrap();

/// Identifies a log file by the registry slot it occupies.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DestinationId(usize);

impl DestinationId {
    /// The slot index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A bounded, ordered set of log files.
///
/// Files take the first free slot and keep it for the lifetime of the registry: closing does not
/// free a slot, and there is no removal.
#[derive(Debug)]
pub struct Registry {
    slots: Vec<Option<LogFile>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DESTINATIONS)
    }
}

impl Registry {
    /// Create an empty registry with `capacity` slots.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: (0..capacity.get()).map(|_| None).collect(),
        }
    }

    /// The number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether no file has been added.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Look up a file by its id.
    pub fn get(&self, id: DestinationId) -> Option<&LogFile> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Iterate over the files in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (DestinationId, &LogFile)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|file| (DestinationId(i), file)))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut LogFile> {
        self.slots.iter_mut().flatten()
    }

    /// Whether any file still takes part in dispatch, i.e. has not been closed.
    pub(crate) fn has_active(&self) -> bool {
        self.slots.iter().flatten().any(|file| !file.is_closed())
    }

    pub(crate) fn add(
        &mut self,
        path: &Path,
        policy: Option<RotationPolicy>,
    ) -> Result<DestinationId, Error> {
        if path.as_os_str().is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidParam,
                "log file path must not be empty",
            ));
        }

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            return Err(Error::new(
                ErrorKind::CapacityExceeded,
                "cannot add log file: all destination slots are taken",
            )
            .with_context("path", path.display())
            .with_context("capacity", self.capacity()));
        };

        // the policy may have been used before; start numbering afresh for this file
        let policy = match policy {
            Some(mut policy) => {
                policy
                    .validate()
                    .map_err(|err| err.with_context("path", path.display()))?;
                policy.reset_suffix();
                Some(policy)
            }
            None => None,
        };

        let file = LogFile::open(path.to_path_buf(), policy)?;
        self.slots[index] = Some(file);
        Ok(DestinationId(index))
    }

    /// Close every open file in slot order, stopping at the first failure.
    pub(crate) fn close_all(&mut self) -> Result<(), Error> {
        for file in self.iter_mut() {
            file.close()?;
        }
        Ok(())
    }

    pub(crate) fn remove(&mut self, path: &Path) -> Result<(), Error> {
        Err(Error::new(
            ErrorKind::Unsupported,
            "removing a log file is not supported; the file stays registered",
        )
        .with_context("path", path.display()))
    }
}
