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

//! Log record and level.

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;

use crate::Error;
use crate::ErrorKind;

/// A single log statement, alive for the duration of one dispatch.
///
/// The message is kept as [`fmt::Arguments`], which can be rendered any number of times, so every
/// destination gets its own independent rendering of the same arguments.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    level: Level,
    file: &'a str,
    line: u32,
    args: fmt::Arguments<'a>,
    time: Zoned,
}

impl<'a> Record<'a> {
    /// Create a new record observed at `time`.
    pub fn new(
        level: Level,
        file: &'a str,
        line: u32,
        args: fmt::Arguments<'a>,
        time: Zoned,
    ) -> Self {
        Self {
            level,
            file,
            line,
            args,
            time,
        }
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The source file containing the message.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line containing the message.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The message body.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// The observed time, in the time zone selected when the record was dispatched.
    pub fn time(&self) -> &Zoned {
        &self.time
    }
}

/// An enum representing the available verbosity levels of the logger.
///
/// Levels are ordered from the most verbose to the most severe:
/// `Trace < Debug < Info < Warn < Error < Fatal`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    /// Designates very low priority, often extremely verbose, information.
    Trace = 0,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
    /// Designates errors the program cannot recover from.
    Fatal,
}

impl Level {
    /// All levels, from the most verbose to the most severe.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;
    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for level in Level::ALL {
            if s.eq_ignore_ascii_case(level.as_str()) {
                return Ok(level);
            }
        }

        Err(Error::new(
            ErrorKind::InvalidParam,
            format!("malformed level: {s:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_totally_ordered() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
        }
        assert_eq!(Level::ALL.iter().max(), Some(&Level::Fatal));
        assert_eq!(Level::ALL.iter().min(), Some(&Level::Trace));
    }

    #[test]
    fn test_display_honors_padding() {
        assert_eq!(format!("{:<5}|", Level::Info), "INFO |");
        assert_eq!(format!("{:<5}|", Level::Error), "ERROR|");
        assert_eq!(format!("{:<5}|", Level::Warn), "WARN |");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!("Trace".parse::<Level>().unwrap(), Level::Trace);

        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParam);
    }
}
