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

//! Logging macros that fill in the call site.

/// Dispatch a record at the given level, tagged with the caller's file and line.
///
/// # Examples
///
/// ```
/// use logfan::Level;
///
/// let mut logger = logfan::Logger::default();
/// let (a, b) = (12, 30);
/// logfan::log!(logger, Level::Info, "{a} + {b} = {}", a + b);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        $logger.log(
            $level,
            ::std::file!(),
            ::std::line!(),
            ::std::format_args!($($arg)+),
        );
    }};
}

/// Dispatch a record at [`Level::Trace`](crate::Level::Trace).
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Dispatch a record at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Dispatch a record at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Dispatch a record at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Dispatch a record at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Dispatch a record at [`Level::Fatal`](crate::Level::Fatal).
///
/// Only the record is emitted; the process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
