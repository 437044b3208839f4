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

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;

#[derive(Debug)]
pub(crate) enum Clock {
    DefaultClock,
    #[cfg(test)]
    ManualClock(ManualClock),
}

impl Clock {
    pub(crate) fn now(&self) -> Timestamp {
        match self {
            Clock::DefaultClock => Timestamp::now(),
            #[cfg(test)]
            Clock::ManualClock(clock) => clock.now(),
        }
    }

    /// Capture the current instant, broken down in UTC or in the system time zone.
    pub(crate) fn now_zoned(&self, use_utc: bool) -> Zoned {
        let tz = if use_utc {
            TimeZone::UTC
        } else {
            TimeZone::system()
        };
        self.now().to_zoned(tz)
    }

    #[cfg(test)]
    pub(crate) fn set_now(&mut self, new_time: Timestamp) {
        if let Clock::ManualClock(clock) = self {
            clock.set_now(new_time);
        }
    }
}

/// The time could be reset.
#[derive(Debug)]
#[cfg(test)]
pub(crate) struct ManualClock {
    now: Timestamp,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new(now: Timestamp) -> ManualClock {
        ManualClock { now }
    }

    fn now(&self) -> Timestamp {
        self.now
    }

    pub(crate) fn set_now(&mut self, now: Timestamp) {
        self.now = now;
    }
}
