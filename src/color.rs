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

//! Color utilities.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Level;

/// Colors for different log levels.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for fatal level logs.
    pub fatal: Color,
    /// Color for error level logs.
    pub error: Color,
    /// Color for warning level logs.
    pub warn: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for trace level logs.
    pub trace: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            fatal: Color::BrightRed,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
            trace: Color::Cyan,
        }
    }
}

impl LevelColor {
    /// Colorize the log level, left-justified to the width of the longest level name.
    pub fn colorize_record_level(&self, no_color: bool, level: Level) -> ColoredString {
        let padded = format!("{level:<5}");
        if no_color {
            ColoredString::from(padded)
        } else {
            let color = match level {
                Level::Fatal => self.fatal,
                Level::Error => self.error,
                Level::Warn => self.warn,
                Level::Info => self.info,
                Level::Debug => self.debug,
                Level::Trace => self.trace,
            };
            padded.color(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_is_padded_plain_text() {
        let colors = LevelColor::default();
        assert_eq!(
            colors.colorize_record_level(true, Level::Info).to_string(),
            "INFO "
        );
        assert_eq!(
            colors.colorize_record_level(true, Level::Fatal).to_string(),
            "FATAL"
        );
    }

    #[test]
    fn test_colored_level_keeps_padding_inside_escape() {
        // escapes are decided when the string is displayed
        colored::control::set_override(true);
        let rendered = LevelColor::default()
            .colorize_record_level(false, Level::Warn)
            .to_string();
        colored::control::unset_override();

        assert!(rendered.starts_with("\x1b["), "{rendered:?}");
        assert!(rendered.contains("WARN "), "{rendered:?}");
        assert!(rendered.ends_with("\x1b[0m"), "{rendered:?}");
    }
}
