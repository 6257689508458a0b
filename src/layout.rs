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

//! Render entries as text lines.

use std::fmt::Write;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::record::Entry;

/// A layout that renders an entry as a text line.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57.172 +0900 [B:Sample] [F:main] <run> [L: 42]  [Info] hello
/// 2024-08-11 22:44:57.173 +0900 [B:Sample] [F:main] <run> [L: 43] no severity
/// ```
///
/// The double space before the severity tag and the trailing space after the line tag are kept
/// so lines stay byte-compatible with existing log files. Set `compact` to collapse them.
#[derive(Debug, Clone)]
pub struct EntryLayout {
    display_name: Option<String>,
    tz: TimeZone,
    compact: bool,
}

impl EntryLayout {
    /// Create a layout rendering timestamps in the given time zone.
    pub fn new(tz: TimeZone) -> Self {
        Self {
            display_name: None,
            tz,
            compact: false,
        }
    }

    /// Set the application display name rendered as `[B:{name}]`.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Collapse the spacing around the line and severity tags to single spaces.
    pub fn compact(mut self, yes: bool) -> Self {
        self.compact = yes;
        self
    }

    /// The time zone timestamps are rendered in.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// Render `entry` as observed at `now`.
    pub fn format(&self, entry: &Entry, now: Timestamp) -> String {
        let mut text = String::new();

        let zoned = now.to_zoned(self.tz.clone());
        // SAFETY: write to a string always succeeds
        write!(
            &mut text,
            "{}.{:03} {}",
            zoned.strftime("%Y-%m-%d %H:%M:%S"),
            zoned.millisecond(),
            zoned.strftime("%z")
        )
        .unwrap();

        if let Some(name) = &self.display_name {
            write!(&mut text, " [B:{name}]").unwrap();
        }

        let provenance = entry.provenance();
        if let Some(stem) = provenance.file_stem() {
            write!(&mut text, " [F:{stem}]").unwrap();
        }
        write!(&mut text, " <{}>", provenance.function()).unwrap();

        let line = provenance.line();
        match (entry.severity().label(), self.compact) {
            (Some(label), false) => write!(&mut text, " [L: {line}]  [{label}] ").unwrap(),
            (Some(label), true) => write!(&mut text, " [L: {line}] [{label}] ").unwrap(),
            (None, _) => write!(&mut text, " [L: {line}] ").unwrap(),
        }

        text.push_str(entry.message());

        if let Some(err) = entry.error() {
            write!(&mut text, "\n{err}").unwrap();
        }

        text
    }
}
