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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use jiff::Timestamp;

use crate::Error;
use crate::ErrorKind;
use crate::append::Append;
use crate::layout::EntryLayout;
use crate::record::Entry;

/// An appender that keeps appended lines in memory, for substituting the file appender in tests.
///
/// Clones share the same buffer, so a test can keep one clone and hand the other to a
/// [`Logger`](crate::Logger).
///
/// # Examples
///
/// ```
/// use daylog::Logger;
/// use daylog::append::Testing;
/// use daylog::layout::EntryLayout;
///
/// let tz = jiff::tz::TimeZone::UTC;
/// let testing = Testing::new(EntryLayout::new(tz));
/// let logger = Logger::new(testing.clone());
/// daylog::emit!(logger, daylog::Severity::Info, "hello {}", 42).unwrap();
/// assert!(testing.lines()[0].ends_with("[Info] hello 42"));
/// ```
#[derive(Debug, Clone)]
pub struct Testing {
    layout: EntryLayout,
    lines: Arc<Mutex<Vec<String>>>,
    failure: Option<ErrorKind>,
}

impl Testing {
    /// Create a testing appender formatting with `layout`.
    pub fn new(layout: EntryLayout) -> Self {
        Self {
            layout,
            lines: Arc::new(Mutex::new(vec![])),
            failure: None,
        }
    }

    /// Make every append fail with an error of `kind`.
    pub fn fail_with(mut self, kind: ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    /// A snapshot of the appended lines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Append for Testing {
    fn format_message(&self, entry: &Entry) -> String {
        self.layout.format(entry, Timestamp::now())
    }

    fn append(&self, formatted: &str) -> Result<(), Error> {
        if let Some(kind) = self.failure {
            return Err(Error::new(kind, "testing appender configured to fail"));
        }
        self.buffer().push(formatted.to_string());
        Ok(())
    }
}
