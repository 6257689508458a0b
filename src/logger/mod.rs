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

use crate::Append;
use crate::Error;
use crate::Trap;
use crate::append::Stdout;
use crate::record::Entry;
use crate::record::Provenance;
use crate::record::Severity;
use crate::trap::DefaultTrap;

mod builder;
pub use self::builder::LoggerBuilder;
pub use self::builder::builder;

mod log_impl;

/// The caller-facing logger.
///
/// Every emitted entry is formatted by the appender, appended, and mirrored to stdout. The
/// console write happens whether or not the append succeeded.
///
/// A lenient logger (the default) hands append failures to its [`Trap`] and reports success, so
/// logging never takes down its host. A strict logger returns them.
#[derive(Debug)]
pub struct Logger {
    appender: Box<dyn Append>,
    console: Stdout,
    trap: Box<dyn Trap>,
    strict: bool,
}

impl Logger {
    /// Create a lenient logger over any appender.
    ///
    /// Use [`LoggerBuilder`] to get a logger writing to the per-day log file.
    pub fn new(appender: impl Into<Box<dyn Append>>) -> Self {
        Self {
            appender: appender.into(),
            console: Stdout::default(),
            trap: Box::new(DefaultTrap::default()),
            strict: false,
        }
    }

    /// Set the trap receiving swallowed errors.
    ///
    /// Default to [`DefaultTrap`].
    pub fn with_trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Return append failures from [`Logger::emit`] instead of trapping them.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether append failures are returned to the caller.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The file entries are appended to, if the appender writes to one.
    pub fn file_path(&self) -> Option<&Path> {
        self.appender.file_path()
    }

    /// Print the entry announcing where this logger records to.
    ///
    /// The announcement goes to the console only.
    pub fn log_startup_message(&self, provenance: Provenance) {
        let line = self.startup_message(provenance);
        let _ = self.console.write_line(&line);
    }

    fn startup_message(&self, provenance: Provenance) -> String {
        let path = match self.file_path() {
            Some(path) => path.display().to_string(),
            None => "<no file>".to_string(),
        };
        let message = format!(
            "Start recording logs to the following file.\n ____________________ \n{path}\n ____________________ \n"
        );
        let entry = Entry::new(message, provenance).with_severity(Severity::Info);
        self.appender.format_message(&entry)
    }

    /// Format an entry, append it and mirror it to stdout.
    ///
    /// # Errors
    ///
    /// Only a strict logger returns errors; a lenient one traps them.
    pub fn emit(&self, entry: &Entry) -> Result<(), Error> {
        let line = self.appender.format_message(entry);
        let appended = self.appender.append(&line);
        let _ = self.console.write_line(&line);

        match appended {
            Ok(()) => Ok(()),
            Err(err) if self.strict => Err(err),
            Err(err) => {
                self.trap.trap(&err);
                Ok(())
            }
        }
    }

    /// Format an entry without appending or printing it.
    pub fn render(&self, entry: &Entry) -> String {
        self.appender.format_message(entry)
    }
}
