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

//! Log entries and their metadata.

use std::borrow::Cow;
use std::fmt;

/// The categorical tag of an entry.
///
/// [`Severity::None`] renders no tag at all; every other severity renders its label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No severity tag.
    #[default]
    None,
    /// Informational entry, rendered as `Info`.
    Info,
    /// Warning entry, rendered as `Warning`.
    Warning,
    /// Error entry, rendered as `Error`.
    Error,
    /// Test entry, rendered as `Test`.
    Test,
}

impl Severity {
    /// The rendered label, or `None` for [`Severity::None`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Severity::None => None,
            Severity::Info => Some("Info"),
            Severity::Warning => Some("Warning"),
            Severity::Error => Some("Error"),
            Severity::Test => Some("Test"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("None"))
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::None,
        }
    }
}

/// Where a log call was made: source file, function and line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Provenance<'a> {
    file: &'a str,
    function: &'a str,
    line: u32,
}

impl<'a> Provenance<'a> {
    /// Create a provenance from explicit call-site values.
    ///
    /// Use the [`provenance!`](crate::provenance) macro to capture them automatically.
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// The source file path as given by the caller.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The function name.
    pub fn function(&self) -> &'a str {
        self.function
    }

    /// The line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The base name of the source file without its extension.
    ///
    /// Both `/` and `\` separate segments. Empty path segments and empty name pieces are
    /// skipped, so `/a/b/Foo.swift` yields `Foo`, `src/.hidden.rs` yields `hidden` and an empty
    /// path yields `None`.
    pub fn file_stem(&self) -> Option<&'a str> {
        let name = self
            .file
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .next_back()?;
        name.split('.').find(|s| !s.is_empty())
    }
}

/// A single log entry, built at the call site and serialized right away.
#[derive(Clone)]
pub struct Entry<'a> {
    message: Cow<'a, str>,
    severity: Severity,
    error: Option<&'a dyn fmt::Display>,
    provenance: Provenance<'a>,
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("message", &self.message)
            .field("severity", &self.severity)
            .field("error", &self.error.map(|e| e.to_string()))
            .field("provenance", &self.provenance)
            .finish()
    }
}

impl<'a> Entry<'a> {
    /// Create an entry with no severity and no error detail.
    pub fn new(message: impl Into<Cow<'a, str>>, provenance: Provenance<'a>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::None,
            error: None,
            provenance,
        }
    }

    /// Set the severity of the entry.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attach an error detail, rendered on its own line after the message.
    pub fn with_error(mut self, error: &'a dyn fmt::Display) -> Self {
        self.error = Some(error);
        self
    }

    /// The message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The error detail, if any.
    pub fn error(&self) -> Option<&'a dyn fmt::Display> {
        self.error
    }

    /// The call-site provenance.
    pub fn provenance(&self) -> &Provenance<'a> {
        &self.provenance
    }
}

#[doc(hidden)]
pub fn __type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

// `path` is the type name of a probe fn declared inside the caller, e.g. `app::ui::run::f`.
#[doc(hidden)]
pub fn __function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::f").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}
