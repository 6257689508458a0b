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

use std::path::PathBuf;

use crate::Error;
use crate::LocaleProfile;
use crate::Logger;
use crate::Trap;
use crate::append::FileAppender;
use crate::clock::Clock;
use crate::layout::EntryLayout;
use crate::target::DEFAULT_SUBDIRECTORY;
use crate::target::FALLBACK_APPLICATION_NAME;
use crate::target::LogFileTarget;
use crate::trap::DefaultTrap;

/// Create a new [`LoggerBuilder`] for the given locale profile.
///
/// # Examples
///
/// ```
/// use daylog::LocaleProfile;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = daylog::builder(LocaleProfile::Jp)
///     .application_name("Sample")
///     .directory(dir.path())
///     .build()
///     .unwrap();
///
/// let path = logger.file_path().unwrap();
/// assert!(path.starts_with(dir.path().join("Logs")));
/// assert!(path.to_string_lossy().ends_with("_Sample.log"));
/// ```
pub fn builder(locale: LocaleProfile) -> LoggerBuilder {
    LoggerBuilder::new(locale)
}

/// A builder to configure and create a [`Logger`] writing to the per-day log file.
///
/// A builder left at [`LocaleProfile::Unset`] refuses to build.
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    locale: LocaleProfile,
    application_name: Option<String>,
    directory: Option<PathBuf>,
    subdirectory: String,
    compact: bool,
    dry_run: bool,
    strict: bool,
    clock: Clock,
    trap: Box<dyn Trap>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new(LocaleProfile::Unset)
    }
}

impl LoggerBuilder {
    /// Create a new logger builder.
    pub fn new(locale: LocaleProfile) -> Self {
        Self {
            locale,
            application_name: None,
            directory: None,
            subdirectory: DEFAULT_SUBDIRECTORY.to_string(),
            compact: false,
            dry_run: false,
            strict: false,
            clock: Clock::DefaultClock,
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Set the locale profile.
    pub fn locale(mut self, locale: LocaleProfile) -> Self {
        self.locale = locale;
        self
    }

    /// Set the application display name.
    ///
    /// It is rendered as `[B:{name}]` and used in the file name. Without it, the tag is omitted
    /// and the file name uses `application`.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.application_name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Set the base directory, overriding the platform documents directory.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Set the subdirectory of the base directory holding the files.
    ///
    /// Default to `Logs`. An empty value writes into the base directory itself.
    pub fn subdirectory(mut self, sub: impl Into<String>) -> Self {
        self.subdirectory = sub.into();
        self
    }

    /// Collapse the spacing around the line and severity tags.
    pub fn compact(mut self, yes: bool) -> Self {
        self.compact = yes;
        self
    }

    /// Resolve the target but never touch the file system.
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self
    }

    /// Return append failures from [`Logger::emit`] instead of trapping them.
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Set the trap for handling errors during logging.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build the [`Logger`].
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The locale profile is unset; nothing is resolved or created in that case.
    /// * No writable base directory can be found.
    /// * The log directory cannot be created.
    pub fn build(self) -> Result<Logger, Error> {
        let LoggerBuilder {
            locale,
            application_name,
            directory,
            subdirectory,
            compact,
            dry_run,
            strict,
            clock,
            trap,
        } = self;

        let tz = locale.time_zone()?;
        let today = clock.now().to_zoned(tz.clone());
        let target = LogFileTarget::resolve(
            directory.as_deref(),
            Some(subdirectory.as_str()),
            application_name
                .as_deref()
                .unwrap_or(FALLBACK_APPLICATION_NAME),
            &today,
            !dry_run,
        )?;

        let mut layout = EntryLayout::new(tz).compact(compact);
        if let Some(name) = application_name {
            layout = layout.display_name(name);
        }

        let appender = FileAppender::new(target, layout, clock, dry_run);
        Ok(Logger::new(appender).with_trap(trap).with_strict(strict))
    }
}
