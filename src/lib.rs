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

//! Daylog appends log lines to a per-day, per-application file and mirrors them to stdout.
//!
//! # Overview
//!
//! Each line carries a timestamp in the chosen [`LocaleProfile`], the application name, the
//! source file, function and line of the call, and a [`Severity`] tag. Lines land in
//! `{dir}/Logs/{YYYYMMDD}_{application}.log`, where the date is the day the logger was built.
//!
//! Logging never takes down the host: by default, file failures are handed to a [`Trap`] and
//! the line still reaches the console. A strict logger returns them instead.
//!
//! # Examples
//!
//! ```
//! use daylog::LocaleProfile;
//! use daylog::Severity;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = daylog::builder(LocaleProfile::Us)
//!     .application_name("Sample")
//!     .directory(dir.path())
//!     .build()
//!     .unwrap();
//!
//! logger.log_startup_message(daylog::provenance!());
//! daylog::emit!(logger, Severity::Info, "button tapped: {}", "hello").unwrap();
//!
//! let content = std::fs::read_to_string(logger.file_path().unwrap()).unwrap();
//! assert!(content.ends_with("[Info] button tapped: hello\n"));
//! ```
//!
//! Forward records of the `log` crate:
//!
//! ```
//! let dir = tempfile::tempdir().unwrap();
//! daylog::builder(daylog::LocaleProfile::Jp)
//!     .directory(dir.path())
//!     .build()
//!     .unwrap()
//!     .apply();
//!
//! log::info!("This is an info message.");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod record;
pub mod trap;

mod clock;
mod error;
mod locale;
mod logger;
mod target;

pub use append::Append;
pub use error::Error;
pub use error::ErrorKind;
pub use locale::LocaleProfile;
pub use logger::Logger;
pub use logger::LoggerBuilder;
pub use logger::builder;
pub use record::Entry;
pub use record::Provenance;
pub use record::Severity;
pub use target::LogFileTarget;
pub use trap::Trap;

/// Capture the provenance of the call site: file, enclosing function and line.
///
/// # Examples
///
/// ```
/// fn run() -> daylog::Provenance<'static> {
///     daylog::provenance!()
/// }
///
/// let p = run();
/// assert_eq!(p.function(), "run");
/// assert_eq!(p.file(), file!());
/// ```
#[macro_export]
macro_rules! provenance {
    () => {{
        fn f() {}
        $crate::Provenance::new(
            ::core::file!(),
            $crate::record::__function_name($crate::record::__type_name_of(f)),
            ::core::line!(),
        )
    }};
}

/// Emit an entry through a [`Logger`], capturing the call site.
///
/// Evaluates to the `Result` of [`Logger::emit`].
///
/// # Examples
///
/// ```
/// use daylog::Logger;
/// use daylog::Severity;
/// use daylog::append::Testing;
/// use daylog::layout::EntryLayout;
///
/// let testing = Testing::new(EntryLayout::new(jiff::tz::TimeZone::UTC));
/// let logger = Logger::new(testing.clone());
/// let err = std::io::Error::other("disk full");
///
/// daylog::emit!(logger, Severity::Warning, "saved {} items", 3).unwrap();
/// daylog::emit!(logger, Severity::Error, error: err, "save failed").unwrap();
///
/// let lines = testing.lines();
/// assert!(lines[0].ends_with("[Warning] saved 3 items"));
/// assert!(lines[1].ends_with("[Error] save failed\ndisk full"));
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $severity:expr, error: $err:expr, $($arg:tt)+) => {
        $logger.emit(
            &$crate::Entry::new(::std::format!($($arg)+), $crate::provenance!())
                .with_severity($severity)
                .with_error(&$err),
        )
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit(
            &$crate::Entry::new(::std::format!($($arg)+), $crate::provenance!())
                .with_severity($severity),
        )
    };
}

/// Render an entry through a [`Logger`] without side effects, capturing the call site.
#[macro_export]
macro_rules! render {
    ($logger:expr, $severity:expr, error: $err:expr, $($arg:tt)+) => {
        $logger.render(
            &$crate::Entry::new(::std::format!($($arg)+), $crate::provenance!())
                .with_severity($severity)
                .with_error(&$err),
        )
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.render(
            &$crate::Entry::new(::std::format!($($arg)+), $crate::provenance!())
                .with_severity($severity),
        )
    };
}
