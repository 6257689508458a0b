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

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;

use crate::Error;
use crate::ErrorKind;

/// The subdirectory of the base directory that holds the log files by default.
pub const DEFAULT_SUBDIRECTORY: &str = "Logs";

/// The application name used in file names when none is configured.
pub const FALLBACK_APPLICATION_NAME: &str = "application";

/// The log file a logger writes to, resolved once when the logger is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileTarget {
    directory: PathBuf,
    file_name: String,
    full_path: PathBuf,
}

impl LogFileTarget {
    /// Resolve the target for `application` on the calendar day of `today`.
    ///
    /// `base` overrides the platform documents directory. When `create` is set the directory is
    /// created if absent.
    pub(crate) fn resolve(
        base: Option<&Path>,
        subdirectory: Option<&str>,
        application: &str,
        today: &Zoned,
        create: bool,
    ) -> Result<Self, Error> {
        let base = match base {
            Some(base) => base.to_path_buf(),
            None => default_base_dir().ok_or_else(|| {
                Error::new(
                    ErrorKind::DirectoryResolution,
                    "failed to resolve a writable directory for log files",
                )
            })?,
        };

        let directory = match subdirectory {
            Some(sub) if !sub.is_empty() => base.join(sub),
            _ => base,
        };

        if create {
            fs::create_dir_all(&directory).map_err(|err| {
                Error::from_io_error(
                    ErrorKind::DirectoryCreation,
                    "failed to create log directory",
                    err,
                )
                .with_context("directory", directory.display())
            })?;
        }

        let file_name = file_name(application, today);
        let full_path = directory.join(&file_name);
        Ok(Self {
            directory,
            file_name,
            full_path,
        })
    }

    /// The directory holding the log file.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file name, `{YYYYMMDD}_{application}.log`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The directory joined with the file name.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

fn default_base_dir() -> Option<PathBuf> {
    dirs::document_dir().or_else(dirs::data_local_dir)
}

/// Compute the log file name for `application` on the calendar day of `today`.
///
/// Path separators in the application name are replaced by `_`.
pub(crate) fn file_name(application: &str, today: &Zoned) -> String {
    let application = if application.is_empty() {
        FALLBACK_APPLICATION_NAME
    } else {
        application
    };
    let application = application.replace(['/', '\\'], "_");
    format!("{}_{application}.log", today.strftime("%Y%m%d"))
}
