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

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::ErrorKind;
use crate::append::Append;
use crate::clock::Clock;
use crate::layout::EntryLayout;
use crate::record::Entry;
use crate::target::LogFileTarget;

/// An appender that writes entries to the per-day log file.
///
/// Each append reopens the file in append mode and closes it again; no handle is kept between
/// calls. Appends from threads sharing one appender are serialized.
#[derive(Debug)]
pub struct FileAppender {
    target: LogFileTarget,
    layout: EntryLayout,
    clock: Clock,
    dry_run: bool,
    lock: Mutex<()>,
}

impl FileAppender {
    pub(crate) fn new(
        target: LogFileTarget,
        layout: EntryLayout,
        clock: Clock,
        dry_run: bool,
    ) -> Self {
        Self {
            target,
            layout,
            clock,
            dry_run,
            lock: Mutex::new(()),
        }
    }

    /// The resolved log file target.
    pub fn target(&self) -> &LogFileTarget {
        &self.target
    }

    /// Whether writes are skipped.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn ensure_file(&self) -> Result<(), Error> {
        let path = self.target.full_path();
        if path.try_exists().is_ok_and(|ok| ok) {
            return Ok(());
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(()),
            // another process created it in between
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(Error::from_io_error(
                ErrorKind::FileCreation,
                "failed to create log file",
                err,
            )
            .with_context("path", path.display())),
        }
    }
}

impl Append for FileAppender {
    fn format_message(&self, entry: &Entry) -> String {
        self.layout.format(entry, self.clock.now())
    }

    fn append(&self, formatted: &str) -> Result<(), Error> {
        if self.dry_run {
            return Ok(());
        }

        let _guard = self.lock();
        self.ensure_file()?;

        let path = self.target.full_path();
        let mut file = OpenOptions::new().append(true).open(path).map_err(|err| {
            Error::from_io_error(ErrorKind::FileOpen, "failed to open log file", err)
                .with_context("path", path.display())
        })?;

        let mut bytes = Vec::with_capacity(formatted.len() + 1);
        bytes.extend_from_slice(formatted.as_bytes());
        bytes.push(b'\n');
        file.write_all(&bytes).map_err(|err| {
            Error::from_io_error(ErrorKind::FileWrite, "failed to write log entry", err)
                .with_context("path", path.display())
        })?;
        Ok(())
    }

    fn file_path(&self) -> Option<&Path> {
        Some(self.target.full_path())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::thread;

    use jiff::Timestamp;
    use jiff::Zoned;
    use jiff::tz::TimeZone;
    use tempfile::TempDir;

    use super::*;
    use crate::clock::ManualClock;
    use crate::record::Provenance;
    use crate::record::Severity;

    fn appender(dir: &Path, dry_run: bool) -> FileAppender {
        let today = Zoned::from_str("2024-08-10T12:00:00[Asia/Tokyo]").unwrap();
        let target =
            LogFileTarget::resolve(Some(dir), Some("Logs"), "Sample", &today, !dry_run).unwrap();
        let layout = EntryLayout::new(TimeZone::get("Asia/Tokyo").unwrap()).display_name("Sample");
        let now = Timestamp::from_str("2024-08-10T03:00:00Z").unwrap();
        FileAppender::new(
            target,
            layout,
            Clock::ManualClock(ManualClock::new(now)),
            dry_run,
        )
    }

    #[test]
    fn test_append_creates_file_and_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), false);
        let path = appender.file_path().unwrap().to_path_buf();
        assert!(!path.exists());

        appender.append("A").unwrap();
        appender.append("B").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A\nB\n");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), false);
        let path = appender.file_path().unwrap().to_path_buf();
        fs::write(&path, "earlier\n").unwrap();

        appender.append("later").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn test_append_recreates_deleted_file() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), false);
        let path = appender.file_path().unwrap().to_path_buf();

        appender.append("first").unwrap();
        fs::remove_file(&path).unwrap();
        appender.append("second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_append_fails_when_directory_vanished() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), false);
        fs::remove_dir_all(appender.target().directory()).unwrap();

        let err = appender.append("lost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileCreation);
    }

    #[test]
    fn test_append_fails_when_path_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), false);
        let path = appender.file_path().unwrap().to_path_buf();
        fs::create_dir(&path).unwrap();

        let err = appender.append("nowhere").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOpen);
        assert!(path.is_dir());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), true);
        assert!(appender.is_dry_run());

        appender.append("ignored").unwrap();
        assert!(!appender.target().directory().exists());
    }

    #[test]
    fn test_concurrent_appends_keep_lines_whole() {
        let temp_dir = TempDir::new().unwrap();
        let appender = Arc::new(appender(temp_dir.path(), false));

        let handles = (0..4)
            .map(|t| {
                let appender = appender.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        appender.append(&format!("thread {t} entry {i}")).unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(appender.file_path().unwrap()).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|l| l.starts_with("thread ")));
    }

    #[test]
    fn test_format_message_uses_clock() {
        let temp_dir = TempDir::new().unwrap();
        let appender = appender(temp_dir.path(), false);
        let entry = Entry::new("hello", Provenance::new("/a/b/Foo.swift", "run()", 42))
            .with_severity(Severity::Info);

        assert_eq!(
            appender.format_message(&entry),
            "2024-08-10 12:00:00.000 +0900 [B:Sample] [F:Foo] <run()> [L: 42]  [Info] hello"
        );
    }
}
