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

use log::Metadata;
use log::Record;

use crate::Logger;
use crate::record::Entry;
use crate::record::Provenance;
use crate::record::Severity;

impl Logger {
    /// Set up this logger as the `log` crate global logger.
    ///
    /// All records are accepted: the global maximum level is set to `Trace`.
    ///
    /// # Errors
    ///
    /// Return an error if the `log` crate global logger has already been set.
    pub fn try_apply(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }

    /// Set up this logger as the `log` crate global logger.
    ///
    /// # Panics
    ///
    /// Panic if the `log` crate global logger has already been set.
    pub fn apply(self) {
        self.try_apply()
            .expect("Logger::apply must be called before the log crate global logger initialized");
    }

    fn log_record(&self, record: &Record) {
        let function = record
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or_default();
        let provenance = Provenance::new(
            record.file().unwrap_or_default(),
            function,
            record.line().unwrap_or_default(),
        );
        let entry = Entry::new(record.args().to_string(), provenance)
            .with_severity(Severity::from(record.level()));

        // log::Log cannot report failures; strict errors are trapped here
        if let Err(err) = self.emit(&entry) {
            self.trap.trap(&err);
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.log_record(record);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use jiff::tz::TimeZone;
    use log::Log;

    use super::*;
    use crate::append::Testing;
    use crate::layout::EntryLayout;

    #[test]
    fn test_log_records_are_emitted() {
        let testing = Testing::new(EntryLayout::new(TimeZone::UTC));
        let logger = Logger::new(testing.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("warned {}", 1))
                .level(log::Level::Warn)
                .file(Some("src/net/conn.rs"))
                .module_path(Some("app::net::conn"))
                .line(Some(12))
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("debugged"))
                .level(log::Level::Debug)
                .build(),
        );

        let lines = testing.lines();
        assert_eq!(lines.len(), 2);
        assert!(
            lines[0].ends_with(" [F:conn] <conn> [L: 12]  [Warning] warned 1"),
            "{}",
            lines[0]
        );
        assert!(lines[1].ends_with(" <> [L: 0] debugged"), "{}", lines[1]);
    }
}
