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

use daylog::Entry;
use daylog::ErrorKind;
use daylog::LocaleProfile;
use daylog::Logger;
use daylog::Provenance;
use daylog::Severity;
use rand::Rng;
use rand::distr::Alphanumeric;
use tempfile::TempDir;

const SEVERITIES: [Severity; 5] = [
    Severity::None,
    Severity::Info,
    Severity::Warning,
    Severity::Error,
    Severity::Test,
];

fn logger(dir: &Path, locale: LocaleProfile) -> Logger {
    daylog::builder(locale)
        .application_name("Sample")
        .directory(dir)
        .strict(true)
        .build()
        .expect("failed to build logger")
}

fn generate_random_string() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(1..=40);
    std::iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(len)
        .collect()
}

#[test]
fn test_render_contains_message_and_label() {
    let temp_dir = TempDir::new().unwrap();

    for locale in [LocaleProfile::Jp, LocaleProfile::Us] {
        let logger = logger(temp_dir.path(), locale);
        for severity in SEVERITIES {
            for _ in 0..20 {
                // lowercase keeps random text from spelling a label
                let message = generate_random_string().to_lowercase();
                let line = logger.render(
                    &Entry::new(message.as_str(), Provenance::new("src/view.rs", "tap", 7))
                        .with_severity(severity),
                );

                assert!(line.ends_with(&message), "{line}");
                match severity.label() {
                    Some(label) => assert!(line.contains(&format!("[{label}]")), "{line}"),
                    None => {
                        for label in ["Info", "Warning", "Error", "Test"] {
                            assert!(!line.contains(label), "{line}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_render_example_line() {
    let temp_dir = TempDir::new().unwrap();
    let logger = logger(temp_dir.path(), LocaleProfile::Jp);

    let line = logger.render(
        &Entry::new("hello", Provenance::new("/a/b/Foo.swift", "run()", 42))
            .with_severity(Severity::Info),
    );

    assert!(line.contains(" +0900 [B:Sample] "), "{line}");
    assert!(line.contains("[F:Foo]"), "{line}");
    assert!(line.contains("<run()>"), "{line}");
    assert!(line.contains("[L: 42]"), "{line}");
    assert!(line.contains("[Info]"), "{line}");
    assert!(line.ends_with("hello"), "{line}");
}

#[test]
fn test_two_appends_give_two_ordered_lines() {
    let temp_dir = TempDir::new().unwrap();
    let logger = logger(temp_dir.path(), LocaleProfile::Us);

    daylog::emit!(logger, Severity::None, "A").unwrap();
    daylog::emit!(logger, Severity::None, "B").unwrap();

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    assert!(content.ends_with('\n'));
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("A"));
    assert!(lines[1].ends_with("B"));
}

#[test]
fn test_written_entries_read_back_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let logger = logger(temp_dir.path(), LocaleProfile::Jp);

    let messages = (0..25).map(|_| generate_random_string()).collect::<Vec<_>>();
    for (i, message) in messages.iter().enumerate() {
        let severity = SEVERITIES[i % SEVERITIES.len()];
        daylog::emit!(logger, severity, "{message}").unwrap();
    }

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), messages.len());
    for (i, (line, message)) in lines.iter().zip(&messages).enumerate() {
        let severity = SEVERITIES[i % SEVERITIES.len()];
        let suffix = match severity.label() {
            Some(label) => format!("]  [{label}] {message}"),
            None => format!("] {message}"),
        };
        assert!(line.ends_with(&suffix), "{line}");
        assert!(line.contains("[F:file_logging]"), "{line}");
        assert!(
            line.contains("<test_written_entries_read_back_in_order>"),
            "{line}"
        );
    }
}

#[test]
fn test_error_detail_is_written_on_next_line() {
    let temp_dir = TempDir::new().unwrap();
    let logger = logger(temp_dir.path(), LocaleProfile::Jp);
    let err = std::io::Error::other("permission denied");

    daylog::emit!(logger, Severity::Error, error: err, "failed to save").unwrap();

    let content = fs::read_to_string(logger.file_path().unwrap()).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[Error] failed to save"));
    assert_eq!(lines[1], "permission denied");
}

#[test]
fn test_same_day_same_path() {
    let temp_dir = TempDir::new().unwrap();
    let first = logger(temp_dir.path(), LocaleProfile::Jp);
    let second = logger(temp_dir.path(), LocaleProfile::Jp);

    // skip the rare run straddling midnight
    let (a, b) = (first.file_path().unwrap(), second.file_path().unwrap());
    if a.file_name() == b.file_name() {
        assert_eq!(a, b);
    }
    assert!(a.starts_with(temp_dir.path().join("Logs")));
}

#[test]
fn test_unset_locale_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let err = daylog::LoggerBuilder::default()
        .directory(temp_dir.path())
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LocaleUnset);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_lenient_logger_survives_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let logger = daylog::builder(LocaleProfile::Us)
        .application_name("Sample")
        .directory(temp_dir.path())
        .build()
        .unwrap();
    fs::remove_dir_all(temp_dir.path().join("Logs")).unwrap();

    daylog::emit!(logger, Severity::Warning, "still on the console").unwrap();

    let strict = logger.with_strict(true);
    let err = daylog::emit!(strict, Severity::Warning, "now it fails").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileCreation);
}

#[test]
fn test_render_macro_captures_call_site() {
    let temp_dir = TempDir::new().unwrap();
    let logger = logger(temp_dir.path(), LocaleProfile::Us);
    let err = std::io::Error::other("not found");

    let line = daylog::render!(logger, Severity::Test, error: err, "lookup {}", 7);

    assert!(line.contains(" [F:file_logging] <test_render_macro_captures_call_site> "));
    assert!(line.ends_with("[Test] lookup 7\nnot found"), "{line}");
    assert!(!logger.file_path().unwrap().exists());
}
