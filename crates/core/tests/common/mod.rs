#![allow(dead_code)]

use dircontainer_api::{LogSink, Severity};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

/// Log sink that keeps every message for later assertions.
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<(Severity, String)>>,
}

impl RecordingLog {
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl LogSink for RecordingLog {
    fn log(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

pub fn touch(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::File::create(dir.join(name)).unwrap();
    }
}

pub fn file_names(entries: &[dircontainer_api::LibraryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            e.archive_path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .to_string()
        })
        .collect()
}
