#![warn(missing_docs)]
//! Deterministic testing surfaces: synthetic height fields + JSONL sinks.

mod fixtures;

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use fixtures::*;

/// A sink that writes newline-delimited JSON to disk.
///
/// Used to dump draw-directive streams from headless runs so they can be
/// diffed across revisions.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append one record to the log.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}
