use crate::timing::{format::format_minutes, timeline::MergedTimelineEntry};
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// One CSV row of an exported timeline.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TimelineRecord {
    pub film_count: u32,
    pub process_id: String,
    pub process_name: String,
    pub step_id: String,
    pub label: String,
    pub start_time_minutes: f64,
    pub duration_minutes: f64,
    pub start_formatted: String,
    pub is_terminal: bool,
}

pub struct TimelineLogger {
    writer: Writer<fs::File>,
}

impl TimelineLogger {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_timeline(
        &mut self,
        film_count: u32,
        entries: &[MergedTimelineEntry],
    ) -> Result<(), anyhow::Error> {
        for entry in entries {
            self.writer.serialize(TimelineRecord {
                film_count,
                process_id: entry.process_id.clone(),
                process_name: entry.process_name.clone(),
                step_id: entry.step_id.clone(),
                label: entry.label.clone(),
                start_time_minutes: entry.start_time_minutes,
                duration_minutes: entry.duration_minutes,
                start_formatted: format_minutes(entry.start_time_minutes),
                is_terminal: entry.is_terminal,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
