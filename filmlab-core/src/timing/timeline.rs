use serde::{Deserialize, Serialize};

/// Step id carried by the synthetic end-of-process row.
pub const TERMINAL_STEP_ID: &str = "OUT";

/// Label shown for the synthetic end-of-process row.
pub const TERMINAL_LABEL: &str = "OUT/DONE";

/// One row of a merged timeline: a step of one process, or that process's terminal row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedTimelineEntry {
    pub process_id: String,
    pub process_name: String,
    pub step_id: String,
    pub label: String,
    /// Minutes elapsed since all processes started together.
    pub start_time_minutes: f64,
    pub duration_minutes: f64,
    pub is_terminal: bool,
}

impl MergedTimelineEntry {
    pub fn terminal(process_id: &str, process_name: &str, start_time_minutes: f64) -> Self {
        Self {
            process_id: process_id.to_string(),
            process_name: process_name.to_string(),
            step_id: TERMINAL_STEP_ID.to_string(),
            label: TERMINAL_LABEL.to_string(),
            start_time_minutes,
            duration_minutes: 0.0,
            is_terminal: true,
        }
    }

    pub fn end_time_minutes(&self) -> f64 {
        self.start_time_minutes + self.duration_minutes
    }
}
