//! Interleaves several processes that run in parallel into one timeline.
//!
//! Every process starts at minute 0 and runs its steps back to back in `order`.
//! Each process contributes one row per step plus a terminal OUT/DONE row, and the
//! combined rows are stable-sorted by start time, so rows starting together keep the
//! order in which their processes were supplied.

use super::{resolver::resolve, timeline::MergedTimelineEntry};
use filmlab_schemas::process::Process;
use tracing::debug;

/// Builds the merged timeline of `processes` for `film_count`.
pub fn merge(processes: &[Process], film_count: u32) -> Vec<MergedTimelineEntry> {
    let mut entries: Vec<MergedTimelineEntry> = processes
        .iter()
        .flat_map(|process| process_entries(process, film_count))
        .collect();

    entries.sort_by(|a, b| a.start_time_minutes.total_cmp(&b.start_time_minutes));

    debug!(
        processes = processes.len(),
        entries = entries.len(),
        film_count,
        "merged process timelines"
    );
    entries
}

/// Total minutes `process` takes for `film_count`: the start of its terminal row.
pub fn process_duration(process: &Process, film_count: u32) -> f64 {
    process
        .ordered_steps()
        .into_iter()
        .map(|step| resolve(step, film_count))
        .sum()
}

fn process_entries(process: &Process, film_count: u32) -> Vec<MergedTimelineEntry> {
    let steps = process.ordered_steps();
    let mut entries = Vec::with_capacity(steps.len() + 1);
    let mut cursor = 0.0_f64;

    for step in steps {
        let duration = resolve(step, film_count);
        entries.push(MergedTimelineEntry {
            process_id: process.id.clone(),
            process_name: process.name.clone(),
            step_id: step.id.clone(),
            label: step.label.clone(),
            start_time_minutes: cursor,
            duration_minutes: duration,
            is_terminal: false,
        });
        cursor += duration;
    }

    entries.push(MergedTimelineEntry::terminal(&process.id, &process.name, cursor));
    entries
}
