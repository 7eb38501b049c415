//! Helpers for building contiguous override schedules the way the note editor does:
//! the first range starts at film 1 and every following range starts right after the
//! previous one ends.

use filmlab_schemas::{process::ProcessStep, rule::TimeOverride};

/// The override that would follow `existing`, covering `span` films (at least one).
pub fn next_override(existing: &[TimeOverride], span: u32, time: f64) -> TimeOverride {
    let start = existing
        .last()
        .map_or(1, |last| last.film_count_max.saturating_add(1));
    let end = start.saturating_add(span.max(1) - 1);
    TimeOverride::new(start, end, time)
}

/// Appends the next contiguous override to `step` and returns it.
pub fn push_override(step: &mut ProcessStep, span: u32, time: f64) -> &TimeOverride {
    let next = next_override(&step.overrides, span, time);
    step.overrides.push(next);
    &step.overrides[step.overrides.len() - 1]
}
