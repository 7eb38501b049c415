use crate::timing::{merger::process_duration, timeline::MergedTimelineEntry};
use filmlab_schemas::process::Process;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSummary {
    pub process_id: String,
    pub process_name: String,
    pub step_count: usize,
    pub total_minutes: f64,
}

/// Per-process totals of a merged run plus the time until every process is done.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineSummary {
    pub film_count: u32,
    pub processes: Vec<ProcessSummary>,
    pub makespan_minutes: f64,
}

pub fn summarize(processes: &[Process], film_count: u32) -> TimelineSummary {
    let processes: Vec<ProcessSummary> = processes
        .iter()
        .map(|p| ProcessSummary {
            process_id: p.id.clone(),
            process_name: p.name.clone(),
            step_count: p.steps.len(),
            total_minutes: process_duration(p, film_count),
        })
        .collect();

    let makespan_minutes = processes
        .iter()
        .map(|p| p.total_minutes)
        .fold(0.0, f64::max);

    TimelineSummary {
        film_count,
        processes,
        makespan_minutes,
    }
}

/// The rows due next once `elapsed_minutes` have passed: every row sharing the earliest
/// start time that is not before `elapsed_minutes`. Expects a merged (sorted) timeline.
pub fn upcoming(entries: &[MergedTimelineEntry], elapsed_minutes: f64) -> &[MergedTimelineEntry] {
    let first = entries.partition_point(|e| e.start_time_minutes < elapsed_minutes);
    let Some(next) = entries.get(first) else {
        return &[];
    };
    let len = entries[first..]
        .iter()
        .take_while(|e| e.start_time_minutes == next.start_time_minutes)
        .count();
    &entries[first..first + len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::merger::merge;
    use filmlab_schemas::{process::ProcessStep, rule::PeriodicRule};

    fn processes() -> Vec<Process> {
        vec![
            Process::new("a", "A")
                .with_step(ProcessStep::new("a1", 1, "Developer", 3.0).with_rule(PeriodicRule::new(2, 1.0)))
                .with_step(ProcessStep::new("a2", 2, "Fixer", 2.0)),
            Process::new("b", "B").with_step(ProcessStep::new("b1", 1, "Bleach", 1.5)),
        ]
    }

    #[test]
    fn summary_reports_totals_and_makespan() {
        let summary = summarize(&processes(), 3);
        assert_eq!(summary.film_count, 3);
        assert_eq!(summary.processes[0].total_minutes, 6.0);
        assert_eq!(summary.processes[0].step_count, 2);
        assert_eq!(summary.processes[1].total_minutes, 1.5);
        assert_eq!(summary.makespan_minutes, 6.0);
    }

    #[test]
    fn empty_summary_has_zero_makespan() {
        assert_eq!(summarize(&[], 1).makespan_minutes, 0.0);
    }

    #[test]
    fn upcoming_returns_all_rows_sharing_the_next_start() {
        let timeline = merge(&processes(), 1);

        let at_start = upcoming(&timeline, 0.0);
        assert_eq!(at_start.len(), 2);
        assert_eq!(at_start[0].step_id, "a1");
        assert_eq!(at_start[1].step_id, "b1");

        let later = upcoming(&timeline, 1.0);
        assert_eq!(later.len(), 1);
        assert!(later[0].is_terminal);
        assert_eq!(later[0].process_name, "B");

        assert!(upcoming(&timeline, 99.0).is_empty());
    }
}
