use crate::config::NoteLibrary;
use crate::plotting;
use anyhow::{Context, Result};
use filmlab_core::{
    analysis::{upcoming, TimelineSummary},
    error::FilmlabError,
    timing::{
        builder::TimelineBuilder,
        film_count::FilmCount,
        format::format_minutes,
        resolver::{resolve_with_source, time_table, TimeSource},
        timeline::MergedTimelineEntry,
    },
    validation,
};
use filmlab_schemas::{file_formats::NoteFile, process::Process};
use serde::Serialize;
use std::{fs, path::{Path, PathBuf}};
use tracing::info;

/// Where and how a merged timeline is reported.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub output_dir: PathBuf,
    pub save: bool,
    pub chart: bool,
    pub json: bool,
    pub validate: bool,
    /// Elapsed minutes at which to report the next steps due.
    pub at: Option<f64>,
}

#[derive(Debug, Serialize)]
struct MergeReport<'a> {
    summary: &'a TimelineSummary,
    entries: &'a [MergedTimelineEntry],
}

/// Prints every process in the library with its steps in run order.
pub fn list_notes(library: &NoteLibrary) {
    if library.processes.is_empty() {
        println!("No notes found.");
        return;
    }

    for process in library.processes.values() {
        println!("{} - {} ({} steps)", process.id, process.name, process.steps.len());
        if let Some(description) = &process.description {
            println!("    {}", description);
        }
        for step in process.ordered_steps() {
            let temperature = match (step.temperature_min, step.temperature_max) {
                (Some(min), Some(max)) => format!(" @ {:.1}-{:.1}°C", min, max),
                (Some(t), None) | (None, Some(t)) => format!(" @ {:.1}°C", t),
                (None, None) => String::new(),
            };
            println!(
                "    {:>3}. {:<20} {:>9}{}  [{} rules, {} overrides]",
                step.order,
                step.label,
                format_minutes(step.base_time_minutes),
                temperature,
                step.rules.len(),
                step.overrides.len()
            );
        }
    }
}

/// Prints each step's effective time for one film count and where it came from.
pub fn report_resolve(process: &Process, films: i64, validate: bool) -> Result<()> {
    if validate {
        validation::validate_process(process)?;
    }
    let film_count = FilmCount::new(films)?;

    println!("\n--- {} | film {} ---", process.name, film_count);
    let mut total = 0.0;
    for step in process.ordered_steps() {
        let (minutes, source) = resolve_with_source(step, film_count.get());
        total += minutes;
        println!(
            "  {:<20} {:>9}  ({})",
            step.label,
            format_minutes(minutes),
            describe_source(source)
        );
    }
    println!("  {:<20} {:>9}", "Total", format_minutes(total));
    Ok(())
}

/// Prints a step-by-film grid of effective times for an inclusive film range.
pub fn report_table(process: &Process, from: i64, to: i64, validate: bool) -> Result<()> {
    if validate {
        validation::validate_process(process)?;
    }
    let from = FilmCount::new(from)?;
    let to = FilmCount::new(to)?;
    if from > to {
        anyhow::bail!("Film range start {} is after its end {}", from, to);
    }

    println!("\n--- {} | films {}..={} ---", process.name, from, to);
    print!("  {:<20}", "Film");
    for n in from.get()..=to.get() {
        print!(" {:>8}", n);
    }
    println!();

    for step in process.ordered_steps() {
        print!("  {:<20}", step.label);
        for (_, minutes) in time_table(step, from.get()..=to.get()) {
            print!(" {:>8}", format_minutes(minutes));
        }
        println!();
    }
    Ok(())
}

/// Merges the selected processes, prints the timeline and optionally saves a run
/// directory with CSV, note snapshot, summary and chart.
pub fn run_merge(processes: Vec<Process>, films: i64, options: &MergeOptions) -> Result<()> {
    // Reject bad input before anything is written to disk.
    if processes.is_empty() {
        return Err(FilmlabError::NoProcessProvided.into());
    }
    FilmCount::new(films)?;
    if options.validate {
        validation::validate_processes(&processes)?;
    }

    let run_dir = if options.save || options.chart {
        let dir = options.output_dir.join(format!(
            "timeline_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        Some(dir)
    } else {
        None
    };

    let mut builder = TimelineBuilder::new()
        .with_processes(processes)
        .with_film_count(films)
        .with_validation(false);
    if let Some(dir) = &run_dir {
        builder = builder.with_timeline_logging_to_file(&dir.join("timeline.csv").to_string_lossy());
    }
    let mut timeline = builder.build()?;
    let summary = timeline.summary();

    if options.json {
        let report = MergeReport {
            summary: &summary,
            entries: timeline.entries(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_timeline(timeline.entries(), &summary);
        if let Some(elapsed) = options.at {
            print_upcoming(timeline.entries(), elapsed);
        }
    }

    if let Some(dir) = &run_dir {
        timeline.write_log()?;
        write_run_files(dir, timeline.processes(), &summary)?;
        if options.chart {
            plotting::plot_timeline(dir, timeline.processes(), timeline.entries(), summary.film_count)?;
        }
        info!("Run saved to '{}'", dir.display());
    }
    Ok(())
}

fn write_run_files(dir: &Path, processes: &[Process], summary: &TimelineSummary) -> Result<()> {
    // Keep the exact notes used next to the results.
    let snapshot = NoteFile {
        schema_version: "1.0".to_string(),
        notes: processes.to_vec(),
    };
    fs::write(dir.join("notes.yaml"), serde_yaml::to_string(&snapshot)?)
        .context("Failed to write notes snapshot")?;
    fs::write(dir.join("summary.json"), serde_json::to_string_pretty(summary)?)
        .context("Failed to write summary")?;
    Ok(())
}

fn print_timeline(entries: &[MergedTimelineEntry], summary: &TimelineSummary) {
    println!("\n--- [Merged Timeline] film {} ---", summary.film_count);
    println!("  {:>9} | {:<20} | {:<20} | {:>9}", "Start", "Process", "Step", "Duration");
    println!("  {}", "-".repeat(68));
    for entry in entries {
        let duration = if entry.is_terminal {
            String::new()
        } else {
            format_minutes(entry.duration_minutes)
        };
        println!(
            "  {:>9} | {:<20} | {:<20} | {:>9}",
            format_minutes(entry.start_time_minutes),
            entry.process_name,
            entry.label,
            duration
        );
    }

    println!("\nTotals:");
    for process in &summary.processes {
        println!(
            "  - {:<20} {:>9} ({} steps)",
            process.process_name,
            format_minutes(process.total_minutes),
            process.step_count
        );
    }
    println!("  All done after {}", format_minutes(summary.makespan_minutes));
}

fn print_upcoming(entries: &[MergedTimelineEntry], elapsed: f64) {
    let next = upcoming(entries, elapsed);
    let Some(first) = next.first() else {
        println!("\nNothing left after {}", format_minutes(elapsed));
        return;
    };
    println!("\nNext after {}, at {}:", format_minutes(elapsed), format_minutes(first.start_time_minutes));
    for entry in next {
        println!("  - {}: {}", entry.process_name, entry.label);
    }
}

fn describe_source(source: TimeSource) -> &'static str {
    match source {
        TimeSource::Override => "override",
        TimeSource::OverrideFallback => "last override",
        TimeSource::Rule => "rule",
        TimeSource::Base => "base",
    }
}
