//! Renders merged timelines as a Gantt-style chart: one lane per process, one bar per
//! step, and a dot where each process is done.

use anyhow::Result;
use filmlab_core::timing::{format::format_minutes, timeline::MergedTimelineEntry};
use filmlab_schemas::process::Process;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const LANE_HEIGHT: u32 = 90;

pub fn plot_timeline(
    output_dir: &Path,
    processes: &[Process],
    entries: &[MergedTimelineEntry],
    film_count: u32,
) -> Result<()> {
    let path = output_dir.join("timeline.png");
    let lanes = processes.len().max(1);
    let height = 140 + LANE_HEIGHT * lanes as u32;

    let root = BitMapBackend::new(&path, (1280, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_minutes = entries
        .iter()
        .map(|e| e.end_time_minutes())
        .fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Merged Timeline ({} films)", film_count),
            ("sans-serif", 30).into_font(),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(10)
        .build_cartesian_2d(0f64..max_minutes * 1.05, 0f64..lanes as f64)?;

    chart
        .configure_mesh()
        .x_desc("Elapsed (minutes)")
        .disable_y_axis()
        .disable_y_mesh()
        .draw()?;

    let colors = [BLUE, RED, GREEN, MAGENTA, CYAN, YELLOW];
    let title_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
    let step_style = TextStyle::from(("sans-serif", 12).into_font()).color(&BLACK);

    for (lane, process) in processes.iter().enumerate() {
        let color = colors[lane % colors.len()];
        // Lane 0 sits at the top of the chart.
        let top = (lanes - lane) as f64;
        let bar = (top - 0.75, top - 0.35);
        let rows = lane_rows(entries, &process.id);

        chart.draw_series(std::iter::once(Text::new(
            process.name.clone(),
            (0.0, top - 0.08),
            title_style.clone(),
        )))?;

        chart.draw_series(rows.iter().filter(|e| !e.is_terminal).map(|e| {
            Rectangle::new(
                [(e.start_time_minutes, bar.0), (e.end_time_minutes(), bar.1)],
                color.mix(0.5).filled(),
            )
        }))?;

        chart.draw_series(rows.iter().filter(|e| !e.is_terminal).map(|e| {
            Text::new(
                format!("{} {}", e.label, format_minutes(e.duration_minutes)),
                (e.start_time_minutes, bar.1 - 0.05),
                step_style.clone(),
            )
        }))?;

        chart.draw_series(
            rows.iter()
                .filter(|e| e.is_terminal)
                .map(|e| Circle::new((e.start_time_minutes, (bar.0 + bar.1) / 2.0), 6, BLACK.filled())),
        )?;
    }

    root.present()?;
    info!("[Plotting] Timeline chart saved to '{}'", path.display());
    Ok(())
}

/// Rows drawn in the lane of the process with `process_id`.
fn lane_rows<'a>(entries: &'a [MergedTimelineEntry], process_id: &str) -> Vec<&'a MergedTimelineEntry> {
    entries.iter().filter(|e| e.process_id == process_id).collect()
}
