use crate::{
    analysis::{self, TimelineSummary},
    error::FilmlabError,
    logger::TimelineLogger,
    timing::{film_count::FilmCount, merger, timeline::MergedTimelineEntry},
    validation,
};
use filmlab_schemas::process::Process;
use tracing::info;

/// A fluent builder for constructing a merged `Timeline`.
///
/// Collects the processes to run side by side, the film count that drives every
/// step's duration, and optional CSV export of the result.
#[derive(Default)]
pub struct TimelineBuilder {
    processes: Vec<Process>,
    film_count: Option<i64>,
    validate: bool,
    log_path: Option<String>,
}

/// A merged timeline, computed once at build time.
pub struct Timeline {
    processes: Vec<Process>,
    film_count: FilmCount,
    entries: Vec<MergedTimelineEntry>,
    logger: Option<TimelineLogger>,
}

impl TimelineBuilder {
    /// Creates a new, empty `TimelineBuilder` with validation enabled.
    pub fn new() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }

    /// Replaces the processes to merge.
    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = processes;
        self
    }

    /// Adds one more process after those already configured.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Sets the film count. Defaults to the first film.
    pub fn with_film_count(mut self, film_count: i64) -> Self {
        self.film_count = Some(film_count);
        self
    }

    /// Turns validation of the note data on or off before merging.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Configures the timeline to be written as CSV to the specified file.
    pub fn with_timeline_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns the merged `Timeline`.
    ///
    /// # Errors
    ///
    /// Returns a `FilmlabError` if no process was provided, the film count lies outside
    /// the supported range, validation is enabled and fails, or the log file cannot be
    /// created.
    pub fn build(self) -> Result<Timeline, FilmlabError> {
        if self.processes.is_empty() {
            return Err(FilmlabError::NoProcessProvided);
        }

        let film_count = match self.film_count {
            Some(n) => FilmCount::new(n)?,
            None => FilmCount::default(),
        };

        if self.validate {
            validation::validate_processes(&self.processes)?;
        }

        let logger = match self.log_path {
            Some(path) => Some(
                TimelineLogger::new(&path).map_err(|e| FilmlabError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        let entries = merger::merge(&self.processes, film_count.get());
        info!(
            processes = self.processes.len(),
            film_count = film_count.get(),
            "timeline built"
        );

        Ok(Timeline {
            processes: self.processes,
            film_count,
            entries,
            logger,
        })
    }
}

impl Timeline {
    pub fn entries(&self) -> &[MergedTimelineEntry] {
        &self.entries
    }

    pub fn film_count(&self) -> FilmCount {
        self.film_count
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn summary(&self) -> TimelineSummary {
        analysis::summarize(&self.processes, self.film_count.get())
    }

    /// Writes the timeline to the configured CSV file. Does nothing without one.
    pub fn write_log(&mut self) -> Result<(), FilmlabError> {
        if let Some(logger) = &mut self.logger {
            logger.log_timeline(self.film_count.get(), &self.entries)?;
        }
        Ok(())
    }
}
