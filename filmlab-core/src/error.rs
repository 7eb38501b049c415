use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilmlabError {
    #[error("At least one process must be provided for the timeline")]
    NoProcessProvided,

    #[error("Process '{0}' not found in the note library")]
    ProcessNotFound(String),

    #[error("Process '{0}' was selected more than once")]
    DuplicateProcess(String),

    #[error("Film count {0} is outside the supported range 1..=100")]
    FilmCountOutOfRange(i64),

    #[error("Step '{step_id}' in process '{process_id}' has a rule with film interval 0")]
    InvalidRule { process_id: String, step_id: String },

    #[error(
        "Step '{step_id}' in process '{process_id}' has an invalid override range {min}..={max}"
    )]
    InvalidOverride {
        process_id: String,
        step_id: String,
        min: u32,
        max: u32,
    },

    #[error(
        "Step '{step_id}' in process '{process_id}' has overlapping override ranges at film {film_count}"
    )]
    OverlappingOverrides {
        process_id: String,
        step_id: String,
        film_count: u32,
    },

    #[error("Step '{step_id}' in process '{process_id}' has an invalid {field}: {value}")]
    InvalidTime {
        process_id: String,
        step_id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Process '{process_id}' has more than one step with id '{step_id}'")]
    DuplicateStepId { process_id: String, step_id: String },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error), // Handles errors from the logger
}
