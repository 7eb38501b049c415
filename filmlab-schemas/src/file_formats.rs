use crate::process::Process;
use serde::{Deserialize, Serialize};

/// On-disk layout of a notes file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteFile {
    pub schema_version: String,
    pub notes: Vec<Process>,
}
