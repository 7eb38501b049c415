use crate::error::FilmlabError;
use filmlab_schemas::file_formats::NoteFile;
use std::{fs, path::Path};

/// Reads and parses one YAML notes file.
pub fn read_note_file<P: AsRef<Path>>(path: P) -> Result<NoteFile, FilmlabError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| FilmlabError::FileIO(display.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| FilmlabError::YamlParsing(display, e))
}
