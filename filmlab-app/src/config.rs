use anyhow::{Context, Result};
use filmlab_core::{error::FilmlabError, library::read_note_file};
use filmlab_schemas::process::Process;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};
use tracing::{debug, info, warn};

/// All development notes found in a notes directory, keyed by process id.
pub struct NoteLibrary {
    pub processes: BTreeMap<String, Process>,
}

impl NoteLibrary {
    /// Loads every `*.yaml` / `*.yml` file in `base_path`. Files are read in name order
    /// and a process id seen twice keeps the definition from the later file.
    pub fn load<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref();
        info!("Loading note library from '{}'", base_path.display());

        let mut paths = Vec::new();
        for entry in fs::read_dir(base_path)
            .with_context(|| format!("Failed to read directory: {:?}", base_path))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut processes = BTreeMap::new();
        for path in paths {
            let file = read_note_file(&path)?;
            debug!(
                file = %path.display(),
                schema_version = %file.schema_version,
                notes = file.notes.len(),
                "read notes file"
            );
            for process in file.notes {
                if let Some(previous) = processes.insert(process.id.clone(), process) {
                    warn!("Process '{}' redefined in {:?}", previous.id, path);
                }
            }
        }

        info!("Note library loaded: {} processes", processes.len());
        Ok(Self { processes })
    }

    pub fn get(&self, id: &str) -> Result<&Process, FilmlabError> {
        self.processes
            .get(id)
            .ok_or_else(|| FilmlabError::ProcessNotFound(id.to_string()))
    }

    /// The processes named by `ids`, in the order given. Each id may appear once.
    pub fn select(&self, ids: &[String]) -> Result<Vec<Process>, FilmlabError> {
        let mut seen = BTreeSet::new();
        ids.iter()
            .map(|id| {
                if !seen.insert(id.as_str()) {
                    return Err(FilmlabError::DuplicateProcess(id.clone()));
                }
                self.get(id).cloned()
            })
            .collect()
    }
}
