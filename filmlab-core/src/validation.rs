//! Load-time checks for note data. The resolver never calls into this module: it
//! stays total on whatever it is given, and callers decide whether to validate first.

use crate::error::FilmlabError;
use filmlab_schemas::process::{Process, ProcessStep};
use std::collections::HashSet;

pub fn validate_processes(processes: &[Process]) -> Result<(), FilmlabError> {
    processes.iter().try_for_each(validate_process)
}

pub fn validate_process(process: &Process) -> Result<(), FilmlabError> {
    let mut seen_ids = HashSet::new();
    for step in &process.steps {
        if !step.id.is_empty() && !seen_ids.insert(step.id.as_str()) {
            return Err(FilmlabError::DuplicateStepId {
                process_id: process.id.clone(),
                step_id: step.id.clone(),
            });
        }
        validate_step(&process.id, step)?;
    }
    Ok(())
}

fn validate_step(process_id: &str, step: &ProcessStep) -> Result<(), FilmlabError> {
    check_time(process_id, step, "base time", step.base_time_minutes)?;

    for rule in &step.rules {
        if rule.film_interval == 0 {
            return Err(FilmlabError::InvalidRule {
                process_id: process_id.to_string(),
                step_id: step.id.clone(),
            });
        }
        check_time(process_id, step, "time increment", rule.time_increment)?;
    }

    for o in &step.overrides {
        if o.film_count_min == 0 || o.film_count_min > o.film_count_max {
            return Err(FilmlabError::InvalidOverride {
                process_id: process_id.to_string(),
                step_id: step.id.clone(),
                min: o.film_count_min,
                max: o.film_count_max,
            });
        }
        check_time(process_id, step, "override time", o.time)?;
    }

    let mut ranges: Vec<(u32, u32)> = step
        .overrides
        .iter()
        .map(|o| (o.film_count_min, o.film_count_max))
        .collect();
    ranges.sort_unstable();
    if let Some(pair) = ranges.windows(2).find(|pair| pair[1].0 <= pair[0].1) {
        return Err(FilmlabError::OverlappingOverrides {
            process_id: process_id.to_string(),
            step_id: step.id.clone(),
            film_count: pair[1].0,
        });
    }

    Ok(())
}

fn check_time(
    process_id: &str,
    step: &ProcessStep,
    field: &'static str,
    value: f64,
) -> Result<(), FilmlabError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FilmlabError::InvalidTime {
            process_id: process_id.to_string(),
            step_id: step.id.clone(),
            field,
            value,
        })
    }
}
