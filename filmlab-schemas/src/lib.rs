//! Data structures for film development notes: processes, their timed steps, and the
//! film-count rules and overrides that adjust step durations.

pub mod file_formats;
pub mod process;
pub mod rule;

#[cfg(test)]
mod tests {
    use super::{
        file_formats::NoteFile,
        process::{Process, ProcessStep},
        rule::{PeriodicRule, TimeOverride},
    };

    const NOTE_YAML: &str = r#"
schema_version: "1.0"
notes:
  - id: c41-tetenal
    name: C-41 Tetenal
    steps:
      - id: dev
        order: 1
        label: Developer
        base_time_minutes: 3.25
        temperature_min: 37.8
        temperature_max: 38.2
        rules:
          - film_interval: 4
            time_increment: 0.25
      - id: blix
        order: 2
        label: Blix
        base_time_minutes: 4.0
        overrides:
          - film_count_min: 1
            film_count_max: 8
            time: 4.0
          - film_count_min: 9
            film_count_max: 16
            time: 6.0
"#;

    #[test]
    fn note_file_parses_from_yaml() {
        let file: NoteFile = serde_yaml::from_str(NOTE_YAML).unwrap();
        assert_eq!(file.schema_version, "1.0");
        assert_eq!(file.notes.len(), 1);

        let note = &file.notes[0];
        assert_eq!(note.name, "C-41 Tetenal");
        assert_eq!(note.description, None);
        assert_eq!(note.steps[0].rules, vec![PeriodicRule::new(4, 0.25)]);
        assert_eq!(note.steps[0].temperature_max, Some(38.2));
        assert!(note.steps[1].rules.is_empty());
        assert_eq!(note.steps[1].overrides[1], TimeOverride::new(9, 16, 6.0));
    }

    #[test]
    fn builder_step_matches_parsed_step_and_survives_a_round_trip() {
        let file: NoteFile = serde_yaml::from_str(NOTE_YAML).unwrap();
        let expected = ProcessStep::new("dev", 1, "Developer", 3.25)
            .with_temperature(37.8, 38.2)
            .with_rule(PeriodicRule::new(4, 0.25));
        assert_eq!(file.notes[0].steps[0], expected);

        let yaml = serde_yaml::to_string(&file).unwrap();
        let reparsed: NoteFile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reparsed, file);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let yaml = "id: bw\nname: Rodinal\n";
        let note: Process = serde_yaml::from_str(yaml).unwrap();
        assert!(note.steps.is_empty());
    }

    #[test]
    fn ordered_steps_sorts_by_order_and_keeps_ties_stable() {
        let note = Process::new("bw", "Rodinal 1+50")
            .with_step(ProcessStep::new("fix", 3, "Fixer", 5.0))
            .with_step(ProcessStep::new("dev", 1, "Developer", 11.0))
            .with_step(ProcessStep::new("stop", 2, "Stop", 1.0))
            .with_step(ProcessStep::new("rinse", 2, "Rinse", 0.5));

        let ids: Vec<&str> = note.ordered_steps().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["dev", "stop", "rinse", "fix"]);
    }

    #[test]
    fn override_range_is_inclusive() {
        let o = TimeOverride::new(4, 6, 10.0);
        assert!(!o.contains(3));
        assert!(o.contains(4));
        assert!(o.contains(6));
        assert!(!o.contains(7));
    }
}
