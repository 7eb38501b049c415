//! Effective duration of a single process step for a given film count.
//!
//! Precedence, strictly in this order:
//!
//! 1. the first override whose range contains the film count;
//! 2. when the film count sits after one or more override ranges, the override whose
//!    range ended most recently;
//! 3. the first periodic rule, applied cumulatively to the base time;
//! 4. the base time.
//!
//! Film counts that precede every override range fall through to the rule, so an
//! override schedule never suppresses rule logic for earlier films.

use filmlab_schemas::{
    process::ProcessStep,
    rule::{PeriodicRule, TimeOverride},
};

/// Where a resolved duration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// An override range contains the film count.
    Override,
    /// The film count lies in a gap after an override range.
    OverrideFallback,
    /// The first periodic rule was applied to the base time.
    Rule,
    /// The unmodified base time.
    Base,
}

/// Resolves the effective duration in minutes of `step` for `film_count`.
///
/// A film count of 0 is treated as 1.
pub fn resolve(step: &ProcessStep, film_count: u32) -> f64 {
    resolve_with_source(step, film_count).0
}

/// Like [`resolve`], also reporting which branch produced the duration.
pub fn resolve_with_source(step: &ProcessStep, film_count: u32) -> (f64, TimeSource) {
    let film_count = film_count.max(1);

    if let Some(matching) = step.overrides.iter().find(|o| o.contains(film_count)) {
        return (matching.time, TimeSource::Override);
    }

    if let Some(previous) = latest_override_before(&step.overrides, film_count) {
        return (previous.time, TimeSource::OverrideFallback);
    }

    match step.first_rule() {
        Some(rule) => (apply_rule(step.base_time_minutes, rule, film_count), TimeSource::Rule),
        None => (step.base_time_minutes, TimeSource::Base),
    }
}

/// Resolved durations of `step` for every film count in `films`, in ascending order.
pub fn time_table(step: &ProcessStep, films: std::ops::RangeInclusive<u32>) -> Vec<(u32, f64)> {
    films.map(|n| (n, resolve(step, n))).collect()
}

/// The override with the greatest `film_count_max` strictly below `film_count`.
/// On equal maxima the earliest in iteration order wins.
fn latest_override_before(overrides: &[TimeOverride], film_count: u32) -> Option<&TimeOverride> {
    overrides
        .iter()
        .filter(|o| o.film_count_max < film_count)
        .fold(None, |best: Option<&TimeOverride>, o| match best {
            Some(b) if b.film_count_max >= o.film_count_max => Some(b),
            _ => Some(o),
        })
}

fn apply_rule(base_time_minutes: f64, rule: &PeriodicRule, film_count: u32) -> f64 {
    if rule.film_interval == 0 {
        return base_time_minutes;
    }
    let increments = (film_count - 1) / rule.film_interval;
    base_time_minutes + f64::from(increments) * rule.time_increment
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn step_with_rule() -> ProcessStep {
        ProcessStep::new("dev", 1, "Developer", 5.0).with_rule(PeriodicRule::new(3, 1.0))
    }

    #[test]
    fn base_time_without_rules_or_overrides() {
        let step = ProcessStep::new("fix", 1, "Fixer", 4.5);
        assert_eq!(resolve_with_source(&step, 1), (4.5, TimeSource::Base));
        assert_eq!(resolve(&step, 42), 4.5);
    }

    #[test]
    fn periodic_rule_adds_one_increment_per_interval() {
        let step = step_with_rule();
        let expected = [5.0, 5.0, 5.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0, 8.0, 8.0, 8.0];
        for (i, want) in expected.iter().enumerate() {
            let films = i as u32 + 1;
            assert_eq!(resolve(&step, films), *want, "film count {}", films);
        }
        assert_eq!(resolve_with_source(&step, 4).1, TimeSource::Rule);
    }

    #[test]
    fn override_wins_over_rule() {
        let step = step_with_rule().with_override(TimeOverride::new(4, 6, 10.0));
        assert_eq!(resolve_with_source(&step, 5), (10.0, TimeSource::Override));
    }

    #[test]
    fn gap_after_range_uses_most_recent_override() {
        let step = ProcessStep::new("dev", 1, "Developer", 99.0)
            .with_override(TimeOverride::new(1, 3, 2.0))
            .with_override(TimeOverride::new(7, 9, 4.0))
            .with_override(TimeOverride::new(15, 20, 6.0));

        assert_eq!(resolve_with_source(&step, 5), (2.0, TimeSource::OverrideFallback));
        assert_eq!(resolve(&step, 12), 4.0);
        assert_eq!(resolve(&step, 25), 6.0);
        assert_eq!(resolve_with_source(&step, 1), (2.0, TimeSource::Override));
    }

    #[test]
    fn gap_fallback_does_not_depend_on_storage_order() {
        let step = ProcessStep::new("dev", 1, "Developer", 99.0)
            .with_override(TimeOverride::new(15, 20, 6.0))
            .with_override(TimeOverride::new(1, 3, 2.0))
            .with_override(TimeOverride::new(7, 9, 4.0));

        assert_eq!(resolve(&step, 12), 4.0);
        assert_eq!(resolve(&step, 30), 6.0);
    }

    #[test]
    fn film_count_before_first_range_falls_through_to_rule() {
        let step = step_with_rule()
            .with_override(TimeOverride::new(4, 6, 3.0))
            .with_override(TimeOverride::new(8, 10, 5.0));
        assert_eq!(resolve_with_source(&step, 1), (5.0, TimeSource::Rule));

        let no_rule = ProcessStep::new("dev", 1, "Developer", 7.5)
            .with_override(TimeOverride::new(4, 6, 3.0));
        assert_eq!(resolve_with_source(&no_rule, 2), (7.5, TimeSource::Base));
    }

    #[test]
    fn film_count_zero_is_clamped_to_one() {
        let step = step_with_rule().with_override(TimeOverride::new(1, 2, 9.0));
        assert_eq!(resolve(&step, 0), resolve(&step, 1));
        assert_eq!(resolve(&step_with_rule(), 0), 5.0);
    }

    #[test]
    fn only_the_first_rule_is_used() {
        let step = step_with_rule().with_rule(PeriodicRule::new(1, 100.0));
        assert_eq!(resolve(&step, 4), 6.0);
    }

    #[test]
    fn first_matching_override_wins_when_ranges_overlap() {
        let step = ProcessStep::new("dev", 1, "Developer", 1.0)
            .with_override(TimeOverride::new(1, 10, 2.0))
            .with_override(TimeOverride::new(5, 6, 3.0));
        assert_eq!(resolve(&step, 5), 2.0);
    }

    #[test]
    fn equal_gap_maxima_prefer_the_first_override() {
        let step = ProcessStep::new("dev", 1, "Developer", 1.0)
            .with_override(TimeOverride::new(1, 3, 2.0))
            .with_override(TimeOverride::new(2, 3, 3.0));
        assert_eq!(resolve(&step, 8), 2.0);
    }

    #[test]
    fn zero_interval_rule_adds_nothing() {
        let step = ProcessStep::new("dev", 1, "Developer", 5.0).with_rule(PeriodicRule::new(0, 1.0));
        assert_eq!(resolve(&step, 50), 5.0);
    }

    #[test]
    fn time_table_covers_the_inclusive_range() {
        let table = time_table(&step_with_rule(), 2..=4);
        assert_eq!(table, vec![(2, 5.0), (3, 5.0), (4, 6.0)]);
    }

    proptest! {
        #[test]
        fn plain_step_always_resolves_to_base(base in 0.0f64..600.0, films in 1u32..10_000) {
            let step = ProcessStep::new("s", 1, "Step", base);
            prop_assert_eq!(resolve(&step, films), base);
        }

        #[test]
        fn rule_time_never_decreases_with_more_films(
            base in 0.0f64..60.0,
            interval in 1u32..20,
            increment in 0.0f64..5.0,
            films in 1u32..500,
        ) {
            let step = ProcessStep::new("s", 1, "Step", base)
                .with_rule(PeriodicRule::new(interval, increment));
            prop_assert!(resolve(&step, films + 1) >= resolve(&step, films));
        }
    }
}
