use serde::{Deserialize, Serialize};

/// "Every `film_interval` films, add `time_increment` minutes", applied cumulatively
/// on top of a step's base time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PeriodicRule {
    /// Number of films per increment. Expected to be at least 1.
    pub film_interval: u32,
    /// Minutes added for every completed interval.
    pub time_increment: f64,
}

/// An absolute duration for an inclusive film-count range.
///
/// When the film count falls inside `film_count_min..=film_count_max`, `time` is used
/// verbatim, ignoring the base time and any rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeOverride {
    pub film_count_min: u32,
    pub film_count_max: u32,
    pub time: f64,
}

impl PeriodicRule {
    pub fn new(film_interval: u32, time_increment: f64) -> Self {
        Self {
            film_interval,
            time_increment,
        }
    }
}

impl TimeOverride {
    pub fn new(film_count_min: u32, film_count_max: u32, time: f64) -> Self {
        Self {
            film_count_min,
            film_count_max,
            time,
        }
    }

    /// Whether `film_count` lies inside the inclusive range.
    pub fn contains(&self, film_count: u32) -> bool {
        self.film_count_min <= film_count && film_count <= self.film_count_max
    }
}
