use crate::error::FilmlabError;
use std::fmt;

/// The number of films already run through a kit, bounded to the range the
/// note editor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilmCount(u32);

impl FilmCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    pub fn new(value: i64) -> Result<Self, FilmlabError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(FilmlabError::FilmCountOutOfRange(value));
        }
        Ok(Self(value as u32))
    }

    /// Clamps any value into `MIN..=MAX`.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// One more film, saturating at `MAX`.
    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// One fewer film, saturating at `MIN`.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for FilmCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for FilmCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
