//! Step timing: per-step duration resolution, merging of parallel processes, and the
//! helpers the note editor builds on.

pub mod builder;
pub mod film_count;
pub mod format;
pub mod merger;
pub mod overrides;
pub mod resolver;
pub mod timeline;
