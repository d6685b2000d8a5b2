mod comparator;
mod config;
mod math;
mod provider;
mod render;
mod stats;

pub use comparator::*;
pub use config::*;
pub use math::*;
pub use provider::*;
pub use render::*;
pub use stats::*;

const AVERAGE_WORD_LENGTH: usize = 5;

// Types for more general type-safety
type Minutes = f64;
type Float = f64;

// Get the minutes elapsed from a timestamp
pub(crate) fn minutes(seconds: f64) -> Minutes {
    seconds / 60.0
}
