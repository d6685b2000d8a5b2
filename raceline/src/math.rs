use crate::{AVERAGE_WORD_LENGTH, Float, Minutes};

/// Words Per Minute
///
/// Speed over the confirmed-correct characters, using the conventional
/// five-characters-per-word figure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Wpm(pub Float);

impl Wpm {
    /// Calculate Words Per Minute
    ///
    /// * `committed_chars` - How many characters are confirmed correct
    /// * `minutes` - How many minutes have gone by
    pub fn calculate(committed_chars: usize, minutes: Minutes) -> Self {
        if minutes <= 0.0 {
            return Self(0.0);
        }

        let words = committed_chars as Float / AVERAGE_WORD_LENGTH as Float;

        Self(words / minutes)
    }
}

/// Typing accuracy
///
/// The share of comparison passes that ended without a pending mistake,
/// as a percentage between 0.0 and 100.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Accuracy(pub Float);

impl Accuracy {
    /// Calculate typing accuracy
    ///
    /// * `clean_passes` - Passes that ended without a pending mistake
    /// * `total_passes` - All passes recorded
    pub fn calculate(clean_passes: usize, total_passes: usize) -> Self {
        if total_passes == 0 {
            return Self(100.0);
        }

        Self((clean_passes as Float / total_passes as Float) * 100.0)
    }
}

/// Session progress
///
/// How much of the reference text is confirmed correct, as a percentage
/// between 0.0 and 100.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(pub Float);

impl Progress {
    /// Calculate session progress
    ///
    /// * `committed_chars` - How many characters are confirmed correct
    /// * `text_len` - The length of the reference text in characters
    pub fn calculate(committed_chars: usize, text_len: usize) -> Self {
        if text_len == 0 {
            return Self(0.0);
        }

        Self((committed_chars as Float / text_len as Float) * 100.0)
    }
}
