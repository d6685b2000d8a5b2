//! # Configuration Module - Runtime Behavior Settings
//!
//! Configuration options for customizing comparator behavior. The only
//! tunable today is the word boundary character that triggers a commit.
//!
//! ## Usage
//!
//! ```rust
//! use raceline::Configuration;
//!
//! // Use default configuration
//! let config = Configuration::default();
//! assert_eq!(config.word_boundary, ' ');
//!
//! // Custom configuration
//! let config = Configuration {
//!     word_boundary: '\n', // Commit on newlines instead
//! };
//! ```

/// Runtime configuration for the typing comparator
///
/// All settings have defaults matching conventional typeracer behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// The reference character that, when matched, commits the current word
    ///
    /// A commit permanently advances the confirmed-correct prefix and clears
    /// the in-progress word buffer. Only an exact match against this
    /// character commits; other whitespace is treated as an ordinary
    /// character.
    ///
    /// **Default**: `' '` (space)
    pub word_boundary: char,
}

impl Default for Configuration {
    fn default() -> Self {
        Self { word_boundary: ' ' }
    }
}
