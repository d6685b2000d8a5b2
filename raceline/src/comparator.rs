//! # Comparator Module - Per-Keystroke Typing Comparison
//!
//! This module provides the core comparison logic of a typeracer-style
//! widget. On every input event the text typed for the current word is
//! re-scanned against the reference text, and the reference text is
//! partitioned into three contiguous spans: the prefix confirmed correct,
//! the stretch confirmed wrong, and the remaining untyped suffix.
//!
//! ## Comparison Flow
//!
#![doc = simple_mermaid::mermaid!("../diagrams/comparator_flow.mmd")]
//!
//! ## Key Behaviors
//!
//! - **Whole-word rescans**: the input collaborator hands over the entire
//!   accumulated text of the current word, not just the newest keystroke.
//!   Deletions therefore come for free: a shorter input is simply a shorter
//!   scan.
//! - **Word commits**: matching the word boundary character (space by
//!   default) commits the current word. The confirmed-correct prefix grows
//!   permanently and the in-progress word buffer is cleared; the scan stops
//!   there for that pass.
//! - **No catching up**: once a character in the current word is wrong,
//!   every later character of the same pass counts as wrong, even if it
//!   would match the reference. Correctness tracking resumes only when the
//!   input shrinks back past the error.
//! - **Total over all inputs**: typing past the end of the reference text
//!   never matches and never panics.
//!
//! ## Usage Example
//!
//! ```rust
//! use raceline::{TextProvider, TypingComparator};
//!
//! let provider = TextProvider::new("The only thing").unwrap();
//! let mut comparator = TypingComparator::from_provider(&provider);
//!
//! comparator.on_character_typed("The");
//! assert_eq!(comparator.spans(), ("The", "", " only thing"));
//!
//! // The trailing space commits the word
//! comparator.on_character_typed("The ");
//! assert_eq!(comparator.spans(), ("The ", "", "only thing"));
//! assert_eq!(comparator.typed_prefix(), "The ");
//! assert_eq!(comparator.current_input(), "");
//! ```

use web_time::Duration;

use crate::render::{SpanContext, SpanIterator};
use crate::{Accuracy, Configuration, Progress, SessionStats, TextProvider, Wpm, minutes};

/// Stateful per-session comparator between typed input and a reference text
///
/// Holds the session state of one typing session: the committed-correct
/// prefix, the in-progress word buffer, and the derived span partition of
/// the reference text. The reference text is read once at construction and
/// never consulted from the provider again.
///
/// # Span Partition
///
/// After every pass the three spans are contiguous, in order, and cover the
/// reference text exactly:
///
/// ```text
/// Reference: [c][a][t][ ][d][o][g]
/// Spans:     [-correct-][wrong][untyped]
/// ```
///
/// Some spans may be empty; their total length always equals the text
/// length, and the correct span is always a prefix of the reference text.
///
/// # Thread Safety
///
/// The comparator is not synchronized. Each session should be driven from a
/// single thread; separate sessions own their state exclusively and can run
/// on different threads.
#[derive(Debug, Clone)]
pub struct TypingComparator {
    /// The reference text, owned for span slicing
    text: String,
    /// The reference text as characters, for position-wise comparison
    chars: Vec<char>,
    /// Byte offset of every character plus the text end, for `&str` slices
    byte_offsets: Vec<usize>,
    /// Configuration for the word boundary character
    config: Configuration,

    /// Committed-correct prefix; grows only on word commits
    typed_prefix: String,
    /// Length of `typed_prefix` in characters
    typed_prefix_len: usize,
    /// The entire text typed for the word currently being attempted
    current_input: Vec<char>,

    /// Characters of `current_input` that matched, up to the first error
    correct_count: usize,
    /// Characters of `current_input` counted wrong in the last pass
    wrong_count: usize,

    /// End of the correct span, in characters (clamped to the text length)
    correct_end: usize,
    /// End of the wrong span, in characters (clamped to the text length)
    wrong_end: usize,

    /// Session timing and pass counters
    stats: SessionStats,
}

impl TypingComparator {
    /// Create a comparator over the given reference text
    ///
    /// The session starts with nothing typed: the whole text is in the
    /// untyped span.
    ///
    /// # Returns
    ///
    /// `None` if the text is empty, otherwise the comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::TypingComparator;
    ///
    /// let comparator = TypingComparator::new("cat dog").unwrap();
    /// assert_eq!(comparator.spans(), ("", "", "cat dog"));
    /// assert_eq!(comparator.text_len(), 7);
    ///
    /// assert!(TypingComparator::new("").is_none());
    /// ```
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut byte_offsets: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
        byte_offsets.push(text.len());

        Some(Self {
            text: text.to_owned(),
            chars,
            byte_offsets,
            config: Configuration::default(),
            typed_prefix: String::new(),
            typed_prefix_len: 0,
            current_input: vec![],
            correct_count: 0,
            wrong_count: 0,
            correct_end: 0,
            wrong_end: 0,
            stats: SessionStats::new(),
        })
    }

    /// Create a comparator over a provider's reference text
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::{TextProvider, TypingComparator};
    ///
    /// let provider = TextProvider::default();
    /// let comparator = TypingComparator::from_provider(&provider);
    /// assert_eq!(comparator.untyped_span(), provider.text());
    /// ```
    pub fn from_provider(provider: &TextProvider) -> Self {
        // Safety: a provider can only be constructed over non-empty text
        Self::new(provider.text()).unwrap()
    }

    /// Configure the comparator with custom settings (builder pattern)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::{Configuration, TypingComparator};
    ///
    /// let comparator = TypingComparator::new("one\ntwo")
    ///     .unwrap()
    ///     .with_configuration(Configuration { word_boundary: '\n' });
    /// ```
    pub fn with_configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// Process an input event with the accumulated text of the current word
    ///
    /// `current_word` is the entirety of what has been typed for the word
    /// currently being attempted (the value of the input field), not just
    /// the newest character. Each call rescans it from position 0 against
    /// the reference text and recomputes the span partition.
    ///
    /// An empty `current_word` is a valid no-op pass: counters go to zero
    /// and the spans fall back to the committed prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::TypingComparator;
    ///
    /// let mut comparator = TypingComparator::new("cat dog").unwrap();
    ///
    /// comparator.on_character_typed("cxt");
    /// assert_eq!(comparator.correct_count(), 1);
    /// assert_eq!(comparator.wrong_count(), 2);
    /// assert_eq!(comparator.spans(), ("c", "at", " dog"));
    /// ```
    pub fn on_character_typed(&mut self, current_word: &str) {
        self.current_input.clear();
        self.current_input.extend(current_word.chars());
        self.run_pass();
    }

    /// Append one character to the current word and rescan
    ///
    /// Convenience for input collaborators that deliver single keystrokes
    /// instead of whole field values.
    pub fn push_char(&mut self, char: char) {
        self.current_input.push(char);
        self.run_pass();
    }

    /// Remove the last character of the current word and rescan
    ///
    /// Does nothing beyond a no-op pass when the current word is empty;
    /// committed words are never un-committed.
    pub fn pop_char(&mut self) {
        self.current_input.pop();
        self.run_pass();
    }

    /// Scan the current word against the reference text and update spans
    fn run_pass(&mut self) {
        let had_input = !self.current_input.is_empty();
        let start = self.typed_prefix_len;

        self.correct_count = 0;
        self.wrong_count = 0;

        for index in 0..self.current_input.len() {
            let typed = self.current_input[index];
            // Out of range reference positions never match
            let expected = self.chars.get(start + index).copied();

            if self.wrong_count == 0 && expected == Some(typed) {
                self.correct_count += 1;

                if typed == self.config.word_boundary {
                    self.commit_current_word();
                    break;
                }
            } else {
                self.wrong_count += 1;
            }
        }

        self.recompute_spans();

        if had_input {
            self.stats.record_pass(self.wrong_count > 0);

            if self.is_complete() {
                self.stats.mark_completed();
            }
        }
    }

    /// Commit the current word into the confirmed-correct prefix
    ///
    /// Every character scanned so far has matched, ending on the word
    /// boundary. The entirety of the current word moves into the prefix and
    /// the in-progress buffer empties, which also ends the scan for this
    /// pass.
    fn commit_current_word(&mut self) {
        self.typed_prefix.extend(self.current_input.iter());
        self.typed_prefix_len += self.current_input.len();
        self.current_input.clear();

        // The committed characters are represented by the prefix from here
        // on; counting them again would double the correct span
        self.correct_count = 0;
    }

    /// Recompute the span boundaries from the prefix and pass counters
    fn recompute_spans(&mut self) {
        let len = self.chars.len();
        let committed = self.typed_prefix_len + self.correct_count;

        self.correct_end = committed.min(len);
        self.wrong_end = (committed + self.wrong_count).min(len);
    }

    /// The slice of the reference text confirmed correct so far
    ///
    /// Always a prefix of the reference text.
    pub fn correct_span(&self) -> &str {
        &self.text[..self.byte_offsets[self.correct_end]]
    }

    /// The slice of the reference text covered by the current mistake
    pub fn wrong_span(&self) -> &str {
        &self.text[self.byte_offsets[self.correct_end]..self.byte_offsets[self.wrong_end]]
    }

    /// The slice of the reference text not yet typed
    pub fn untyped_span(&self) -> &str {
        &self.text[self.byte_offsets[self.wrong_end]..]
    }

    /// All three spans in display order: correct, wrong, untyped
    ///
    /// The spans are contiguous and together cover the reference text
    /// exactly; any of them may be empty.
    pub fn spans(&self) -> (&str, &str, &str) {
        (self.correct_span(), self.wrong_span(), self.untyped_span())
    }

    /// Render the three spans using a generic renderer function
    ///
    /// Applies the callback to each span in display order and collects the
    /// results. Empty spans are still passed through so callers keep stable
    /// positions; filter them in the callback if undesired.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::{SpanKind, TypingComparator};
    ///
    /// let mut comparator = TypingComparator::new("cat dog").unwrap();
    /// comparator.on_character_typed("cxt");
    ///
    /// let rendered: Vec<String> = comparator.render_spans(|span| {
    ///     let tag = match span.kind {
    ///         SpanKind::Correct => "ok",
    ///         SpanKind::Wrong => "err",
    ///         SpanKind::Untyped => "rest",
    ///     };
    ///     format!("{}:{}", tag, span.text)
    /// });
    ///
    /// assert_eq!(rendered, ["ok:c", "err:at", "rest: dog"]);
    /// ```
    pub fn render_spans<S, F: FnMut(SpanContext) -> S>(&self, renderer: F) -> Vec<S> {
        self.span_iter().map(renderer).collect()
    }

    /// Create an iterator over the span contexts in display order
    pub fn span_iter(&self) -> SpanIterator<'_> {
        self.into()
    }

    /// The full reference text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The length of the reference text in characters
    pub fn text_len(&self) -> usize {
        self.chars.len()
    }

    /// The committed-correct prefix of the session
    pub fn typed_prefix(&self) -> &str {
        &self.typed_prefix
    }

    /// The text typed for the word currently being attempted
    pub fn current_input(&self) -> String {
        self.current_input.iter().collect()
    }

    /// Matching characters of the current word, up to the first error
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Characters of the current word counted wrong in the last pass
    pub fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    /// Check if the whole reference text has been typed correctly
    ///
    /// True when the confirmed-correct boundary reaches the end of the text
    /// with no pending mistake. The final word completes the session without
    /// a trailing boundary character.
    pub fn is_complete(&self) -> bool {
        self.correct_end == self.chars.len() && self.wrong_count == 0
    }

    /// How much of the reference text is confirmed correct, as a percentage
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::TypingComparator;
    ///
    /// let mut comparator = TypingComparator::new("cat dog").unwrap();
    /// assert_eq!(comparator.progress().0, 0.0);
    ///
    /// comparator.on_character_typed("cat ");
    /// assert!(comparator.progress().0 > 50.0);
    /// ```
    pub fn progress(&self) -> Progress {
        Progress::calculate(self.correct_end, self.chars.len())
    }

    /// Time elapsed since the first input pass
    ///
    /// Stops increasing once the session completes. `None` before any input
    /// has been processed.
    pub fn elapsed(&self) -> Option<Duration> {
        self.stats.elapsed()
    }

    /// Current typing speed over the confirmed-correct characters
    ///
    /// `None` before any input has been processed.
    pub fn wpm(&self) -> Option<Wpm> {
        let elapsed = self.stats.elapsed()?;

        Some(Wpm::calculate(
            self.correct_end,
            minutes(elapsed.as_secs_f64()),
        ))
    }

    /// Share of input passes that ended without a pending mistake
    ///
    /// `None` before any input has been processed.
    pub fn accuracy(&self) -> Option<Accuracy> {
        self.stats.accuracy()
    }

    /// Session timing and pass counters
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
