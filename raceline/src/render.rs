use crate::TypingComparator;

/// Which of the three display spans a piece of text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Confirmed correct; always a prefix of the reference text
    Correct,
    /// Covered by the current mistake
    Wrong,
    /// Not yet typed
    Untyped,
}

/// One span handed to a renderer callback
#[derive(Debug, Clone, Copy)]
pub struct SpanContext<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

/// Iterator over the span contexts of a comparator, in display order
pub struct SpanIterator<'a> {
    comparator: &'a TypingComparator,
    index: usize,
}

impl<'a> From<&'a TypingComparator> for SpanIterator<'a> {
    fn from(value: &'a TypingComparator) -> Self {
        Self {
            comparator: value,
            index: 0,
        }
    }
}

impl ExactSizeIterator for SpanIterator<'_> {}

impl std::iter::FusedIterator for SpanIterator<'_> {}

impl<'a> Iterator for SpanIterator<'a> {
    type Item = SpanContext<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let context = match self.index {
            0 => SpanContext {
                kind: SpanKind::Correct,
                text: self.comparator.correct_span(),
            },
            1 => SpanContext {
                kind: SpanKind::Wrong,
                text: self.comparator.wrong_span(),
            },
            2 => SpanContext {
                kind: SpanKind::Untyped,
                text: self.comparator.untyped_span(),
            },
            _ => return None,
        };

        self.index += 1;
        Some(context)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 3usize.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_iterator_order_and_size() {
        let mut comparator = TypingComparator::new("cat dog").unwrap();
        comparator.on_character_typed("cxt");

        let iter = comparator.span_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));

        let kinds: Vec<SpanKind> = comparator.span_iter().map(|span| span.kind).collect();
        assert_eq!(
            kinds,
            vec![SpanKind::Correct, SpanKind::Wrong, SpanKind::Untyped]
        );

        let texts: Vec<&str> = comparator.span_iter().map(|span| span.text).collect();
        assert_eq!(texts, vec!["c", "at", " dog"]);
    }

    #[test]
    fn test_render_spans_with_empty_spans() {
        let comparator = TypingComparator::new("cat dog").unwrap();

        // Nothing typed: the correct and wrong spans are empty but still
        // yielded so callers keep stable positions
        let rendered: Vec<(SpanKind, String)> = comparator
            .render_spans(|span| (span.kind, span.text.to_owned()));

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0], (SpanKind::Correct, String::new()));
        assert_eq!(rendered[1], (SpanKind::Wrong, String::new()));
        assert_eq!(rendered[2], (SpanKind::Untyped, "cat dog".to_owned()));
    }

    #[test]
    fn test_span_iterator_is_fused() {
        let comparator = TypingComparator::new("cat").unwrap();
        let mut iter = comparator.span_iter();

        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
