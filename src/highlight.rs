use std::iter;

use crate::data_models::HighlightRange;
use crate::dom;

/// A run of text, either left alone or wrapped in a highlight marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlighted(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Highlighted(s) => s,
        }
    }
}

pub const HIGHLIGHT_TAG: &str = "mark";
pub const HIGHLIGHT_CLASS: &str = "stork-highlight";

/// Splits `text` at the given char ranges.
///
/// Ranges are expected sorted and disjoint. Ends past the text are clamped to
/// its length, and a range starting inside the previous one is clamped to
/// start where that one ended. Ranges that are empty after clamping are dropped.
pub fn highlight_segments(text: &str, ranges: &[HighlightRange]) -> Vec<Segment> {
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(iter::once(text.len()))
        .collect();
    let len = offsets.len() - 1;

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0usize;
    for range in ranges {
        let end = range.end.min(len);
        let beginning = range.beginning.max(cursor).min(end);
        if beginning == end {
            continue;
        }
        if beginning > cursor {
            segments.push(Segment::Plain(text[offsets[cursor]..offsets[beginning]].to_string()));
        }
        segments.push(Segment::Highlighted(
            text[offsets[beginning]..offsets[end]].to_string(),
        ));
        cursor = end;
    }
    if cursor < len {
        segments.push(Segment::Plain(text[offsets[cursor]..].to_string()));
    }
    segments
}

/// Returns `text` as HTML with each range wrapped in
/// `<mark class="stork-highlight">`. All text is escaped.
pub fn highlight(text: &str, ranges: &[HighlightRange]) -> String {
    let holder = dom::element("span", &[]);
    append_highlighted(&holder, text, ranges);
    dom::inner_html(&holder)
}

/// Appends the highlighted form of `text` to `parent` as text and `<mark>` nodes.
pub fn append_highlighted(parent: &dom::Handle, text: &str, ranges: &[HighlightRange]) {
    for segment in highlight_segments(text, ranges) {
        match segment {
            Segment::Plain(s) => dom::append_text(parent, &s),
            Segment::Highlighted(s) => {
                let mark = dom::element(HIGHLIGHT_TAG, &[("class", HIGHLIGHT_CLASS)]);
                dom::append_text(&mark, &s);
                dom::append(parent, mark);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(beginning: usize, end: usize) -> HighlightRange {
        HighlightRange::new(beginning, end)
    }

    #[test]
    fn test_no_ranges_is_single_plain_segment() {
        assert_eq!(
            highlight_segments("Hello", &[]),
            vec![Segment::Plain("Hello".to_string())]
        );
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(highlight_segments("", &[]).is_empty());
        assert!(highlight_segments("", &[r(0, 3)]).is_empty());
    }

    #[test]
    fn test_prefix_range() {
        assert_eq!(
            highlight_segments("Hello", &[r(0, 2)]),
            vec![
                Segment::Highlighted("He".to_string()),
                Segment::Plain("llo".to_string()),
            ]
        );
    }

    #[test]
    fn test_multiple_ranges() {
        let segments = highlight_segments("foo bar baz", &[r(0, 3), r(8, 11)]);
        assert_eq!(
            segments,
            vec![
                Segment::Highlighted("foo".to_string()),
                Segment::Plain(" bar ".to_string()),
                Segment::Highlighted("baz".to_string()),
            ]
        );
    }

    #[test]
    fn test_end_past_text_is_clamped() {
        assert_eq!(
            highlight_segments("abc", &[r(1, 99)]),
            vec![
                Segment::Plain("a".to_string()),
                Segment::Highlighted("bc".to_string()),
            ]
        );
    }

    #[test]
    fn test_overlap_is_clamped_forward() {
        let segments = highlight_segments("abcdef", &[r(0, 3), r(2, 5)]);
        assert_eq!(
            segments,
            vec![
                Segment::Highlighted("abc".to_string()),
                Segment::Highlighted("de".to_string()),
                Segment::Plain("f".to_string()),
            ]
        );
    }

    #[test]
    fn test_indices_are_chars() {
        let segments = highlight_segments("naïve café", &[r(6, 10)]);
        assert_eq!(segments[1], Segment::Highlighted("café".to_string()));
    }

    #[test]
    fn test_highlight_html() {
        assert_eq!(
            highlight("Hello", &[r(0, 2)]),
            r#"<mark class="stork-highlight">He</mark>llo"#
        );
    }

    #[test]
    fn test_highlight_escapes_text() {
        assert_eq!(
            highlight("<b>&</b>", &[r(3, 4)]),
            r#"&lt;b&gt;<mark class="stork-highlight">&amp;</mark>&lt;/b&gt;"#
        );
    }
}
