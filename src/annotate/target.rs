//! Locating the word to annotate.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{LemmatagError, Result};

/// Where the operator is pointing in the text. Offsets are in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordTarget {
    /// An explicit selection. An empty selection behaves like a cursor at its
    /// start.
    Selection(Range<usize>),
    /// A caret position.
    Cursor(usize),
}

/// The word picked out of the text and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub range: Range<usize>,
    pub text: String,
}

/// Find the word designated by `target`.
///
/// A non-empty selection is taken verbatim. Otherwise the Unicode word
/// (UAX #29) containing the cursor is used, or the one ending right at it.
/// Returns `Ok(None)` when there is no word there.
pub fn extract_word(text: &str, target: &WordTarget) -> Result<Option<WordSpan>> {
    let cursor = match target {
        WordTarget::Selection(range) => {
            check_offset(text, range.start)?;
            check_offset(text, range.end)?;
            if range.start > range.end {
                return Err(LemmatagError::invalid_argument(format!(
                    "selection start {} is after its end {}",
                    range.start, range.end
                )));
            }
            if range.start < range.end {
                return Ok(Some(WordSpan {
                    range: range.clone(),
                    text: text[range.clone()].to_string(),
                }));
            }
            range.start
        }
        WordTarget::Cursor(offset) => {
            check_offset(text, *offset)?;
            *offset
        }
    };

    Ok(word_at(text, cursor).map(|range| WordSpan {
        text: text[range.clone()].to_string(),
        range,
    }))
}

fn word_at(text: &str, cursor: usize) -> Option<Range<usize>> {
    let mut ending_here = None;

    for (start, segment) in text.split_word_bound_indices() {
        if start > cursor {
            break;
        }
        if !is_word(segment) {
            continue;
        }

        let end = start + segment.len();
        if cursor < end {
            return Some(start..end);
        }
        if cursor == end {
            ending_here = Some(start..end);
        }
    }

    ending_here
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn check_offset(text: &str, offset: usize) -> Result<()> {
    if offset > text.len() || !text.is_char_boundary(offset) {
        return Err(LemmatagError::invalid_argument(format!(
            "offset {offset} is not a character boundary of the text"
        )));
    }
    Ok(())
}

/// Convert a character index into a byte offset. The index may equal the
/// character count, which points past the last character.
pub fn byte_offset(text: &str, char_index: usize) -> Result<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(char_index)
        .ok_or_else(|| {
            LemmatagError::invalid_argument(format!(
                "character index {char_index} is past the end of the text"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, target: WordTarget) -> Option<String> {
        extract_word(text, &target).unwrap().map(|span| span.text)
    }

    #[test]
    fn test_selection_is_taken_verbatim() {
        let text = "un lungo inarcamento";
        let span = extract_word(text, &WordTarget::Selection(3..8))
            .unwrap()
            .unwrap();

        assert_eq!(span.text, "lungo");
        assert_eq!(span.range, 3..8);
    }

    #[test]
    fn test_cursor_inside_word() {
        assert_eq!(
            word("le metafore ardite", WordTarget::Cursor(5)).as_deref(),
            Some("metafore")
        );
    }

    #[test]
    fn test_cursor_at_word_edges() {
        let text = "verso libero";
        assert_eq!(word(text, WordTarget::Cursor(0)).as_deref(), Some("verso"));
        // Right after the last letter of "verso"
        assert_eq!(word(text, WordTarget::Cursor(5)).as_deref(), Some("verso"));
        assert_eq!(
            word(text, WordTarget::Cursor(text.len())).as_deref(),
            Some("libero")
        );
    }

    #[test]
    fn test_empty_selection_falls_back_to_cursor() {
        assert_eq!(
            word("slittare via", WordTarget::Selection(2..2)).as_deref(),
            Some("slittare")
        );
    }

    #[test]
    fn test_no_word_at_cursor() {
        assert_eq!(word("a  ,  b", WordTarget::Cursor(3)), None);
        assert_eq!(word("", WordTarget::Cursor(0)), None);
        assert_eq!(word("...", WordTarget::Cursor(1)), None);
    }

    #[test]
    fn test_non_ascii_words() {
        let text = "la città è lì";
        let cursor = byte_offset(text, 5).unwrap();
        assert_eq!(word(text, WordTarget::Cursor(cursor)).as_deref(), Some("città"));
    }

    #[test]
    fn test_invalid_offsets() {
        let text = "città";
        assert!(extract_word(text, &WordTarget::Cursor(5)).is_err()); // inside "à"
        assert!(extract_word(text, &WordTarget::Cursor(99)).is_err());
        assert!(extract_word(text, &WordTarget::Selection(3..1)).is_err());
    }

    #[test]
    fn test_byte_offset() {
        let text = "città ok";
        assert_eq!(byte_offset(text, 0).unwrap(), 0);
        assert_eq!(byte_offset(text, 5).unwrap(), 6);
        assert_eq!(byte_offset(text, 8).unwrap(), text.len());
        assert!(byte_offset(text, 9).is_err());
    }
}
