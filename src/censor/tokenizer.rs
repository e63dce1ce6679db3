// Single-pass segmentation of raw text into word spans. Each span carries two
// canonical renderings so the matcher can catch both pre-collapsed patterns
// ("fuuuck" -> "fuck") and patterns that legitimately contain double letters
// ("ass" stays "ass" in the raw form).

use super::charmap;
use crate::error::CensorError;

/// Hard cap on input size, enforced before scanning begins.
pub const MAX_TEXT_CHARS: usize = 0xFFFF;

/// A maximal run of mappable characters in the source text.
///
/// `begin`/`end` are byte offsets into the source, always on character
/// boundaries. `canonical` has consecutive duplicate letters collapsed;
/// `canonical_raw` preserves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub begin: usize,
    pub end: usize,
    pub canonical: String,
    pub canonical_raw: String,
}

/// Split `text` into ordered, non-overlapping word spans.
///
/// The scan classifies every character through the shared character map. A
/// word ends at the first unmappable character or at end of text, and is only
/// emitted when it contains at least one letter. Duplicate collapsing compares
/// against the last letter emitted into `canonical`, not the last source
/// character, so "fUu4ck" collapses the u-run even across case and lookalike
/// substitutions that map to the same letter.
pub fn segment(text: &str) -> Result<Vec<WordSpan>, CensorError> {
    let length = text.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(CensorError::TextTooLong {
            length,
            max: MAX_TEXT_CHARS,
        });
    }

    let mut spans = Vec::new();
    let mut canonical = String::new();
    let mut canonical_raw = String::new();
    let mut begin = 0;
    let mut last_emitted = None;

    for (index, ch) in text.char_indices() {
        match charmap::normalize(ch) {
            Some(letter) => {
                if canonical_raw.is_empty() {
                    begin = index;
                }
                canonical_raw.push(letter);
                if last_emitted != Some(letter) {
                    canonical.push(letter);
                    last_emitted = Some(letter);
                }
            }
            None => {
                if !canonical.is_empty() {
                    spans.push(WordSpan {
                        begin,
                        end: index,
                        canonical: std::mem::take(&mut canonical),
                        canonical_raw: std::mem::take(&mut canonical_raw),
                    });
                    last_emitted = None;
                }
            }
        }
    }

    if !canonical.is_empty() {
        spans.push(WordSpan {
            begin,
            end: text.len(),
            canonical,
            canonical_raw,
        });
    }

    Ok(spans)
}
