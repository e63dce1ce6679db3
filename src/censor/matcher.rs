// Sliding-window matching over the span list. Windows grow rightward from
// each start index and are tested for exact set membership, so an abusive
// token split across spans ("f u c k") and a multi-word idiom written as
// adjacent words are both caught, while substrings never match.

use std::collections::HashSet;

use super::tokenizer::WordSpan;

/// Window growth stops once the collapsed accumulator holds this many letters.
pub const WINDOW_LETTER_CAP: usize = 20;

/// A region to rewrite plus the pattern that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensorDecision {
    pub begin: usize,
    pub end: usize,
    pub pattern: String,
}

/// Scan all windows of consecutive spans against `abusive`.
///
/// Decisions come back rightmost start index first so the replacer can apply
/// them without invalidating earlier offsets; several decisions for one start
/// index (a short window and a longer one both matching) are ordered by
/// window end. The decision always marks the first span of its window, and
/// every start index is evaluated against the original spans independently of
/// hits found further right.
pub fn find_matches(spans: &[WordSpan], abusive: &HashSet<&str>) -> Vec<CensorDecision> {
    let mut decisions = Vec::new();

    for start in (0..spans.len()).rev() {
        let mut window = String::new();
        let mut window_raw = String::new();
        let mut letters = 0;

        for span in &spans[start..] {
            if letters >= WINDOW_LETTER_CAP {
                break;
            }
            window.push_str(&span.canonical);
            window_raw.push_str(&span.canonical_raw);
            letters += span.canonical.chars().count();

            let mut pattern = None;
            if abusive.contains(window.as_str()) {
                pattern = Some(window.clone());
            }
            if abusive.contains(window_raw.as_str()) {
                pattern = Some(window_raw.clone());
            }
            if let Some(pattern) = pattern {
                decisions.push(CensorDecision {
                    begin: spans[start].begin,
                    end: spans[start].end,
                    pattern,
                });
            }
        }
    }

    decisions
}
