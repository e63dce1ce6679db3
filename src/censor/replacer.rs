// Applies censor decisions back onto the original text. Decisions arrive in
// descending begin order, so each splice leaves the offsets of every
// not-yet-applied decision valid.

use super::matcher::CensorDecision;

/// Rewrite each decided region of `text`.
///
/// With a fixed replacement string every region becomes that string. Without
/// one, the region becomes a bracketed uppercase rendering of the original
/// substring, used by diagnostic runs to visualize exactly what was flagged.
/// Text outside the decided regions is preserved byte-for-byte. A decision
/// repeating the previous decision's region is skipped: its replacement is
/// derived from the original substring and would be identical.
pub fn apply(text: &str, decisions: &[CensorDecision], replacement: Option<&str>) -> String {
    let mut result = text.to_string();
    let mut last_region = None;

    for decision in decisions {
        let region = (decision.begin, decision.end);
        if last_region == Some(region) {
            continue;
        }
        let rewritten = match replacement {
            Some(fixed) => fixed.to_string(),
            None => format!("<{}>", text[decision.begin..decision.end].to_uppercase()),
        };
        result.replace_range(decision.begin..decision.end, &rewritten);
        last_region = Some(region);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(begin: usize, end: usize, pattern: &str) -> CensorDecision {
        CensorDecision {
            begin,
            end,
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_fixed_replacement() {
        let text = "you are a fuck";
        let out = apply(text, &[decision(10, 14, "fuck")], Some("***"));
        assert_eq!(out, "you are a ***");
    }

    #[test]
    fn test_diagnostic_replacement() {
        let text = "you are a fuck";
        let out = apply(text, &[decision(10, 14, "fuck")], None);
        assert_eq!(out, "you are a <FUCK>");
    }

    #[test]
    fn test_back_to_front_keeps_offsets_valid() {
        let text = "fuck and fuck";
        let decisions = [decision(9, 13, "fuck"), decision(0, 4, "fuck")];
        assert_eq!(apply(text, &decisions, Some("***")), "*** and ***");
        assert_eq!(apply(text, &decisions, None), "<FUCK> and <FUCK>");
    }

    #[test]
    fn test_repeated_region_applied_once() {
        let text = "ass hole";
        let decisions = [decision(0, 3, "ass"), decision(0, 3, "ashole")];
        assert_eq!(apply(text, &decisions, Some("***")), "*** hole");
        assert_eq!(apply(text, &decisions, None), "<ASS> hole");
    }

    #[test]
    fn test_text_outside_regions_untouched() {
        let text = "a fuck b";
        let out = apply(text, &[decision(2, 6, "fuck")], Some("#"));
        assert_eq!(out, "a # b");
        assert_eq!(&out[..2], &text[..2]);
        assert_eq!(&out[out.len() - 2..], &text[text.len() - 2..]);
    }

    #[test]
    fn test_no_decisions_returns_input() {
        assert_eq!(apply("clean text", &[], Some("***")), "clean text");
    }

    #[test]
    fn test_multibyte_neighbors_preserved() {
        let text = "héy fuck ünd";
        let out = apply(text, &[decision(5, 9, "fuck")], Some("***"));
        assert_eq!(out, "héy *** ünd");
    }
}
