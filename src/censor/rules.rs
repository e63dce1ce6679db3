// Static consistency checks for pattern lists. Matching always runs against
// canonicalized text, so a pattern written in non-canonical form can never
// fire; this gate catches that before deployment, never at request time.

use std::collections::HashSet;

use thiserror::Error;

use super::charmap;
use super::wordlists::Language;

/// A single problem found in a pattern list. The validator aggregates these
/// into a list instead of failing on the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("\"{pattern}\": pattern is shorter than two characters")]
    TooShort { pattern: String },

    #[error("\"{pattern}\": pattern contains a space")]
    ContainsSpace { pattern: String },

    #[error("\"{pattern}\": character '{ch}' is not canonical (normalizes to '{mapped}')")]
    NotCanonical {
        pattern: String,
        ch: char,
        mapped: char,
    },

    #[error("\"{pattern}\": duplicate entry")]
    Duplicate { pattern: String },
}

/// Check one pattern list. Returns every violation found; an empty list
/// means the patterns are valid.
pub fn validate(patterns: &[&str]) -> Vec<RuleViolation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for &pattern in patterns {
        if pattern.chars().count() < 2 {
            violations.push(RuleViolation::TooShort {
                pattern: pattern.to_string(),
            });
        }

        for ch in pattern.chars() {
            if ch == ' ' {
                violations.push(RuleViolation::ContainsSpace {
                    pattern: pattern.to_string(),
                });
            }
            if let Some(mapped) = charmap::normalize(ch) {
                if mapped != ch {
                    violations.push(RuleViolation::NotCanonical {
                        pattern: pattern.to_string(),
                        ch,
                        mapped,
                    });
                }
            }
        }

        if !seen.insert(pattern) {
            violations.push(RuleViolation::Duplicate {
                pattern: pattern.to_string(),
            });
        }
    }

    violations
}

/// Check the built-in pattern set of every language in one pass.
pub fn validate_all() -> Vec<RuleViolation> {
    Language::ALL
        .iter()
        .flat_map(|lang| validate(lang.patterns()))
        .collect()
}
