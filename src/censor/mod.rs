// Engine facade tying the pipeline together:
// raw text -> tokenizer -> matcher -> replacer -> censored text.

use std::collections::HashSet;

use crate::error::CensorError;

pub mod charmap;
pub mod matcher;
pub mod replacer;
pub mod rules;
pub mod tokenizer;
pub mod wordlists;

// Re-export core types
pub use matcher::CensorDecision;
pub use rules::RuleViolation;
pub use tokenizer::{WordSpan, MAX_TEXT_CHARS};
pub use wordlists::Language;

/// Replacement string used when none is configured.
pub const DEFAULT_REPLACEMENT: &str = "***";

/// Profanity censor for one language.
///
/// The pattern set and replacement configuration are fixed at construction
/// and read-only afterwards. `censor` records the pattern behind the most
/// recent replacement, so an instance is single-owner; concurrent throughput
/// comes from one instance per worker, all sharing the same static character
/// map and pattern data.
pub struct Censor {
    language: Language,
    abusive: HashSet<&'static str>,
    replacement: Option<String>,
    last_pattern: Option<String>,
}

impl Censor {
    /// Censor with the default `***` replacement.
    pub fn new(language: Language) -> Self {
        Self::build(language, Some(DEFAULT_REPLACEMENT.to_string()))
    }

    /// Censor with a custom replacement string.
    pub fn with_replacement(language: Language, replacement: impl Into<String>) -> Self {
        Self::build(language, Some(replacement.into()))
    }

    /// Diagnostic censor: matched regions become `<UPPERCASE ORIGINAL>` so a
    /// reviewer can see exactly what was flagged.
    pub fn diagnostic(language: Language) -> Self {
        Self::build(language, None)
    }

    fn build(language: Language, replacement: Option<String>) -> Self {
        Self {
            language,
            abusive: language.patterns().iter().copied().collect(),
            replacement,
            last_pattern: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Replace every abusive region of `text`, leaving the rest untouched.
    ///
    /// Texts longer than [`MAX_TEXT_CHARS`] characters are rejected up front;
    /// the caller has to split or drop them.
    pub fn censor(&mut self, text: &str) -> Result<String, CensorError> {
        let spans = tokenizer::segment(text)?;
        let decisions = matcher::find_matches(&spans, &self.abusive);
        if let Some(last) = decisions.last() {
            self.last_pattern = Some(last.pattern.clone());
        }
        Ok(replacer::apply(text, &decisions, self.replacement.as_deref()))
    }

    /// The pattern behind the most recent replacement made by this instance.
    /// Kept across calls that match nothing; used when hunting false
    /// positives in the word lists.
    pub fn last_pattern(&self) -> Option<&str> {
        self.last_pattern.as_deref()
    }

    /// Validate this instance's pattern set. Empty result means valid.
    pub fn validate_rules(&self) -> Vec<RuleViolation> {
        rules::validate(self.language.patterns())
    }
}
