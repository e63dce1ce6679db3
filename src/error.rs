use thiserror::Error;

/// Errors a censor call can return. Matching quality problems (false
/// positives or missed words) are data issues in the word lists, not errors;
/// they surface through the last-pattern diagnostic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CensorError {
    #[error("text is too long: {length} characters exceeds the {max} character limit")]
    TextTooLong { length: usize, max: usize },
}
