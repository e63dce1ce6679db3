pub mod censor;
pub mod error;
pub mod harness;

// Re-export main types for convenient access
pub use censor::{
    Censor, CensorDecision, Language, RuleViolation, WordSpan, DEFAULT_REPLACEMENT,
    MAX_TEXT_CHARS,
};
pub use error::CensorError;

// Re-export batch harness utilities
pub use harness::{
    sweep_abusive_file, sweep_clean_file, sweep_clean_with_prepositions, RunStats, SweepConfig,
    SweepFailure, PREPOSITIONS_EN,
};
