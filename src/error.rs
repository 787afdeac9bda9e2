use thiserror::Error;

use crate::atom::{Symbol, Variable};

#[derive(Error, Debug)]
pub enum DatalogError {
    #[error("Invalid rule {rule}: variable {missing_variable} in head is missing from body and/or constraints")]
    InvalidRule { rule: String, missing_variable: Variable },
    #[error("Non-terminating rule set: no fixpoint after {iterations} iterations")]
    NonTermination { iterations: usize },
    #[error("Fact is not ground: {predicate}")]
    NonGroundFact { predicate: String },
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(Symbol),
    #[error("Config error: {0}")]
    Config(String),
}

impl DatalogError {
    /// The policy itself can never be evaluated correctly.
    pub fn is_malformed_policy(&self) -> bool {
        matches!(
            self,
            Self::InvalidRule { .. } | Self::NonGroundFact { .. } | Self::InvalidPattern { .. }
        )
    }
    /// Evaluation gave up; the caller must treat this as a failed check,
    /// never as "nothing was derived".
    pub fn is_policy_failure(&self) -> bool {
        matches!(self, Self::NonTermination { .. })
    }
}

pub type Result<T> = std::result::Result<T, DatalogError>;

// Helper conversions
impl From<config::ConfigError> for DatalogError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
