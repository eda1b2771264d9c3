//! Errors raised while configuring and running an evaluation

use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while building variables or datasets
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An evaluation plan was constructed with no reference dates
    #[error("Evaluation plan has no reference dates")]
    EmptyPlan,

    /// Two reference dates in a plan share a column suffix
    #[error("Duplicate column suffix in evaluation plan: {suffix:?}")]
    DuplicateSuffix { suffix: String },

    /// Two variables in a set share a column name
    #[error("Duplicate variable name in variable set: {name}")]
    DuplicateVariable { name: String },

    /// A plan and variable set together produce a colliding column name
    #[error("Duplicate dataset column: {column}")]
    DuplicateColumn { column: String },
}

impl EvalError {
    /// Create a duplicate suffix error
    pub fn duplicate_suffix(suffix: impl Into<String>) -> Self {
        Self::DuplicateSuffix {
            suffix: suffix.into(),
        }
    }

    /// Create a duplicate variable error
    pub fn duplicate_variable(name: impl Into<String>) -> Self {
        Self::DuplicateVariable { name: name.into() }
    }

    /// Create a duplicate column error
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }
}
