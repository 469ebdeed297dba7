//! Error types for filter keyword conversions.

use thiserror::Error;

/// A specialized Result type for filter conversions.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors produced when a token cannot be converted into a filter type.
///
/// The line parsers never surface these to callers: an unrecognized token
/// simply means "this line is not a condition/style directive". They are
/// returned from the `FromStr` impls so tooling can report them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The token is not a condition keyword.
    #[error("unknown condition keyword: {keyword}")]
    UnknownKeyword {
        /// The unrecognized keyword.
        keyword: String,
    },

    /// The token is not a comparison operator.
    #[error("unknown operator: {operator}")]
    UnknownOperator {
        /// The unrecognized operator.
        operator: String,
    },

    /// The token is not a name from the effect palette.
    #[error("unknown effect color: {name}")]
    UnknownEffectColor {
        /// The unrecognized color name.
        name: String,
    },
}

impl FilterError {
    /// Creates an unknown keyword error.
    pub fn unknown_keyword(keyword: impl Into<String>) -> Self {
        FilterError::UnknownKeyword {
            keyword: keyword.into(),
        }
    }

    /// Creates an unknown operator error.
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        FilterError::UnknownOperator {
            operator: operator.into(),
        }
    }

    /// Creates an unknown effect color error.
    pub fn unknown_effect_color(name: impl Into<String>) -> Self {
        FilterError::UnknownEffectColor { name: name.into() }
    }
}
