//! Error types for truth-table construction
//!
//! This module defines [`TableError`], which covers every way a single input
//! line can be rejected: bad characters, limit violations, malformed syntax.
//!
//! All of these are line-local. The caller reports them and moves on to the
//! next line; none of them should end the run.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::{LexError, Token};
use crate::parser::parse::ParseError;
use std::fmt;

/// Errors that can occur while building a truth table for one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Character outside the accepted alphabet
    InvalidCharacter { ch: char, location: SourceLocation },

    /// More distinct variables than the table supports
    TooManyVariables { count: usize, max: usize },

    /// More connective occurrences than the table supports
    TooManyOperators { count: usize, max: usize },

    /// A variable was required; `None` means the input ran out
    ExpectedVariable { location: Option<SourceLocation> },

    /// Tokens left over after a complete expression
    UnexpectedToken {
        token: Token,
        location: SourceLocation,
    },

    /// Evaluation reached a variable the assignment does not cover
    UnboundVariable { name: char },
}

impl TableError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            TableError::InvalidCharacter { location, .. } => Some(location),
            TableError::ExpectedVariable { location } => location.as_ref(),
            TableError::UnexpectedToken { location, .. } => Some(location),
            TableError::TooManyVariables { .. } => None,
            TableError::TooManyOperators { .. } => None,
            TableError::UnboundVariable { .. } => None,
        }
    }

    /// Pipeline stage that produced the error, used as a report prefix
    pub fn stage(&self) -> &'static str {
        match self {
            TableError::InvalidCharacter { .. } => "Tokenization",
            TableError::TooManyVariables { .. } | TableError::TooManyOperators { .. } => {
                "Validation"
            }
            TableError::ExpectedVariable { .. } | TableError::UnexpectedToken { .. } => "Parsing",
            TableError::UnboundVariable { .. } => "Evaluation",
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidCharacter { ch, location } => {
                write!(
                    f,
                    "Invalid character '{}' at position {}",
                    ch,
                    location.position()
                )
            }
            TableError::TooManyVariables { count, max } => {
                write!(f, "Too many variables: {} (maximum is {})", count, max)
            }
            TableError::TooManyOperators { count, max } => {
                write!(f, "Too many operators: {} (maximum is {})", count, max)
            }
            TableError::ExpectedVariable {
                location: Some(location),
            } => {
                write!(f, "Variable expected at position {}", location.position())
            }
            TableError::ExpectedVariable { location: None } => {
                write!(f, "Variable expected at end of input")
            }
            TableError::UnexpectedToken { token, location } => {
                write!(f, "Unexpected {} at position {}", token, location.position())
            }
            TableError::UnboundVariable { name } => {
                write!(f, "No value assigned to variable '{}'", name)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<LexError> for TableError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::InvalidCharacter { ch, location } => {
                TableError::InvalidCharacter { ch, location }
            }
        }
    }
}

impl From<ParseError> for TableError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ExpectedVariable { location } => TableError::ExpectedVariable { location },
            ParseError::UnexpectedToken { token, location } => {
                TableError::UnexpectedToken { token, location }
            }
            ParseError::Lex(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    #[test]
    fn test_parse_errors_convert_with_location() {
        let err: TableError = parse("A ∧ ∨").unwrap_err().into();

        assert_eq!(err.stage(), "Parsing");
        assert_eq!(err.location(), Some(&SourceLocation::new(4)));
    }

    #[test]
    fn test_lex_errors_convert_through_parse_error() {
        let err: TableError = parse("A | B").unwrap_err().into();

        assert_eq!(
            err,
            TableError::InvalidCharacter {
                ch: '|',
                location: SourceLocation::new(2)
            }
        );
        assert_eq!(err.stage(), "Tokenization");
    }

    #[test]
    fn test_limit_errors_have_no_location() {
        let err = TableError::TooManyOperators { count: 5, max: 4 };

        assert_eq!(err.location(), None);
        assert_eq!(err.to_string(), "Too many operators: 5 (maximum is 4)");
        assert_eq!(
            TableError::TooManyVariables { count: 4, max: 3 }.to_string(),
            "Too many variables: 4 (maximum is 3)"
        );
    }
}
