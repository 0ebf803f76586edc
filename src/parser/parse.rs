//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, helper methods, and coordination
//! - `expressions`: one method per precedence level
//!
//! # Sub-expression inventory
//!
//! Besides the tree itself, the parser records a clone of every node it
//! builds, in the order construction completed. Leaves come before the nodes
//! that contain them. The truth-table driver turns this list into columns.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A variable was required; `None` means the input ran out
    ExpectedVariable { location: Option<SourceLocation> },

    /// Tokens left over after a complete expression
    UnexpectedToken {
        token: Token,
        location: SourceLocation,
    },

    /// Tokenization failed before parsing started
    Lex(LexError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedVariable {
                location: Some(location),
            } => write!(f, "Variable expected at position {}", location.position()),
            ParseError::ExpectedVariable { location: None } => {
                write!(f, "Variable expected at end of input")
            }
            ParseError::UnexpectedToken { token, location } => {
                write!(f, "Unexpected {} at position {}", token, location.position())
            }
            ParseError::Lex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// Successful parse: the tree plus every node built along the way
#[derive(Debug, Clone)]
pub struct ParsedExpression {
    pub root: Expression,
    pub sub_expressions: Vec<Expression>,
}

/// Recursive descent parser for propositional expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) sub_expressions: Vec<Expression>,
}

impl Parser {
    /// Tokenize `source` and prepare a parser over the result
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            sub_expressions: Vec::new(),
        }
    }

    /// Parse one complete expression.
    ///
    /// Fails on the first malformed construct. Tokens left over once the
    /// grammar stops are rejected with [`ParseError::UnexpectedToken`].
    pub fn parse(mut self) -> Result<ParsedExpression, ParseError> {
        let root = self.parse_expression()?;

        if !self.is_at_end() {
            let token = self.tokens[self.position].clone();
            return Err(ParseError::UnexpectedToken {
                location: token.location(),
                token,
            });
        }

        log::debug!(
            "parsed '{}' with {} sub-expressions",
            root,
            self.sub_expressions.len()
        );

        Ok(ParsedExpression {
            root,
            sub_expressions: self.sub_expressions,
        })
    }

    // ===== Helper methods =====

    /// Store a freshly built node in the inventory and hand it back
    pub(crate) fn record(&mut self, node: Expression) -> Expression {
        self.sub_expressions.push(node.clone());
        node
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Location of the current token, `None` at end of input
    pub(crate) fn current_location(&self) -> Option<SourceLocation> {
        self.peek().map(Token::location)
    }

    pub(crate) fn expect_variable(&mut self) -> Result<char, ParseError> {
        if let Some(Token::Variable(name, _)) = self.peek() {
            let name = *name;
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::ExpectedVariable {
                location: self.current_location(),
            })
        }
    }
}

/// Tokenize and parse a single line
pub fn parse(source: &str) -> Result<ParsedExpression, ParseError> {
    Parser::new(source)?.parse()
}
