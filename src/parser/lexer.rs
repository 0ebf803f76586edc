//! Lexer (tokenizer) for propositional expressions
//!
//! Converts a single source line into a flat [`Token`] stream consumed by the
//! parser. Whitespace is skipped but still advances the offset, so every token
//! reports its true position in the line.

use super::ast::SourceLocation;
use crate::table::constants::{AND_GLYPH, IMPLIES_GLYPH, NOT_GLYPH, OR_GLYPH};
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate position without a separate token→location table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Uppercase letter A-Z
    Variable(char, SourceLocation),

    // Connectives
    Not(SourceLocation),     // ~
    And(SourceLocation),     // ∧
    Or(SourceLocation),      // ∨
    Implies(SourceLocation), // →
}

/// Coarse token classification used by the driver's limit checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Variable,
    Operator,
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Variable(_, loc)
            | Token::Not(loc)
            | Token::And(loc)
            | Token::Or(loc)
            | Token::Implies(loc) => *loc,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Variable(..) => TokenKind::Variable,
            Token::Not(_) | Token::And(_) | Token::Or(_) | Token::Implies(_) => TokenKind::Operator,
        }
    }

    /// The single source character this token was read from
    pub fn symbol(&self) -> char {
        match self {
            Token::Variable(name, _) => *name,
            Token::Not(_) => NOT_GLYPH,
            Token::And(_) => AND_GLYPH,
            Token::Or(_) => OR_GLYPH,
            Token::Implies(_) => IMPLIES_GLYPH,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.symbol())
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Anything that is not whitespace, an uppercase letter or a connective
    InvalidCharacter { ch: char, location: SourceLocation },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidCharacter { ch, location } => {
                write!(
                    f,
                    "Invalid character '{}' at position {}",
                    ch,
                    location.position()
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Lexer for one expression line
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source line.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input, failing on the first invalid character
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let loc = self.current_location();
            let Some(ch) = self.advance() else {
                break;
            };

            tokens.push(Self::classify(ch, loc)?);
        }

        log::trace!("tokenized {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Map a single non-whitespace character to its token
    fn classify(ch: char, loc: SourceLocation) -> Result<Token, LexError> {
        match ch {
            'A'..='Z' => Ok(Token::Variable(ch, loc)),
            NOT_GLYPH => Ok(Token::Not(loc)),
            AND_GLYPH => Ok(Token::And(loc)),
            OR_GLYPH => Ok(Token::Or(loc)),
            IMPLIES_GLYPH => Ok(Token::Implies(loc)),
            _ => Err(LexError::InvalidCharacter { ch, location: loc }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.position)
    }
}

/// Convenience wrapper around [`Lexer::tokenize`]
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(line).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("~A ∧ B ∨ C → D").unwrap();

        assert!(matches!(tokens[0], Token::Not(_)));
        assert!(matches!(tokens[1], Token::Variable('A', _)));
        assert!(matches!(tokens[2], Token::And(_)));
        assert!(matches!(tokens[3], Token::Variable('B', _)));
        assert!(matches!(tokens[4], Token::Or(_)));
        assert!(matches!(tokens[5], Token::Variable('C', _)));
        assert!(matches!(tokens[6], Token::Implies(_)));
        assert!(matches!(tokens[7], Token::Variable('D', _)));
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn test_positions_include_whitespace() {
        let tokens = tokenize("  A  ∧B").unwrap();

        assert_eq!(tokens[0].location(), SourceLocation::new(2));
        assert_eq!(tokens[1].location(), SourceLocation::new(5));
        assert_eq!(tokens[2].location(), SourceLocation::new(6));
    }

    #[test]
    fn test_kinds_and_symbols() {
        let tokens = tokenize("~Q").unwrap();

        assert_eq!(tokens[0].kind(), TokenKind::Operator);
        assert_eq!(tokens[0].symbol(), '~');
        assert_eq!(tokens[1].kind(), TokenKind::Variable);
        assert_eq!(tokens[1].symbol(), 'Q');
    }

    #[test]
    fn test_lowercase_is_rejected() {
        let err = tokenize("a").unwrap_err();

        assert_eq!(
            err,
            LexError::InvalidCharacter {
                ch: 'a',
                location: SourceLocation::new(0)
            }
        );
        assert_eq!(err.to_string(), "Invalid character 'a' at position 1");
    }

    #[test]
    fn test_first_invalid_character_wins() {
        let err = tokenize("A & (B)").unwrap_err();

        assert!(matches!(
            err,
            LexError::InvalidCharacter { ch: '&', location } if location.offset == 2
        ));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t ").unwrap().is_empty());
    }
}
