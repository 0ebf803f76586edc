//! Propositional expression parser
//!
//! This module transforms one line of source text into an expression tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser coordinator, error type and helpers
//! - `expressions`: Grammar, one method per precedence level
//! - [`ast`]: Expression tree definitions and canonical rendering
//!
//! # Accepted alphabet
//!
//! Variables are single uppercase letters `A`-`Z`. Connectives are `~` (not),
//! `∧` (and), `∨` (or) and `→` (implies). Whitespace is ignored. There are no
//! parentheses.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one loop per binary precedence level.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
