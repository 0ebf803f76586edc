//! # Introduction
//!
//! proptable reads propositional-logic expressions, one per line, and prints
//! a truth table for each: every sub-expression evaluated under every
//! assignment of its variables.
//!
//! ## Pipeline
//!
//! ```text
//! Line → Lexer → limit check → Parser → columns → assignments → rows → text table
//! ```
//!
//! 1. [`parser`]: tokenises the line and builds an expression tree, recording
//!    every node it constructs.
//! 2. [`table`]: validates limits, deduplicates columns by canonical text,
//!    enumerates assignments and evaluates each column.
//! 3. [`ui`]: renders a [`table::engine::TruthTable`] as an aligned text table.
//!
//! ## Syntax
//!
//! Variables `A`-`Z`; connectives `~` `∧` `∨` `→`, binding tightest to
//! loosest in that order. Binary connectives group to the left. At most three
//! distinct variables and four connectives per line.
//!
//! ```rust
//! use proptable::table::engine::build_table;
//!
//! let table = build_table("A → B").unwrap();
//! assert_eq!(table.headers(), ["A", "B", "A → B"]);
//! assert_eq!(table.column("A → B"), Some(vec![true, false, true, true]));
//! ```

pub mod parser;
pub mod table;
pub mod ui;
