//! Truth-table construction
//!
//! This module turns a parsed expression into a table of boolean values:
//! - [`engine`]: the driver, from source line to [`engine::TruthTable`]
//! - [`assignments`]: row-by-row variable assignments
//! - [`evaluate`]: expression evaluation under one assignment
//! - [`errors`]: the error taxonomy for a rejected line
//! - [`constants`]: limits and connective glyphs
//!
//! # Limits
//!
//! A line may use at most [`constants::MAX_VARIABLES`] distinct variables and
//! [`constants::MAX_OPERATORS`] connective occurrences, so a table never has
//! more than eight rows.

pub mod assignments;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod evaluate;
