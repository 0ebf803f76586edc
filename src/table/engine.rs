//! Truth-table driver
//!
//! [`build_table`] runs one line through the whole pipeline:
//!
//! 1. tokenize
//! 2. check the variable and operator limits on the raw tokens
//! 3. parse, collecting every sub-expression in construction order
//! 4. pick columns: one per variable (sorted), then each sub-expression whose
//!    canonical text has not been seen yet
//! 5. evaluate every column under every assignment
//!
//! [`process_source`] applies it to each non-blank line of a larger text.

use crate::parser::ast::Expression;
use crate::parser::lexer::{tokenize, Token, TokenKind};
use crate::parser::parse::Parser;
use crate::table::assignments::{Assignment, Assignments};
use crate::table::constants::{MAX_OPERATORS, MAX_VARIABLES};
use crate::table::errors::TableError;
use crate::table::evaluate::evaluate;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Complete truth table for one expression
#[derive(Debug, Clone)]
pub struct TruthTable {
    expression: String,
    variables: Vec<char>,
    columns: Vec<Expression>,
    headers: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Source text the table was built from (trimmed)
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Free variables, alphabetically
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Canonical text of every column, in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// One row per assignment, one value per column
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn columns(&self) -> &[Expression] {
        &self.columns
    }

    /// Values of the column whose header is `header`
    pub fn column(&self, header: &str) -> Option<Vec<bool>> {
        let idx = self.headers.iter().position(|h| h == header)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Assignments in row order
    pub fn assignments(&self) -> Assignments {
        Assignments::new(&self.variables)
    }
}

/// Enforce the variable and operator limits on a raw token stream.
///
/// Variables are counted by distinct symbol, operators by occurrence.
pub fn validate(tokens: &[Token]) -> Result<(), TableError> {
    let variables: BTreeSet<char> = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Variable)
        .map(Token::symbol)
        .collect();
    if variables.len() > MAX_VARIABLES {
        return Err(TableError::TooManyVariables {
            count: variables.len(),
            max: MAX_VARIABLES,
        });
    }

    let operators = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Operator)
        .count();
    if operators > MAX_OPERATORS {
        return Err(TableError::TooManyOperators {
            count: operators,
            max: MAX_OPERATORS,
        });
    }

    Ok(())
}

/// Variable columns first, then sub-expressions; first occurrence of each
/// canonical text wins.
///
/// Two different trees that render identically share a column.
pub fn select_columns(variables: &[char], sub_expressions: Vec<Expression>) -> Vec<Expression> {
    let mut seen = FxHashSet::default();
    variables
        .iter()
        .map(|&name| Expression::variable(name))
        .chain(sub_expressions)
        .filter(|expr| seen.insert(expr.to_string()))
        .collect()
}

/// Build the truth table for a single expression line.
pub fn build_table(source: &str) -> Result<TruthTable, TableError> {
    let expression = source.trim();
    let tokens = tokenize(expression)?;
    validate(&tokens)?;

    let parsed = Parser::from_tokens(tokens).parse()?;
    let variables: Vec<char> = parsed.root.variables().into_iter().collect();
    let built = parsed.sub_expressions.len();
    let columns = select_columns(&variables, parsed.sub_expressions);
    log::debug!(
        "'{}': {} nodes built, {} columns kept",
        expression,
        built,
        columns.len()
    );

    let rows = Assignments::new(&variables)
        .map(|assignment| {
            let row = evaluate_row(&columns, &assignment)?;
            log::trace!("{} -> {:?}", assignment, row);
            Ok(row)
        })
        .collect::<Result<Vec<_>, TableError>>()?;

    Ok(TruthTable {
        expression: expression.to_string(),
        variables,
        headers: columns.iter().map(ToString::to_string).collect(),
        columns,
        rows,
    })
}

fn evaluate_row(columns: &[Expression], assignment: &Assignment) -> Result<Vec<bool>, TableError> {
    columns
        .iter()
        .map(|expr| evaluate(expr, assignment))
        .collect()
}

/// Outcome for one non-blank input line
#[derive(Debug, Clone)]
pub struct LineResult<'a> {
    /// One-based line number in the source text
    pub line_number: usize,
    pub expression: &'a str,
    pub result: Result<TruthTable, TableError>,
}

/// Counts gathered over a whole source text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub tables: usize,
    pub failures: usize,
}

impl Summary {
    pub fn record(&mut self, result: &LineResult<'_>) {
        self.lines += 1;
        match result.result {
            Ok(_) => self.tables += 1,
            Err(_) => self.failures += 1,
        }
    }
}

/// Build one table per non-blank line of `source`.
///
/// Lines are trimmed and blank ones skipped. A failing line does not stop the
/// lines after it.
pub fn process_source(source: &str) -> impl Iterator<Item = LineResult<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, expression)| LineResult {
            line_number,
            expression,
            result: build_table(expression),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_conjunction_table() {
        let table = build_table("A ∧ B").unwrap();

        assert_eq!(table.headers(), ["A", "B", "A ∧ B"]);
        assert_eq!(
            table.rows(),
            [vec![T, T, T], vec![T, F, F], vec![F, T, F], vec![F, F, F]]
        );
    }

    #[test]
    fn test_negation_table() {
        let table = build_table("~A").unwrap();

        assert_eq!(table.headers(), ["A", "~A"]);
        assert_eq!(table.rows(), [vec![T, F], vec![F, T]]);
    }

    #[test]
    fn test_duplicate_columns_collapse() {
        let table = build_table("A ∧ A").unwrap();

        assert_eq!(table.headers(), ["A", "A ∧ A"]);
        assert_eq!(table.rows(), [vec![T, T], vec![F, F]]);
    }

    #[test]
    fn test_variable_columns_come_first_and_sorted() {
        let table = build_table("C ∨ ~A").unwrap();

        assert_eq!(table.headers(), ["A", "C", "~A", "C ∨ ~A"]);
        assert_eq!(table.variables(), ['A', 'C']);
    }

    #[test]
    fn test_identical_text_merges_distinct_trees() {
        // `A ∧ B` appears twice as a node; the second copy is dropped
        let table = build_table("A ∧ B → A ∧ B").unwrap();

        assert_eq!(table.headers(), ["A", "B", "A ∧ B", "A ∧ B → A ∧ B"]);
        assert_eq!(table.column("A ∧ B → A ∧ B"), Some(vec![T, T, T, T]));
    }

    #[test]
    fn test_variable_limit() {
        assert!(build_table("A ∧ B ∨ C").is_ok());
        assert_eq!(
            build_table("A ∧ B ∨ C → D").unwrap_err(),
            TableError::TooManyVariables { count: 4, max: 3 }
        );
    }

    #[test]
    fn test_repeated_variables_count_once() {
        assert!(build_table("A ∧ B ∨ A → B").is_ok());
    }

    #[test]
    fn test_operator_limit() {
        assert!(build_table("~~A ∧ ~B").is_ok());
        assert_eq!(
            build_table("~~A ∧ ~B ∨ C").unwrap_err(),
            TableError::TooManyOperators { count: 5, max: 4 }
        );
    }

    #[test]
    fn test_limits_checked_before_parsing() {
        // malformed, but rejected for its operator count first
        assert!(matches!(
            build_table("~ ~ ~ ~ ~").unwrap_err(),
            TableError::TooManyOperators { count: 5, .. }
        ));
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            build_table("a").unwrap_err(),
            TableError::InvalidCharacter { ch: 'a', location } if location.position() == 1
        ));
        assert_eq!(
            build_table("A ∧").unwrap_err(),
            TableError::ExpectedVariable { location: None }
        );
        assert!(matches!(
            build_table("A ~B").unwrap_err(),
            TableError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_process_source_isolates_lines() {
        let source = "A ∧ B\n\n   \nx\n~A\n";
        let results: Vec<LineResult<'_>> = process_source(source).collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].line_number, 1);
        assert!(results[0].result.is_ok());
        assert_eq!(results[1].line_number, 4);
        assert!(results[1].result.is_err());
        assert_eq!(results[2].expression, "~A");
        assert!(results[2].result.is_ok());

        let mut summary = Summary::default();
        results.iter().for_each(|r| summary.record(r));
        assert_eq!(
            summary,
            Summary {
                lines: 3,
                tables: 2,
                failures: 1
            }
        );
    }
}
