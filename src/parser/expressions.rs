//! Expression parsing implementation
//!
//! One method per precedence level, lowest first:
//!
//! ```text
//! Implication := Disjunction ( → Disjunction )*
//! Disjunction := Conjunction ( ∨ Conjunction )*
//! Conjunction := Negation    ( ∧ Negation )*
//! Negation    := ~ Negation | Primary
//! Primary     := Variable
//! ```
//!
//! Binary levels fold left, so `A ∧ B ∧ C` is `(A ∧ B) ∧ C`. Negation recurses
//! to the right and accepts any number of leading `~`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_implication()
    }

    /// Parse implication (→)
    fn parse_implication(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_disjunction()?;

        while self.match_token(&Token::Implies(SourceLocation::new(0))) {
            let right = self.parse_disjunction()?;
            left = self.record(Expression::binary(BinOp::Implies, left, right));
        }

        Ok(left)
    }

    /// Parse disjunction (∨)
    fn parse_disjunction(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_conjunction()?;

        while self.match_token(&Token::Or(SourceLocation::new(0))) {
            let right = self.parse_conjunction()?;
            left = self.record(Expression::binary(BinOp::Or, left, right));
        }

        Ok(left)
    }

    /// Parse conjunction (∧)
    fn parse_conjunction(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_negation()?;

        while self.match_token(&Token::And(SourceLocation::new(0))) {
            let right = self.parse_negation()?;
            left = self.record(Expression::binary(BinOp::And, left, right));
        }

        Ok(left)
    }

    /// Parse negation (~), right-recursive
    fn parse_negation(&mut self) -> Result<Expression, ParseError> {
        if self.match_token(&Token::Not(SourceLocation::new(0))) {
            let operand = self.parse_negation()?;
            return Ok(self.record(Expression::not(operand)));
        }

        self.parse_primary()
    }

    /// Parse primary: a single variable
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let name = self.expect_variable()?;
        Ok(self.record(Expression::variable(name)))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::parse;

    fn var(name: char) -> Expression {
        Expression::variable(name)
    }

    fn texts(exprs: &[Expression]) -> Vec<String> {
        exprs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_conjunction_is_left_associative() {
        let parsed = parse("A ∧ B ∧ C").unwrap();

        let expected = Expression::binary(
            BinOp::And,
            Expression::binary(BinOp::And, var('A'), var('B')),
            var('C'),
        );
        assert_eq!(parsed.root, expected);
        assert_eq!(
            texts(&parsed.sub_expressions),
            vec!["A", "B", "A ∧ B", "C", "A ∧ B ∧ C"]
        );
    }

    #[test]
    fn test_implication_is_left_associative() {
        let parsed = parse("A → B → C").unwrap();

        let expected = Expression::binary(
            BinOp::Implies,
            Expression::binary(BinOp::Implies, var('A'), var('B')),
            var('C'),
        );
        assert_eq!(parsed.root, expected);
    }

    #[test]
    fn test_precedence_levels() {
        let parsed = parse("A ∨ B ∧ C → D").unwrap();

        let expected = Expression::binary(
            BinOp::Implies,
            Expression::binary(
                BinOp::Or,
                var('A'),
                Expression::binary(BinOp::And, var('B'), var('C')),
            ),
            var('D'),
        );
        assert_eq!(parsed.root, expected);
        assert_eq!(
            texts(&parsed.sub_expressions),
            vec!["A", "B", "C", "B ∧ C", "A ∨ B ∧ C", "D", "A ∨ B ∧ C → D"]
        );
    }

    #[test]
    fn test_negation_binds_tightest() {
        let parsed = parse("~A ∧ B").unwrap();

        let expected = Expression::binary(BinOp::And, Expression::not(var('A')), var('B'));
        assert_eq!(parsed.root, expected);
    }

    #[test]
    fn test_repeated_negation() {
        let parsed = parse("~~~A").unwrap();

        assert_eq!(
            parsed.root,
            Expression::not(Expression::not(Expression::not(var('A'))))
        );
        assert_eq!(
            texts(&parsed.sub_expressions),
            vec!["A", "~A", "~~A", "~~~A"]
        );
    }

    #[test]
    fn test_repeated_variables_are_recorded_each_time() {
        let parsed = parse("A ∧ A").unwrap();

        assert_eq!(texts(&parsed.sub_expressions), vec!["A", "A", "A ∧ A"]);
    }

    #[test]
    fn test_canonical_text_is_stable_across_parses() {
        let first = parse("~A ∨ B → ~~C").unwrap();
        let second = parse("~A ∨ B → ~~C").unwrap();

        assert_eq!(first.root.to_string(), second.root.to_string());
        assert_eq!(first.root.to_string(), "~A ∨ B → ~~C");
    }
}
