// AST (Abstract Syntax Tree) definitions for propositional expressions

use crate::table::constants::{AND_GLYPH, IMPLIES_GLYPH, NOT_GLYPH, OR_GLYPH};
use std::collections::BTreeSet;
use std::fmt;

/// Source location information for error reporting
///
/// Expressions are single-line, so a location is just the zero-based character
/// offset into the line. Whitespace counts towards the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// One-based position, as shown to users
    pub fn position(&self) -> usize {
        self.offset + 1
    }
}

/// Binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    And,
    Or,
    Implies,
}

impl BinOp {
    pub fn glyph(self) -> char {
        match self {
            BinOp::And => AND_GLYPH,
            BinOp::Or => OR_GLYPH,
            BinOp::Implies => IMPLIES_GLYPH,
        }
    }

    /// Apply the connective to already evaluated operands
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinOp::And => left && right,
            BinOp::Or => left || right,
            BinOp::Implies => !left || right,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Expression tree node
///
/// Every node owns its children; trees are built once by the parser and never
/// mutated afterwards. Every leaf is a [`Expression::Variable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Variable(char),
    Not(Box<Expression>),
    BinaryOp {
        op: BinOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn variable(name: char) -> Self {
        Expression::Variable(name)
    }

    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    pub fn binary(op: BinOp, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Free variables in alphabetical order
    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<char>) {
        match self {
            Expression::Variable(name) => {
                vars.insert(*name);
            }
            Expression::Not(operand) => operand.collect_variables(vars),
            Expression::BinaryOp { left, right, .. } => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
        }
    }
}

/// Canonical text: `A`, `~A`, `A ∧ B`.
///
/// No parentheses are emitted; the rendering is only used as a column header
/// and as the deduplication key for columns.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Not(operand) => write!(f, "{}{}", NOT_GLYPH, operand),
            Expression::BinaryOp { op, left, right } => write!(f, "{} {} {}", left, op, right),
        }
    }
}
