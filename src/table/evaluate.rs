//! Expression evaluation under a single assignment

use crate::parser::ast::Expression;
use crate::table::assignments::Assignment;
use crate::table::errors::TableError;

/// Evaluate `expr` with the variable values from `assignment`.
///
/// Every variable of `expr` must be bound; a missing one yields
/// [`TableError::UnboundVariable`].
pub fn evaluate(expr: &Expression, assignment: &Assignment) -> Result<bool, TableError> {
    match expr {
        Expression::Variable(name) => assignment
            .get(*name)
            .ok_or(TableError::UnboundVariable { name: *name }),
        Expression::Not(operand) => Ok(!evaluate(operand, assignment)?),
        Expression::BinaryOp { op, left, right } => {
            let left = evaluate(left, assignment)?;
            let right = evaluate(right, assignment)?;
            Ok(op.apply(left, right))
        }
    }
}
