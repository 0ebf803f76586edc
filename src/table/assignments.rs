//! Truth assignments and their enumeration
//!
//! Rows are produced by a binary counter over the sorted variables, with the
//! alphabetically first variable on the most significant bit. A `0` bit means
//! *true*, so row 0 is all-true and the last row is all-false.

use std::fmt;

/// One boolean per free variable, kept in alphabetical order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<(char, bool)>,
}

impl Assignment {
    /// Value bound to `name`, if the assignment covers it
    pub fn get(&self, name: char) -> Option<bool> {
        self.values
            .binary_search_by_key(&name, |(var, _)| *var)
            .ok()
            .map(|idx| self.values[idx].1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.values.iter().copied()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, if *value { 'T' } else { 'F' })?;
        }
        write!(f, "}}")
    }
}

/// Iterator over every assignment of a variable set, in table order
#[derive(Debug, Clone)]
pub struct Assignments {
    variables: Vec<char>,
    row: usize,
    rows: usize,
}

impl Assignments {
    /// Variables are sorted and deduplicated before enumeration starts.
    pub fn new(variables: &[char]) -> Self {
        let mut variables = variables.to_vec();
        variables.sort_unstable();
        variables.dedup();
        let rows = 1usize << variables.len();
        Self {
            variables,
            row: 0,
            rows,
        }
    }

    /// Assignment for row `row` of the table
    fn assignment_at(&self, row: usize) -> Assignment {
        let n = self.variables.len();
        let values = self
            .variables
            .iter()
            .enumerate()
            .map(|(j, &name)| (name, (row >> (n - j - 1)) & 1 == 0))
            .collect();
        Assignment { values }
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.row >= self.rows {
            return None;
        }
        let assignment = self.assignment_at(self.row);
        self.row += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// Every assignment over `variables`, `2^n` of them
pub fn enumerate_assignments(variables: &[char]) -> Vec<Assignment> {
    Assignments::new(variables).collect()
}
