// Constants for truth-table construction

/// Largest number of distinct variables a line may use (at most 8 rows)
pub const MAX_VARIABLES: usize = 3;

/// Largest number of connective occurrences a line may use, `~` included
pub const MAX_OPERATORS: usize = 4;

pub const NOT_GLYPH: char = '~';
pub const AND_GLYPH: char = '∧';
pub const OR_GLYPH: char = '∨';
pub const IMPLIES_GLYPH: char = '→';
