//! Parser tests.
//!
//! - `parser`: statements, declarations, precedence, errors and warnings
