//! Grammar productions, implemented as `Parser` methods.
//!
//! - `stmt`: statement dispatch, declarations, loops, jumps, blocks
//! - `item`: `fun`, `class`, `object` and `enum` declarations
//! - `expr`: the expression precedence chain

mod expr;
mod item;
mod stmt;
