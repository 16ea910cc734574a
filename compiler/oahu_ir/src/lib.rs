//! O'ahu IR - tokens, AST, and source positions.
//!
//! Shared data model for every pipeline stage:
//! - [`Span`] and [`Source`]: where text came from, for diagnostics
//! - [`Name`] and [`StringInterner`]: interned identifiers
//! - [`Token`] and [`TokenKind`]: lexer output
//! - [`ast`]: expression and statement trees produced by the parser
//! - [`callable`]: argument resolution shared by function and class calls

pub mod ast;
pub mod callable;
mod interner;
mod name;
mod source;
mod span;
mod token;

pub use callable::{resolve_args, Callable, Resolved, VarargItem};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use source::Source;
pub use span::Span;
pub use token::{Literal, Token, TokenKind};
