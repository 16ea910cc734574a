//! Diagnostic system for O'ahu error reporting.
//!
//! Every pipeline stage converts its structured error into a [`Diagnostic`]
//! tagged with the [`Stage`] it came from. Rendering produces the boxed
//! format:
//!
//! ```text
//! ╭──────────────────────────────────────────────────────╮
//! │ O'ahu Runtime Error ✿ Name 'y' has not been defined! │
//! ├──────────────────────────────────────────────────────┤
//! │ 1| x + y                                             │
//! │        ═                                             │
//! ╰──────────────────────────────────────────────────────╯
//! ```

mod diagnostic;
pub mod emitter;
pub mod render;

pub use diagnostic::{Diagnostic, Severity, Stage};
pub use emitter::{BoxEmitter, DiagnosticEmitter};
