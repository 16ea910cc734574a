//! O'ahu CLI library.
//!
//! The binary is a thin argument parser over these commands, so the
//! end-to-end tests can drive the same code with in-memory input and output.

pub mod commands;
mod config;
mod tracing_setup;

pub use config::RunConfig;
pub use tracing_setup::init_tracing;
