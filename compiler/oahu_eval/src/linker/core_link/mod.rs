//! The `core` link: console I/O, timing, ranges, the primitive wrapper
//! classes and the `Builder` native class.

mod builder;
mod globals;
mod primitives;

use oahu_ir::Source;

use super::{Link, Registry};

const PRELUDE: &str = include_str!("core.oahu");

/// The standard link imported before any program runs.
pub struct CoreLink;

impl Link for CoreLink {
    fn name(&self) -> &'static str {
        "core"
    }

    fn prelude(&self) -> Source {
        Source::new("core", PRELUDE)
    }

    fn register(&self, registry: &mut Registry<'_>) {
        globals::register(registry);
        primitives::register(registry);
        builder::register(registry);
    }
}
