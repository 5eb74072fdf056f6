//! `babbage` is a library to run data through an ordered chain of decoding
//! and encoding plugins.
//!
//! The main entry points of this crate are [`registry::PluginRegistry`],
//! which holds the available plugins, [`resolver::resolve`], which turns raw
//! command line tokens into a validated pipeline, and [`pipeline::run`],
//! which folds an input byte sequence through that pipeline.
//!
//! "Hello world" example:
//! ```
//! use babbage::{pipeline, registry::PluginRegistry, resolver};
//!
//! let registry = PluginRegistry::with_builtins();
//! let chain = resolver::resolve(&["base_64_e".to_string()], &registry).unwrap();
//! let out = pipeline::run(&registry, b"tom", &chain).unwrap();
//! assert_eq!(out, b"dG9t");
//! ```

pub mod display;
pub mod error;
pub mod log;
pub mod pipeline;
pub mod plugin;
pub mod plugins;
pub mod registry;
pub mod resolver;
#[cfg(feature = "server")]
pub mod server;

/// The babbage prelude
///
/// This module re-exports the most commonly used items from babbage.
/// You can use it with `use babbage::prelude::*;` to bring all common items
/// into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::plugin::Plugin;

    // Re-export commonly used types
    pub use crate::error::Result;
    pub use crate::pipeline::Invocation;
    pub use crate::registry::PluginRegistry;
}
