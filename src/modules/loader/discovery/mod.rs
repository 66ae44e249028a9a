//! Subcommand module discovery
//!
//! Discovery turns a top-level command name into the list of its subcommand
//! modules. The loader only sees the [`ModuleDiscovery`] trait, so modules can
//! come from a directory scan or from an in-memory registry.

mod filesystem;
mod registry;
mod traits;

pub use filesystem::{FsDiscovery, MODULE_EXTENSIONS};
pub use registry::StaticRegistry;
pub use traits::{ModuleDiscovery, SubcommandModule};
