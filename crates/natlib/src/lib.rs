//! Native shared library resolution with ordered loading fallbacks
//!
//! Callers know a library only by its logical name (e.g. `"opencv_java"`);
//! this crate hides where the physical file comes from. A
//! [`LibraryResolver`] tries an ordered chain of strategies until one loads
//! the library into the process:
//!
//! 1. the dynamic linker's own search path
//! 2. a resource bundled with the application, extracted to a temp file
//! 3. the native-binding code generator's output directory
//! 4. a third-party package's fixed installation directory
//!
//! Loading is a process-wide side effect owned by the host dynamic linker;
//! the resolver tracks nothing across calls and never unloads.
//!
//! ```ignore
//! natlib::load_library("opencv_java")?;
//! ```

pub mod error;
pub mod linker;
pub mod naming;
pub mod resolver;
pub mod resources;
pub mod strategy;

pub use error::LoadError;
pub use linker::{NativeLinker, SystemLinker};
pub use naming::physical_file_name;
pub use resolver::{load_library, LibraryResolver};
pub use resources::{EmbeddedResources, ResourceStore};
pub use strategy::{
    BundledResourceStrategy, GeneratedOutputStrategy, InstallPathStrategy, LoadStrategy,
    SystemPathStrategy,
};
