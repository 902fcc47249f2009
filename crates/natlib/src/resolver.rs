//! Fallback driver over the ordered strategy chain

use std::sync::Arc;

use crate::error::LoadError;
use crate::linker::SystemLinker;
use crate::resources::{EmbeddedResources, ResourceStore};
use crate::strategy::{
    BundledResourceStrategy, GeneratedOutputStrategy, InstallPathStrategy, LoadStrategy,
    SystemPathStrategy,
};

/// Resolves a logical library name by trying an ordered list of loading
/// strategies until one succeeds.
///
/// Order encodes priority and is the same for every name. The resolver keeps
/// no state between calls; loaded-library bookkeeping belongs to the host
/// dynamic linker.
pub struct LibraryResolver {
    strategies: Vec<Box<dyn LoadStrategy>>,
}

impl LibraryResolver {
    /// Build a resolver over an explicit strategy chain.
    pub fn new(strategies: Vec<Box<dyn LoadStrategy>>) -> Self {
        Self { strategies }
    }

    /// The built-in chain, fastest and most standard mechanism first:
    ///
    /// 1. system search path
    /// 2. bundled resource, extracted to a temp file
    /// 3. code generator output directory under the working directory
    /// 4. fixed third-party installation directory
    pub fn default_chain(resources: Arc<dyn ResourceStore>) -> Self {
        let linker = Arc::new(SystemLinker);
        Self::new(vec![
            Box::new(SystemPathStrategy::new(linker.clone())),
            Box::new(BundledResourceStrategy::new(resources, linker.clone())),
            Box::new(GeneratedOutputStrategy::new(linker.clone())),
            Box::new(InstallPathStrategy::new(linker)),
        ])
    }

    /// Try each strategy in order until one loads the library.
    ///
    /// The first success wins and discards every earlier failure. When all
    /// strategies fail, only the last failure is surfaced; earlier causes
    /// are dropped, which keeps the contract simple at the cost of masking
    /// a possibly more informative earlier error.
    ///
    /// An empty chain succeeds vacuously: failure is only reported when an
    /// attempt actually failed.
    pub fn load(&self, name: &str) -> Result<(), LoadError> {
        let mut last_failure = None;

        for strategy in &self.strategies {
            match strategy.attempt_load(name) {
                Ok(()) => {
                    last_failure = None;
                    break;
                }
                Err(failure) => last_failure = Some(failure),
            }
        }

        match last_failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

/// Load a native library through the built-in strategy chain.
///
/// On success the library is loaded into the current process and its
/// exported symbols become callable. Uses an empty bundled-resource store;
/// applications shipping libraries in their binary should build a
/// [`LibraryResolver::default_chain`] over their own [`EmbeddedResources`].
pub fn load_library(name: &str) -> Result<(), LoadError> {
    LibraryResolver::default_chain(Arc::new(EmbeddedResources::new())).load(name)
}
