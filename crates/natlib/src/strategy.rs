//! Loading strategies
//!
//! Each strategy is one way to locate and load a native library:
//! - [`SystemPathStrategy`]: the linker's own search path
//! - [`BundledResourceStrategy`]: extract bundled bytes to a temp file, load that
//! - [`GeneratedOutputStrategy`]: a build tool's generated-output directory
//! - [`InstallPathStrategy`]: a fixed third-party installation directory
//!
//! Strategies hold configuration captured at construction and no runtime
//! state. Every lower-level failure is absorbed into [`LoadError`] so the
//! resolver can fall through to the next strategy on any failure.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::LoadError;
use crate::linker::NativeLinker;
use crate::naming::physical_file_name;
use crate::resources::ResourceStore;

/// Conventional output directory of the native-binding code generator,
/// relative to the current working directory.
pub const GENERATED_OUTPUT_DIR: &str = "target/generated-resources/swig";

/// Conventional installation directory of the OpenCV Java bindings package.
pub const OPENCV_INSTALL_DIR: &str = "/usr/share/opencv/java";

/// One way to attempt loading a library.
///
/// Either the library becomes loaded as a process-wide side effect, or the
/// attempt fails with [`LoadError`]. No other error type may escape.
pub trait LoadStrategy: Send + Sync {
    fn attempt_load(&self, name: &str) -> Result<(), LoadError>;
}

/// Delegates to the linker's search-path lookup, name unmodified.
pub struct SystemPathStrategy {
    linker: Arc<dyn NativeLinker>,
}

impl SystemPathStrategy {
    pub fn new(linker: Arc<dyn NativeLinker>) -> Self {
        Self { linker }
    }
}

impl LoadStrategy for SystemPathStrategy {
    fn attempt_load(&self, name: &str) -> Result<(), LoadError> {
        self.linker.load_by_name(name)
    }
}

/// Extracts a bundled library to a fresh temporary directory and loads it
/// from there.
///
/// The temporary directory is deliberately never removed: the dynamic loader
/// may keep a live mapping to the backing file for the rest of the process,
/// so eager cleanup would pull the file out from under loaded code.
pub struct BundledResourceStrategy {
    resources: Arc<dyn ResourceStore>,
    linker: Arc<dyn NativeLinker>,
}

impl BundledResourceStrategy {
    pub fn new(resources: Arc<dyn ResourceStore>, linker: Arc<dyn NativeLinker>) -> Self {
        Self { resources, linker }
    }
}

impl LoadStrategy for BundledResourceStrategy {
    fn attempt_load(&self, name: &str) -> Result<(), LoadError> {
        let file_name = physical_file_name(name);

        let bytes = self
            .resources
            .open(&file_name)
            .ok_or_else(|| LoadError::new(name, format!("no bundled resource `{file_name}`")))?;

        let dir = tempfile::Builder::new()
            .prefix(name)
            .tempdir()
            .map_err(|e| LoadError::new(name, format!("cannot create temp directory: {e}")))?
            // Persist the directory; see the type docs.
            .into_path();

        let library_path = dir.join(&file_name);
        std::fs::write(&library_path, bytes)
            .map_err(|e| LoadError::new(name, format!("cannot extract bundled library: {e}")))?;

        self.linker.load_from_path(name, &library_path)
    }
}

/// Loads from the code generator's output directory under the current
/// working directory.
pub struct GeneratedOutputStrategy {
    root: Option<PathBuf>,
    relative: PathBuf,
    linker: Arc<dyn NativeLinker>,
}

impl GeneratedOutputStrategy {
    /// Conventional location: [`GENERATED_OUTPUT_DIR`] under the working
    /// directory, read at attempt time.
    pub fn new(linker: Arc<dyn NativeLinker>) -> Self {
        Self {
            root: None,
            relative: PathBuf::from(GENERATED_OUTPUT_DIR),
            linker,
        }
    }

    /// Resolve against a fixed root instead of the working directory.
    pub fn rooted_at(root: impl Into<PathBuf>, linker: Arc<dyn NativeLinker>) -> Self {
        Self {
            root: Some(root.into()),
            relative: PathBuf::from(GENERATED_OUTPUT_DIR),
            linker,
        }
    }

    fn root_dir(&self, name: &str) -> Result<PathBuf, LoadError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir()
                .map_err(|e| LoadError::new(name, format!("cannot read working directory: {e}"))),
        }
    }
}

impl LoadStrategy for GeneratedOutputStrategy {
    fn attempt_load(&self, name: &str) -> Result<(), LoadError> {
        let path = self
            .root_dir(name)?
            .join(&self.relative)
            .join(physical_file_name(name));
        load_if_present(self.linker.as_ref(), name, &path)
    }
}

/// Loads from a fixed absolute installation directory, conventionally the
/// OpenCV Java package location.
pub struct InstallPathStrategy {
    dir: PathBuf,
    linker: Arc<dyn NativeLinker>,
}

impl InstallPathStrategy {
    pub fn new(linker: Arc<dyn NativeLinker>) -> Self {
        Self::in_dir(OPENCV_INSTALL_DIR, linker)
    }

    pub fn in_dir(dir: impl Into<PathBuf>, linker: Arc<dyn NativeLinker>) -> Self {
        Self {
            dir: dir.into(),
            linker,
        }
    }
}

impl LoadStrategy for InstallPathStrategy {
    fn attempt_load(&self, name: &str) -> Result<(), LoadError> {
        let path = self.dir.join(physical_file_name(name));
        load_if_present(self.linker.as_ref(), name, &path)
    }
}

/// Existence check first: a path known in advance not to exist never reaches
/// the linker.
fn load_if_present(linker: &dyn NativeLinker, name: &str, path: &Path) -> Result<(), LoadError> {
    if path.exists() {
        linker.load_from_path(name, path)
    } else {
        Err(LoadError::new(
            name,
            format!("{} does not exist", path.display()),
        ))
    }
}
