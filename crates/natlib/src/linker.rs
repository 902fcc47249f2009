//! Host dynamic-linker primitives
//!
//! Cross-platform access to the two loading primitives the resolver
//! orchestrates:
//! - load by search-path name (the linker's own lookup rules apply)
//! - load from an explicit filesystem path
//!
//! Loading is a process-wide side effect: handles are intentionally leaked
//! so the mapping stays valid for the life of the process. There is no
//! unload.

use std::path::Path;

use crate::error::LoadError;
use crate::naming::physical_file_name;

/// The host runtime's dynamic-linking facility.
///
/// Implementations must convert every platform failure into [`LoadError`];
/// strategies rely on that to keep the fallback contract uniform.
pub trait NativeLinker: Send + Sync {
    /// Load a library by logical name from the configured search path.
    ///
    /// The implementation applies the platform naming convention itself;
    /// callers pass the logical name unmodified.
    fn load_by_name(&self, name: &str) -> Result<(), LoadError>;

    /// Load a library from an explicit filesystem path.
    ///
    /// `name` is the logical name, carried only for error reporting.
    fn load_from_path(&self, name: &str, path: &Path) -> Result<(), LoadError>;
}

/// The real host linker.
///
/// # Platform-specific behavior
///
/// - **Unix**: `dlopen(RTLD_NOW | RTLD_LOCAL)`; failure text from `dlerror()`
/// - **Windows**: `LoadLibraryW`; failure text from `GetLastError()`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinker;

impl NativeLinker for SystemLinker {
    fn load_by_name(&self, name: &str) -> Result<(), LoadError> {
        // A bare file name (no path separator) makes the platform linker
        // walk its own search path.
        platform::load(name, Path::new(&physical_file_name(name)))
    }

    fn load_from_path(&self, name: &str, path: &Path) -> Result<(), LoadError> {
        platform::load(name, path)
    }
}

// ============================================================================
// Unix Implementation (Linux, macOS, BSD)
// ============================================================================

#[cfg(unix)]
mod platform {
    use std::ffi::{CStr, CString};
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    use crate::error::LoadError;

    pub fn load(name: &str, path: &Path) -> Result<(), LoadError> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| LoadError::new(name, format!("invalid library path: {e}")))?;

        let handle = unsafe {
            // RTLD_NOW: Resolve all symbols immediately
            // RTLD_LOCAL: Symbols not available for subsequently loaded libraries
            libc::dlopen(c_path.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL)
        };

        if handle.is_null() {
            let error = unsafe {
                let err_ptr = libc::dlerror();
                if err_ptr.is_null() {
                    "unknown dlopen error".to_string()
                } else {
                    CStr::from_ptr(err_ptr).to_string_lossy().into_owned()
                }
            };
            return Err(LoadError::new(name, error));
        }

        // Handle leaked on purpose: the library must stay mapped for the
        // life of the process.
        Ok(())
    }
}

// ============================================================================
// Windows Implementation
// ============================================================================

#[cfg(windows)]
mod platform {
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;

    use crate::error::LoadError;

    pub fn load(name: &str, path: &Path) -> Result<(), LoadError> {
        let wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        let handle = unsafe { LoadLibraryW(wide.as_ptr()) };

        if handle.is_null() {
            let error = unsafe { GetLastError() };
            return Err(LoadError::new(
                name,
                format!("{} (error code: {})", path.display(), error),
            ));
        }

        // Handle leaked on purpose, as on unix.
        Ok(())
    }

    extern "system" {
        fn LoadLibraryW(filename: *const u16) -> *mut std::ffi::c_void;
        fn GetLastError() -> u32;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_reports_load_error() {
        let result = SystemLinker.load_from_path("ghost", Path::new("/nonexistent/libghost.so"));
        let err = result.unwrap_err();
        assert_eq!(err.name(), "ghost");
    }

    #[test]
    fn unknown_name_reports_load_error() {
        let err = SystemLinker
            .load_by_name("natlib_no_such_library")
            .unwrap_err();
        assert_eq!(err.name(), "natlib_no_such_library");
    }
}
