//! Logical name to physical file name mapping

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};

/// Map a logical library name to its physical file name.
///
/// Fixed platform convention: prefix + name + shared-library suffix
/// (`libfoo.so` on Linux, `libfoo.dylib` on macOS, `foo.dll` on Windows).
/// Pure function; the name is used verbatim with no validation.
pub fn physical_file_name(logical_name: &str) -> String {
    format!("{DLL_PREFIX}{logical_name}{DLL_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_platform_prefix_and_suffix() {
        assert_eq!(
            physical_file_name("foo"),
            format!("{DLL_PREFIX}foo{DLL_SUFFIX}")
        );

        #[cfg(target_os = "linux")]
        assert_eq!(physical_file_name("foo"), "libfoo.so");
        #[cfg(target_os = "macos")]
        assert_eq!(physical_file_name("foo"), "libfoo.dylib");
        #[cfg(windows)]
        assert_eq!(physical_file_name("foo"), "foo.dll");
    }

    #[test]
    fn name_is_used_verbatim() {
        // No escaping, no validation
        let name = "weird name/with.dots";
        assert!(physical_file_name(name).contains(name));
    }
}
