//! Bundled resource store
//!
//! Read-only lookup of library bytes shipped inside the application itself.
//! Rust has no ambient classpath, so the embedding application registers its
//! bundled libraries explicitly, typically from `include_bytes!` data.

use std::borrow::Cow;
use std::collections::HashMap;

/// Read-only store of bundled resources, keyed by physical file name.
pub trait ResourceStore: Send + Sync {
    /// Open a resource by file name, or report it absent.
    fn open(&self, file_name: &str) -> Option<&[u8]>;
}

/// The built-in store: a map from physical file name to bytes.
///
/// ```ignore
/// let mut resources = EmbeddedResources::new();
/// resources.insert("libopencv_java.so", include_bytes!("libopencv_java.so"));
/// ```
#[derive(Debug, Default)]
pub struct EmbeddedResources {
    entries: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bytes of a bundled library under its physical file name.
    pub fn insert(&mut self, file_name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(file_name.into(), bytes.into());
    }
}

impl ResourceStore for EmbeddedResources {
    fn open(&self, file_name: &str) -> Option<&[u8]> {
        self.entries.get(file_name).map(|bytes| bytes.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_file_name() {
        let mut resources = EmbeddedResources::new();
        resources.insert("libfoo.so", &b"\x7fELF fake"[..]);

        assert_eq!(resources.open("libfoo.so"), Some(&b"\x7fELF fake"[..]));
        assert_eq!(resources.open("libbar.so"), None);
    }

    #[test]
    fn empty_store_reports_absent() {
        assert_eq!(EmbeddedResources::new().open("libfoo.so"), None);
    }
}
