//! Load failure type shared by strategies and the resolver

use thiserror::Error;

/// A native library could not be loaded.
///
/// Deliberately a single kind: a missing file, a missing bundled resource,
/// an I/O failure while extracting, and a linker failure all collapse into
/// this one error so the fallback driver can treat every strategy uniformly.
/// `cause` is the text of the last underlying failure only.
#[derive(Debug, Clone, Error)]
#[error("failed to load native library `{name}`: {cause}")]
pub struct LoadError {
    name: String,
    cause: String,
}

impl LoadError {
    pub fn new(name: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cause: cause.into(),
        }
    }

    /// Logical name of the library the caller asked for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of the underlying failure from the last attempt
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_name_and_cause() {
        let err = LoadError::new("opencv_java", "no such file");
        assert_eq!(err.name(), "opencv_java");
        assert_eq!(err.cause(), "no such file");
        assert_eq!(
            err.to_string(),
            "failed to load native library `opencv_java`: no such file"
        );
    }
}
