//! File extension filter applied to directory listings.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// A file-name suffix such as `.png`.
///
/// Always non-empty and starting with `.`. Matching is a literal,
/// case-sensitive comparison against the end of the file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Chart images.
    pub const PNG: &'static str = ".png";
    /// Interactive map fragments.
    pub const HTML: &'static str = ".html";

    /// Validate and wrap a suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyExtension`] for an empty string and
    /// [`ValidationError::MissingDot`] when it does not begin with `.`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyExtension);
        }
        if !value.starts_with('.') {
            return Err(ValidationError::MissingDot(value));
        }
        Ok(Self(value))
    }

    /// Wrap one of the built-in suffixes without re-validating it.
    pub(crate) fn known(value: &'static str) -> Self {
        debug_assert!(value.starts_with('.'));
        Self(value.to_string())
    }

    /// The raw suffix, dot included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `file_name` ends with this suffix.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(self.0.as_str())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_dotted_suffix() {
        let ext = Extension::new(".png").unwrap();
        assert_eq!(ext.as_str(), ".png");
        assert_eq!(ext.to_string(), ".png");
    }

    #[test]
    fn should_reject_empty_suffix() {
        assert_eq!(Extension::new(""), Err(ValidationError::EmptyExtension));
    }

    #[test]
    fn should_reject_suffix_without_dot() {
        assert_eq!(
            Extension::new("png"),
            Err(ValidationError::MissingDot("png".to_string()))
        );
    }

    #[test]
    fn should_match_trailing_characters_only() {
        let ext = Extension::new(".png").unwrap();
        assert!(ext.matches("drone.png"));
        assert!(ext.matches(".hidden.png"));
        assert!(!ext.matches("drone.png.bak"));
        assert!(!ext.matches("notes.txt"));
    }

    #[test]
    fn should_match_case_sensitively() {
        let ext = Extension::new(".png").unwrap();
        assert!(!ext.matches("DRONE.PNG"));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let ext = Extension::new(".html").unwrap();
        assert_eq!(serde_json::to_string(&ext).unwrap(), "\".html\"");
    }
}
