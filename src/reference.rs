//! Image reference parsing and reconstruction
//!
//! An image reference is a `repository:tag` pair as it appears inside a
//! deployment manifest. Parsing and unparsing are dialect-agnostic; the
//! manifest variants decide where these strings live in a document.

use serde::Serialize;
use std::fmt;

/// A container image reference: repository plus optional tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    pub repository: String,
    pub tag: Option<String>,
}

impl ImageReference {
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: Some(tag.into()),
        }
    }

    /// Parses a combined image string into repository and tag.
    ///
    /// Splits on the first `:`; a string without `:` has no tag. Total over
    /// all inputs, never fails.
    ///
    /// Known limitation: a repository containing `:` itself (a registry host
    /// with an explicit port, e.g. `myregistry:5000/app:v1`) splits at the
    /// port colon. Kept as-is for compatibility with existing manifests.
    pub fn parse(image: &str) -> Self {
        match image.split_once(':') {
            Some((repository, tag)) => Self {
                repository: repository.to_string(),
                tag: Some(tag.to_string()),
            },
            None => Self {
                repository: image.to_string(),
                tag: None,
            },
        }
    }

    /// Reassembles the combined `repository:tag` string.
    ///
    /// An absent tag produces a trailing-colon string (`"repo:"`). Manifest
    /// rewriting always supplies a concrete tag, so that form is never
    /// written to a document; use [`Display`](fmt::Display) for human output.
    pub fn unparse(&self) -> String {
        format!("{}:{}", self.repository, self.tag.as_deref().unwrap_or(""))
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}:{}", self.repository, tag),
            None => write!(f, "{}", self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_tag() {
        let reference = ImageReference::parse("nginx:1.25");
        assert_eq!(reference.repository, "nginx");
        assert_eq!(reference.tag.as_deref(), Some("1.25"));
    }

    #[test]
    fn test_parse_without_tag() {
        let reference = ImageReference::parse("nginx");
        assert_eq!(reference.repository, "nginx");
        assert_eq!(reference.tag, None);
    }

    #[test]
    fn test_unparse() {
        let reference = ImageReference::new("registry.example.com/app", "v2.0");
        assert_eq!(reference.unparse(), "registry.example.com/app:v2.0");
    }

    #[test]
    fn test_roundtrip_single_colon() {
        let original = "registry.example.com/team/app:2024-01-15";
        assert_eq!(ImageReference::parse(original).unparse(), original);
    }

    #[test]
    fn test_parse_unparse_identity() {
        let reference = ImageReference::new("app", "9");
        assert_eq!(ImageReference::parse(&reference.unparse()), reference);
    }

    #[test]
    fn test_unparse_absent_tag_trailing_colon() {
        let reference = ImageReference::parse("nginx");
        assert_eq!(reference.unparse(), "nginx:");
    }

    #[test]
    fn test_parse_registry_port_limitation() {
        // Splits at the first colon, so an explicit registry port lands in
        // the tag. Pinned so the behavior cannot drift silently.
        let reference = ImageReference::parse("myregistry:5000/app:v1");
        assert_eq!(reference.repository, "myregistry");
        assert_eq!(reference.tag.as_deref(), Some("5000/app:v1"));
    }

    #[test]
    fn test_display_without_tag_omits_colon() {
        assert_eq!(ImageReference::parse("nginx").to_string(), "nginx");
        assert_eq!(ImageReference::parse("nginx:1.25").to_string(), "nginx:1.25");
    }
}
