//! Deployment manifest handling module
//!
//! This module provides the uniform contract over manifest dialects: every
//! variant can load a document, enumerate the image references it contains,
//! rewrite a matching reference to a new tag, and serialize the document
//! back out. The set of dialects is closed; new ones are added as a variant
//! plus a factory case, never by changing existing variant behavior.

pub mod kubernetes;
pub mod kustomize;

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::error::{BumpError, Result};
use crate::reference::ImageReference;

pub use kubernetes::KubernetesManifest;
pub use kustomize::KustomizeManifest;

/// Uniform contract over manifest dialects.
///
/// Lifecycle: constructed empty by [`get_manifest`], populated exactly once
/// by `load`, then queried with `get_images`, mutated with `modify`, and
/// optionally serialized with `write`. Every operation besides `load` fails
/// with [`BumpError::NotLoaded`] on a never-loaded manifest.
pub trait Manifest {
    /// Deserializes the stream into this manifest's document, replacing any
    /// previously loaded document.
    fn load(&mut self, reader: &mut dyn Read) -> Result<()>;

    /// Serializes the current document to the stream.
    fn write(&self, writer: &mut dyn Write) -> Result<()>;

    /// Returns the image references this document contains, in document
    /// order.
    fn get_images(&self) -> Result<Vec<ImageReference>>;

    /// Rewrites the tag of every image reference whose repository equals
    /// `repository`. Zero matches is a silent no-op; multiple matches all
    /// update.
    fn modify(&mut self, repository: &str, new_tag: &str) -> Result<()>;
}

/// The closed set of recognized manifest dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Kubernetes,
    Kustomize,
    /// Recognized but not yet implemented; the factory refuses it with
    /// [`BumpError::NotImplemented`] rather than constructing a broken
    /// manifest.
    Helm,
}

impl FromStr for ManifestKind {
    type Err = BumpError;

    fn from_str(dialect: &str) -> Result<Self> {
        match dialect {
            "kubernetes" => Ok(ManifestKind::Kubernetes),
            "kustomize" => Ok(ManifestKind::Kustomize),
            "helm" => Ok(ManifestKind::Helm),
            other => Err(BumpError::UnknownDialect(other.to_string())),
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ManifestKind::Kubernetes => "kubernetes",
            ManifestKind::Kustomize => "kustomize",
            ManifestKind::Helm => "helm",
        };
        write!(f, "{}", name)
    }
}

/// Constructs an empty manifest for the given dialect.
pub fn get_manifest(kind: ManifestKind) -> Result<Box<dyn Manifest>> {
    match kind {
        ManifestKind::Kubernetes => Ok(Box::new(KubernetesManifest::new())),
        ManifestKind::Kustomize => Ok(Box::new(KustomizeManifest::new())),
        ManifestKind::Helm => Err(BumpError::NotImplemented(kind.to_string())),
    }
}

/// String-keyed convenience over [`get_manifest`] for callers holding the
/// dialect name as text (the CLI). Unrecognized names fail with
/// [`BumpError::UnknownDialect`] naming the offending value.
pub fn get_manifest_named(dialect: &str) -> Result<Box<dyn Manifest>> {
    get_manifest(dialect.parse()?)
}
