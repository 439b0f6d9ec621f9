//! Document model for loaded manifests
//!
//! A document is the in-memory tree a manifest file deserializes into:
//! nested mappings, sequences, and scalars, held as [`serde_yaml::Value`].
//! The manifest variants only ever navigate this tree; all text
//! (de)serialization is delegated to serde_yaml here.

use std::io::{Read, Write};

use serde_yaml::{Sequence, Value};

use crate::error::{BumpError, Result};

/// The loaded in-memory structure of one manifest file.
pub type Document = Value;

/// Holder for a manifest's document with an explicit loaded/unloaded state.
///
/// A slot starts empty and is populated exactly once per `load` call.
/// Accessors fail with [`BumpError::NotLoaded`] until then. An empty but
/// successfully loaded document (YAML `null` or `{}`) still counts as
/// loaded; the guard is the slot state, not the document's content.
#[derive(Debug, Default)]
pub struct DocumentSlot {
    document: Option<Document>,
}

impl DocumentSlot {
    pub fn new() -> Self {
        Self { document: None }
    }

    /// Deserializes the stream into the slot, replacing any previous
    /// document. Malformed input surfaces the serde_yaml error unchanged.
    pub fn load(&mut self, reader: &mut dyn Read) -> Result<()> {
        let document = serde_yaml::from_reader(reader)?;
        self.document = Some(document);
        Ok(())
    }

    /// Serializes the current document to the stream. Requires a prior load.
    pub fn write(&self, writer: &mut dyn Write) -> Result<()> {
        serde_yaml::to_writer(writer, self.get()?)?;
        Ok(())
    }

    pub fn get(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(BumpError::NotLoaded)
    }

    pub fn get_mut(&mut self) -> Result<&mut Document> {
        self.document.as_mut().ok_or(BumpError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }
}

/// Walks a mapping path and returns the sequence at its end.
///
/// A missing segment or a non-sequence endpoint is a structure error naming
/// the path, so callers see `document has no 'spec.template' field` instead
/// of a bare lookup failure.
pub fn lookup_sequence<'a>(document: &'a Document, path: &[&str]) -> Result<&'a Sequence> {
    let mut current = document;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .get(*key)
            .ok_or_else(|| missing_field(path, depth))?;
    }
    current.as_sequence().ok_or_else(|| not_a_sequence(path))
}

/// Mutable counterpart of [`lookup_sequence`].
pub fn lookup_sequence_mut<'a>(
    document: &'a mut Document,
    path: &[&str],
) -> Result<&'a mut Sequence> {
    let mut current = document;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .get_mut(*key)
            .ok_or_else(|| missing_field(path, depth))?;
    }
    current.as_sequence_mut().ok_or_else(|| not_a_sequence(path))
}

fn missing_field(path: &[&str], depth: usize) -> BumpError {
    BumpError::Structure(format!(
        "document has no '{}' field",
        path[..=depth].join(".")
    ))
}

fn not_a_sequence(path: &[&str]) -> BumpError {
    BumpError::Structure(format!("'{}' is not a sequence", path.join(".")))
}
