//! Kustomize overlay manifest variant
//!
//! Image references live at `images[*]` as `{name, newTag}` pairs rather
//! than combined strings, so no codec is involved in reading this dialect's
//! native form; `name` stands in for the repository.

use std::io::{Read, Write};

use serde_yaml::Value;

use crate::document::{DocumentSlot, lookup_sequence, lookup_sequence_mut};
use crate::error::{BumpError, Result};
use crate::manifest::Manifest;
use crate::reference::ImageReference;

const IMAGES_PATH: [&str; 1] = ["images"];

#[derive(Debug, Default)]
pub struct KustomizeManifest {
    slot: DocumentSlot,
}

impl KustomizeManifest {
    pub fn new() -> Self {
        Self {
            slot: DocumentSlot::new(),
        }
    }

    fn name_of(entry: &Value) -> Result<&str> {
        entry.get("name").and_then(Value::as_str).ok_or_else(|| {
            BumpError::Structure("images entry has no string 'name' field".to_string())
        })
    }

    /// Renders the `newTag` scalar to text. Real overlays carry both quoted
    /// and unquoted tags, so numbers and bools (`newTag: 1.25`) are accepted
    /// alongside strings.
    fn tag_of(entry: &Value) -> Result<String> {
        let tag = entry.get("newTag").ok_or_else(|| {
            BumpError::Structure("images entry has no 'newTag' field".to_string())
        })?;
        match tag {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            _ => Err(BumpError::Structure(
                "'newTag' is not a scalar".to_string(),
            )),
        }
    }
}

impl Manifest for KustomizeManifest {
    fn load(&mut self, reader: &mut dyn Read) -> Result<()> {
        self.slot.load(reader)
    }

    fn write(&self, writer: &mut dyn Write) -> Result<()> {
        self.slot.write(writer)
    }

    fn get_images(&self) -> Result<Vec<ImageReference>> {
        let images = lookup_sequence(self.slot.get()?, &IMAGES_PATH)?;
        images
            .iter()
            .map(|entry| {
                Ok(ImageReference {
                    repository: Self::name_of(entry)?.to_string(),
                    tag: Some(Self::tag_of(entry)?),
                })
            })
            .collect()
    }

    fn modify(&mut self, repository: &str, new_tag: &str) -> Result<()> {
        let images = lookup_sequence_mut(self.slot.get_mut()?, &IMAGES_PATH)?;
        for entry in images.iter_mut() {
            if Self::name_of(entry)? != repository {
                continue;
            }
            let mapping = entry.as_mapping_mut().ok_or_else(|| {
                BumpError::Structure("images entry is not a mapping".to_string())
            })?;
            mapping.insert(Value::from("newTag"), Value::from(new_tag));
        }
        Ok(())
    }
}
