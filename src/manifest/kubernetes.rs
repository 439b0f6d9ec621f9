//! Kubernetes deployment manifest variant
//!
//! Image references live at `spec.template.spec.containers[*].image` as
//! combined `repository:tag` strings, read and written through the codec in
//! [`crate::reference`].

use std::io::{Read, Write};

use serde_yaml::Value;

use crate::document::{DocumentSlot, lookup_sequence, lookup_sequence_mut};
use crate::error::{BumpError, Result};
use crate::manifest::Manifest;
use crate::reference::ImageReference;

const CONTAINERS_PATH: [&str; 4] = ["spec", "template", "spec", "containers"];

#[derive(Debug, Default)]
pub struct KubernetesManifest {
    slot: DocumentSlot,
}

impl KubernetesManifest {
    pub fn new() -> Self {
        Self {
            slot: DocumentSlot::new(),
        }
    }

    fn image_of(container: &Value) -> Result<&str> {
        container
            .get("image")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BumpError::Structure("container entry has no string 'image' field".to_string())
            })
    }
}

impl Manifest for KubernetesManifest {
    fn load(&mut self, reader: &mut dyn Read) -> Result<()> {
        self.slot.load(reader)
    }

    fn write(&self, writer: &mut dyn Write) -> Result<()> {
        self.slot.write(writer)
    }

    fn get_images(&self) -> Result<Vec<ImageReference>> {
        let containers = lookup_sequence(self.slot.get()?, &CONTAINERS_PATH)?;
        containers
            .iter()
            .map(|container| Ok(ImageReference::parse(Self::image_of(container)?)))
            .collect()
    }

    fn modify(&mut self, repository: &str, new_tag: &str) -> Result<()> {
        let containers = lookup_sequence_mut(self.slot.get_mut()?, &CONTAINERS_PATH)?;
        for container in containers.iter_mut() {
            let image = Self::image_of(container)?.to_string();
            if ImageReference::parse(&image).repository != repository {
                continue;
            }
            let rewritten = ImageReference::new(repository, new_tag).unparse();
            let entry = container.as_mapping_mut().ok_or_else(|| {
                BumpError::Structure("container entry is not a mapping".to_string())
            })?;
            entry.insert(Value::from("image"), Value::from(rewritten));
        }
        Ok(())
    }
}
