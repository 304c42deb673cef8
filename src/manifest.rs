//! In-memory view of the generated `package.json`
//!
//! The package manager creates the manifest and records dependencies in it.
//! The generator only owns the `scripts` map and tool configuration blocks,
//! which accumulate here during the run and are merged into the file once by
//! [`ProjectManifest::flush`].

use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ioutils::{read_json, write_json};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectManifest {
    scripts: IndexMap<String, String>,
    blocks: IndexMap<String, Value>,
}

impl ProjectManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a run script.
    pub fn set_script(&mut self, name: impl Into<String>, command: impl Into<String>) {
        self.scripts.insert(name.into(), command.into());
    }

    pub fn scripts(&self) -> &IndexMap<String, String> {
        &self.scripts
    }

    /// Adds or replaces a top-level configuration block such as `lint-staged`.
    pub fn set_block(&mut self, key: impl Into<String>, value: Value) {
        self.blocks.insert(key.into(), value);
    }

    pub fn block(&self, key: &str) -> Option<&Value> {
        self.blocks.get(key)
    }

    /// Merges the owned fields into `other`, which must be a JSON object.
    ///
    /// `scripts` replaces the existing map. Each block replaces its key.
    /// Every other key keeps its value and position.
    pub fn merge_into(&self, other: &mut Value) -> std::result::Result<(), String> {
        let object = other
            .as_object_mut()
            .ok_or_else(|| "manifest root is not a JSON object".to_string())?;

        if !self.scripts.is_empty() {
            let scripts = self
                .scripts
                .iter()
                .map(|(name, command)| (name.clone(), Value::String(command.clone())))
                .collect();
            log::trace!("Replacing manifest scripts with {:?}", self.scripts.keys());
            object.insert("scripts".to_string(), Value::Object(scripts));
        }

        for (key, value) in &self.blocks {
            log::trace!("Setting manifest block '{key}'");
            object.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    /// Reads the manifest at `path`, merges the owned fields and writes it back.
    pub fn flush<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut document = read_json(path)?;
        self.merge_into(&mut document)
            .map_err(|reason| Error::ManifestError { path: path.display().to_string(), reason })?;
        write_json(&document, path)
    }
}
