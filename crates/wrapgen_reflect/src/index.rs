use crate::{ReflectError, TypeDescriptor};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Registry of type descriptors keyed by fully-qualified name.
///
/// Stands in for a reflection facility: the CLI populates it from JSON
/// metadata documents (each a list of descriptors) and resolves wrappee
/// names against it.
#[derive(Debug, Default, Clone)]
pub struct TypeIndex {
    types: HashMap<String, TypeDescriptor>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor, replacing any previous entry for the name.
    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.full_name.clone(), descriptor);
    }

    pub fn get(&self, full_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(full_name)
    }

    pub fn resolve(&self, full_name: &str) -> Result<&TypeDescriptor, ReflectError> {
        self.get(full_name).ok_or_else(|| ReflectError::UnknownType {
            name: full_name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Loads every descriptor from a JSON metadata file into the index.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ReflectError> {
        let text = fs::read_to_string(path).map_err(|source| ReflectError::MetadataIo {
            path: path.to_path_buf(),
            source,
        })?;
        let descriptors: Vec<TypeDescriptor> =
            serde_json::from_str(&text).map_err(|source| ReflectError::MetadataParse {
                path: path.to_path_buf(),
                source,
            })?;
        for descriptor in descriptors {
            self.insert(descriptor);
        }
        Ok(())
    }
}
