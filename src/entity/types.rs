//! Entity map types.

use std::num::NonZeroU64;

/// Number of consecutive sequences that make up one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceCount {
    /// An explicit count from the list file.
    Known(NonZeroU64),
    /// Every remaining sequence of the file; counted later from the file itself.
    Remaining,
}

impl SequenceCount {
    /// The explicit count, if there is one.
    pub fn known(self) -> Option<u64> {
        match self {
            Self::Known(n) => Some(n.get()),
            Self::Remaining => None,
        }
    }
}

impl std::fmt::Display for SequenceCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(n) => write!(f, "{n}"),
            Self::Remaining => write!(f, "all"),
        }
    }
}

/// One entity within a file, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityGroup {
    /// Dense entity id.
    pub entity_id: usize,
    /// Sequences belonging to the entity.
    pub count: SequenceCount,
}

/// Mapping between input files, entity ids and entity names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMap {
    pub(super) file_groups: Vec<Vec<EntityGroup>>,
    pub(super) file_names: Vec<String>,
    pub(super) entity_names: Vec<String>,
}

impl EntityMap {
    /// Number of input files.
    pub fn file_count(&self) -> usize {
        self.file_names.len()
    }

    /// Number of entities; ids run from 0 to this value, exclusive.
    pub fn entity_count(&self) -> usize {
        self.entity_names.len()
    }

    /// Entity groups of file `file_id`, in file order.
    pub fn groups(&self, file_id: usize) -> Option<&[EntityGroup]> {
        self.file_groups.get(file_id).map(Vec::as_slice)
    }

    /// Path of file `file_id`.
    pub fn file_name(&self, file_id: usize) -> Option<&str> {
        self.file_names.get(file_id).map(String::as_str)
    }

    /// Name of entity `entity_id`.
    pub fn entity_name(&self, entity_id: usize) -> Option<&str> {
        self.entity_names.get(entity_id).map(String::as_str)
    }

    /// Entity groups of every file, indexed by file id.
    pub fn file_groups(&self) -> &[Vec<EntityGroup>] {
        &self.file_groups
    }

    /// File paths, indexed by file id.
    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    /// Entity names, indexed by entity id.
    pub fn entity_names(&self) -> &[String] {
        &self.entity_names
    }

    /// Iterate `(file_id, file_name, groups)`.
    pub fn files(&self) -> impl Iterator<Item = (usize, &str, &[EntityGroup])> {
        self.file_names
            .iter()
            .zip(&self.file_groups)
            .enumerate()
            .map(|(id, (name, groups))| (id, name.as_str(), groups.as_slice()))
    }
}
