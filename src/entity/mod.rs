//! Resolution of input files into a global genome-entity space.
//!
//! Every input descriptor line names one sequence file and, optionally, the
//! genomes it contains with their number of consecutive sequences. Genome
//! names are unique across the whole input set and receive dense ids in
//! first-seen order.

mod builder;
mod types;

pub use builder::{EntityNameSet, build_entity_map};
pub use types::{EntityGroup, EntityMap, SequenceCount};
