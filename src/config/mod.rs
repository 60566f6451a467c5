//! Command configurations and their persistence.

mod compat;
mod dist;
mod sketch;
mod store;
mod types;

pub use compat::{Mismatch, find_mismatches, verify_compatible};
pub use dist::{DIST_COMMAND, DistConfig};
pub use sketch::{SKETCH_COMMAND, SketchConfig};
pub use store::{
    Provenance, load_sketch_config, parse_sketch_header, render_sketch_header, save_sketch_config,
    save_sketch_config_to,
};
pub use types::MinhashType;
