//! Seam to the sketch and distance engines.
//!
//! Hashing, k-mer extraction and the distance statistics live outside this
//! crate. The dispatcher hands them validated configurations through these
//! traits; [`ConfigOnly`] is used when no engine is linked in.

use crate::config::{DistConfig, SketchConfig};
use crate::entity::EntityMap;
use crate::error::Result;
use crate::output::ResultWriter;
use std::path::Path;
use tracing::{debug, info};

/// Builds sketches from resolved inputs.
pub trait SketchEngine {
    /// Sketch every entity of `entities` under `config`.
    fn sketch(&self, config: &SketchConfig, entities: &EntityMap) -> Result<()>;
}

/// One sketch handed to the distance engine.
#[derive(Debug, Clone, Copy)]
pub struct SketchInput<'a> {
    /// Path the sketch was read from.
    pub path: &'a Path,
    /// Its persisted configuration.
    pub config: &'a SketchConfig,
}

/// Compares two sketches.
pub trait DistanceEngine {
    /// Compare `query` against `target` and report pairs passing the
    /// thresholds of `config` to `out`.
    fn compare(
        &self,
        query: SketchInput<'_>,
        target: SketchInput<'_>,
        config: &DistConfig,
        out: &mut dyn ResultWriter,
    ) -> Result<()>;
}

/// Engine that computes nothing.
///
/// Sketching only records the plan (the header is still written by the
/// dispatcher); comparing reports no pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOnly;

impl SketchEngine for ConfigOnly {
    fn sketch(&self, config: &SketchConfig, entities: &EntityMap) -> Result<()> {
        for (file_id, file_name, groups) in entities.files() {
            for group in groups {
                debug!(
                    "file {file_id} ({file_name}): genome {} '{}' with {} sequence(s)",
                    group.entity_id,
                    entities.entity_name(group.entity_id).unwrap_or_default(),
                    group.count
                );
            }
        }
        info!(
            "No sketch engine linked; recorded configuration for {} genome(s) (k={}, sketchsize64={}, minhashtype={})",
            entities.entity_count(),
            config.kmerlen,
            config.sketchsize64,
            config.minhashtype
        );
        Ok(())
    }
}

impl DistanceEngine for ConfigOnly {
    fn compare(
        &self,
        query: SketchInput<'_>,
        target: SketchInput<'_>,
        _config: &DistConfig,
        _out: &mut dyn ResultWriter,
    ) -> Result<()> {
        info!(
            "No distance engine linked; {} and {} are compatible, nothing to report",
            query.path.display(),
            target.path.display()
        );
        Ok(())
    }
}
