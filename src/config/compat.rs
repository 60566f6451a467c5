//! Compatibility of two persisted sketch configurations.

use crate::config::SketchConfig;
use crate::constants::keys;
use crate::error::{Error, Result};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One field whose value differs between two sketch configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Option name, e.g. `--bbits`.
    pub field: &'static str,
    /// Value in the left-hand configuration.
    pub left: String,
    /// Value in the right-hand configuration.
    pub right: String,
    /// Sketch the left-hand configuration was read from.
    pub left_path: PathBuf,
    /// Sketch the right-hand configuration was read from.
    pub right_path: PathBuf,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} has values {} and {} in files {} and {}, respectively",
            self.field,
            self.left,
            self.right,
            self.left_path.display(),
            self.right_path.display()
        )
    }
}

/// Compare every field that affects whether two sketches can be compared.
///
/// Returns all mismatches, in option order. `nthreads`, `outfname`,
/// `listfname` and the inputs never matter.
pub fn find_mismatches(
    left: &SketchConfig,
    left_path: &Path,
    right: &SketchConfig,
    right_path: &Path,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    let mut check = |field: &'static str, a: &dyn Display, b: &dyn Display| {
        let (a, b) = (a.to_string(), b.to_string());
        if a != b {
            mismatches.push(Mismatch {
                field,
                left: a,
                right: b,
                left_path: left_path.to_path_buf(),
                right_path: right_path.to_path_buf(),
            });
        }
    };

    check(keys::BBITS, &left.bbits, &right.bbits);
    check(
        keys::IS_CASE_PRESERVED,
        &left.iscasepreserved,
        &right.iscasepreserved,
    );
    check(
        keys::IS_STRAND_PRESERVED,
        &left.isstrandpreserved,
        &right.isstrandpreserved,
    );
    check(keys::KMERLEN, &left.kmerlen, &right.kmerlen);
    check(keys::MINHASHTYPE, &left.minhashtype, &right.minhashtype);
    check(keys::RANDSEED, &left.randseed, &right.randseed);
    check(keys::SKETCHSIZE64, &left.sketchsize64, &right.sketchsize64);

    mismatches
}

/// Fail with [`Error::ConfigMismatch`] unless the two configurations are compatible.
pub fn verify_compatible(
    left: &SketchConfig,
    left_path: &Path,
    right: &SketchConfig,
    right_path: &Path,
) -> Result<()> {
    let mismatches = find_mismatches(left, left_path, right, right_path);
    if mismatches.is_empty() {
        return Ok(());
    }

    for mismatch in &mismatches {
        warn!("{mismatch}");
    }

    Err(Error::ConfigMismatch {
        left_path: left_path.to_path_buf(),
        right_path: right_path.to_path_buf(),
        mismatches,
    })
}
