//! Output type definitions.

/// One reported pair of genomes.
#[derive(Debug, Clone, PartialEq)]
pub struct DistRecord {
    /// Genome from the query sketch.
    pub query: String,
    /// Genome from the target sketch.
    pub target: String,
    /// Estimated mutation distance.
    pub mutation_distance: f64,
    /// P-value of the estimate.
    pub p_value: f64,
    /// Estimated Jaccard index.
    pub jaccard: f64,
}
