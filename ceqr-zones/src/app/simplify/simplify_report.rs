use crate::algorithm::classification::ClassificationSummary;
use serde::Serialize;

/// summary of a completed simplification run
#[derive(Serialize, Clone, Debug)]
pub struct SimplifyReport {
    pub traffic_zones: usize,
    pub zone_units: usize,
    pub census_tracts: usize,
    pub census_blocks: usize,
    pub classification: ClassificationSummary,
    pub diagnostics: usize,
    pub output_zones: usize,
    pub output_file: String,
}
