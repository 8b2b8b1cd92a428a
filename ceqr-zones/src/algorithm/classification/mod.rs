mod block_assignment;
mod classification_summary;
mod diagnostic;
mod nearest_neighbor_params;
mod tract_outcome;
mod zone_classifier;

pub use block_assignment::BlockAssignment;
pub use classification_summary::ClassificationSummary;
pub use diagnostic::{Diagnostic, Diagnostics};
pub use nearest_neighbor_params::NearestNeighborParams;
pub use tract_outcome::TractOutcome;
pub use zone_classifier::ZoneClassifier;
