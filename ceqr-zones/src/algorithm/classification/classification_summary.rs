use super::TractOutcome;
use serde::Serialize;

/// counts of tract outcomes for a classification run
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub whole_tracts: usize,
    pub split_tracts: usize,
    pub discarded_tracts: usize,
    pub assigned_blocks: usize,
}

impl ClassificationSummary {
    pub fn record(&mut self, outcome: &TractOutcome) {
        match outcome {
            TractOutcome::Whole(_) => self.whole_tracts += 1,
            TractOutcome::Split { blocks, .. } => {
                self.split_tracts += 1;
                self.assigned_blocks += blocks;
            }
            TractOutcome::Discarded => self.discarded_tracts += 1,
        }
    }

    pub fn total_tracts(&self) -> usize {
        self.whole_tracts + self.split_tracts + self.discarded_tracts
    }
}
