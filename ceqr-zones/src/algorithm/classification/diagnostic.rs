use crate::model::{census::TractKey, zone::ZoneId};
use itertools::Itertools;
use std::fmt::Display;

/// coverage gaps observed during classification
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// none of the tract's candidate zone units intersect it
    DiscardedTract { key: TractKey },
    /// the block did not overlap any of its candidates and went to the first candidate
    ZeroOverlapBlock { block_id: String, zone_id: ZoneId },
    /// the block geometry was empty after normalization
    DiscardedBlock { block_id: String },
    /// the tract spans several zones but has no census blocks to split it with
    TractWithoutBlocks { key: TractKey },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::DiscardedTract { key } => {
                write!(f, "tract {key} intersects no candidate zone unit, discarded")
            }
            Diagnostic::ZeroOverlapBlock { block_id, zone_id } => write!(
                f,
                "block {block_id} overlaps no candidate zone unit, assigned to zone {zone_id}"
            ),
            Diagnostic::DiscardedBlock { block_id } => {
                write!(f, "block {block_id} has empty geometry, discarded")
            }
            Diagnostic::TractWithoutBlocks { key } => {
                write!(f, "tract {key} spans multiple zones but has no blocks")
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn discarded_tracts(&self) -> Vec<&TractKey> {
        self.0
            .iter()
            .filter_map(|d| match d {
                Diagnostic::DiscardedTract { key } => Some(key),
                _ => None,
            })
            .collect_vec()
    }

    /// logs each diagnostic as a warning followed by a one-line summary
    pub fn log_summary(&self) {
        if self.0.is_empty() {
            log::info!("classification finished without coverage gaps");
            return;
        }
        for d in self.0.iter() {
            log::warn!("{d}");
        }
        let counts = self
            .0
            .iter()
            .map(|d| match d {
                Diagnostic::DiscardedTract { .. } => "discarded tracts",
                Diagnostic::ZeroOverlapBlock { .. } => "zero overlap blocks",
                Diagnostic::DiscardedBlock { .. } => "discarded blocks",
                Diagnostic::TractWithoutBlocks { .. } => "tracts without blocks",
            })
            .counts();
        let summary = counts
            .into_iter()
            .sorted()
            .map(|(name, count)| format!("{count} {name}"))
            .join(", ");
        log::warn!("classification coverage gaps: {summary}; consider increasing tract_k/block_k");
    }
}
