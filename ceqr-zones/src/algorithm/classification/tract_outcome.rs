use crate::model::zone::ZoneId;

/// result of classifying one census tract
#[derive(Clone, Debug, PartialEq)]
pub enum TractOutcome {
    /// every intersecting zone unit belongs to one zone; the whole tract was assigned to it
    Whole(ZoneId),
    /// the tract touches several zones and was assigned block by block
    Split { zones: usize, blocks: usize },
    /// no candidate zone unit intersects the tract; nothing was assigned
    Discarded,
}
