//! Gallery tile identity

use control_center_sdk::EntityKind;

/// A tile in one of the entity galleries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub kind: EntityKind,
    /// Position in the catalog
    pub index: usize,
}

impl CardId {
    pub fn new(kind: EntityKind, index: usize) -> Self {
        Self { kind, index }
    }
}
