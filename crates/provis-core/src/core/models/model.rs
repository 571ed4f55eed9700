use super::ids::ChainId;

/// One coordinate set within a structure.
///
/// Multi-model files (e.g., NMR ensembles) contain several MODEL records;
/// files without explicit MODEL records are represented as exactly one
/// implicit model. Chain identifiers are unique within a model but may repeat
/// across models of the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub serial: i32,                   // Serial from the MODEL record, or 1 if implicit
    pub(crate) chains: Vec<ChainId>,   // Chains of this model, in first-seen file order
}

impl Model {
    pub(crate) fn new(serial: i32) -> Self {
        Self {
            serial,
            chains: Vec::new(),
        }
    }

    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }
}
