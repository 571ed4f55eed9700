use super::atom::Atom;
use super::ids::{ChainId, ResidueId};
use super::structure::Structure;
use nalgebra::Point3;

/// Incrementally assembles a [`Structure`] from records in file order.
///
/// The builder tracks the current model, chain, and residue so that a parser
/// can stream coordinate records through it in a single pass. Chains and
/// residues are deduplicated by identity, so re-entering a previously seen
/// chain or residue continues the existing one.
pub struct StructureBuilder {
    structure: Structure,

    // --- Builder-specific cursor state ---
    current_model: Option<usize>,
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: Structure::new(),
            current_model: None,
            current_chain: None,
            current_residue: None,
        }
    }

    /// Returns true if a model is currently open.
    pub fn in_model(&self) -> bool {
        self.current_model.is_some()
    }

    /// Opens a new model; subsequent chains and residues belong to it.
    pub fn start_model(&mut self, serial: i32) -> &mut Self {
        let idx = self.structure.add_model(serial);
        self.current_model = Some(idx);
        self.current_chain = None;
        self.current_residue = None;
        self
    }

    /// Closes the current model, e.g. on an ENDMDL record.
    pub fn end_model(&mut self) -> &mut Self {
        self.current_model = None;
        self.current_chain = None;
        self.current_residue = None;
        self
    }

    /// Returns the number of models opened so far.
    pub fn model_count(&self) -> usize {
        self.structure.models().len()
    }

    pub fn start_chain(&mut self, id: char) -> &mut Self {
        let model_idx = self
            .current_model
            .expect("Must start a model before starting a chain");
        let chain_id = self
            .structure
            .add_chain(model_idx, id)
            .expect("Current model index must be valid");
        self.current_chain = Some(chain_id);
        self.current_residue = None;
        self
    }

    pub fn start_residue(
        &mut self,
        seq_num: isize,
        icode: Option<char>,
        name: &str,
        hetero: bool,
    ) -> &mut Self {
        let chain_id = self
            .current_chain
            .expect("Must start a chain before starting a residue");
        let residue_id = self
            .structure
            .add_residue(chain_id, seq_num, icode, name, hetero)
            .expect("Current chain ID must be valid");
        self.current_residue = Some(residue_id);
        self
    }

    pub fn add_atom(
        &mut self,
        serial: usize,
        name: &str,
        element: &str,
        position: Point3<f64>,
    ) -> &mut Self {
        let residue_id = self
            .current_residue
            .expect("Cannot add atom without a current residue");

        let mut atom = Atom::new(name, residue_id, position);
        atom.serial = serial;
        atom.element = element.to_string();
        self.structure
            .add_atom_to_residue(residue_id, atom)
            .expect("Current residue ID must be valid");
        self
    }

    pub fn build(self) -> Structure {
        self.structure
    }
}
