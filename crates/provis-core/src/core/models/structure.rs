use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::model::Model;
use super::residue::Residue;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Represents the complete contents of one parsed structure file.
///
/// This struct is the root of the ownership hierarchy: it owns an ordered
/// sequence of models, and arena storage for every chain, residue, and atom
/// referenced by those models. Lookup maps resolve file-level identities
/// (chain letters, residue sequence numbers) to stable arena ids.
///
/// A structure is built once per parse, read during one statistics
/// computation, and discarded; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Ordered list of models in file order.
    models: Vec<Model>,
    /// Lookup map for finding chains by model index and chain letter.
    chain_id_map: HashMap<(usize, char), ChainId>,
    /// Lookup map for finding residues by chain, sequence number, and insertion code.
    residue_id_map: HashMap<(ChainId, isize, Option<char>), ResidueId>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves an immutable reference to a residue by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Residue)` if the residue exists, otherwise `None`.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves an immutable reference to a chain by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Chain)` if the chain exists, otherwise `None`.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns the models of this structure in file order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Returns an iterator over all atoms in the structure.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Returns an iterator over all residues in the structure.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Returns an iterator over all chains in the structure.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Returns the total number of atoms in the structure.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Finds a chain ID by model index and chain letter.
    ///
    /// # Arguments
    ///
    /// * `model_index` - The zero-based index of the model to search in.
    /// * `id` - The character identifier of the chain.
    ///
    /// # Return
    ///
    /// Returns `Some(ChainId)` if the chain exists in that model, otherwise `None`.
    pub fn find_chain_by_id(&self, model_index: usize, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&(model_index, id)).copied()
    }

    /// Finds a residue ID by its chain ID, sequence number, and insertion code.
    ///
    /// Residue identity is the (chain, sequence number, insertion code)
    /// triple; the residue name is an attribute, not part of the key.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if the residue exists, otherwise `None`.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        seq_num: isize,
        icode: Option<char>,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, seq_num, icode))
            .copied()
    }

    /// Appends a new model and returns its zero-based index.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number from the MODEL record (1 for an
    ///   implicit model).
    pub fn add_model(&mut self, serial: i32) -> usize {
        self.models.push(Model::new(serial));
        self.models.len() - 1
    }

    /// Adds a new chain to a model or returns the existing one.
    ///
    /// This method is idempotent; if the model already contains a chain with
    /// the given letter, the existing chain ID is returned. The same letter
    /// in a different model always produces a distinct chain.
    ///
    /// # Arguments
    ///
    /// * `model_index` - The zero-based index of the model to add the chain to.
    /// * `id` - The single-character identifier for the chain.
    ///
    /// # Return
    ///
    /// Returns `Some(ChainId)` of the chain (new or existing), or `None` if
    /// the model index is out of range.
    pub fn add_chain(&mut self, model_index: usize, id: char) -> Option<ChainId> {
        let model = self.models.get_mut(model_index)?;

        let chain_id = *self
            .chain_id_map
            .entry((model_index, id))
            .or_insert_with(|| self.chains.insert(Chain::new(id)));

        if !model.chains.contains(&chain_id) {
            model.chains.push(chain_id);
        }
        Some(chain_id)
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// This method is idempotent on the identity triple (chain, sequence
    /// number, insertion code); two coordinate records sharing this key merge
    /// into the same residue even if they are not contiguous in the file. The
    /// name and heteroflag of the first-seen record win.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain to add the residue to.
    /// * `seq_num` - The residue sequence number.
    /// * `icode` - The insertion code, if any.
    /// * `name` - The residue name (e.g., "ALA", "HOH").
    /// * `hetero` - Whether the creating record was a HETATM entry.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if
    /// the chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        seq_num: isize,
        icode: Option<char>,
        name: &str,
        hetero: bool,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, seq_num, icode);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            self.residues
                .insert(Residue::new(seq_num, name, icode, hetero, chain_id))
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }
        Some(residue_id)
    }

    /// Adds an atom to a residue, transferring ownership to the structure.
    ///
    /// The atom's back-reference is set to the owning residue.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, or `None` if the residue doesn't
    /// exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get_mut(residue_id)?;
        atom.residue_id = residue_id;
        let atom_id = self.atoms.insert(atom);
        residue.atoms.push(atom_id);
        Some(atom_id)
    }
}
