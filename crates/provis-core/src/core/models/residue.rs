use super::ids::{AtomId, ChainId};

/// Residue name that marks a water molecule. Only this exact code is treated
/// as water; deuterated or otherwise non-standard water codes are not.
pub const WATER_RESIDUE_NAME: &str = "HOH";

/// The statistics category of a residue.
///
/// Every residue falls into exactly one category, decided in a fixed order:
/// the water check runs before the heteroflag check, so an "HOH" record is
/// always water even though the source format also flags it as a heteroatom
/// entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCategory {
    /// A water molecule (residue name "HOH").
    Water,
    /// A non-water heteroatom residue (ligand, ion, modified group).
    Ligand,
    /// A standard polymer residue (amino acid or nucleotide).
    Polymer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub seq_num: isize,              // Residue sequence number from source file
    pub name: String,                // Name of the residue (e.g., "ALA", "HOH")
    pub icode: Option<char>,         // Insertion code, part of residue identity
    pub hetero: bool,                // True if loaded from a HETATM record
    pub chain_id: ChainId,           // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,   // Atoms belonging to this residue, in file order
}

impl Residue {
    pub(crate) fn new(
        seq_num: isize,
        name: &str,
        icode: Option<char>,
        hetero: bool,
        chain_id: ChainId,
    ) -> Self {
        Self {
            seq_num,
            name: name.to_string(),
            icode,
            hetero,
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    /// Classifies this residue for aggregation.
    ///
    /// The name check precedes the heteroflag check: a residue named "HOH" is
    /// water regardless of the record type it was loaded from.
    pub fn category(&self) -> ResidueCategory {
        if self.name == WATER_RESIDUE_NAME {
            ResidueCategory::Water
        } else if self.hetero {
            ResidueCategory::Ligand
        } else {
            ResidueCategory::Polymer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = ChainId::default();
        let residue = Residue::new(10, "GLY", None, false, chain_id);
        assert_eq!(residue.seq_num, 10);
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.icode, None);
        assert!(!residue.hetero);
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.atoms().is_empty());
    }

    #[test]
    fn polymer_residue_is_classified_as_polymer() {
        let residue = Residue::new(1, "ALA", None, false, ChainId::default());
        assert_eq!(residue.category(), ResidueCategory::Polymer);
    }

    #[test]
    fn hetero_residue_is_classified_as_ligand() {
        let residue = Residue::new(301, "NAG", None, true, ChainId::default());
        assert_eq!(residue.category(), ResidueCategory::Ligand);
    }

    #[test]
    fn water_is_classified_as_water_regardless_of_heteroflag() {
        let from_hetatm = Residue::new(401, "HOH", None, true, ChainId::default());
        let from_atom = Residue::new(402, "HOH", None, false, ChainId::default());
        assert_eq!(from_hetatm.category(), ResidueCategory::Water);
        assert_eq!(from_atom.category(), ResidueCategory::Water);
    }

    #[test]
    fn only_exact_water_code_is_water() {
        let heavy_water = Residue::new(1, "DOD", None, true, ChainId::default());
        assert_eq!(heavy_water.category(), ResidueCategory::Ligand);
    }
}
