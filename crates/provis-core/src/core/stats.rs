use crate::core::models::residue::ResidueCategory;
use crate::core::models::structure::Structure;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Summary statistics derived from one parsed structure.
///
/// All counts are file-wide sums over every model, not per the first model
/// only. Water residues contribute their atoms to `atoms` but appear in
/// neither `residues` nor `ligands`; ligand residues likewise contribute
/// atoms but are only collected as distinct names. Chain lengths count
/// polymer residues only and are keyed by chain letter alone, so a chain
/// letter recurring across models accumulates into a single merged sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureStats {
    /// Total number of atoms across all residues and models.
    pub atoms: usize,
    /// Number of polymer residues (waters and ligands excluded).
    pub residues: usize,
    /// Distinct chain identifiers, lexicographically sorted.
    pub chains: Vec<char>,
    /// Number of distinct chain identifiers.
    pub nr_chains: usize,
    /// Polymer-residue count per chain identifier, summed across models.
    pub chain_lengths: BTreeMap<char, usize>,
    /// Distinct ligand residue names, lexicographically sorted.
    pub ligands: Vec<String>,
    /// Number of distinct ligand names.
    pub nr_ligands: usize,
    /// Number of water residues.
    pub waters: usize,
    /// Number of models in the file.
    pub models: usize,
}

impl StructureStats {
    /// Walks a structure and computes its summary statistics.
    ///
    /// Never fails for a structure produced by the parser. For the degenerate
    /// case of a structure with zero models (which the parser never emits),
    /// this returns a zeroed record with `models == 0`.
    pub fn compute(structure: &Structure) -> Self {
        let mut atoms = 0;
        let mut residues = 0;
        let mut waters = 0;
        let mut chain_ids = BTreeSet::new();
        let mut ligands = BTreeSet::new();
        let mut chain_lengths: BTreeMap<char, usize> = BTreeMap::new();

        for model in structure.models() {
            for &chain_id in model.chains() {
                let Some(chain) = structure.chain(chain_id) else {
                    continue;
                };
                chain_ids.insert(chain.id);
                for &residue_id in chain.residues() {
                    let Some(residue) = structure.residue(residue_id) else {
                        continue;
                    };
                    // Every residue contributes its atoms to the total,
                    // whichever category it falls into.
                    atoms += residue.atoms().len();
                    match residue.category() {
                        ResidueCategory::Water => waters += 1,
                        ResidueCategory::Ligand => {
                            ligands.insert(residue.name.clone());
                        }
                        ResidueCategory::Polymer => {
                            residues += 1;
                            *chain_lengths.entry(chain.id).or_insert(0) += 1;
                        }
                    }
                }
            }
        }

        let chains: Vec<char> = chain_ids.into_iter().collect();
        let ligands: Vec<String> = ligands.into_iter().collect();
        Self {
            atoms,
            residues,
            nr_chains: chains.len(),
            chains,
            chain_lengths,
            nr_ligands: ligands.len(),
            ligands,
            waters,
            models: structure.models().len(),
        }
    }
}
