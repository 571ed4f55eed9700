//! High-level entry points tying the parser and the aggregator together.
//!
//! This is the one-call API most consumers want: raw PDB text in, a
//! [`StructureStats`] record out. Each call builds its own structure, holds
//! it only for the duration of the computation, and shares nothing with other
//! calls.

use crate::core::io::pdb::{PdbError, PdbFile};
use crate::core::io::traits::StructureFile;
use crate::core::stats::StructureStats;
use std::path::Path;

/// Parses raw PDB text and computes its summary statistics.
///
/// # Errors
///
/// Returns a [`PdbError`] if the text contains no coordinate records or a
/// coordinate record is missing its chain identifier or residue sequence
/// number.
pub fn summarize(text: &str) -> Result<StructureStats, PdbError> {
    let structure = PdbFile::read_from_str(text)?;
    Ok(StructureStats::compute(&structure))
}

/// Reads a PDB file from disk and computes its summary statistics.
///
/// # Errors
///
/// Returns a [`PdbError`] if the file cannot be opened or parsing fails.
pub fn summarize_path<P: AsRef<Path>>(path: P) -> Result<StructureStats, PdbError> {
    let structure = PdbFile::read_from_path(path)?;
    Ok(StructureStats::compute(&structure))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RESIDUE_PDB: &str = "\
HEADER    TEST STRUCTURE
ATOM      1  N   ALA A   1      11.104  13.207   2.100  1.00  0.00           N
ATOM      2  CA  ALA A   1      12.560  13.329   2.279  1.00  0.00           C
ATOM      3  N   GLY A   2      13.104  14.207   2.900  1.00  0.00           N
HETATM    4  O   HOH A 101      15.000  15.000  15.000  1.00  0.00           O
END
";

    #[test]
    fn summarize_computes_the_full_record() {
        let stats = summarize(TWO_RESIDUE_PDB).unwrap();
        assert_eq!(stats.atoms, 4);
        assert_eq!(stats.residues, 2);
        assert_eq!(stats.chains, vec!['A']);
        assert_eq!(stats.nr_chains, 1);
        assert_eq!(stats.chain_lengths[&'A'], 2);
        assert!(stats.ligands.is_empty());
        assert_eq!(stats.waters, 1);
        assert_eq!(stats.models, 1);
    }

    #[test]
    fn summarize_is_idempotent() {
        let first = summarize(TWO_RESIDUE_PDB).unwrap();
        let second = summarize(TWO_RESIDUE_PDB).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn summarize_rejects_empty_input() {
        assert!(matches!(summarize(""), Err(PdbError::MissingRecord(_))));
    }

    #[test]
    fn summarize_merges_chain_lengths_across_models() {
        let text = "\
MODEL        1
ATOM      1  CA  ALA A   1      11.104  13.207   2.100  1.00  0.00           C
ATOM      2  CA  GLY A   2      13.104  14.207   2.900  1.00  0.00           C
ENDMDL
MODEL        2
ATOM      1  CA  ALA A   1      11.204  13.107   2.200  1.00  0.00           C
ATOM      2  CA  GLY A   2      13.004  14.307   2.800  1.00  0.00           C
ENDMDL
END
";
        let stats = summarize(text).unwrap();
        assert_eq!(stats.models, 2);
        assert_eq!(stats.chains, vec!['A']);
        assert_eq!(stats.chain_lengths[&'A'], 4);
        assert_eq!(stats.residues, 4);
        assert_eq!(stats.atoms, 4);
    }

    #[test]
    fn summarize_never_lists_water_as_a_ligand() {
        let text = "\
HETATM    1  O   HOH A 101      15.000  15.000  15.000  1.00  0.00           O
HETATM    2  O   HOH A 102      16.000  16.000  16.000  1.00  0.00           O
";
        let stats = summarize(text).unwrap();
        assert_eq!(stats.waters, 2);
        assert_eq!(stats.atoms, 2);
        assert!(stats.ligands.is_empty());
        assert_eq!(stats.nr_ligands, 0);
        assert_eq!(stats.residues, 0);
    }

    #[test]
    fn summarize_path_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.pdb");
        std::fs::write(&path, TWO_RESIDUE_PDB).unwrap();

        let stats = summarize_path(&path).unwrap();
        assert_eq!(stats.atoms, 4);
    }
}
