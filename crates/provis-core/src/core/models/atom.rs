use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents a single coordinate record from a PDB file.
///
/// An atom belongs to exactly one residue, referenced through `residue_id`
/// without ownership. Coordinates are carried as opaque pass-through data;
/// the statistics core never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name label (e.g., "CA", "N", "O").
    pub name: String,
    /// The element symbol from the record, possibly empty (e.g., "C", "FE").
    pub element: String,
    /// The atom serial number from the source file.
    pub serial: usize,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms, stored but never used
    /// by the statistics aggregation.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` owned by the given residue.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name label.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element: String::new(),
            serial: 0,
            residue_id,
            position,
        }
    }
}
