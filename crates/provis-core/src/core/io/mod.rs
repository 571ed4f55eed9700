//! Provides input functionality for structure file formats.
//!
//! This module contains the fixed-column PDB coordinate-record reader and the
//! trait-based interface it implements. The reader extracts only what the
//! statistics core needs; it is deliberately not a strict format validator.

pub mod pdb;
pub mod traits;
