//! # Structure Models Module
//!
//! This module contains the data structures used to represent the contents of
//! a PDB file as an ownership hierarchy: a [`structure::Structure`] owns an
//! ordered sequence of models, each model owns its chains, each chain its
//! residues, and each residue its atoms.
//!
//! ## Overview
//!
//! Storage is arena-based: atoms, residues, and chains live in slot maps and
//! are referenced by stable typed ids ([`ids`]). An atom carries a
//! back-reference to its owning residue without owning it, and the hierarchy
//! is immutable once built. Construction goes through
//! [`builder::StructureBuilder`], which tracks the current model, chain, and
//! residue while coordinate records are streamed in file order.
//!
//! - [`atom`] - Individual coordinate records with their name and element
//! - [`residue`] - Named chemical units and their statistics classification
//! - [`chain`] - Labeled strands of residues within one model
//! - [`model`] - One coordinate set of a (possibly multi-model) file
//! - [`structure`] - The root arena tying everything together
//! - [`builder`] - Streaming construction of a structure in file order
//! - [`ids`] - Typed identifiers for atoms, residues, and chains

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod model;
pub mod residue;
pub mod structure;
