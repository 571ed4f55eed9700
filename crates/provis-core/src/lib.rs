//! # Provis Core Library
//!
//! A library for parsing Protein Data Bank (PDB) structure files and deriving
//! per-structure summary statistics (atom, residue, water, and model counts,
//! chain composition, and the set of bound ligands).
//!
//! ## Architectural Philosophy
//!
//! The library is designed as a small stack of independent layers, so that the
//! parsing core stays pure and the presentation concerns stay at the edges.
//!
//! - **[`core`]: The Foundation.** Contains the hierarchical structure model
//!   (`Structure` → models → chains → residues → atoms), the fixed-column PDB
//!   reader, and the statistics aggregator that walks the hierarchy.
//!
//! - **[`view`]: The Rendering Boundary.** Declares the style and color-scheme
//!   vocabulary understood by external 3-D viewers and bundles raw PDB text
//!   with a rendering configuration. The library never renders anything
//!   itself; it only hands the unmodified text across this boundary.
//!
//! - **[`summary`]: The Public API.** The highest-level entry point, tying the
//!   parser and the aggregator together into a single call that turns raw PDB
//!   text into a [`core::stats::StructureStats`] record.

pub mod core;
pub mod summary;
pub mod view;
