//! # Core Module
//!
//! This module provides the fundamental building blocks for representing and
//! summarizing macromolecular structures read from PDB files.
//!
//! ## Overview
//!
//! The core is a single linear pipeline: raw text is parsed into an in-memory
//! hierarchy, and the hierarchy is walked once to produce a statistics record.
//! There is no geometry computation, no validation of coordinates, and no
//! persistent state; each invocation builds its own structure and discards it.
//!
//! - **Structure Representation** ([`models`]) - Arena-backed data structures
//!   for atoms, residues, chains, models, and the owning structure
//! - **File I/O** ([`io`]) - Reading fixed-column PDB coordinate records into
//!   the structure hierarchy
//! - **Statistics** ([`stats`]) - Classification of residues and aggregation
//!   of file-wide summary counts

pub mod io;
pub mod models;
pub mod stats;
