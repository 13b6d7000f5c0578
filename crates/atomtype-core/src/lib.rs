//! # atomtype
//!
//! Reduces a single atom to a compact category index or feature vector, paired
//! with a radius, as input for grid and voxel encoders of molecular structures.
//!
//! ## Architectural Philosophy
//!
//! The library never perceives chemistry and never owns molecules. It reads
//! already-perceived properties from one atom at a time through the
//! [`AtomProperties`](core::models::atom::AtomProperties) trait and answers
//! with a table lookup. Everything is immutable after construction, so a single
//! typer can be shared freely between threads.
//!
//! - **[`core`]: The Foundation.** Atom query interface, classification
//!   results, the periodic table constants and the Gnina category table.
//!
//! - **[`typers`]: Classification.** Index typers (rule-based Gnina categories,
//!   atomic numbers) and the Gnina feature-vector typer.
//!
//! - **[`mappers`]: Remapping.** Collapse a fine-grained category space into a
//!   coarser one, from a mapping file or from explicit subsets, and compose the
//!   result with any index typer through
//!   [`MappedAtomIndexTyper`](typers::mapped::MappedAtomIndexTyper).
//!
//! - **[`config`]** and **[`workflows`]: The Public API.** Build a typer from a
//!   TOML description and type whole slices of atoms in parallel.

pub mod config;
pub mod core;
pub mod mappers;
pub mod typers;
pub mod workflows;
