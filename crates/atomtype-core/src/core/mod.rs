//! # Core Module
//!
//! This module provides the constant tables and data models that every typer
//! and mapper builds on.
//!
//! ## Key Components
//!
//! - **Atom Models** ([`models`]) - The atom query interface and the classification result
//! - **Element Constants** ([`elements`]) - Symbols, covalent radii and metal classification
//! - **Gnina Parameters** ([`params`]) - The fixed table of Gnina atom categories
//!
//! ## Scientific Foundation
//!
//! The Gnina categories are variants of the AutoDock4 atom types, refined with
//! the hydrophobe, donor and acceptor roles of the X-Score scoring function.
//! Each category carries the AutoDock radius, well depth, solvation and volume
//! terms, a covalent radius and an X-Score docking radius.

pub mod elements;
pub mod models;
pub mod params;
