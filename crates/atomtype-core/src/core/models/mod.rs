//! # Core Models Module
//!
//! This module contains the data structures that flow through every typer and
//! mapper in the library.
//!
//! ## Overview
//!
//! Typers do not own molecules. They read a handful of already-perceived
//! properties from one atom at a time and return a compact classification.
//! The models here describe both ends of that exchange:
//!
//! - **What is read** - the [`atom::AtomProperties`] trait, implemented by the
//!   caller's structure toolkit (or by the plain [`atom::AtomRecord`])
//! - **What is produced** - the [`types::AtomType`] pair of category id and radius
//!
//! ## Usage
//!
//! ```ignore
//! use atomtype::core::models::atom::AtomRecord;
//! use atomtype::typers::{AtomIndexTyper, gnina::GninaIndexTyper};
//!
//! let water_oxygen = AtomRecord::new(8).hydrogens(2).acceptor(true);
//! let typed = GninaIndexTyper::default().get_type(&water_oxygen)?;
//! assert_eq!(typed.index, Some(12)); // OxygenXSDonorAcceptor
//! ```

pub mod atom;
pub mod types;
