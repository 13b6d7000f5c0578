//! # Typers Module
//!
//! This module reduces a single atom to either a category index or a numeric
//! feature vector, each paired with a radius for downstream grid encoders.
//!
//! ## Overview
//!
//! Two capabilities are defined here:
//!
//! - [`AtomIndexTyper`] - assigns exactly one category id and a radius
//! - [`AtomVectorTyper`] - fills a fixed-length feature vector and returns a radius
//!
//! ## Key Components
//!
//! - [`gnina`] - rule-based classifier over the 28 Gnina categories
//! - [`element`] - atomic-number classifier with a configurable cutoff
//! - [`vector`] - decomposition of Gnina categories into element and property features
//! - [`mapped`] - composition of any index typer with a type mapper
//!
//! All typers are immutable once built and may be shared across threads
//! without synchronization.

pub mod element;
pub mod error;
pub mod gnina;
pub mod mapped;
pub mod vector;

use crate::core::models::atom::AtomProperties;
use crate::core::models::types::AtomType;
use error::TypingError;
use std::sync::Arc;

/// Assigns a single category id plus radius to an atom.
pub trait AtomIndexTyper: Send + Sync {
    /// Number of categories this typer can produce.
    fn num_types(&self) -> usize;

    /// Classifies `atom` into a category id and radius.
    fn get_type(&self, atom: &dyn AtomProperties) -> Result<AtomType, TypingError>;

    /// Display names of the categories, indexed by category id.
    fn get_type_names(&self) -> Vec<String>;
}

/// Decomposes an atom into a fixed-length feature vector plus radius.
pub trait AtomVectorTyper: Send + Sync {
    /// Length of the produced feature vector.
    fn num_types(&self) -> usize;

    /// Overwrites `features` with the atom's feature vector (resized to
    /// [`num_types`](Self::num_types)) and returns the atom's radius.
    fn get_type(&self, atom: &dyn AtomProperties, features: &mut Vec<f32>)
    -> Result<f32, TypingError>;

    /// Display names of the vector positions.
    fn get_type_names(&self) -> Vec<String>;
}

macro_rules! forward_index_typer {
    ($($ptr:ty),*) => {$(
        impl<T: AtomIndexTyper + ?Sized> AtomIndexTyper for $ptr {
            fn num_types(&self) -> usize {
                (**self).num_types()
            }
            fn get_type(&self, atom: &dyn AtomProperties) -> Result<AtomType, TypingError> {
                (**self).get_type(atom)
            }
            fn get_type_names(&self) -> Vec<String> {
                (**self).get_type_names()
            }
        }
    )*};
}

macro_rules! forward_vector_typer {
    ($($ptr:ty),*) => {$(
        impl<T: AtomVectorTyper + ?Sized> AtomVectorTyper for $ptr {
            fn num_types(&self) -> usize {
                (**self).num_types()
            }
            fn get_type(
                &self,
                atom: &dyn AtomProperties,
                features: &mut Vec<f32>,
            ) -> Result<f32, TypingError> {
                (**self).get_type(atom, features)
            }
            fn get_type_names(&self) -> Vec<String> {
                (**self).get_type_names()
            }
        }
    )*};
}

forward_index_typer!(&T, Box<T>, Arc<T>);
forward_vector_typer!(&T, Box<T>, Arc<T>);
