//! # Mappers Module
//!
//! This module remaps the category ids produced by an index typer onto a
//! smaller (or merely reordered) category space, without touching the
//! classification rules that produced the original ids.
//!
//! ## Overview
//!
//! A mapper sees only integers. Each original id is sent either to a new id in
//! `[0, num_types())` or to "no category" (`None`, exposed to signed-integer
//! consumers as [`UNMAPPED`](crate::core::models::types::UNMAPPED)). Only a
//! mapper whose [`is_identity`](AtomIndexTypeMapper::is_identity) is `true`
//! leaves the category space of the wrapped typer in place; every other mapper
//! defines its own, possibly empty, space.
//!
//! ## Key Components
//!
//! - [`IdentityMapper`] - explicit pass-through
//! - [`file`] - mapping read from a text file, one new category per line
//! - [`subset`] - mapping built from explicit id subsets or groups
//!
//! ## Usage
//!
//! ```ignore
//! use atomtype::mappers::file::FileAtomMapper;
//! use atomtype::typers::{AtomIndexTyper, gnina::GninaIndexTyper, mapped::MappedAtomIndexTyper};
//!
//! let typer = GninaIndexTyper::default();
//! let mapper = FileAtomMapper::parse("Hydrogen PolarHydrogen\nZinc Iron\n", &typer.get_type_names())?;
//! let reduced = MappedAtomIndexTyper::new(mapper, typer);
//! assert_eq!(reduced.num_types(), 2);
//! ```

pub mod error;
pub mod file;
pub mod subset;

use error::MappingError;
use std::sync::Arc;

/// Maps original category ids onto a new category space.
pub trait AtomIndexTypeMapper: Send + Sync {
    /// Number of new categories.
    fn num_types(&self) -> usize;

    /// Maps an original id to a new id, or `None` when it has no new category.
    fn get_type(&self, original: usize) -> Result<Option<usize>, MappingError>;

    /// Display names of the new categories.
    fn get_type_names(&self) -> Vec<String>;

    /// Whether ids pass through unchanged, so the original category space is
    /// kept.
    fn is_identity(&self) -> bool {
        false
    }
}

/// A mapper that leaves every id unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityMapper;

impl AtomIndexTypeMapper for IdentityMapper {
    fn num_types(&self) -> usize {
        0
    }

    fn get_type(&self, original: usize) -> Result<Option<usize>, MappingError> {
        Ok(Some(original))
    }

    fn get_type_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn is_identity(&self) -> bool {
        true
    }
}

macro_rules! forward_mapper {
    ($($ptr:ty),*) => {$(
        impl<T: AtomIndexTypeMapper + ?Sized> AtomIndexTypeMapper for $ptr {
            fn num_types(&self) -> usize {
                (**self).num_types()
            }
            fn get_type(&self, original: usize) -> Result<Option<usize>, MappingError> {
                (**self).get_type(original)
            }
            fn get_type_names(&self) -> Vec<String> {
                (**self).get_type_names()
            }
            fn is_identity(&self) -> bool {
                (**self).is_identity()
            }
        }
    )*};
}

forward_mapper!(&T, Box<T>, Arc<T>);
