use super::AtomIndexTyper;
use super::error::TypingError;
use crate::core::models::atom::AtomProperties;
use crate::core::models::types::AtomType;
use crate::mappers::AtomIndexTypeMapper;

/// An index typer whose output has been passed through a mapper.
///
/// The wrapped typer does the classification; the mapper only renames the
/// resulting id, and the radius is passed through untouched. Either side may
/// be a concrete type or a boxed trait object.
///
/// Category count and names come from the mapper, unless the mapper is the
/// identity, in which case the wrapped typer's are reported instead.
#[derive(Debug, Clone)]
pub struct MappedAtomIndexTyper<M, T> {
    mapper: M,
    typer: T,
}

impl<M, T> MappedAtomIndexTyper<M, T>
where
    M: AtomIndexTypeMapper,
    T: AtomIndexTyper,
{
    pub fn new(mapper: M, typer: T) -> Self {
        Self { mapper, typer }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn typer(&self) -> &T {
        &self.typer
    }
}

impl<M, T> AtomIndexTyper for MappedAtomIndexTyper<M, T>
where
    M: AtomIndexTypeMapper,
    T: AtomIndexTyper,
{
    fn num_types(&self) -> usize {
        if self.mapper.is_identity() {
            self.typer.num_types()
        } else {
            self.mapper.num_types()
        }
    }

    fn get_type(&self, atom: &dyn AtomProperties) -> Result<AtomType, TypingError> {
        let original = self.typer.get_type(atom)?;
        let index = match original.index {
            Some(index) => self.mapper.get_type(index)?,
            None => None,
        };
        Ok(AtomType {
            index,
            radius: original.radius,
        })
    }

    fn get_type_names(&self) -> Vec<String> {
        if self.mapper.is_identity() {
            self.typer.get_type_names()
        } else {
            self.mapper.get_type_names()
        }
    }
}
