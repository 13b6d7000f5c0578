use crate::core::models::atom::AtomProperties;
use crate::core::models::types::AtomType;
use crate::typers::error::TypingError;
use crate::typers::{AtomIndexTyper, AtomVectorTyper};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// A feature vector together with the atom's radius.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizedAtom {
    pub features: Vec<f32>,
    pub radius: f32,
}

/// Types every atom in parallel. Results are returned in input order, one per atom.
#[instrument(skip_all, name = "type_atoms", fields(num_atoms = atoms.len()))]
pub fn type_atoms<T, A>(typer: &T, atoms: &[A]) -> Vec<Result<AtomType, TypingError>>
where
    T: AtomIndexTyper + ?Sized,
    A: AtomProperties + Sync,
{
    let results: Vec<_> = atoms.par_iter().map(|atom| typer.get_type(atom)).collect();
    debug!(
        failures = results.iter().filter(|r| r.is_err()).count(),
        "Atom typing complete."
    );
    results
}

/// Vectorizes every atom in parallel. Results are returned in input order, one per atom.
#[instrument(skip_all, name = "vectorize_atoms", fields(num_atoms = atoms.len()))]
pub fn vectorize_atoms<T, A>(typer: &T, atoms: &[A]) -> Vec<Result<VectorizedAtom, TypingError>>
where
    T: AtomVectorTyper + ?Sized,
    A: AtomProperties + Sync,
{
    atoms
        .par_iter()
        .map(|atom| {
            let mut features = Vec::with_capacity(typer.num_types());
            let radius = typer.get_type(atom, &mut features)?;
            Ok(VectorizedAtom { features, radius })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;
    use crate::mappers::subset::SubsetAtomMapper;
    use crate::typers::gnina::GninaIndexTyper;
    use crate::typers::gnina::fixtures::corpus;
    use crate::typers::mapped::MappedAtomIndexTyper;
    use crate::typers::vector::{GninaVectorTyper, NUM_VECTOR_TYPES};

    #[test]
    fn type_atoms_matches_sequential_typing_in_order() {
        let typer = GninaIndexTyper::default();
        let atoms = corpus();
        let results = type_atoms(&typer, &atoms);

        assert_eq!(results.len(), atoms.len());
        for (atom, result) in atoms.iter().zip(&results) {
            assert_eq!(*result.as_ref().unwrap(), typer.get_type(atom).unwrap());
        }
    }

    #[test]
    fn type_atoms_reports_failures_per_atom() {
        let typer = GninaIndexTyper::default();
        let atoms = vec![AtomRecord::new(6), AtomRecord::new(14), AtomRecord::new(8)];
        let results = type_atoms(&typer, &atoms);

        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(TypingError::UnrecognizedElement { atomic_number: 14 })
        ));
        assert!(results[2].is_ok());
    }

    #[test]
    fn type_atoms_accepts_trait_objects() {
        let typer: Box<dyn AtomIndexTyper> = Box::new(MappedAtomIndexTyper::new(
            SubsetAtomMapper::new(&[2], false),
            GninaIndexTyper::default(),
        ));
        let atoms = vec![AtomRecord::new(6), AtomRecord::new(1)];
        let results = type_atoms(typer.as_ref(), &atoms);

        assert_eq!(results[0].as_ref().unwrap().index, Some(0));
        assert_eq!(results[1].as_ref().unwrap().index, None);
    }

    #[test]
    fn vectorize_atoms_produces_full_length_vectors() {
        let typer = GninaVectorTyper::default();
        let atoms = corpus();
        let results = vectorize_atoms(&typer, &atoms);

        assert_eq!(results.len(), atoms.len());
        for (atom, result) in atoms.iter().zip(results) {
            let vectorized = result.unwrap();
            assert_eq!(vectorized.features.len(), NUM_VECTOR_TYPES);
            assert_eq!(vectorized.features[NUM_VECTOR_TYPES - 1], atom.partial_charge as f32);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let atoms: Vec<AtomRecord> = Vec::new();
        assert!(type_atoms(&GninaIndexTyper::default(), &atoms).is_empty());
        assert!(vectorize_atoms(&GninaVectorTyper::default(), &atoms).is_empty());
    }
}
