use super::AtomIndexTyper;
use super::error::TypingError;
use crate::core::elements::{self, ELEMENT_COUNT, FALLBACK_RADIUS};
use crate::core::models::atom::AtomProperties;
use crate::core::models::types::AtomType;
use tracing::warn;

/// Default cutoff: everything from polonium upward lands in category `0`.
pub const DEFAULT_MAX_ELEMENT: usize = 84;

/// Types atoms by atomic number.
///
/// The category id is the atomic number itself when it is below the cutoff
/// and `0` otherwise, so `num_types()` equals the cutoff. There are many
/// elements, so this typer is usually composed with a mapper that folds the
/// space down to the few elements of organic chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementIndexTyper {
    max_element: usize,
}

impl Default for ElementIndexTyper {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ELEMENT)
    }
}

impl ElementIndexTyper {
    /// Creates a typer with the given cutoff, clamped to `1..=119` so that
    /// category `0` always exists and every id stays inside the table.
    pub fn new(max_element: usize) -> Self {
        let clamped = max_element.clamp(1, ELEMENT_COUNT);
        if clamped != max_element {
            warn!(
                requested = max_element,
                clamped, "Element cutoff is outside the periodic table; clamping."
            );
        }
        Self {
            max_element: clamped,
        }
    }

    pub fn max_element(&self) -> usize {
        self.max_element
    }
}

impl AtomIndexTyper for ElementIndexTyper {
    fn num_types(&self) -> usize {
        self.max_element
    }

    fn get_type(&self, atom: &dyn AtomProperties) -> Result<AtomType, TypingError> {
        let z = atom.atomic_number() as usize;
        if z < self.max_element && z != 0 {
            Ok(AtomType::new(z, elements::covalent_radius(z)))
        } else {
            Ok(AtomType::new(0, FALLBACK_RADIUS))
        }
    }

    fn get_type_names(&self) -> Vec<String> {
        (0..self.max_element)
            .map(|z| match z {
                0 => "Unknown".to_string(),
                z => elements::symbol(z).unwrap_or("Unknown").to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;

    #[test]
    fn atoms_below_cutoff_are_typed_by_atomic_number() {
        let typer = ElementIndexTyper::default();
        let typed = typer.get_type(&AtomRecord::new(83)).unwrap();
        assert_eq!(typed.index, Some(83));
        assert_eq!(typed.radius, elements::covalent_radius(83));

        let carbon = typer.get_type(&AtomRecord::new(6)).unwrap();
        assert_eq!(carbon, AtomType::new(6, 0.76));
    }

    #[test]
    fn atoms_at_or_above_cutoff_fall_into_category_zero() {
        let typer = ElementIndexTyper::default();
        for z in [84, 85, 92, 118] {
            let typed = typer.get_type(&AtomRecord::new(z)).unwrap();
            assert_eq!(typed, AtomType::new(0, FALLBACK_RADIUS), "atomic number {}", z);
        }
    }

    #[test]
    fn dummy_atoms_fall_into_category_zero() {
        let typer = ElementIndexTyper::default();
        assert_eq!(
            typer.get_type(&AtomRecord::new(0)).unwrap(),
            AtomType::new(0, FALLBACK_RADIUS)
        );
    }

    #[test]
    fn num_types_equals_cutoff_and_matches_names() {
        let typer = ElementIndexTyper::new(10);
        assert_eq!(typer.num_types(), 10);

        let names = typer.get_type_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Unknown");
        assert_eq!(names[1], "H");
        assert_eq!(names[9], "F");
    }

    #[test]
    fn smaller_cutoff_folds_heavier_elements_into_zero() {
        let typer = ElementIndexTyper::new(10);
        assert_eq!(typer.get_type(&AtomRecord::new(9)).unwrap().index, Some(9));
        assert_eq!(typer.get_type(&AtomRecord::new(16)).unwrap().index, Some(0));
    }

    #[test]
    fn cutoff_beyond_periodic_table_is_clamped() {
        let typer = ElementIndexTyper::new(500);
        assert_eq!(typer.max_element(), ELEMENT_COUNT);
        assert_eq!(typer.get_type_names().last().map(String::as_str), Some("Og"));
        assert_eq!(typer.get_type(&AtomRecord::new(118)).unwrap().index, Some(118));
    }

    #[test]
    fn zero_cutoff_keeps_the_unknown_category() {
        let typer = ElementIndexTyper::new(0);
        assert_eq!(typer.max_element(), 1);
        assert_eq!(typer.num_types(), 1);
        assert_eq!(typer.get_type_names(), vec!["Unknown"]);

        let typed = typer.get_type(&AtomRecord::new(6)).unwrap();
        assert_eq!(typed, AtomType::new(0, FALLBACK_RADIUS));
        assert!(typed.index.unwrap() < typer.num_types());
    }
}
