use super::AtomIndexTyper;
use super::error::TypingError;
use crate::core::elements;
use crate::core::models::atom::AtomProperties;
use crate::core::models::types::AtomType;
use crate::core::params::{GNINA_TYPE_INFO, GninaType, GninaTypeInfo, NUM_GNINA_TYPES};

/// Rule-based classifier producing Gnina categories.
///
/// Categories are chosen from the element, aromaticity, attachment to
/// heteroatoms and hydrogen-bond roles of the atom. The radius is read from
/// the category table: the docking (X-Score) radius by default, or the
/// covalent radius when constructed with `use_covalent = true`.
#[derive(Debug, Clone, Copy)]
pub struct GninaIndexTyper {
    use_covalent: bool,
    table: &'static [GninaTypeInfo; NUM_GNINA_TYPES],
}

impl Default for GninaIndexTyper {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GninaIndexTyper {
    pub fn new(use_covalent: bool) -> Self {
        Self::with_table(use_covalent, &GNINA_TYPE_INFO)
    }

    /// Creates a typer that reads radii and properties from an alternate
    /// category table. The table must be ordered by [`GninaType`] discriminant.
    pub fn with_table(use_covalent: bool, table: &'static [GninaTypeInfo; NUM_GNINA_TYPES]) -> Self {
        Self {
            use_covalent,
            table,
        }
    }

    pub fn uses_covalent_radius(&self) -> bool {
        self.use_covalent
    }

    /// Returns the table entry for a category id.
    pub fn info(&self, index: usize) -> Result<&'static GninaTypeInfo, TypingError> {
        self.table.get(index).ok_or(TypingError::IndexOutOfRange {
            index,
            len: NUM_GNINA_TYPES,
        })
    }

    pub fn radius(&self, kind: GninaType) -> f32 {
        let info = &self.table[kind.index()];
        if self.use_covalent {
            info.covalent_radius
        } else {
            info.xs_radius
        }
    }

    /// Determines the Gnina category of an atom.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::UnrecognizedElement`] for elements that have no
    /// category of their own and are not metals.
    pub fn classify(&self, atom: &dyn AtomProperties) -> Result<GninaType, TypingError> {
        let kind = match atom.atomic_number() {
            1 => {
                if atom.is_bonded_to_donor() {
                    GninaType::PolarHydrogen
                } else {
                    GninaType::Hydrogen
                }
            }
            5 => GninaType::Boron,
            6 => {
                let hydrophobe = !atom.is_bonded_to_heteroatom();
                match (atom.is_aromatic(), hydrophobe) {
                    (true, true) => GninaType::AromaticCarbonXSHydrophobe,
                    (true, false) => GninaType::AromaticCarbonXSNonHydrophobe,
                    (false, true) => GninaType::AliphaticCarbonXSHydrophobe,
                    (false, false) => GninaType::AliphaticCarbonXSNonHydrophobe,
                }
            }
            7 => match (atom.is_hbond_donor(), atom.is_hbond_acceptor()) {
                (true, true) => GninaType::NitrogenXSDonorAcceptor,
                (true, false) => GninaType::NitrogenXSDonor,
                (false, true) => GninaType::NitrogenXSAcceptor,
                (false, false) => GninaType::Nitrogen,
            },
            8 => match (atom.is_hbond_donor(), atom.is_hbond_acceptor()) {
                (true, true) => GninaType::OxygenXSDonorAcceptor,
                (true, false) => GninaType::OxygenXSDonor,
                (false, true) => GninaType::OxygenXSAcceptor,
                (false, false) => GninaType::Oxygen,
            },
            9 => GninaType::Fluorine,
            12 => GninaType::Magnesium,
            15 => GninaType::Phosphorus,
            16 => {
                if atom.is_hbond_acceptor() {
                    GninaType::SulfurAcceptor
                } else {
                    GninaType::Sulfur
                }
            }
            17 => GninaType::Chlorine,
            20 => GninaType::Calcium,
            25 => GninaType::Manganese,
            26 => GninaType::Iron,
            30 => GninaType::Zinc,
            35 => GninaType::Bromine,
            53 => GninaType::Iodine,
            z if elements::is_metal(z) => GninaType::GenericMetal,
            z => return Err(TypingError::UnrecognizedElement { atomic_number: z }),
        };
        Ok(kind)
    }
}

impl AtomIndexTyper for GninaIndexTyper {
    fn num_types(&self) -> usize {
        NUM_GNINA_TYPES
    }

    fn get_type(&self, atom: &dyn AtomProperties) -> Result<AtomType, TypingError> {
        let kind = self.classify(atom)?;
        Ok(AtomType::new(kind.index(), self.radius(kind)))
    }

    fn get_type_names(&self) -> Vec<String> {
        self.table.iter().map(|info| info.name.to_string()).collect()
    }
}
