use super::AtomVectorTyper;
use super::error::TypingError;
use super::gnina::GninaIndexTyper;
use crate::core::models::atom::AtomProperties;
use crate::core::params::GninaType;

/// Number of one-hot element buckets at the head of the vector.
pub const NUM_ELEMENT_BUCKETS: usize = 17;
/// Total length of the feature vector.
pub const NUM_VECTOR_TYPES: usize = 25;

pub const AD_DEPTH: usize = 17;
pub const AD_SOLVATION: usize = 18;
pub const AD_VOLUME: usize = 19;
pub const XS_HYDROPHOBE: usize = 20;
pub const XS_DONOR: usize = 21;
pub const XS_ACCEPTOR: usize = 22;
pub const AD_HETEROATOM: usize = 23;
pub const PARTIAL_CHARGE: usize = 24;

static VECTOR_TYPE_NAMES: [&str; NUM_VECTOR_TYPES] = [
    "Hydrogen",
    "Carbon",
    "Nitrogen",
    "Oxygen",
    "Sulfur",
    "Phosphorus",
    "Fluorine",
    "Chlorine",
    "Bromine",
    "Iodine",
    "Magnesium",
    "Manganese",
    "Zinc",
    "Calcium",
    "Iron",
    "Boron",
    "GenericAtom",
    "AD_depth",
    "AD_solvation",
    "AD_volume",
    "XS_hydrophobe",
    "XS_donor",
    "XS_acceptor",
    "AD_heteroatom",
    "PartialCharge",
];

fn element_bucket(kind: GninaType) -> usize {
    use GninaType::*;
    match kind {
        Hydrogen | PolarHydrogen => 0,
        AliphaticCarbonXSHydrophobe
        | AliphaticCarbonXSNonHydrophobe
        | AromaticCarbonXSHydrophobe
        | AromaticCarbonXSNonHydrophobe => 1,
        Nitrogen | NitrogenXSDonor | NitrogenXSDonorAcceptor | NitrogenXSAcceptor => 2,
        Oxygen | OxygenXSDonor | OxygenXSDonorAcceptor | OxygenXSAcceptor => 3,
        Sulfur | SulfurAcceptor => 4,
        Phosphorus => 5,
        Fluorine => 6,
        Chlorine => 7,
        Bromine => 8,
        Iodine => 9,
        Magnesium => 10,
        Manganese => 11,
        Zinc => 12,
        Calcium => 13,
        Iron => 14,
        Boron => 15,
        GenericMetal => 16,
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

/// Decomposes Gnina categories into element buckets and physicochemical
/// properties.
///
/// Layout: 17 one-hot element buckets, the AutoDock depth, solvation and
/// volume terms, the X-Score hydrophobe, donor and acceptor flags, the
/// AutoDock heteroatom flag, and finally the atom's own partial charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct GninaVectorTyper {
    index_typer: GninaIndexTyper,
}

impl GninaVectorTyper {
    pub fn new(index_typer: GninaIndexTyper) -> Self {
        Self { index_typer }
    }

    pub fn index_typer(&self) -> &GninaIndexTyper {
        &self.index_typer
    }
}

impl AtomVectorTyper for GninaVectorTyper {
    fn num_types(&self) -> usize {
        NUM_VECTOR_TYPES
    }

    fn get_type(
        &self,
        atom: &dyn AtomProperties,
        features: &mut Vec<f32>,
    ) -> Result<f32, TypingError> {
        let kind = self.index_typer.classify(atom)?;
        let info = self.index_typer.info(kind.index())?;

        features.clear();
        features.resize(NUM_VECTOR_TYPES, 0.0);
        features[element_bucket(kind)] = 1.0;
        features[AD_DEPTH] = info.ad_depth;
        features[AD_SOLVATION] = info.ad_solvation;
        features[AD_VOLUME] = info.ad_volume;
        features[XS_HYDROPHOBE] = flag(info.xs_hydrophobe);
        features[XS_DONOR] = flag(info.xs_donor);
        features[XS_ACCEPTOR] = flag(info.xs_acceptor);
        features[AD_HETEROATOM] = flag(info.ad_heteroatom);
        features[PARTIAL_CHARGE] = atom.partial_charge() as f32;

        Ok(self.index_typer.radius(kind))
    }

    fn get_type_names(&self) -> Vec<String> {
        VECTOR_TYPE_NAMES.iter().map(|s| s.to_string()).collect()
    }
}
