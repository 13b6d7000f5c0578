use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of Gnina categories.
pub const NUM_GNINA_TYPES: usize = 28;

/// Gnina atom categories, variants of the AutoDock4 types refined with
/// X-Score hydrophobe, donor and acceptor roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GninaType {
    Hydrogen = 0,
    PolarHydrogen,
    AliphaticCarbonXSHydrophobe,
    AliphaticCarbonXSNonHydrophobe,
    AromaticCarbonXSHydrophobe,
    AromaticCarbonXSNonHydrophobe,
    Nitrogen,
    NitrogenXSDonor,
    NitrogenXSDonorAcceptor,
    NitrogenXSAcceptor,
    Oxygen,
    OxygenXSDonor,
    OxygenXSDonorAcceptor,
    OxygenXSAcceptor,
    Sulfur,
    SulfurAcceptor,
    Phosphorus,
    Fluorine,
    Chlorine,
    Bromine,
    Iodine,
    Magnesium,
    Manganese,
    Zinc,
    Calcium,
    Iron,
    GenericMetal,
    Boron,
}

/// Fixed chemistry constants for one Gnina category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GninaTypeInfo {
    pub kind: GninaType,
    /// Display name, always longer than two characters.
    pub name: &'static str,
    /// AutoDock type code, at most two characters.
    pub ad_name: &'static str,
    /// Atomic number represented by the category, `0` for generic metals.
    pub atomic_number: u8,
    pub ad_radius: f32,
    pub ad_depth: f32,
    pub ad_solvation: f32,
    pub ad_volume: f32,
    pub covalent_radius: f32,
    /// Docking (X-Score) radius.
    pub xs_radius: f32,
    pub xs_hydrophobe: bool,
    pub xs_donor: bool,
    pub xs_acceptor: bool,
    pub ad_heteroatom: bool,
}

macro_rules! type_info {
    ($kind:ident, $ad:literal, $anum:literal, $ad_radius:literal, $depth:literal, $solv:literal,
     $vol:literal, $cov:literal, $xs:literal, $hydrophobe:literal, $donor:literal,
     $acceptor:literal, $hetero:literal) => {
        GninaTypeInfo {
            kind: GninaType::$kind,
            name: stringify!($kind),
            ad_name: $ad,
            atomic_number: $anum,
            ad_radius: $ad_radius,
            ad_depth: $depth,
            ad_solvation: $solv,
            ad_volume: $vol,
            covalent_radius: $cov,
            xs_radius: $xs,
            xs_hydrophobe: $hydrophobe,
            xs_donor: $donor,
            xs_acceptor: $acceptor,
            ad_heteroatom: $hetero,
        }
    };
}

/// The default Gnina category table, indexed by [`GninaType`] discriminant.
#[rustfmt::skip]
pub static GNINA_TYPE_INFO: [GninaTypeInfo; NUM_GNINA_TYPES] = [
    //         kind                            ad    Z   ad_r   depth  solv      volume   cov   xs    hyd    don    acc    het
    type_info!(Hydrogen,                       "H",  1,  1.0,   0.02,  0.00051,  0.0,     0.37, 0.37, false, false, false, false),
    type_info!(PolarHydrogen,                  "HD", 1,  1.0,   0.02,  0.00051,  0.0,     0.37, 0.37, false, false, false, false),
    type_info!(AliphaticCarbonXSHydrophobe,    "C",  6,  2.0,   0.15,  -0.00143, 33.5103, 0.77, 1.9,  true,  false, false, false),
    type_info!(AliphaticCarbonXSNonHydrophobe, "C",  6,  2.0,   0.15,  -0.00143, 33.5103, 0.77, 1.9,  false, false, false, false),
    type_info!(AromaticCarbonXSHydrophobe,     "A",  6,  2.0,   0.15,  -0.00052, 33.5103, 0.77, 1.9,  true,  false, false, false),
    type_info!(AromaticCarbonXSNonHydrophobe,  "A",  6,  2.0,   0.15,  -0.00052, 33.5103, 0.77, 1.9,  false, false, false, false),
    type_info!(Nitrogen,                       "N",  7,  1.75,  0.16,  -0.00162, 22.4493, 0.75, 1.8,  false, false, false, true),
    type_info!(NitrogenXSDonor,                "N",  7,  1.75,  0.16,  -0.00162, 22.4493, 0.75, 1.8,  false, true,  false, true),
    type_info!(NitrogenXSDonorAcceptor,        "NA", 7,  1.75,  0.16,  -0.00162, 22.4493, 0.75, 1.8,  false, true,  true,  true),
    type_info!(NitrogenXSAcceptor,             "NA", 7,  1.75,  0.16,  -0.00162, 22.4493, 0.75, 1.8,  false, false, true,  true),
    type_info!(Oxygen,                         "O",  8,  1.6,   0.2,   -0.00251, 17.1573, 0.73, 1.7,  false, false, false, true),
    type_info!(OxygenXSDonor,                  "O",  8,  1.6,   0.2,   -0.00251, 17.1573, 0.73, 1.7,  false, true,  false, true),
    type_info!(OxygenXSDonorAcceptor,          "OA", 8,  1.6,   0.2,   -0.00251, 17.1573, 0.73, 1.7,  false, true,  true,  true),
    type_info!(OxygenXSAcceptor,               "OA", 8,  1.6,   0.2,   -0.00251, 17.1573, 0.73, 1.7,  false, false, true,  true),
    type_info!(Sulfur,                         "S",  16, 2.0,   0.2,   -0.00214, 33.5103, 1.02, 2.0,  false, false, false, true),
    type_info!(SulfurAcceptor,                 "SA", 16, 2.0,   0.2,   -0.00214, 33.5103, 1.02, 2.0,  false, false, false, true),
    type_info!(Phosphorus,                     "P",  15, 2.1,   0.2,   -0.0011,  38.7924, 1.06, 2.1,  false, false, false, true),
    type_info!(Fluorine,                       "F",  9,  1.545, 0.08,  -0.0011,  15.448,  0.71, 1.5,  true,  false, false, true),
    type_info!(Chlorine,                       "Cl", 17, 2.045, 0.276, -0.0011,  35.8235, 0.99, 1.8,  true,  false, false, true),
    type_info!(Bromine,                        "Br", 35, 2.165, 0.389, -0.0011,  42.5661, 1.14, 2.0,  true,  false, false, true),
    type_info!(Iodine,                         "I",  53, 2.36,  0.55,  -0.0011,  55.0585, 1.33, 2.2,  true,  false, false, true),
    type_info!(Magnesium,                      "Mg", 12, 0.65,  0.875, -0.0011,  1.56,    1.30, 1.2,  false, true,  false, true),
    type_info!(Manganese,                      "Mn", 25, 0.65,  0.875, -0.0011,  2.14,    1.39, 1.2,  false, true,  false, true),
    type_info!(Zinc,                           "Zn", 30, 0.74,  0.55,  -0.0011,  1.7,     1.31, 1.2,  false, true,  false, true),
    type_info!(Calcium,                        "Ca", 20, 0.99,  0.55,  -0.0011,  2.77,    1.74, 1.2,  false, true,  false, true),
    type_info!(Iron,                           "Fe", 26, 0.65,  0.01,  -0.0011,  1.84,    1.25, 1.2,  false, true,  false, true),
    type_info!(GenericMetal,                   "M",  0,  1.2,   0.0,   -0.0011,  22.4493, 1.75, 1.2,  false, true,  false, true),
    type_info!(Boron,                          "B",  5,  2.04,  0.18,  -0.0011,  12.052,  0.90, 1.92, true,  false, false, false),
];

static GNINA_TYPE_BY_NAME: Map<&'static str, GninaType> = phf_map! {
    "Hydrogen" => GninaType::Hydrogen,
    "PolarHydrogen" => GninaType::PolarHydrogen,
    "AliphaticCarbonXSHydrophobe" => GninaType::AliphaticCarbonXSHydrophobe,
    "AliphaticCarbonXSNonHydrophobe" => GninaType::AliphaticCarbonXSNonHydrophobe,
    "AromaticCarbonXSHydrophobe" => GninaType::AromaticCarbonXSHydrophobe,
    "AromaticCarbonXSNonHydrophobe" => GninaType::AromaticCarbonXSNonHydrophobe,
    "Nitrogen" => GninaType::Nitrogen,
    "NitrogenXSDonor" => GninaType::NitrogenXSDonor,
    "NitrogenXSDonorAcceptor" => GninaType::NitrogenXSDonorAcceptor,
    "NitrogenXSAcceptor" => GninaType::NitrogenXSAcceptor,
    "Oxygen" => GninaType::Oxygen,
    "OxygenXSDonor" => GninaType::OxygenXSDonor,
    "OxygenXSDonorAcceptor" => GninaType::OxygenXSDonorAcceptor,
    "OxygenXSAcceptor" => GninaType::OxygenXSAcceptor,
    "Sulfur" => GninaType::Sulfur,
    "SulfurAcceptor" => GninaType::SulfurAcceptor,
    "Phosphorus" => GninaType::Phosphorus,
    "Fluorine" => GninaType::Fluorine,
    "Chlorine" => GninaType::Chlorine,
    "Bromine" => GninaType::Bromine,
    "Iodine" => GninaType::Iodine,
    "Magnesium" => GninaType::Magnesium,
    "Manganese" => GninaType::Manganese,
    "Zinc" => GninaType::Zinc,
    "Calcium" => GninaType::Calcium,
    "Iron" => GninaType::Iron,
    "GenericMetal" => GninaType::GenericMetal,
    "Boron" => GninaType::Boron,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown Gnina type name: '{0}'")]
pub struct ParseGninaTypeError(String);

impl GninaType {
    pub const ALL: [GninaType; NUM_GNINA_TYPES] = [
        GninaType::Hydrogen,
        GninaType::PolarHydrogen,
        GninaType::AliphaticCarbonXSHydrophobe,
        GninaType::AliphaticCarbonXSNonHydrophobe,
        GninaType::AromaticCarbonXSHydrophobe,
        GninaType::AromaticCarbonXSNonHydrophobe,
        GninaType::Nitrogen,
        GninaType::NitrogenXSDonor,
        GninaType::NitrogenXSDonorAcceptor,
        GninaType::NitrogenXSAcceptor,
        GninaType::Oxygen,
        GninaType::OxygenXSDonor,
        GninaType::OxygenXSDonorAcceptor,
        GninaType::OxygenXSAcceptor,
        GninaType::Sulfur,
        GninaType::SulfurAcceptor,
        GninaType::Phosphorus,
        GninaType::Fluorine,
        GninaType::Chlorine,
        GninaType::Bromine,
        GninaType::Iodine,
        GninaType::Magnesium,
        GninaType::Manganese,
        GninaType::Zinc,
        GninaType::Calcium,
        GninaType::Iron,
        GninaType::GenericMetal,
        GninaType::Boron,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The default table entry for this category.
    pub fn info(self) -> &'static GninaTypeInfo {
        &GNINA_TYPE_INFO[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for GninaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GninaType {
    type Err = ParseGninaTypeError;

    /// Parses a Gnina display name (e.g. `"NitrogenXSDonor"`). Case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GNINA_TYPE_BY_NAME
            .get(s.trim())
            .copied()
            .ok_or_else(|| ParseGninaTypeError(s.to_string()))
    }
}
