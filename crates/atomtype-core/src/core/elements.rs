/// Number of entries in the element tables: the dummy element `0` plus `H` through `Og`.
pub const ELEMENT_COUNT: usize = 119;

/// Radius reported for the catch-all element category `0`.
pub const FALLBACK_RADIUS: f32 = 1.6;

static SYMBOLS: [&str; ELEMENT_COUNT] = [
    "Xx", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

// Cordero et al. (2008) single-bond covalent radii in Angstroms; 1.6 where no
// experimental value exists.
static COVALENT_RADII: [f32; ELEMENT_COUNT] = [
    FALLBACK_RADIUS,
    0.31, 0.28, // H-He
    1.28, 0.96, 0.84, 0.76, 0.71, 0.66, 0.57, 0.58, // Li-Ne
    1.66, 1.41, 1.21, 1.11, 1.07, 1.05, 1.02, 1.06, // Na-Ar
    2.03, 1.76, 1.70, 1.60, 1.53, 1.39, 1.39, 1.32, 1.26, 1.24, 1.32, 1.22, 1.22, 1.20, 1.19,
    1.20, 1.20, 1.16, // K-Kr
    2.20, 1.95, 1.90, 1.75, 1.64, 1.54, 1.47, 1.46, 1.42, 1.39, 1.45, 1.44, 1.42, 1.39, 1.39,
    1.38, 1.39, 1.40, // Rb-Xe
    2.44, 2.15, 2.07, 2.04, 2.03, 2.01, 1.99, 1.98, 1.98, 1.96, 1.94, 1.92, 1.92, 1.89, 1.90,
    1.87, 1.87, 1.75, 1.70, 1.62, 1.51, 1.44, 1.41, 1.36, 1.36, 1.32, 1.45, 1.46, 1.48, 1.40,
    1.50, 1.50, // Cs-Rn
    2.60, 2.21, 2.15, 2.06, 2.00, 1.96, 1.90, 1.87, 1.80, 1.69, // Fr-Cm
    1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60,
    1.60, 1.60, 1.60, 1.60, 1.60, 1.60, 1.60, // Bk-Og
];

/// Returns the element symbol for an atomic number, `None` past oganesson.
pub fn symbol(atomic_number: usize) -> Option<&'static str> {
    SYMBOLS.get(atomic_number).copied()
}

/// Returns the covalent radius for an atomic number.
///
/// Atomic number `0` and anything past oganesson report [`FALLBACK_RADIUS`].
pub fn covalent_radius(atomic_number: usize) -> f32 {
    COVALENT_RADII
        .get(atomic_number)
        .copied()
        .unwrap_or(FALLBACK_RADIUS)
}

/// Whether the element is a metal.
///
/// Hydrogen, the noble gases, the reactive nonmetals and the metalloids
/// (B, Si, Ge, As, Sb, Te, At) are not metals; every other real element is.
pub fn is_metal(atomic_number: u8) -> bool {
    !matches!(
        atomic_number,
        0 | 1 | 2 | 5..=10 | 14..=18 | 32..=36 | 51..=54 | 85 | 86 | 117 | 118
    ) && (atomic_number as usize) < ELEMENT_COUNT
}
