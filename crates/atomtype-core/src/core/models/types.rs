/// Signed sentinel for "no corresponding category", for encoders that store
/// category ids as signed integers.
pub const UNMAPPED: i32 = -1;

/// The outcome of classifying one atom with an index typer.
///
/// `index` is `None` when the atom has no category in the typer's output
/// space, which only happens once a mapper without a catch-all bucket has
/// been applied. Callers are expected to drop such atoms from the encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomType {
    /// The category id, in `[0, num_types)`.
    pub index: Option<usize>,
    /// The radius in Angstroms associated with the atom.
    pub radius: f32,
}

impl AtomType {
    pub fn new(index: usize, radius: f32) -> Self {
        Self {
            index: Some(index),
            radius,
        }
    }

    pub fn unmapped(radius: f32) -> Self {
        Self {
            index: None,
            radius,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.index.is_some()
    }

    /// Returns the category id as a signed integer, [`UNMAPPED`] if absent.
    pub fn index_or_unmapped(&self) -> i32 {
        self.index.map_or(UNMAPPED, |i| i as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_type_reports_its_index() {
        let t = AtomType::new(4, 1.9);
        assert!(t.is_mapped());
        assert_eq!(t.index, Some(4));
        assert_eq!(t.index_or_unmapped(), 4);
    }

    #[test]
    fn unmapped_type_reports_sentinel() {
        let t = AtomType::unmapped(1.2);
        assert!(!t.is_mapped());
        assert_eq!(t.index_or_unmapped(), UNMAPPED);
        assert_eq!(t.radius, 1.2);
    }
}
