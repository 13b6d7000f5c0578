/// Read-only view of the perceived chemistry of a single atom.
///
/// Typers never perceive chemistry themselves. Aromaticity, hydrogen-bond
/// roles, partial charges and the local bonding environment are expected to
/// be computed by the structure toolkit that owns the molecule; this trait is
/// the narrow window through which a typer reads them for the duration of one
/// classification call.
///
/// The trait is object safe so that typers can accept `&dyn AtomProperties`
/// regardless of which toolkit produced the atom.
pub trait AtomProperties {
    /// The atomic number (`0` for dummy or unknown atoms).
    fn atomic_number(&self) -> u8;

    /// Whether the toolkit perceived this atom as part of an aromatic system.
    fn is_aromatic(&self) -> bool;

    /// The number of hydrogens attached to this atom, explicit or implicit.
    fn hydrogen_count(&self) -> u8;

    /// Whether this atom can donate a hydrogen bond.
    ///
    /// The default treats nitrogen and oxygen atoms that carry at least one
    /// hydrogen as donors. Toolkits with their own donor perception should
    /// override it.
    fn is_hbond_donor(&self) -> bool {
        matches!(self.atomic_number(), 7 | 8) && self.hydrogen_count() > 0
    }

    /// Whether this atom can accept a hydrogen bond.
    fn is_hbond_acceptor(&self) -> bool;

    /// The partial atomic charge in elementary charge units.
    fn partial_charge(&self) -> f64;

    /// Whether any directly bonded neighbor is a heteroatom (neither carbon nor hydrogen).
    fn is_bonded_to_heteroatom(&self) -> bool;

    /// Whether any directly bonded neighbor is a hydrogen-bond donor heavy atom.
    ///
    /// Only consulted for hydrogens, where it separates polar from nonpolar hydrogen.
    fn is_bonded_to_donor(&self) -> bool;
}

impl<T: AtomProperties + ?Sized> AtomProperties for &T {
    fn atomic_number(&self) -> u8 {
        (**self).atomic_number()
    }
    fn is_aromatic(&self) -> bool {
        (**self).is_aromatic()
    }
    fn hydrogen_count(&self) -> u8 {
        (**self).hydrogen_count()
    }
    fn is_hbond_donor(&self) -> bool {
        (**self).is_hbond_donor()
    }
    fn is_hbond_acceptor(&self) -> bool {
        (**self).is_hbond_acceptor()
    }
    fn partial_charge(&self) -> f64 {
        (**self).partial_charge()
    }
    fn is_bonded_to_heteroatom(&self) -> bool {
        (**self).is_bonded_to_heteroatom()
    }
    fn is_bonded_to_donor(&self) -> bool {
        (**self).is_bonded_to_donor()
    }
}

/// An owned snapshot of already-perceived atom properties.
///
/// This is the simplest possible implementation of [`AtomProperties`]. It is
/// useful for callers that extract properties from their own molecule
/// representation up front, and as a fixture in tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtomRecord {
    /// The atomic number of the atom.
    pub atomic_number: u8,
    /// Aromaticity as perceived by the toolkit.
    pub aromatic: bool,
    /// Number of attached hydrogens.
    pub hydrogen_count: u8,
    /// Explicit donor flag. `None` falls back to the default donor rule.
    pub donor: Option<bool>,
    /// Acceptor flag as perceived by the toolkit.
    pub acceptor: bool,
    /// Partial atomic charge in elementary charge units.
    pub partial_charge: f64,
    /// Whether a heteroatom is bonded to this atom.
    pub bonded_to_heteroatom: bool,
    /// Whether a donor heavy atom is bonded to this atom.
    pub bonded_to_donor: bool,
}

impl AtomRecord {
    /// Creates a new `AtomRecord` for the given element with every other
    /// property cleared.
    ///
    /// # Arguments
    ///
    /// * `atomic_number` - The atomic number of the atom.
    pub fn new(atomic_number: u8) -> Self {
        Self {
            atomic_number,
            ..Self::default()
        }
    }

    pub fn aromatic(mut self, aromatic: bool) -> Self {
        self.aromatic = aromatic;
        self
    }

    pub fn hydrogens(mut self, count: u8) -> Self {
        self.hydrogen_count = count;
        self
    }

    pub fn donor(mut self, donor: bool) -> Self {
        self.donor = Some(donor);
        self
    }

    pub fn acceptor(mut self, acceptor: bool) -> Self {
        self.acceptor = acceptor;
        self
    }

    pub fn charge(mut self, charge: f64) -> Self {
        self.partial_charge = charge;
        self
    }

    pub fn bonded_to_heteroatom(mut self, bonded: bool) -> Self {
        self.bonded_to_heteroatom = bonded;
        self
    }

    pub fn bonded_to_donor(mut self, bonded: bool) -> Self {
        self.bonded_to_donor = bonded;
        self
    }
}

impl AtomProperties for AtomRecord {
    fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    fn is_aromatic(&self) -> bool {
        self.aromatic
    }

    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }

    fn is_hbond_donor(&self) -> bool {
        match self.donor {
            Some(donor) => donor,
            None => matches!(self.atomic_number, 7 | 8) && self.hydrogen_count > 0,
        }
    }

    fn is_hbond_acceptor(&self) -> bool {
        self.acceptor
    }

    fn partial_charge(&self) -> f64 {
        self.partial_charge
    }

    fn is_bonded_to_heteroatom(&self) -> bool {
        self.bonded_to_heteroatom
    }

    fn is_bonded_to_donor(&self) -> bool {
        self.bonded_to_donor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_cleared_properties() {
        let atom = AtomRecord::new(6);

        assert_eq!(atom.atomic_number(), 6);
        assert!(!atom.is_aromatic());
        assert_eq!(atom.hydrogen_count(), 0);
        assert!(!atom.is_hbond_donor());
        assert!(!atom.is_hbond_acceptor());
        assert_eq!(atom.partial_charge(), 0.0);
        assert!(!atom.is_bonded_to_heteroatom());
        assert!(!atom.is_bonded_to_donor());
    }

    #[test]
    fn donor_defaults_to_hydrogen_bearing_nitrogen_or_oxygen() {
        assert!(AtomRecord::new(7).hydrogens(2).is_hbond_donor());
        assert!(AtomRecord::new(8).hydrogens(1).is_hbond_donor());
        assert!(!AtomRecord::new(8).is_hbond_donor());
        assert!(!AtomRecord::new(6).hydrogens(3).is_hbond_donor());
        assert!(!AtomRecord::new(16).hydrogens(1).is_hbond_donor());
    }

    #[test]
    fn explicit_donor_flag_overrides_default_rule() {
        assert!(!AtomRecord::new(7).hydrogens(1).donor(false).is_hbond_donor());
        assert!(AtomRecord::new(7).donor(true).is_hbond_donor());
    }

    #[test]
    fn builder_setters_are_reflected_through_trait() {
        let atom = AtomRecord::new(6)
            .aromatic(true)
            .charge(-0.25)
            .bonded_to_heteroatom(true);

        assert!(atom.is_aromatic());
        assert_eq!(atom.partial_charge(), -0.25);
        assert!(atom.is_bonded_to_heteroatom());
    }

    #[test]
    fn references_forward_to_the_underlying_atom() {
        let atom = AtomRecord::new(1).bonded_to_donor(true);
        let by_ref: &dyn AtomProperties = &atom;

        assert_eq!((&by_ref).atomic_number(), 1);
        assert!((&atom).is_bonded_to_donor());
    }
}
