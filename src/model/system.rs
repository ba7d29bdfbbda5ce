use super::atom::Atom;
use super::types::Element;

/// An ordered list of atoms, as written to one coordinate file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    pub atoms: Vec<Atom>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the `nth` (zero-based) atom of the given element.
    pub fn nth_of(&self, element: Element, nth: usize) -> Option<&Atom> {
        self.atoms
            .iter()
            .filter(|a| a.element == element)
            .nth(nth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_of_skips_other_elements() {
        let system = System {
            atoms: vec![
                Atom::new("H1", Element::H, [1.0, 0.0, 0.0]),
                Atom::new("O1", Element::O, [0.0, 0.0, 0.0]),
                Atom::new("H2", Element::H, [0.0, 1.0, 0.0]),
            ],
        };

        assert_eq!(system.atom_count(), 3);
        assert_eq!(system.nth_of(Element::O, 0).unwrap().label, "O1");
        assert_eq!(system.nth_of(Element::H, 1).unwrap().label, "H2");
        assert!(system.nth_of(Element::H, 2).is_none());
    }
}
