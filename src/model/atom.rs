use super::types::Element;

/// One ion record of a coordinate file.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub label: String,
    pub element: Element,
    pub species: u32,
    pub position: [f64; 3],
    /// `false` pins the atom in place during a simulation.
    pub movable: bool,
}

impl Atom {
    pub fn new(label: impl Into<String>, element: Element, position: [f64; 3]) -> Self {
        Self {
            label: label.into(),
            element,
            species: element.species(),
            position,
            movable: true,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.movable = false;
        self
    }
}
