//! Configuration for the pinned-water grid scan.
//!
//! [`ScanConfig::default`] reproduces the standard 11×11×11 scan around the
//! built-in reference geometry. Any subset of the settings can be overridden
//! from TOML; keys that are left out keep their default values.
//!
//! ```toml
//! [reference]
//! h1 = [-0.45, 1.42, -1.07]
//!
//! [grid.bond_angle]
//! start = -10.0
//! stop = 10.0
//! num = 21
//! ```

use serde::Deserialize;

use super::error::Error;
use super::grid::GridAxis;
use crate::model::system::System;
use crate::model::types::Element;

/// Complete description of a scan: where it starts and what it varies.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub reference: ReferenceGeometry,
    pub grid: GridConfig,
}

impl ScanConfig {
    /// Parses a TOML document, filling omitted keys from the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Number of grid points the configuration describes.
    pub fn point_count(&self) -> usize {
        self.grid.bond_length1.len() * self.grid.bond_length2.len() * self.grid.bond_angle.len()
    }
}

/// Reference O, H1 and H2 positions in Ångström.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceGeometry {
    pub oxygen: [f64; 3],
    pub h1: [f64; 3],
    pub h2: [f64; 3],
}

impl Default for ReferenceGeometry {
    fn default() -> Self {
        Self {
            oxygen: [0.00, 0.00, 0.00],
            h1: [-0.45, 1.42, -1.07],
            h2: [-0.45, -1.48, -0.97],
        }
    }
}

impl ReferenceGeometry {
    /// Takes the first oxygen and the first two hydrogens of `system`.
    pub fn from_system(system: &System) -> Result<Self, Error> {
        let oxygen = system
            .nth_of(Element::O, 0)
            .ok_or(Error::MissingAtom("oxygen"))?;
        let h1 = system
            .nth_of(Element::H, 0)
            .ok_or(Error::MissingAtom("first hydrogen"))?;
        let h2 = system
            .nth_of(Element::H, 1)
            .ok_or(Error::MissingAtom("second hydrogen"))?;

        Ok(Self {
            oxygen: oxygen.position,
            h1: h1.position,
            h2: h2.position,
        })
    }
}

/// The three scanned degrees of freedom.
///
/// `bond_length1` and `bond_length2` are scale factors applied to the
/// reference O–H1 and O–H2 bonds; `bond_angle` is an increment in degrees
/// added to the reference H1–O–H2 angle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub bond_length1: GridAxis,
    pub bond_length2: GridAxis,
    pub bond_angle: GridAxis,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            bond_length1: GridAxis::new(0.95, 1.05, 11),
            bond_length2: GridAxis::new(0.95, 1.05, 11),
            bond_angle: GridAxis::new(-5.0, 5.0, 11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;

    #[test]
    fn default_scan_has_1331_points() {
        assert_eq!(ScanConfig::default().point_count(), 1331);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = ScanConfig::from_toml_str("").expect("parse empty");
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn bundled_example_spells_out_the_defaults() {
        let text = include_str!("../../resources/scan.example.toml");
        let config = ScanConfig::from_toml_str(text).expect("parse example");
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let text = r#"
            [reference]
            h1 = [-0.5, 1.4, -1.0]

            [grid.bond_angle]
            start = -10.0
            stop = 10.0
            num = 21
        "#;
        let config = ScanConfig::from_toml_str(text).expect("parse partial");

        assert_eq!(config.reference.h1, [-0.5, 1.4, -1.0]);
        assert_eq!(config.reference.h2, ReferenceGeometry::default().h2);
        assert_eq!(config.grid.bond_angle, GridAxis::new(-10.0, 10.0, 21));
        assert_eq!(config.grid.bond_length1, GridConfig::default().bond_length1);
        assert_eq!(config.point_count(), 11 * 11 * 21);
    }

    #[test]
    fn incomplete_axis_is_rejected() {
        let text = "[grid.bond_length1]\nstart = 0.9\n";
        let err = ScanConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ScanConfig::from_toml_str("[reference]\nh3 = [0.0, 0.0, 0.0]\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse scan configuration"));
    }

    #[test]
    fn reference_from_system_picks_o_and_first_two_h() {
        let system = System {
            atoms: vec![
                Atom::new("H1", Element::H, [1.0, 0.0, 0.0]),
                Atom::new("O1", Element::O, [0.0, 0.0, 0.5]),
                Atom::new("H2", Element::H, [0.0, 1.0, 0.0]),
                Atom::new("H3", Element::H, [9.0, 9.0, 9.0]),
            ],
        };
        let reference = ReferenceGeometry::from_system(&system).expect("reference");
        assert_eq!(reference.oxygen, [0.0, 0.0, 0.5]);
        assert_eq!(reference.h1, [1.0, 0.0, 0.0]);
        assert_eq!(reference.h2, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn reference_from_system_requires_two_hydrogens() {
        let system = System {
            atoms: vec![
                Atom::new("O1", Element::O, [0.0; 3]),
                Atom::new("H1", Element::H, [1.0, 0.0, 0.0]),
            ],
        };
        let err = ReferenceGeometry::from_system(&system).unwrap_err();
        assert!(matches!(err, Error::MissingAtom("second hydrogen")));
    }
}
