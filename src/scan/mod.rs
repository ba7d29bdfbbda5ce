//! Bond-length and bond-angle grid scans around a reference water geometry.
//!
//! A [`Scan`] is built once from a [`ScanConfig`]. It fixes the rotation
//! axis (the unit normal of the reference H–O–H plane) and samples the
//! three grid axes. [`Scan::points`] then yields one [`GridPoint`] per
//! combination, iterating the angle increment outermost, then the O–H1
//! factor, then the O–H2 factor.
//!
//! For every point the oxygen stays at its reference position and is
//! pinned; H1 is the reference O→H1 bond scaled by the first factor; H2 is
//! the reference O→H2 bond rotated in-plane by the angle increment and then
//! scaled by the second factor.

mod config;
mod error;
mod grid;

pub use config::{GridConfig, ReferenceGeometry, ScanConfig};
pub use error::Error;
pub use grid::GridAxis;

use crate::geometry::{
    add, bond_angle, bond_length, cross, mat_vec, norm, rotation_matrix, scale, sub,
};
use crate::io::coords::file_name;
use crate::model::atom::Atom;
use crate::model::system::System;
use crate::model::types::Element;

/// Bond lengths (Å) and angle (degrees) of the reference geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceMetrics {
    pub bond_length1: f64,
    pub bond_length2: f64,
    pub bond_angle: f64,
}

impl ReferenceMetrics {
    pub fn of(reference: &ReferenceGeometry) -> Self {
        Self {
            bond_length1: bond_length(reference.h1, reference.oxygen),
            bond_length2: bond_length(reference.h2, reference.oxygen),
            bond_angle: bond_angle(reference.h1, reference.oxygen, reference.h2),
        }
    }
}

/// One geometry of the scan together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    pub factor1: f64,
    pub factor2: f64,
    pub angle_increment: f64,
    /// O1, H1 and H2, in that order.
    pub system: System,
}

impl GridPoint {
    /// Output file name, e.g. `coords_0.95_1.00_-5.0.in`.
    pub fn file_name(&self) -> String {
        file_name(self.factor1, self.factor2, self.angle_increment)
    }
}

#[derive(Debug, Clone)]
pub struct Scan {
    reference: ReferenceGeometry,
    axis: [f64; 3],
    factors1: Vec<f64>,
    factors2: Vec<f64>,
    angles: Vec<f64>,
}

impl Scan {
    pub fn new(config: &ScanConfig) -> Result<Self, Error> {
        let reference = config.reference;
        let coordinates = [reference.oxygen, reference.h1, reference.h2];
        if coordinates.iter().flatten().any(|c| !c.is_finite()) {
            return Err(Error::DegenerateReference(format!(
                "non-finite coordinate in O {:?}, H1 {:?}, H2 {:?}",
                reference.oxygen, reference.h1, reference.h2
            )));
        }

        let bond1 = sub(reference.h1, reference.oxygen);
        let bond2 = sub(reference.h2, reference.oxygen);

        let normal = cross(bond1, bond2);
        let length = norm(normal);
        if length == 0.0 || !length.is_finite() {
            return Err(Error::DegenerateReference(format!(
                "O-H1 {:?} and O-H2 {:?} do not span a plane",
                bond1, bond2
            )));
        }

        Ok(Self {
            reference,
            axis: scale(normal, 1.0 / length),
            factors1: config.grid.bond_length1.values(),
            factors2: config.grid.bond_length2.values(),
            angles: config.grid.bond_angle.values(),
        })
    }

    #[inline]
    pub fn reference(&self) -> &ReferenceGeometry {
        &self.reference
    }

    pub fn metrics(&self) -> ReferenceMetrics {
        ReferenceMetrics::of(&self.reference)
    }

    /// Unit normal of the reference H–O–H plane.
    #[inline]
    pub fn rotation_axis(&self) -> [f64; 3] {
        self.axis
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factors1.len() * self.factors2.len() * self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The reference O→H2 bond vector rotated by `angle_increment` degrees.
    pub fn rotated_bond2(&self, angle_increment: f64) -> [f64; 3] {
        let q = rotation_matrix(self.axis, angle_increment);
        mat_vec(&q, sub(self.reference.h2, self.reference.oxygen))
    }

    /// Builds a single geometry, on or off the sampled grid.
    pub fn point(&self, factor1: f64, factor2: f64, angle_increment: f64) -> GridPoint {
        self.assemble(
            factor1,
            factor2,
            angle_increment,
            self.rotated_bond2(angle_increment),
        )
    }

    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.angles.iter().flat_map(move |&angle| {
            let rotated = self.rotated_bond2(angle);
            self.factors1.iter().flat_map(move |&f1| {
                self.factors2
                    .iter()
                    .map(move |&f2| self.assemble(f1, f2, angle, rotated))
            })
        })
    }

    fn assemble(
        &self,
        factor1: f64,
        factor2: f64,
        angle_increment: f64,
        rotated_bond2: [f64; 3],
    ) -> GridPoint {
        let oxygen = self.reference.oxygen;
        let h1 = add(oxygen, scale(sub(self.reference.h1, oxygen), factor1));
        let h2 = add(oxygen, scale(rotated_bond2, factor2));

        GridPoint {
            factor1,
            factor2,
            angle_increment,
            system: System {
                atoms: vec![
                    Atom::new("O1", Element::O, oxygen).pinned(),
                    Atom::new("H1", Element::H, h1),
                    Atom::new("H2", Element::H, h2),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn default_scan() -> Scan {
        Scan::new(&ScanConfig::default()).expect("default scan")
    }

    #[test]
    fn reference_metrics_match_literal_geometry() {
        let metrics = default_scan().metrics();
        assert!(approx_eq(metrics.bond_length1, 1.834066, 1e-6));
        assert!(approx_eq(metrics.bond_length2, 1.825870, 1e-6));
        assert!(approx_eq(metrics.bond_angle, 104.902166, 1e-5));
    }

    #[test]
    fn rotation_axis_is_unit_plane_normal() {
        let scan = default_scan();
        let axis = scan.rotation_axis();
        assert!(approx_eq(norm(axis), 1.0, 1e-15));
        assert!(approx_eq(axis[0], -0.914980, 1e-6));
        assert!(approx_eq(axis[1], 0.013905, 1e-6));
        assert!(approx_eq(axis[2], 0.403259, 1e-6));
    }

    #[test]
    fn zero_increment_keeps_reference_h2() {
        let scan = default_scan();
        assert_eq!(scan.rotated_bond2(0.0), ReferenceGeometry::default().h2);

        let point = scan.point(1.0, 1.0, 0.0);
        assert_eq!(point.system.atoms[1].position, ReferenceGeometry::default().h1);
        assert_eq!(point.system.atoms[2].position, ReferenceGeometry::default().h2);
    }

    #[test]
    fn default_grid_yields_1331_unique_points() {
        let scan = default_scan();
        assert_eq!(scan.len(), 1331);

        let names: Vec<String> = scan.points().map(|p| p.file_name()).collect();
        assert_eq!(names.len(), 1331);
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), 1331);
    }

    #[test]
    fn iteration_order_is_angle_then_factor1_then_factor2() {
        let scan = default_scan();
        let names: Vec<String> = scan.points().take(12).map(|p| p.file_name()).collect();
        assert_eq!(names[0], "coords_0.95_0.95_-5.0.in");
        assert_eq!(names[1], "coords_0.95_0.96_-5.0.in");
        assert_eq!(names[10], "coords_0.95_1.05_-5.0.in");
        assert_eq!(names[11], "coords_0.96_0.95_-5.0.in");

        let last = scan.points().last().expect("last point");
        assert_eq!(last.file_name(), "coords_1.05_1.05_5.0.in");
    }

    #[test]
    fn grid_points_scale_and_rotate_as_requested() {
        let scan = default_scan();
        let reference = ReferenceMetrics::of(scan.reference());

        for point in scan.points().step_by(97) {
            let [o, h1, h2] = [0, 1, 2].map(|i| point.system.atoms[i].position);
            assert_eq!(o, [0.0, 0.0, 0.0]);
            assert!(approx_eq(
                bond_length(h1, o),
                reference.bond_length1 * point.factor1,
                1e-12
            ));
            assert!(approx_eq(
                bond_length(h2, o),
                reference.bond_length2 * point.factor2,
                1e-12
            ));
            assert!(approx_eq(
                bond_angle(h1, o, h2),
                reference.bond_angle + point.angle_increment,
                1e-9
            ));
        }
    }

    #[test]
    fn oxygen_is_pinned_and_hydrogens_move() {
        let point = default_scan().point(1.02, 0.97, 3.0);
        let flags: Vec<bool> = point.system.atoms.iter().map(|a| a.movable).collect();
        assert_eq!(flags, [false, true, true]);
        let labels: Vec<&str> = point.system.atoms.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["O1", "H1", "H2"]);
    }

    #[test]
    fn displaced_oxygen_moves_the_whole_molecule() {
        let mut config = ScanConfig::default();
        let shift = [1.0, -2.0, 0.5];
        config.reference.oxygen = shift;
        config.reference.h1 = add(config.reference.h1, shift);
        config.reference.h2 = add(config.reference.h2, shift);

        let shifted = Scan::new(&config).expect("shifted scan");
        let origin = default_scan();

        let a = shifted.point(1.03, 0.96, -4.0);
        let b = origin.point(1.03, 0.96, -4.0);
        for (sa, sb) in a.system.atoms.iter().zip(&b.system.atoms) {
            let diff = sub(sa.position, sb.position);
            assert!(norm(sub(diff, shift)) < 1e-12);
        }
    }

    #[test]
    fn collinear_reference_is_rejected() {
        let mut config = ScanConfig::default();
        config.reference.h2 = scale(config.reference.h1, -1.0);
        let err = Scan::new(&config).unwrap_err();
        assert!(matches!(err, Error::DegenerateReference(_)));
    }

    #[test]
    fn non_finite_reference_is_rejected() {
        let config =
            ScanConfig::from_toml_str("[reference]\nh1 = [inf, 0.0, 0.0]\n").expect("parse");
        let err = Scan::new(&config).unwrap_err();
        assert!(matches!(err, Error::DegenerateReference(_)));

        let mut config = ScanConfig::default();
        config.reference.oxygen[2] = f64::NAN;
        assert!(matches!(
            Scan::new(&config).unwrap_err(),
            Error::DegenerateReference(_)
        ));
    }

    #[test]
    fn overflowing_plane_normal_is_rejected() {
        let mut config = ScanConfig::default();
        config.reference.h1 = [1e200, 0.0, 0.0];
        config.reference.h2 = [0.0, 1e200, 0.0];
        assert!(matches!(
            Scan::new(&config).unwrap_err(),
            Error::DegenerateReference(_)
        ));
    }

    #[test]
    fn coincident_hydrogen_is_rejected() {
        let mut config = ScanConfig::default();
        config.reference.h1 = config.reference.oxygen;
        assert!(Scan::new(&config).is_err());
    }

    #[test]
    fn empty_axis_gives_empty_scan() {
        let mut config = ScanConfig::default();
        config.grid.bond_length2 = GridAxis::new(0.9, 1.1, 0);
        let scan = Scan::new(&config).expect("scan");
        assert!(scan.is_empty());
        assert_eq!(scan.points().count(), 0);
    }
}
