//! Fixed-size vector geometry for small molecules.
//!
//! Positions are plain `[f64; 3]` arrays in Ångström and matrices are
//! row-major `[[f64; 3]; 3]`.
//!
//! - [`vector`] – Elementwise arithmetic, dot/cross products and norms.
//! - [`rotation`] – Axis–angle rotation matrices (Rodrigues' formula).
//!
//! The bond measures below are the quantities scanned by [`crate::scan`].

pub mod rotation;
pub mod vector;

pub use rotation::{Matrix3, mat_vec, rotation_matrix};
pub use vector::{add, cross, dot, norm, normalize, scale, sub};

/// Euclidean distance between two atom positions.
pub fn bond_length(a: [f64; 3], b: [f64; 3]) -> f64 {
    norm(sub(a, b))
}

/// Angle at `vertex` between the bonds to `a` and `c`, in degrees.
///
/// Returns NaN if either bond has zero length.
pub fn bond_angle(a: [f64; 3], vertex: [f64; 3], c: [f64; 3]) -> f64 {
    let v1 = sub(a, vertex);
    let v2 = sub(c, vertex);
    let cos_theta = dot(v1, v2) / (norm(v1) * norm(v2));
    cos_theta.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    const REF_H1: [f64; 3] = [-0.45, 1.42, -1.07];
    const REF_H2: [f64; 3] = [-0.45, -1.48, -0.97];

    #[test]
    fn reference_bond_lengths() {
        let origin = [0.0; 3];
        assert!(approx_eq(bond_length(REF_H1, origin), 1.834066, 1e-6));
        assert!(approx_eq(bond_length(REF_H2, origin), 1.825870, 1e-6));
    }

    #[test]
    fn bond_length_is_symmetric() {
        assert_eq!(bond_length(REF_H1, REF_H2), bond_length(REF_H2, REF_H1));
        assert!(approx_eq(bond_length(REF_H1, REF_H2), 2.901724, 1e-6));
    }

    #[test]
    fn reference_bond_angle() {
        let angle = bond_angle(REF_H1, [0.0; 3], REF_H2);
        assert!(approx_eq(angle, 104.902166, 1e-5));
    }

    #[test]
    fn right_and_straight_angles() {
        let o = [1.0, 1.0, 1.0];
        assert!(approx_eq(
            bond_angle([2.0, 1.0, 1.0], o, [1.0, 3.0, 1.0]),
            90.0,
            1e-12
        ));
        assert!(approx_eq(
            bond_angle([2.0, 1.0, 1.0], o, [-4.0, 1.0, 1.0]),
            180.0,
            1e-12
        ));
    }

    #[test]
    fn zero_length_bond_gives_nan_angle() {
        let o = [0.0; 3];
        assert!(bond_angle(o, o, REF_H2).is_nan());
    }
}
