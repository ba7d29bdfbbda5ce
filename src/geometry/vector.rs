#[inline]
pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(v: [f64; 3], factor: f64) -> [f64; 3] {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

/// Scales `v` to unit length. A zero vector yields NaN components.
pub fn normalize(v: [f64; 3]) -> [f64; 3] {
    scale(v, 1.0 / norm(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_basis_vectors() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = [-0.45, 1.42, -1.07];
        let b = [-0.45, -1.48, -0.97];
        let c = cross(a, b);
        assert!(dot(c, a).abs() < 1e-12);
        assert!(dot(c, b).abs() < 1e-12);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((n[0] - 0.6).abs() < 1e-15);
        assert!((n[2] - 0.8).abs() < 1e-15);
        assert!((norm(n) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn add_sub_scale() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -1.0, 2.0];
        assert_eq!(add(a, b), [1.5, 1.0, 5.0]);
        assert_eq!(sub(a, b), [0.5, 3.0, 1.0]);
        assert_eq!(scale(a, 2.0), [2.0, 4.0, 6.0]);
    }
}
