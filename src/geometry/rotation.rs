pub type Matrix3 = [[f64; 3]; 3];

/// Builds the rotation by `angle_degrees` about `axis` (Rodrigues' formula).
///
/// `axis` must already be a unit vector; it is used as given.
pub fn rotation_matrix(axis: [f64; 3], angle_degrees: f64) -> Matrix3 {
    let (sin_t, cos_t) = angle_degrees.to_radians().sin_cos();
    let one_minus = 1.0 - cos_t;
    let [ux, uy, uz] = axis;

    [
        [
            cos_t + ux * ux * one_minus,
            ux * uy * one_minus - uz * sin_t,
            ux * uz * one_minus + uy * sin_t,
        ],
        [
            uy * ux * one_minus + uz * sin_t,
            cos_t + uy * uy * one_minus,
            uy * uz * one_minus - ux * sin_t,
        ],
        [
            uz * ux * one_minus - uy * sin_t,
            uz * uy * one_minus + ux * sin_t,
            cos_t + uz * uz * one_minus,
        ],
    ]
}

pub fn mat_vec(m: &Matrix3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}
