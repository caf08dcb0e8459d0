use super::Vec3;

/// Mirror `v` about the unit normal `normal`.
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    v - 2.0 * (v * normal) * normal
}

/// Real roots of `a*t^2 + 2*half_b*t + c = 0`, or `None` when the discriminant is negative.
/// The roots come back in the order `(-half_b - sqrt) / a`, `(-half_b + sqrt) / a`,
/// which is only ascending when `a > 0`.
pub fn solve_half_b_quadratic(a: f64, half_b: f64, c: f64) -> Option<[f64; 2]> {
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let discriminant_sqrt = discriminant.sqrt();
    Some([
        (-half_b - discriminant_sqrt) / a,
        (-half_b + discriminant_sqrt) / a,
    ])
}
