use nalgebra::Vector3;
use num_traits::clamp;

/// Mirror of a unit direction about a unit surface normal.
pub fn vector_reflect(vec: Vector3<f64>, normal: Vector3<f64>) -> Vector3<f64> {
    (2.0 * normal * normal.dot(&vec) - vec).normalize()
}

pub fn clamp_color(color: Vector3<f64>, min: f64, max: f64) -> Vector3<f64> {
    Vector3::new(
        clamp(color.x, min, max),
        clamp(color.y, min, max),
        clamp(color.z, min, max),
    )
}
