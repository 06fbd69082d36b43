use nalgebra::{Point3, Vector3};

/// Result of a successful ray-object intersection.
///
/// `distance` is the Euclidean distance from the ray origin to `point`,
/// `normal` is the outward unit normal at `point` and `wo` points from
/// `point` back toward the ray origin.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceInteraction {
    pub point: Point3<f64>,
    pub normal: Vector3<f64>,
    pub wo: Vector3<f64>,
    pub distance: f64,
}

impl SurfaceInteraction {
    pub fn new(
        point: Point3<f64>,
        normal: Vector3<f64>,
        wo: Vector3<f64>,
        distance: f64,
    ) -> SurfaceInteraction {
        SurfaceInteraction {
            point,
            normal,
            wo,
            distance,
        }
    }
}
