use nalgebra::{Point3, Vector3};

use crate::lights::{LightIrradianceSample, LightTrait};

#[derive(Debug, Clone)]
pub struct PointLight {
    position: Point3<f64>,
    intensity: Vector3<f64>,
}

impl PointLight {
    pub fn new(position: Point3<f64>, intensity: Vector3<f64>) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl LightTrait for PointLight {
    /// Incident direction and intensity at a shaded point. The illumination
    /// model carries no distance falloff.
    fn sample_irradiance(&self, point: Point3<f64>) -> LightIrradianceSample {
        let wi = (self.position - point).normalize();

        LightIrradianceSample {
            irradiance: self.intensity,
            point: self.position,
            wi,
        }
    }
}
