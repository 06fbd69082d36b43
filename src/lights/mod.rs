use nalgebra::{Point3, Vector3};

use crate::lights::point::PointLight;

pub mod point;

/// Closed set of light variants.
#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
}

pub trait LightTrait {
    fn sample_irradiance(&self, point: Point3<f64>) -> LightIrradianceSample;
}

#[derive(Debug)]
pub struct LightIrradianceSample {
    pub irradiance: Vector3<f64>,
    pub point: Point3<f64>,
    pub wi: Vector3<f64>,
}

impl LightTrait for Light {
    fn sample_irradiance(&self, point: Point3<f64>) -> LightIrradianceSample {
        match self {
            Light::Point(x) => x.sample_irradiance(point),
        }
    }
}
