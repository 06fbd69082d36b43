use nalgebra::Vector3;

use crate::materials::phong::PhongMaterial;
use crate::scene::Scene;
use crate::surface_interaction::SurfaceInteraction;

pub mod phong;

/// Closed set of material variants.
#[derive(Debug, Clone)]
pub enum Material {
    Phong(PhongMaterial),
}

pub trait MaterialTrait {
    fn get_surface_color(&self, scene: &Scene, interaction: &SurfaceInteraction) -> Vector3<f64>;
}

impl MaterialTrait for Material {
    fn get_surface_color(&self, scene: &Scene, interaction: &SurfaceInteraction) -> Vector3<f64> {
        match self {
            Material::Phong(x) => x.get_surface_color(scene, interaction),
        }
    }
}
