use nalgebra::Vector3;
use num_traits::identities::Zero;

use crate::helpers::{clamp_color, vector_reflect};
use crate::lights::LightTrait;
use crate::materials::MaterialTrait;
use crate::scene::Scene;
use crate::surface_interaction::SurfaceInteraction;

/// Classic Phong reflectance: an ambient base plus diffuse and specular
/// terms summed per light, clamped to the displayable range.
#[derive(Debug, Clone)]
pub struct PhongMaterial {
    pub ambient: Vector3<f64>,
    pub diffuse: Vector3<f64>,
    pub specular: Vector3<f64>,
    pub shininess: f64,
}

impl PhongMaterial {
    pub fn new(
        ambient: Vector3<f64>,
        diffuse: Vector3<f64>,
        specular: Vector3<f64>,
        shininess: f64,
    ) -> Self {
        PhongMaterial {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

impl MaterialTrait for PhongMaterial {
    fn get_surface_color(&self, scene: &Scene, interaction: &SurfaceInteraction) -> Vector3<f64> {
        // a single global ambient term, independent of the lights
        let mut color = self.ambient.component_mul(&scene.ambient_light);

        for light in &scene.lights {
            let irradiance_sample = light.sample_irradiance(interaction.point);

            if irradiance_sample.irradiance.is_zero() {
                continue;
            }

            // back-facing lights contribute nothing
            let cos_theta = interaction.normal.dot(&irradiance_sample.wi);
            if cos_theta > 0.0 {
                color +=
                    self.diffuse.component_mul(&irradiance_sample.irradiance) * cos_theta;
            }

            let reflect_direction = vector_reflect(irradiance_sample.wi, interaction.normal);
            let cos_alpha = interaction.wo.dot(&reflect_direction);
            if cos_alpha > 0.0 {
                color += self.specular.component_mul(&irradiance_sample.irradiance)
                    * cos_alpha.powf(self.shininess);
            }
        }

        clamp_color(color, 0.0, 1.0)
    }
}
