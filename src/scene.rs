use nalgebra::{Point3, Vector3};

use crate::lights::point::PointLight;
use crate::lights::Light;
use crate::materials::phong::PhongMaterial;
use crate::materials::Material;
use crate::objects::sphere::Sphere;
use crate::objects::Object;

/// The world as the renderer sees it. Built once before rendering starts,
/// read-only afterwards.
pub struct Scene {
    pub bg_color: Vector3<f64>,
    pub ambient_light: Vector3<f64>,
    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(
        bg_color: Vector3<f64>,
        ambient_light: Vector3<f64>,
        objects: Vec<Object>,
        lights: Vec<Light>,
    ) -> Scene {
        Scene {
            bg_color,
            ambient_light,
            objects,
            lights,
        }
    }

    /// The built-in scene: three Phong spheres lit by three white point
    /// lights over a black background.
    pub fn default_scene() -> Scene {
        let blue = Material::Phong(PhongMaterial::new(
            Vector3::new(0.07, 0.07, 0.1),
            Vector3::new(0.7, 0.7, 1.0),
            Vector3::new(0.6, 0.6, 0.6),
            100.0,
        ));
        let red = Material::Phong(PhongMaterial::new(
            Vector3::new(0.01, 0.03, 0.03),
            Vector3::new(1.0, 0.3, 0.3),
            Vector3::new(0.5, 0.5, 0.5),
            10.0,
        ));
        let green = Material::Phong(PhongMaterial::new(
            Vector3::new(0.07, 0.09, 0.07),
            Vector3::new(0.7, 0.9, 0.7),
            Vector3::zeros(),
            0.0,
        ));

        let objects = vec![
            Object::Sphere(Sphere::new(1.0, Point3::new(1.0, -2.0, 8.0), blue)),
            Object::Sphere(Sphere::new(0.5, Point3::new(-1.0, -2.5, 6.0), red)),
            Object::Sphere(Sphere::new(1.0, Point3::new(2.0, -2.0, 6.0), green)),
        ];

        let lights = vec![
            Light::Point(PointLight::new(
                Point3::new(0.0, 26.0, 5.0),
                Vector3::repeat(0.4),
            )),
            Light::Point(PointLight::new(
                Point3::new(0.0, 1.0, 12.0),
                Vector3::repeat(0.4),
            )),
            Light::Point(PointLight::new(
                Point3::new(0.0, 5.0, 1.0),
                Vector3::repeat(0.4),
            )),
        ];

        Scene::new(Vector3::zeros(), Vector3::repeat(1.0), objects, lights)
    }
}
