use nalgebra::Vector3;

use crate::materials::MaterialTrait;
use crate::objects::{Object, ObjectTrait};
use crate::renderer::Ray;
use crate::scene::Scene;
use crate::surface_interaction::SurfaceInteraction;

/// Computes the color along a primary ray: the nearest intersection wins
/// and its material shades the point, a miss falls through to the
/// background color.
pub fn trace(ray: Ray, scene: &Scene) -> Vector3<f64> {
    match check_intersect_scene(ray, scene) {
        Some((interaction, object)) => {
            object.material().get_surface_color(scene, &interaction)
        }
        None => scene.bg_color,
    }
}

fn check_intersect_scene(ray: Ray, scene: &Scene) -> Option<(SurfaceInteraction, &Object)> {
    let mut closest: Option<(SurfaceInteraction, &Object)> = None;

    for object in &scene.objects {
        if let Some(interaction) = object.test_intersect(ray) {
            // keep the intersection closest to the ray origin, the first
            // one found wins a tie
            match closest {
                None => closest = Some((interaction, object)),
                Some((closest_interaction, _)) => {
                    if interaction.distance < closest_interaction.distance {
                        closest = Some((interaction, object));
                    }
                }
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    use crate::lights::point::PointLight;
    use crate::lights::Light;
    use crate::materials::phong::PhongMaterial;
    use crate::materials::Material;
    use crate::objects::sphere::Sphere;
    use crate::objects::Object;
    use crate::renderer::Ray;
    use crate::scene::Scene;
    use crate::tracer::trace;

    fn diffuse_material(diffuse: Vector3<f64>) -> Material {
        Material::Phong(PhongMaterial::new(
            Vector3::zeros(),
            diffuse,
            Vector3::zeros(),
            10.0,
        ))
    }

    fn forward_ray() -> Ray {
        Ray {
            point: Point3::origin(),
            direction: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn it_returns_black_for_an_empty_scene() {
        let scene = Scene::new(Vector3::zeros(), Vector3::repeat(1.0), vec![], vec![]);

        let color = trace(forward_ray(), &scene);

        assert_eq!(color, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn it_shades_with_the_nearest_object() {
        // a light at the camera gives a full frontal cosine on either sphere
        let scene = Scene::new(
            Vector3::zeros(),
            Vector3::zeros(),
            vec![
                Object::Sphere(Sphere::new(
                    1.0,
                    Point3::new(0.0, 0.0, 10.0),
                    diffuse_material(Vector3::new(0.0, 1.0, 0.0)),
                )),
                Object::Sphere(Sphere::new(
                    1.0,
                    Point3::new(0.0, 0.0, 5.0),
                    diffuse_material(Vector3::new(1.0, 0.0, 0.0)),
                )),
            ],
            vec![Light::Point(PointLight::new(
                Point3::origin(),
                Vector3::repeat(1.0),
            ))],
        );

        let color = trace(forward_ray(), &scene);

        assert_relative_eq!(color, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn it_resolves_ties_to_the_first_object() {
        let position = Point3::new(0.0, 0.0, 5.0);
        let scene = Scene::new(
            Vector3::zeros(),
            Vector3::zeros(),
            vec![
                Object::Sphere(Sphere::new(
                    1.0,
                    position,
                    diffuse_material(Vector3::new(1.0, 0.0, 0.0)),
                )),
                Object::Sphere(Sphere::new(
                    1.0,
                    position,
                    diffuse_material(Vector3::new(0.0, 1.0, 0.0)),
                )),
            ],
            vec![Light::Point(PointLight::new(
                Point3::origin(),
                Vector3::repeat(1.0),
            ))],
        );

        let color = trace(forward_ray(), &scene);

        assert_relative_eq!(color, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn it_traces_the_single_sphere_single_light_scenario() {
        let scene = Scene::new(
            Vector3::zeros(),
            Vector3::zeros(),
            vec![Object::Sphere(Sphere::new(
                1.0,
                Point3::new(0.0, 0.0, 3.0),
                diffuse_material(Vector3::repeat(1.0)),
            ))],
            vec![Light::Point(PointLight::new(
                Point3::new(0.0, 5.0, 3.0),
                Vector3::repeat(1.0),
            ))],
        );

        // the hit is at (0,0,2) with normal (0,0,-1); the light direction
        // normalize((0,5,1)) makes a negative cosine with that normal, so
        // neither the diffuse nor the specular term contributes
        let color = trace(forward_ray(), &scene);

        assert_eq!(color, Vector3::new(0.0, 0.0, 0.0));
    }
}
