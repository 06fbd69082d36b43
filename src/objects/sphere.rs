use nalgebra::{distance, Point3, Vector3};

use crate::materials::Material;
use crate::objects::ObjectTrait;
use crate::renderer::Ray;
use crate::surface_interaction::SurfaceInteraction;

#[derive(Debug, Clone)]
pub struct Sphere {
    pub position: Point3<f64>,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(radius: f64, position: Point3<f64>, material: Material) -> Self {
        Sphere {
            position,
            radius,
            material,
        }
    }

    fn get_normal(&self, point: Point3<f64>) -> Vector3<f64> {
        (point - self.position).normalize()
    }
}

impl ObjectTrait for Sphere {
    fn material(&self) -> &Material {
        &self.material
    }

    /// Geometric intersection test, evaluated in a frame translated so the
    /// ray starts at the origin. Roots behind the ray origin are invalid,
    /// and a ray starting inside the sphere reports no hit.
    fn test_intersect(&self, ray: Ray) -> Option<SurfaceInteraction> {
        // center of the sphere seen from the ray origin
        let center = self.position - ray.point;

        // signed projection of the center onto the ray
        let a = center.dot(&ray.direction);
        // squared perpendicular distance from the center to the ray line,
        // kept non-negative against round-off near tangency
        let d_squared = (center.norm_squared() - a * a).max(0.0);
        let d = d_squared.sqrt();

        let closest_t = if d == self.radius {
            // tangent, a single root
            if a >= 0.0 {
                a
            } else {
                f64::INFINITY
            }
        } else if d < self.radius {
            let b = (self.radius * self.radius - d_squared).max(0.0).sqrt();
            let t1 = a - b;
            let t2 = a + b;

            if t1 < 0.0 && 0.0 < t2 {
                // the ray starts inside the sphere
                f64::INFINITY
            } else {
                let t1 = if t1 >= 0.0 { t1 } else { f64::INFINITY };
                let t2 = if t2 >= 0.0 { t2 } else { f64::INFINITY };
                t1.min(t2)
            }
        } else {
            f64::INFINITY
        };

        if closest_t == f64::INFINITY {
            return None;
        }

        let point = ray.point + ray.direction * closest_t;

        Some(SurfaceInteraction::new(
            point,
            self.get_normal(point),
            -ray.direction,
            distance(&ray.point, &point),
        ))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{distance, Point3, Vector3};

    use crate::materials::phong::PhongMaterial;
    use crate::materials::Material;
    use crate::objects::sphere::Sphere;
    use crate::objects::ObjectTrait;
    use crate::renderer::Ray;

    fn sphere(radius: f64, position: Point3<f64>) -> Sphere {
        Sphere::new(
            radius,
            position,
            Material::Phong(PhongMaterial::new(
                Vector3::new(0.1, 0.1, 0.1),
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::new(0.5, 0.5, 0.5),
                10.0,
            )),
        )
    }

    fn forward_ray() -> Ray {
        Ray {
            point: Point3::origin(),
            direction: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn it_hits_at_the_closer_root() {
        let sphere = sphere(1.0, Point3::new(0.0, 0.0, 3.0));

        let interaction = sphere.test_intersect(forward_ray()).unwrap();

        assert_relative_eq!(interaction.point, Point3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(interaction.normal, Vector3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(interaction.wo, Vector3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(interaction.distance, 2.0);
    }

    #[test]
    fn it_hits_off_axis_on_the_surface() {
        let sphere = sphere(2.0, Point3::new(1.0, -1.0, 6.0));
        let ray = Ray {
            point: Point3::new(0.5, 0.0, 0.0),
            direction: Vector3::new(0.1, -0.15, 1.0).normalize(),
        };

        let interaction = sphere.test_intersect(ray).unwrap();

        // the hit lies on the surface, at the reported distance, on the near
        // side of the center
        assert_relative_eq!(
            distance(&interaction.point, &sphere.position),
            2.0,
            max_relative = 1.0e-9
        );
        assert_relative_eq!(
            distance(&interaction.point, &ray.point),
            interaction.distance,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(interaction.normal.norm(), 1.0, max_relative = 1.0e-12);
        assert!(interaction.distance < distance(&ray.point, &sphere.position));
    }

    #[test]
    fn it_misses_a_sphere_off_the_ray_line() {
        let sphere = sphere(1.0, Point3::new(3.0, 0.0, 3.0));

        assert!(sphere.test_intersect(forward_ray()).is_none());
    }

    #[test]
    fn it_hits_a_tangent_ray_at_the_single_root() {
        let sphere = sphere(1.0, Point3::new(0.0, 1.0, 3.0));

        let interaction = sphere.test_intersect(forward_ray()).unwrap();

        assert_relative_eq!(interaction.point, Point3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(interaction.distance, 3.0);
        assert_relative_eq!(distance(&interaction.point, &sphere.position), 1.0);
    }

    #[test]
    fn it_rejects_roots_behind_the_origin() {
        let sphere = sphere(1.0, Point3::new(0.0, 0.0, -3.0));

        assert!(sphere.test_intersect(forward_ray()).is_none());
    }

    #[test]
    fn it_rejects_a_tangent_root_behind_the_origin() {
        let sphere = sphere(1.0, Point3::new(0.0, 1.0, -3.0));

        assert!(sphere.test_intersect(forward_ray()).is_none());
    }

    #[test]
    fn it_reports_no_hit_from_inside_the_sphere() {
        let sphere = sphere(2.0, Point3::new(0.0, 0.0, 1.0));

        assert!(sphere.test_intersect(forward_ray()).is_none());
    }
}
