use std::sync::{Arc, RwLock};

use nalgebra::{Point2, Point3, Vector2, Vector3};

use crate::film::Film;
use crate::renderer::Ray;

/// Pinhole camera at a fixed position looking down +z.
///
/// The horizontal field of view and the image width determine a square pixel
/// size on an image plane at z = 1; the vertical extent follows from the
/// image height.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub position: Point3<f64>,
    pub fov: f64,
    image_size: Vector2<u32>,
    pixel_size: f64,
}

impl Camera {
    pub fn new(position: Point3<f64>, fov: f64, film: &Arc<RwLock<Film>>) -> Camera {
        let image_size = {
            let film = film.read().unwrap();
            film.image_size
        };

        let pixel_size = 2.0 * (fov.to_radians() / 2.0).tan() / image_size.x as f64;

        Camera {
            position,
            fov,
            image_size,
            pixel_size,
        }
    }

    /// Maps raster coordinates (pixel centers at x + 0.5) to a world-space
    /// ray with a normalized direction.
    pub fn generate_ray(&self, sample: CameraSample) -> Ray {
        let half_width = self.image_size.x as f64 * self.pixel_size / 2.0;
        let half_height = self.image_size.y as f64 * self.pixel_size / 2.0;

        // raster y grows downward, world y grows upward
        let x = -half_width + sample.p_film.x * self.pixel_size;
        let y = half_height - sample.p_film.y * self.pixel_size;

        Ray {
            point: self.position,
            direction: Vector3::new(x, y, 1.0).normalize(),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CameraSample {
    pub p_film: Point2<f64>,
}
