use std::path::Path;

use image::{ImageBuffer, Rgb};
use nalgebra::{Vector2, Vector3};

pub struct Film {
    pub image_size: Vector2<u32>,
    image_buffer: ImageBuffer<Rgb<u8>, Vec<u8>>,
}

impl Film {
    pub fn new(image_size: Vector2<u32>) -> Film {
        Film {
            image_size,
            image_buffer: ImageBuffer::new(image_size.x, image_size.y),
        }
    }

    /// Stores a color with channels in [0, 1]. Every pixel index is written
    /// exactly once per render.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Vector3<f64>) {
        let pixel_color = Rgb([
            (color.x * 255.0) as u8,
            (color.y * 255.0) as u8,
            (color.z * 255.0) as u8,
        ]);

        self.image_buffer.put_pixel(x, y, pixel_color);
    }

    /// The output format follows the path extension.
    pub fn write_image(&self, path: &Path) -> image::ImageResult<()> {
        self.image_buffer.save(path)
    }
}
