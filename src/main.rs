#![allow(unused)]
#![warn(clippy::all, clippy::cargo)]

use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use clap::Parser;
use nalgebra::{Point3, Vector2};

use crate::camera::Camera;
use crate::film::Film;
use crate::renderer::{Settings, STATS};
use crate::scene::Scene;

mod camera;
mod film;
mod helpers;
mod lights;
mod materials;
mod objects;
mod renderer;
mod scene;
mod surface_interaction;
mod tracer;

const IMAGE_WIDTH: u32 = 1024;
const IMAGE_HEIGHT: u32 = 768;
const FOV: f64 = 90.0;

#[derive(Parser, Debug)]
struct Args {
    /// Output image path, the extension selects the format
    output: Option<String>,
}

fn main() -> image::ImageResult<()> {
    let args = Args::parse();
    let output = args.output.unwrap_or_else(|| String::from("./result.ppm"));

    let scene = Arc::new(Scene::default_scene());

    let film = Arc::new(RwLock::new(Film::new(Vector2::new(
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
    ))));

    let camera = Camera::new(Point3::origin(), FOV, &film);

    let settings = Settings {
        thread_count: num_cpus::get() as u32,
        bucket_width: 32,
        bucket_height: 32,
    };

    println!("Start render, w{} px, h{} px", IMAGE_WIDTH, IMAGE_HEIGHT);
    let start = Instant::now();

    let threads = renderer::render(camera, scene, settings, film.clone());

    for thread in threads {
        thread.join().expect("Unable to join render thread");
    }

    let seconds = start.elapsed().as_secs_f64();
    let rays_done = STATS.read().unwrap().rays_done;
    println!(
        "Render finished in {:.2} s, {:.0} rays per second.",
        seconds,
        rays_done as f64 / seconds
    );

    let film = film.read().unwrap();
    film.write_image(Path::new(&output))?;
    println!("Image written to {}", output);

    Ok(())
}
