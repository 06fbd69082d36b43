use std::cmp;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::thread;
use std::thread::JoinHandle;
use std::time::SystemTime;

use indicatif::ProgressBar;
use lazy_static::lazy_static;
use nalgebra::{Point2, Point3, Vector3};
use rand::Rng;

use crate::camera::{Camera, CameraSample};
use crate::film::Film;
use crate::scene::Scene;
use crate::tracer;

#[derive(Debug, Copy, Clone)]
pub struct Settings {
    pub thread_count: u32,
    pub bucket_width: u32,
    pub bucket_height: u32,
}

#[derive(Debug)]
pub struct Stats {
    pub rays_done: u32,
    pub threads: HashMap<u32, StatsThread>,
}

#[derive(Copy, Clone, Debug)]
pub struct StatsThread {
    pub start_time: SystemTime,
    pub ns_per_ray: f64,
    pub rays_done: u32,
}

#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub point: Point3<f64>,
    pub direction: Vector3<f64>,
}

#[derive(Debug)]
struct WorkQueue {
    queue: Vec<Work>,
}

#[derive(Debug, Copy, Clone)]
struct Work {
    x: u32,
    y: u32,
}

impl WorkQueue {
    fn new(settings: Settings, image_width: u32, image_height: u32) -> WorkQueue {
        let mut queue = Vec::new();

        for x in 0..(image_width as f32 / settings.bucket_width as f32).ceil() as u32 {
            for y in 0..(image_height as f32 / settings.bucket_height as f32).ceil() as u32 {
                queue.push(Work {
                    x: x * settings.bucket_width,
                    y: y * settings.bucket_height,
                });
            }
        }

        WorkQueue { queue }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn get_work(&mut self) -> Option<Work> {
        let mut rng = rand::rng();
        let len = self.queue.len();

        if len == 0 {
            return None;
        }

        Some(self.queue.remove(rng.random_range(0..len)))
    }
}

lazy_static! {
    pub static ref STATS: RwLock<Stats> = {
        let stats = Stats {
            rays_done: 0,
            threads: HashMap::new(),
        };

        RwLock::new(stats)
    };
}

pub fn render(
    camera: Camera,
    scene: Arc<Scene>,
    settings: Settings,
    film: Arc<RwLock<Film>>,
) -> Vec<JoinHandle<()>> {
    let (image_width, image_height) = {
        let film = film.read().unwrap();
        (film.image_size.x, film.image_size.y)
    };

    let work_queue = Arc::new(Mutex::new(WorkQueue::new(
        settings,
        image_width,
        image_height,
    )));
    let progress = ProgressBar::new(work_queue.lock().unwrap().len() as u64);

    let mut threads: Vec<JoinHandle<()>> = vec![];

    // thread id is used to divide the work
    for thread_id in 0..settings.thread_count {
        let thread_scene = scene.clone();
        let thread_film = film.clone();
        let work_queue = work_queue.clone();
        let progress = progress.clone();

        let thread = thread::spawn(move || {
            STATS.write().unwrap().threads.insert(
                thread_id,
                StatsThread {
                    start_time: SystemTime::now(),
                    rays_done: 0,
                    ns_per_ray: 0.0,
                },
            );

            // use loop to split getting work and executing work. Else the lock
            // would be retained during execution.
            loop {
                let work = work_queue.lock().unwrap().get_work(); // drop lock
                match work {
                    Some(work) => {
                        // prevent rounding error, cap at image size
                        let x_end = cmp::min(work.x + settings.bucket_width, image_width);
                        let y_end = cmp::min(work.y + settings.bucket_height, image_height);

                        for y in work.y..y_end {
                            for x in work.x..x_end {
                                // one primary ray through the pixel center
                                let sample = CameraSample {
                                    p_film: Point2::new(x as f64 + 0.5, y as f64 + 0.5),
                                };

                                let ray = camera.generate_ray(sample);
                                let color = tracer::trace(ray, &thread_scene);

                                thread_film.write().unwrap().set_pixel(x, y, color);
                            }
                        }

                        progress.inc(1);

                        let rays_done = (x_end - work.x) * (y_end - work.y);
                        let mut stats = STATS.write().unwrap();
                        stats.rays_done += rays_done;

                        if let Some(stats_thread) = stats.threads.get_mut(&thread_id) {
                            let duration =
                                stats_thread.start_time.elapsed().expect("Duration failed!");
                            let secs = duration.as_secs();
                            let sub_nanos = duration.subsec_nanos();
                            let nanos = secs * 1_000_000_000 + sub_nanos as u64;

                            stats_thread.rays_done += rays_done;
                            stats_thread.ns_per_ray = nanos as f64 / stats_thread.rays_done as f64;
                        }
                    }
                    None => break,
                }
            } // end of loop

            progress.finish();
        }); // end of thread

        threads.push(thread);
    }

    threads
}
