use crate::camera::Camera;
use crate::film::Film;
use crate::math::RGBColor;
use crate::scene::Scene;
use crate::shading::Illuminator;

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use pbr::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 500,
            height: 500,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub resolution: Resolution,
    pub threads: Option<usize>,
    pub filename: Option<String>,
}

impl RenderSettings {
    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or("output")
    }
}

/// Traces one primary ray through every pixel center.
/// Runs on the current rayon pool; `show_progress` draws a progress bar on stdout.
pub fn render(
    scene: &Scene,
    illuminator: &Illuminator,
    camera: &Camera,
    settings: &RenderSettings,
    show_progress: bool,
) -> Film<RGBColor> {
    let (width, height) = (settings.resolution.width, settings.resolution.height);
    info!(
        "starting render with film resolution {}x{}, {} primitives",
        width,
        height,
        scene.len()
    );
    let now = Instant::now();

    let mut film = Film::new(width, height, illuminator.background);
    let total_pixels = film.total_pixels();

    let pixel_count = Arc::new(AtomicUsize::new(0));
    let progress_thread = if show_progress {
        let counter = Arc::clone(&pixel_count);
        let mut pb = ProgressBar::new(total_pixels as u64);
        Some(thread::spawn(move || {
            let mut local_index = 0;
            while local_index < total_pixels {
                let pixels_to_increment = counter.load(Ordering::Relaxed) - local_index;
                pb.add(pixels_to_increment as u64);
                local_index += pixels_to_increment;

                thread::sleep(Duration::from_millis(250));
            }
            pb.finish();
        }))
    } else {
        None
    };

    film.buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(pixel_index, pixel)| {
            let y = pixel_index / width;
            let x = pixel_index - width * y;
            let ray = camera.get_ray((x, y), (width, height));
            *pixel = illuminator.trace(scene, ray);
            pixel_count.fetch_add(1, Ordering::Relaxed);
        });

    if let Some(handle) = progress_thread {
        if handle.join().is_err() {
            debug!("progress bar thread panicked");
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    info!(
        "{} pixels computed in {:.3}s at {:.0} rays per second",
        total_pixels,
        elapsed,
        total_pixels as f64 / elapsed.max(f64::EPSILON)
    );
    film
}

/// Writes `output/<filename>.exr` with the unclamped values and `output/<filename>.png`
/// with every channel clamped to [0, 1].
pub fn output_film(film: &Film<RGBColor>, filename: &str) -> anyhow::Result<()> {
    fs::create_dir_all("output").context("couldn't create output directory")?;
    let exr_filename = format!("output/{}.exr", filename);
    let png_filename = format!("output/{}.png", filename);

    let now = Instant::now();
    info!("saving exr image to {}", exr_filename);
    exr::prelude::write_rgb_file(&exr_filename, film.width, film.height, |x, y| {
        let color = film.at(x, y);
        (color.r() as f32, color.g() as f32, color.b() as f32)
    })
    .with_context(|| format!("failed to write {}", exr_filename))?;

    info!("saving png image to {}", png_filename);
    to_rgb_image(film)
        .save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename))?;
    info!("took {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}

pub fn to_rgb_image(film: &Film<RGBColor>) -> image::RgbImage {
    let mut img: image::RgbImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = film.at(x as usize, y as usize).clamped();
        *pixel = image::Rgb([
            (color.r() * 255.0) as u8,
            (color.g() * 255.0) as u8,
            (color.b() * 255.0) as u8,
        ]);
    }
    img
}
