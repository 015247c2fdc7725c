use crate::capture_surface::interface::{CaptureEvent, CaptureSurface};
use crate::config::Config;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgb, RgbImage};
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use std::time::Duration;

/// Camera stand-in producing solid frames of random size and color.
pub struct CaptureSurfaceFake {
    remaining: usize,
    max_frame_size: (u32, u32),
    interval: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CaptureSurfaceFake {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            remaining: config.fake_camera_frame_count,
            max_frame_size: config.fake_camera_max_frame_size,
            interval: config.capture_interval,
            logger: logger.with_namespace("capture").with_namespace("fake"),
        }
    }

    fn random_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();

        let width_dist = Uniform::new_inclusive(1, self.max_frame_size.0.max(1))?;
        let height_dist = Uniform::new_inclusive(1, self.max_frame_size.1.max(1))?;
        let channel_dist = Uniform::new_inclusive(0u8, 255u8)?;

        let width = width_dist.sample(&mut rng);
        let height = height_dist.sample(&mut rng);
        let color = [
            channel_dist.sample(&mut rng),
            channel_dist.sample(&mut rng),
            channel_dist.sample(&mut rng),
        ];

        Ok(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            Rgb(color),
        )))
    }
}

impl CaptureSurface for CaptureSurfaceFake {
    fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting fake camera...")?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping fake camera...")?;
        self.remaining = 0;
        Ok(())
    }

    fn capture(&mut self) -> Result<CaptureEvent, Box<dyn std::error::Error + Send + Sync>> {
        if self.remaining == 0 {
            return Ok(CaptureEvent::Closed);
        }
        self.remaining -= 1;

        std::thread::sleep(self.interval);

        let frame = self.random_frame()?;
        self.logger.info(&format!(
            "Captured fake frame {}x{}",
            frame.width(),
            frame.height()
        ))?;
        Ok(CaptureEvent::Captured(frame))
    }
}
