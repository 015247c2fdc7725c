use crate::capture_surface::interface::{CaptureEvent, CaptureSurface};
use crate::library::logger::interface::Logger;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

/// Treats each image file as one capture action, in order.
pub struct CaptureSurfaceFiles {
    pending: VecDeque<PathBuf>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CaptureSurfaceFiles {
    pub fn new(paths: Vec<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            pending: paths.into(),
            logger: logger.with_namespace("capture").with_namespace("files"),
        }
    }
}

impl CaptureSurface for CaptureSurfaceFiles {
    fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("{} captures queued", self.pending.len()))?;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.pending.clear();
        Ok(())
    }

    fn capture(&mut self) -> Result<CaptureEvent, Box<dyn std::error::Error + Send + Sync>> {
        let Some(path) = self.pending.pop_front() else {
            return Ok(CaptureEvent::Closed);
        };

        match image::open(&path) {
            Ok(image) => {
                self.logger.info(&format!(
                    "Captured {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                ))?;
                Ok(CaptureEvent::Captured(image))
            }
            Err(e) => {
                self.logger
                    .error(&format!("No image from {}: {}", path.display(), e))?;
                Ok(CaptureEvent::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;
    use image::{ImageBuffer, Rgb, RgbImage};

    #[test]
    fn test_captures_in_order_then_closes() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        RgbImage::from_pixel(3, 2, Rgb([1, 2, 3])).save(&first).unwrap();
        ImageBuffer::from_pixel(5, 4, Rgb([9u8, 9, 9]))
            .save(&second)
            .unwrap();

        let mut surface =
            CaptureSurfaceFiles::new(vec![first, second], Arc::new(LoggerFake::new()));
        surface.start().unwrap();

        match surface.capture().unwrap() {
            CaptureEvent::Captured(image) => assert_eq!((image.width(), image.height()), (3, 2)),
            other => panic!("expected capture, got {:?}", other),
        }
        match surface.capture().unwrap() {
            CaptureEvent::Captured(image) => assert_eq!((image.width(), image.height()), (5, 4)),
            other => panic!("expected capture, got {:?}", other),
        }
        assert!(matches!(surface.capture().unwrap(), CaptureEvent::Closed));
    }

    #[test]
    fn test_unreadable_file_is_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.png");
        std::fs::write(&bogus, b"not an image").unwrap();
        let logger = LoggerFake::new();

        let mut surface = CaptureSurfaceFiles::new(
            vec![bogus, dir.path().join("missing.jpg")],
            Arc::new(logger.clone()),
        );

        assert!(matches!(surface.capture().unwrap(), CaptureEvent::Cancelled));
        assert!(matches!(surface.capture().unwrap(), CaptureEvent::Cancelled));
        assert_eq!(logger.count_containing("No image from"), 2);
    }
}
