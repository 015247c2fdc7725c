use crate::capture_surface::interface::{CaptureEvent, CaptureSurface};
use crate::display::interface::{DisplayState, LabelDisplay};
use crate::library::logger::interface::Logger;
use crate::pipeline::main::ClassificationPipeline;
use image::DynamicImage;
use std::sync::Arc;

pub struct App {
    logger: Arc<dyn Logger + Send + Sync>,
    capture_surface: Box<dyn CaptureSurface>,
    display: Box<dyn LabelDisplay>,
    pipeline: ClassificationPipeline,
}

impl App {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        capture_surface: Box<dyn CaptureSurface>,
        display: Box<dyn LabelDisplay>,
        pipeline: ClassificationPipeline,
    ) -> Self {
        Self {
            logger: logger.with_namespace("app"),
            capture_surface,
            display,
            pipeline,
        }
    }

    /// Runs until the capture surface closes. Model loading failures abort
    /// startup; per-capture failures are shown and the loop continues.
    pub fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.display.init()?;

        if let Err(e) = self.pipeline.initialize() {
            self.logger.error(&format!("Startup failed: {}", e))?;
            self.display.show(&DisplayState::Failed(e.to_string()))?;
            return Err(e.into());
        }

        let looped = self.run_captures();
        let stopped = self.stop();
        looped.and(stopped)
    }

    fn run_captures(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.capture_surface.start()?;
        self.display.show(&DisplayState::Idle)?;

        loop {
            match self.capture_surface.capture()? {
                CaptureEvent::Captured(image) => {
                    let state = self.classify(&image)?;
                    self.display.show(&state)?;
                }
                CaptureEvent::Cancelled => {
                    self.logger.info("Capture cancelled, nothing to classify")?;
                }
                CaptureEvent::Closed => return Ok(()),
            }
        }
    }

    pub fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.capture_surface.stop()?;
        self.pipeline.dispose()?;
        self.logger.info("Stopped")?;
        Ok(())
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<DisplayState, Box<dyn std::error::Error + Send + Sync>> {
        match self.pipeline.classify(image) {
            Ok(result) => Ok(DisplayState::Label(result.to_string())),
            Err(e) => {
                self.logger.error(&format!("Classification failed: {}", e))?;
                Ok(DisplayState::Failed(e.to_string()))
            }
        }
    }
}
