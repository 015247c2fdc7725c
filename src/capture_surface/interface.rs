use image::DynamicImage;

#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// The user took a photo.
    Captured(DynamicImage),
    /// The capture was cancelled or produced no image.
    Cancelled,
    /// No more captures will arrive.
    Closed,
}

/// Owns the camera lifecycle and hands over one image per capture action.
pub trait CaptureSurface {
    fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    /// Blocks until the next capture action completes.
    fn capture(&mut self) -> Result<CaptureEvent, Box<dyn std::error::Error + Send + Sync>>;
}
