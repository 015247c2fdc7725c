use app::App;
use assets::impl_directory::AssetsDirectory;
use capture_surface::impl_fake::CaptureSurfaceFake;
use capture_surface::impl_files::CaptureSurfaceFiles;
use capture_surface::interface::CaptureSurface;
use config::{Config, DisplayKind};
use display::impl_console::LabelDisplayConsole;
use display::impl_gui::LabelDisplayGui;
use display::interface::LabelDisplay;
use inference_engine::impl_tract_onnx::InferenceBackendTractOnnx;
use library::logger::impl_console::LoggerConsole;
use pipeline::main::ClassificationPipeline;
use std::path::PathBuf;
use std::sync::Arc;

mod app;
mod assets;
mod capture_surface;
mod config;
mod display;
mod error;
mod image_normalizer;
mod inference_engine;
mod label_decoder;
mod library;
mod pipeline;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    // Each path stands for one photo taken by the user.
    let image_paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    let capture_surface: Box<dyn CaptureSurface> = if image_paths.is_empty() {
        Box::new(CaptureSurfaceFake::new(&config, logger.clone()))
    } else {
        Box::new(CaptureSurfaceFiles::new(image_paths, logger.clone()))
    };

    let display: Box<dyn LabelDisplay> = match config.display {
        DisplayKind::Console => Box::new(LabelDisplayConsole::new()),
        DisplayKind::Gui => Box::new(LabelDisplayGui::new()),
    };

    let assets = Arc::new(AssetsDirectory::new(&config.asset_dir, logger.clone()));

    let backend = Arc::new(InferenceBackendTractOnnx::new(logger.clone()));

    let pipeline = ClassificationPipeline::new(&config, logger.clone(), assets, backend);

    let mut app = App::new(logger, capture_surface, display, pipeline);

    app.start()?;

    Ok(())
}
