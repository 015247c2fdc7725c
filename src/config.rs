use crate::inference_engine::model_config::{InputShape, ModelConfig, SampleType};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub asset_dir: PathBuf,
    pub model_artifact: String,
    pub label_asset: String,
    pub model: ModelConfig,
    pub logger_timezone: chrono::FixedOffset,
    pub display: DisplayKind,
    pub fake_camera_frame_count: usize,
    pub fake_camera_max_frame_size: (u32, u32),
    pub capture_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            model_artifact: "mobilenet_v1.onnx".to_string(),
            label_asset: "labels_mobilenet.txt".to_string(),
            model: ModelConfig::default(),
            logger_timezone: local_timezone(),
            display: DisplayKind::Console,
            fake_camera_frame_count: 3,
            fake_camera_max_frame_size: (4000, 3000),
            capture_interval: Duration::from_millis(500),
        }
    }
}

impl Config {
    /// Applies overrides from the process environment. Model shape settings
    /// let another model family be dropped in without code changes.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("PHOTO_CLASSIFIER_ASSETS") {
            config.asset_dir = PathBuf::from(dir);
        }

        if let Ok(model) = std::env::var("PHOTO_CLASSIFIER_MODEL") {
            config.model_artifact = model;
        }

        if let Ok(labels) = std::env::var("PHOTO_CLASSIFIER_LABELS") {
            config.label_asset = labels;
        }

        if let Ok(size) = std::env::var("PHOTO_CLASSIFIER_INPUT_SIZE") {
            let side = size
                .parse::<u32>()
                .map_err(|e| format!("PHOTO_CLASSIFIER_INPUT_SIZE '{}': {}", size, e))?;
            config.model.input_shape = InputShape::square(side, config.model.input_shape.channels);
        }

        if let Ok(len) = std::env::var("PHOTO_CLASSIFIER_OUTPUT_LEN") {
            config.model.output_len = len
                .parse::<usize>()
                .map_err(|e| format!("PHOTO_CLASSIFIER_OUTPUT_LEN '{}': {}", len, e))?;
        }

        if let Ok(sample_type) = std::env::var("PHOTO_CLASSIFIER_SAMPLE_TYPE") {
            config.model.sample_type = parse_sample_type(&sample_type)?;
        }

        if let Ok(display) = std::env::var("PHOTO_CLASSIFIER_DISPLAY") {
            config.display = parse_display(&display)?;
        }

        Ok(config)
    }
}

fn parse_sample_type(value: &str) -> Result<SampleType, String> {
    match value.to_ascii_lowercase().as_str() {
        "u8" | "uint8" => Ok(SampleType::U8),
        "f32" | "float32" => Ok(SampleType::F32),
        other => Err(format!("unknown sample type '{}'", other)),
    }
}

fn parse_display(value: &str) -> Result<DisplayKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "console" => Ok(DisplayKind::Console),
        "gui" => Ok(DisplayKind::Gui),
        other => Err(format!("unknown display '{}'", other)),
    }
}

fn local_timezone() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
