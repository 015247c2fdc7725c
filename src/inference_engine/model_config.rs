/// Spatial and channel layout the model expects for its single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputShape {
    pub height: u32,
    pub width: u32,
    pub channels: u32,
}

impl InputShape {
    pub fn square(side: u32, channels: u32) -> Self {
        Self {
            height: side,
            width: side,
            channels,
        }
    }

    pub fn dims(&self) -> Vec<usize> {
        vec![
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        ]
    }
}

/// Element type the model takes as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    /// Raw 0-255 samples, as quantized MobileNet models expect.
    U8,
    /// Samples scaled into [0, 1].
    F32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub input_shape: InputShape,
    pub output_len: usize,
    pub sample_type: SampleType,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            input_shape: InputShape::square(224, 3),
            output_len: 1001,
            sample_type: SampleType::U8,
        }
    }
}
