use crate::error::{ClassifierError, ShapeStage};
use crate::inference_engine::model_config::InputShape;
use image::{imageops, DynamicImage, Pixel, RgbaImage};
use std::borrow::Cow;
use tract_onnx::prelude::tract_ndarray::Array3;

/// Height x width x channel tensor of raw u8 samples, ready for the model.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTensor {
    samples: Array3<u8>,
}

impl NormalizedTensor {
    pub fn shape(&self) -> &[usize] {
        self.samples.shape()
    }

    pub fn samples(&self) -> &Array3<u8> {
        &self.samples
    }
}

/// Brings any image into the 4-channel 8-bit layout. Images already stored
/// that way are borrowed as-is.
pub fn to_rgba8(image: &DynamicImage) -> Cow<'_, RgbaImage> {
    match image {
        DynamicImage::ImageRgba8(rgba) => Cow::Borrowed(rgba),
        other => Cow::Owned(other.to_rgba8()),
    }
}

/// Stretches to exactly `width` x `height` with bilinear filtering. Aspect
/// ratio is not kept.
pub fn resize_image(rgba: &RgbaImage, width: u32, height: u32) -> Cow<'_, RgbaImage> {
    if rgba.dimensions() == (width, height) {
        return Cow::Borrowed(rgba);
    }
    Cow::Owned(imageops::resize(
        rgba,
        width,
        height,
        imageops::FilterType::Triangle,
    ))
}

fn image_to_tensor(rgba: &RgbaImage, channels: u32) -> Result<NormalizedTensor, ClassifierError> {
    let (width, height) = rgba.dimensions();
    let (w, h) = (width as usize, height as usize);

    let samples = match channels {
        3 => Array3::from_shape_fn((h, w, 3), |(y, x, c)| {
            rgba.get_pixel(x as u32, y as u32)[c]
        }),
        1 => Array3::from_shape_fn((h, w, 1), |(y, x, _)| {
            rgba.get_pixel(x as u32, y as u32).to_luma()[0]
        }),
        other => {
            return Err(ClassifierError::ShapeMismatch {
                stage: ShapeStage::Input,
                expected: vec![h, w, 3],
                actual: vec![h, w, other as usize],
            })
        }
    };

    Ok(NormalizedTensor { samples })
}

pub fn normalize(
    image: &DynamicImage,
    shape: &InputShape,
) -> Result<NormalizedTensor, ClassifierError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifierError::InvalidImage(format!(
            "image is {}x{}",
            image.width(),
            image.height()
        )));
    }
    if shape.width == 0 || shape.height == 0 {
        return Err(ClassifierError::ShapeMismatch {
            stage: ShapeStage::Input,
            expected: vec![1, 1, shape.channels as usize],
            actual: shape.dims(),
        });
    }

    let rgba = to_rgba8(image);
    let resized = resize_image(&rgba, shape.width, shape.height);
    image_to_tensor(&resized, shape.channels)
}
