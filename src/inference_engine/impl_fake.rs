use crate::assets::model_handle::ModelHandle;
use crate::error::{ClassifierError, ShapeStage};
use crate::image_normalizer::NormalizedTensor;
use crate::inference_engine::interface::{InferenceBackend, InferenceEngine};
use crate::inference_engine::model_config::ModelConfig;
use crate::label_decoder::OutputVector;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum FakeScores {
    /// Always returns these scores.
    Fixed(Vec<f32>),
    /// Scores position `c` with the mean of channel `c`, everything else 0.
    ChannelMeans,
}

/// Stand-in runtime that records how often it is prepared and run.
#[derive(Clone)]
pub struct InferenceBackendFake {
    scores: FakeScores,
    prepares: Arc<AtomicUsize>,
    runs: Arc<AtomicUsize>,
}

impl InferenceBackendFake {
    pub fn new(scores: FakeScores) -> Self {
        Self {
            scores,
            prepares: Arc::new(AtomicUsize::new(0)),
            runs: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn prepares(&self) -> usize {
        self.prepares.load(Ordering::SeqCst)
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl InferenceBackend for InferenceBackendFake {
    fn prepare(
        &self,
        model: ModelHandle,
        config: &ModelConfig,
    ) -> Result<Box<dyn InferenceEngine>, ClassifierError> {
        self.prepares.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InferenceEngineFake {
            scores: self.scores.clone(),
            model,
            config: config.clone(),
            runs: self.runs.clone(),
        }))
    }
}

pub struct InferenceEngineFake {
    scores: FakeScores,
    model: ModelHandle,
    config: ModelConfig,
    runs: Arc<AtomicUsize>,
}

impl InferenceEngine for InferenceEngineFake {
    fn infer(&self, input: &NormalizedTensor) -> Result<OutputVector, ClassifierError> {
        let expected = self.config.input_shape.dims();
        if input.shape() != expected.as_slice() {
            return Err(ClassifierError::ShapeMismatch {
                stage: ShapeStage::Input,
                expected,
                actual: input.shape().to_vec(),
            });
        }

        self.runs.fetch_add(1, Ordering::SeqCst);

        let scores = match &self.scores {
            FakeScores::Fixed(scores) => scores.clone(),
            FakeScores::ChannelMeans => {
                let samples = input.samples();
                let mut scores = vec![0.0; self.config.output_len];
                let pixels = (samples.shape()[0] * samples.shape()[1]).max(1) as f32;
                for (c, score) in scores.iter_mut().enumerate().take(samples.shape()[2]) {
                    let sum: f32 = samples
                        .index_axis(tract_onnx::prelude::tract_ndarray::Axis(2), c)
                        .iter()
                        .map(|&s| s as f32)
                        .sum();
                    *score = sum / pixels;
                }
                scores
            }
        };

        Ok(OutputVector(scores))
    }

    fn model(&self) -> &ModelHandle {
        &self.model
    }
}
