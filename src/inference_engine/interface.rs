use crate::assets::model_handle::ModelHandle;
use crate::error::ClassifierError;
use crate::image_normalizer::NormalizedTensor;
use crate::inference_engine::model_config::ModelConfig;
use crate::label_decoder::OutputVector;

/// A model ready to run. Owns the handle it was built from.
pub trait InferenceEngine: Send + Sync {
    /// One synchronous forward pass.
    fn infer(&self, input: &NormalizedTensor) -> Result<OutputVector, ClassifierError>;

    fn model(&self) -> &ModelHandle;
}

/// Turns a mapped model artifact into an [`InferenceEngine`].
pub trait InferenceBackend: Send + Sync {
    fn prepare(
        &self,
        model: ModelHandle,
        config: &ModelConfig,
    ) -> Result<Box<dyn InferenceEngine>, ClassifierError>;
}
