use crate::assets::model_handle::ModelHandle;
use crate::error::{ClassifierError, ShapeStage};
use crate::image_normalizer::NormalizedTensor;
use crate::inference_engine::interface::{InferenceBackend, InferenceEngine};
use crate::inference_engine::model_config::{ModelConfig, SampleType};
use crate::label_decoder::OutputVector;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct InferenceBackendTractOnnx {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceBackendTractOnnx {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("tract_onnx"),
        }
    }
}

fn build_plan(model: &ModelHandle, config: &ModelConfig) -> TractResult<RunnableModel> {
    let shape = config.input_shape;
    let dims = [
        1,
        shape.height as usize,
        shape.width as usize,
        shape.channels as usize,
    ];
    let input_fact: InferenceFact = match config.sample_type {
        SampleType::U8 => u8::fact(dims).into(),
        SampleType::F32 => f32::fact(dims).into(),
    };

    tract_onnx::onnx()
        .model_for_read(&mut std::io::Cursor::new(model.as_bytes()))?
        .with_input_fact(0, input_fact)?
        .into_optimized()?
        .into_runnable()
}

/// Adds the batch axis and converts samples to the model's element type.
fn input_tensor(input: &NormalizedTensor, sample_type: SampleType) -> Tensor {
    let batched = input
        .samples()
        .clone()
        .insert_axis(tract_ndarray::Axis(0));

    match sample_type {
        SampleType::U8 => batched.into_tensor(),
        SampleType::F32 => batched.mapv(|s| s as f32 / 255.0).into_tensor(),
    }
}

impl InferenceBackend for InferenceBackendTractOnnx {
    fn prepare(
        &self,
        model: ModelHandle,
        config: &ModelConfig,
    ) -> Result<Box<dyn InferenceEngine>, ClassifierError> {
        let started = Instant::now();

        let plan = build_plan(&model, config).map_err(|e| ClassifierError::ModelLoad {
            name: model.name().to_string(),
            reason: e.to_string(),
        })?;

        self.logger
            .info(&format!(
                "Prepared {} in {} ms",
                model.name(),
                started.elapsed().as_millis()
            ))
            .map_err(ClassifierError::logging)?;

        Ok(Box::new(InferenceEngineTractOnnx {
            plan,
            model,
            config: config.clone(),
            logger: self.logger.clone(),
        }))
    }
}

pub struct InferenceEngineTractOnnx {
    plan: RunnableModel,
    model: ModelHandle,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngine for InferenceEngineTractOnnx {
    fn infer(&self, input: &NormalizedTensor) -> Result<OutputVector, ClassifierError> {
        let started = Instant::now();
        let tensor = input_tensor(input, self.config.sample_type);

        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no outputs".to_string()))?;

        if output.len() != self.config.output_len {
            return Err(ClassifierError::ShapeMismatch {
                stage: ShapeStage::Output,
                expected: vec![1, self.config.output_len],
                actual: output.shape().to_vec(),
            });
        }

        let scores = output
            .cast_to::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let scores = scores
            .as_slice::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .to_vec();

        self.logger
            .info(&format!("Inference took {} ms", started.elapsed().as_millis()))
            .map_err(ClassifierError::logging)?;

        Ok(OutputVector(scores))
    }

    fn model(&self) -> &ModelHandle {
        &self.model
    }
}
