use crate::assets::interface::Assets;
use crate::config::Config;
use crate::error::{ClassifierError, ShapeStage};
use crate::image_normalizer::normalize;
use crate::inference_engine::interface::{InferenceBackend, InferenceEngine};
use crate::inference_engine::model_config::ModelConfig;
use crate::label_decoder::{decode, ClassificationResult, LabelTable};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use std::time::Instant;

enum PipelineState {
    Uninitialized,
    Ready {
        engine: Box<dyn InferenceEngine>,
        labels: LabelTable,
    },
    Disposed,
}

/// Capture in, label out. Holds one prepared model from `initialize` until
/// `dispose` and never reloads it between calls.
pub struct ClassificationPipeline {
    model_artifact: String,
    label_asset: String,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    assets: Arc<dyn Assets>,
    backend: Arc<dyn InferenceBackend>,
    state: PipelineState,
}

impl ClassificationPipeline {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
        assets: Arc<dyn Assets>,
        backend: Arc<dyn InferenceBackend>,
    ) -> Self {
        Self {
            model_artifact: config.model_artifact.clone(),
            label_asset: config.label_asset.clone(),
            config: config.model.clone(),
            logger: logger.with_namespace("pipeline"),
            assets,
            backend,
            state: PipelineState::Uninitialized,
        }
    }

    /// Maps the model, prepares it and loads the label table. Calling it on a
    /// ready pipeline does nothing.
    pub fn initialize(&mut self) -> Result<(), ClassifierError> {
        match self.state {
            PipelineState::Ready { .. } => return Ok(()),
            PipelineState::Disposed => return Err(ClassifierError::Disposed),
            PipelineState::Uninitialized => {}
        }

        self.logger
            .info(&format!("Loading model {}", self.model_artifact))
            .map_err(ClassifierError::logging)?;
        let model = self.assets.open_model(&self.model_artifact)?;
        let engine = self.backend.prepare(model, &self.config)?;

        let labels = LabelTable::from_lines(self.assets.read_lines(&self.label_asset)?);
        labels.validate_len(self.config.output_len)?;

        self.logger
            .info(&format!(
                "Ready: {} ({} labels, input {:?})",
                self.model_artifact,
                labels.len(),
                self.config.input_shape.dims()
            ))
            .map_err(ClassifierError::logging)?;

        self.state = PipelineState::Ready { engine, labels };
        Ok(())
    }

    #[allow(dead_code)]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, PipelineState::Ready { .. })
    }

    pub fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifierError> {
        let (engine, labels) = match &self.state {
            PipelineState::Ready { engine, labels } => (engine, labels),
            PipelineState::Uninitialized => return Err(ClassifierError::NotInitialized),
            PipelineState::Disposed => return Err(ClassifierError::Disposed),
        };
        let started = Instant::now();

        let tensor = normalize(image, &self.config.input_shape)?;
        let expected = self.config.input_shape.dims();
        if tensor.shape() != expected.as_slice() {
            return Err(ClassifierError::ShapeMismatch {
                stage: ShapeStage::Input,
                expected,
                actual: tensor.shape().to_vec(),
            });
        }

        let output = engine.infer(&tensor)?;
        if output.len() != self.config.output_len {
            return Err(ClassifierError::ShapeMismatch {
                stage: ShapeStage::Output,
                expected: vec![self.config.output_len],
                actual: vec![output.len()],
            });
        }

        let result = decode(&output, labels);

        let elapsed = started.elapsed().as_millis();
        let logged = match &result {
            ClassificationResult::Label(c) => self.logger.info(&format!(
                "Classified {}x{} image as '{}' (class {}, score {}) in {} ms",
                image.width(),
                image.height(),
                c.label,
                c.index,
                c.confidence,
                elapsed
            )),
            ClassificationResult::Unknown => self.logger.info(&format!(
                "No label for {}x{} image ({} ms)",
                image.width(),
                image.height(),
                elapsed
            )),
        };
        logged.map_err(ClassifierError::logging)?;

        Ok(result)
    }

    /// Releases the model. Later calls are no-ops. The model is released
    /// even when the log line cannot be written.
    pub fn dispose(&mut self) -> Result<(), ClassifierError> {
        if let PipelineState::Ready { engine, .. } =
            std::mem::replace(&mut self.state, PipelineState::Disposed)
        {
            let name = engine.model().name().to_string();
            drop(engine);
            self.logger
                .info(&format!("Released model {}", name))
                .map_err(ClassifierError::logging)?;
        }
        Ok(())
    }
}

impl Drop for ClassificationPipeline {
    fn drop(&mut self) {
        // Nowhere to report a log failure from here; the model is released regardless.
        let _ = self.dispose();
    }
}
