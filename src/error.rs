use thiserror::Error;

/// Pipeline stage a shape check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStage {
    Input,
    Output,
}

impl std::fmt::Display for ShapeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeStage::Input => write!(f, "input tensor"),
            ShapeStage::Output => write!(f, "output vector"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("asset '{name}' not found")]
    AssetMissing {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model '{name}' could not be loaded: {reason}")]
    ModelLoad { name: String, reason: String },

    #[error("{stage} shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        stage: ShapeStage,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("label table has {labels} entries but the model outputs {outputs}")]
    LabelCountMismatch { labels: usize, outputs: usize },

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("pipeline is not initialized")]
    NotInitialized,

    #[error("pipeline has been disposed")]
    Disposed,

    #[error("logging failed: {0}")]
    Logging(String),
}

impl ClassifierError {
    pub fn logging(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ClassifierError::Logging(err.to_string())
    }

    /// Maps an I/O failure on a named asset, treating "not found" as a missing asset.
    pub fn from_io(name: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ClassifierError::AssetMissing {
                name: name.to_string(),
                source: err,
            }
        } else {
            ClassifierError::ModelLoad {
                name: name.to_string(),
                reason: err.to_string(),
            }
        }
    }
}
