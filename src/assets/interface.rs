use crate::assets::model_handle::ModelHandle;
use crate::error::ClassifierError;

/// Read-only access to the assets packaged with the application.
pub trait Assets: Send + Sync {
    /// Maps the named model artifact read-only.
    fn open_model(&self, name: &str) -> Result<ModelHandle, ClassifierError>;

    /// Reads a text asset, one entry per line.
    fn read_lines(&self, name: &str) -> Result<Vec<String>, ClassifierError>;
}

/// Splits text into lines the way the label files are written: `\n` separated,
/// optional `\r` before it, no entry produced for a trailing newline.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}
