use crate::assets::interface::{split_lines, Assets};
use crate::assets::model_handle::ModelHandle;
use crate::error::ClassifierError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Assets held in memory. Counts model opens so callers can check reuse.
#[derive(Default)]
pub struct AssetsMemory {
    files: HashMap<String, Arc<[u8]>>,
    model_opens: AtomicUsize,
}

impl AssetsMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        self.files.insert(name.to_string(), Arc::from(bytes));
        self
    }

    pub fn with_lines(self, name: &str, lines: &[&str]) -> Self {
        let text: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        self.with_file(name, text)
    }

    pub fn model_opens(&self) -> usize {
        self.model_opens.load(Ordering::SeqCst)
    }

    fn get(&self, name: &str) -> Result<&Arc<[u8]>, ClassifierError> {
        self.files
            .get(name)
            .ok_or_else(|| ClassifierError::AssetMissing {
                name: name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, name.to_string()),
            })
    }
}

impl Assets for AssetsMemory {
    fn open_model(&self, name: &str) -> Result<ModelHandle, ClassifierError> {
        let bytes = self.get(name)?;
        if bytes.is_empty() {
            return Err(ClassifierError::ModelLoad {
                name: name.to_string(),
                reason: "artifact is empty".to_string(),
            });
        }
        self.model_opens.fetch_add(1, Ordering::SeqCst);
        Ok(ModelHandle::owned(name, bytes.clone()))
    }

    fn read_lines(&self, name: &str) -> Result<Vec<String>, ClassifierError> {
        let bytes = self.get(name)?;
        let text = std::str::from_utf8(bytes).map_err(|e| ClassifierError::ModelLoad {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(split_lines(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_model_counts_opens() {
        let assets = AssetsMemory::new().with_file("m", vec![1u8, 2, 3]);

        let handle = assets.open_model("m").unwrap();

        assert!(!handle.is_mapped());
        assert_eq!(handle.as_bytes(), &[1u8, 2, 3]);
        assert_eq!(assets.model_opens(), 1);
    }

    #[test]
    fn test_with_lines_round_trips_through_read_lines() {
        let assets = AssetsMemory::new().with_lines("labels", &["cat", "dog"]);

        assert_eq!(assets.read_lines("labels").unwrap(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_missing_asset() {
        let assets = AssetsMemory::new();

        assert!(matches!(
            assets.open_model("m"),
            Err(ClassifierError::AssetMissing { .. })
        ));
    }
}
