use crate::assets::interface::{split_lines, Assets};
use crate::assets::model_handle::ModelHandle;
use crate::error::ClassifierError;
use crate::library::logger::interface::Logger;
use memmap2::MmapOptions;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

/// Assets stored as plain files under one directory.
pub struct AssetsDirectory {
    root: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AssetsDirectory {
    pub fn new(root: impl Into<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            root: root.into(),
            logger: logger.with_namespace("assets"),
        }
    }
}

impl Assets for AssetsDirectory {
    fn open_model(&self, name: &str) -> Result<ModelHandle, ClassifierError> {
        let path = self.root.join(name);
        let file = File::open(&path).map_err(|e| ClassifierError::from_io(name, e))?;

        let len = file
            .metadata()
            .map_err(|e| ClassifierError::from_io(name, e))?
            .len();
        if len == 0 {
            return Err(ClassifierError::ModelLoad {
                name: name.to_string(),
                reason: "artifact is empty".to_string(),
            });
        }

        // SAFETY: packaged assets are never written while the application runs.
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .map_err(|e| ClassifierError::from_io(name, e))?;

        self.logger
            .info(&format!("Mapped {} ({} bytes)", path.display(), len))
            .map_err(ClassifierError::logging)?;

        Ok(ModelHandle::mapped(name, mmap))
    }

    fn read_lines(&self, name: &str) -> Result<Vec<String>, ClassifierError> {
        let path = self.root.join(name);
        let text = std::fs::read_to_string(&path).map_err(|e| ClassifierError::from_io(name, e))?;
        let lines = split_lines(&text);

        self.logger
            .info(&format!("Read {} lines from {}", lines.len(), path.display()))
            .map_err(ClassifierError::logging)?;

        Ok(lines)
    }
}
