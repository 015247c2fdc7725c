use memmap2::Mmap;
use std::sync::Arc;

#[derive(Clone)]
enum ModelBytes {
    Mapped(Arc<Mmap>),
    #[allow(dead_code)]
    Owned(Arc<[u8]>),
}

/// Opaque read-only view of a serialized model. Clones share the same mapping.
#[derive(Clone)]
pub struct ModelHandle {
    name: String,
    bytes: ModelBytes,
}

impl ModelHandle {
    pub fn mapped(name: &str, mmap: Mmap) -> Self {
        Self {
            name: name.to_string(),
            bytes: ModelBytes::Mapped(Arc::new(mmap)),
        }
    }

    #[allow(dead_code)]
    pub fn owned(name: &str, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.to_string(),
            bytes: ModelBytes::Owned(bytes.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            ModelBytes::Mapped(mmap) => &mmap[..],
            ModelBytes::Owned(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.bytes, ModelBytes::Mapped(_))
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("name", &self.name)
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}
