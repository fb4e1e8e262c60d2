use crate::error::{EntropyError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Zero-copy memory-mapped source file with shared ownership.
///
/// Zero-length files are not mapped (mapping an empty file is
/// platform-dependent); they expose an empty byte slice instead.
#[derive(Clone)]
pub struct SourceFile {
    mmap: Option<Arc<Mmap>>,
    len: u64,
}

impl SourceFile {
    /// Open a source file with memory mapping
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let file = File::open(path_ref).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EntropyError::FileNotFound(path_ref.display().to_string())
            } else {
                EntropyError::Io(e)
            }
        })?;

        let metadata = file.metadata()?;
        let len = metadata.len();

        let mmap = if len == 0 {
            None
        } else {
            let mmap = unsafe {
                Mmap::map(&file)
                    .map_err(|e| EntropyError::Mmap(format!("Failed to mmap file: {}", e)))?
            };
            Some(Arc::new(mmap))
        };

        Ok(Self { mmap, len })
    }

    /// Get the full byte content of the source
    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().map_or(&[], |m| &m[..])
    }

    /// Get the total size of the source in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Check whether the source is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
