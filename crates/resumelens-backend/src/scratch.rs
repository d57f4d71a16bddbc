//! Scoped scratch files for extraction strategies that want a path.
//!
//! Concurrent pipeline invocations share only the OS temp directory;
//! `tempfile` gives each scratch file a unique name, so no coordination
//! is needed between them. The file is removed when the guard drops,
//! on success and error paths alike.

use resumelens_core::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// RAII guard around a uniquely named temp file holding document bytes.
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Spill `data` to a fresh scratch file.
    ///
    /// # Errors
    /// Returns an I/O error if the temp file cannot be created or written.
    pub fn write(data: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("resumelens-")
            .tempfile()?;
        file.write_all(data)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path of the scratch file, valid until the guard drops.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
