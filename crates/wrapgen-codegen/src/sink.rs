//! Output sinks for generated files
//!
//! An [`OutputFactory`] turns a qualified output name (`a.b.FooWrapper`)
//! into an [`OutputSink`]. A sink is closed exactly once: explicitly through
//! [`OutputSink::close`], or on drop when a class aborts partway.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wrapgen_core::{GenError, GenResult};

/// Extension of generated source files
pub const SOURCE_EXTENSION: &str = "java";

/// Creates output sinks by qualified output name
pub trait OutputFactory {
    /// Acquire the sink for `output_name`
    ///
    /// Fails with [`GenError::ResourceAcquisition`] when the sink cannot be
    /// created.
    fn create(&self, output_name: &str) -> GenResult<OutputSink>;
}

/// Relative path of the source file for a qualified output name
///
/// `a.b.FooWrapper` becomes `a/b/FooWrapper.java`.
pub fn output_path(output_name: &str) -> PathBuf {
    let mut path: PathBuf = output_name.split('.').collect();
    path.set_extension(SOURCE_EXTENSION);
    path
}

/// A writable output, released exactly once
pub struct OutputSink {
    path: PathBuf,
    writer: Option<Box<dyn Write + Send>>,
}

impl OutputSink {
    pub fn new(path: impl Into<PathBuf>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            path: path.into(),
            writer: Some(writer),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// Write text to the sink
    pub fn write_str(&mut self, text: &str) -> GenResult<()> {
        let result = match self.writer.as_mut() {
            Some(writer) => writer.write_all(text.as_bytes()),
            None => Err(io::Error::other("output already closed")),
        };

        result.map_err(|e| self.write_error(e))
    }

    /// Flush and release the sink; later calls do nothing
    pub fn close(&mut self) -> GenResult<()> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };

        writer.flush().map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: io::Error) -> GenError {
        GenError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(path = ?self.path, "failed to close output: {}", e);
        }
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("path", &self.path)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Writes generated files under a root directory, one directory per
/// namespace segment
#[derive(Debug, Clone)]
pub struct DirectoryOutput {
    root: PathBuf,
}

impl DirectoryOutput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputFactory for DirectoryOutput {
    fn create(&self, output_name: &str) -> GenResult<OutputSink> {
        let path = self.root.join(output_path(output_name));

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenError::ResourceAcquisition {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let file = File::create(&path).map_err(|e| GenError::ResourceAcquisition {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = ?path, "output created");
        Ok(OutputSink::new(path, Box::new(BufWriter::new(file))))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: BTreeMap<String, String>,
    releases: BTreeMap<String, usize>,
}

/// Keeps generated files in memory, keyed by output name
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    state: Arc<Mutex<MemoryState>>,
    refused: Arc<Mutex<Vec<String>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make acquisition of `output_name` fail
    pub fn refuse(&self, output_name: impl Into<String>) {
        self.refused.lock().push(output_name.into());
    }

    /// Content flushed to `output_name`, if it was ever acquired
    pub fn content(&self, output_name: &str) -> Option<String> {
        self.state.lock().contents.get(output_name).cloned()
    }

    /// Names of every acquired output, sorted
    pub fn names(&self) -> Vec<String> {
        self.state.lock().contents.keys().cloned().collect()
    }

    /// How many times the sink for `output_name` was released
    pub fn release_count(&self, output_name: &str) -> usize {
        self.state
            .lock()
            .releases
            .get(output_name)
            .copied()
            .unwrap_or(0)
    }
}

impl OutputFactory for MemoryOutput {
    fn create(&self, output_name: &str) -> GenResult<OutputSink> {
        let path = output_path(output_name);

        if self.refused.lock().iter().any(|name| name == output_name) {
            return Err(GenError::ResourceAcquisition {
                path,
                source: io::Error::new(io::ErrorKind::PermissionDenied, "output refused"),
            });
        }

        self.state
            .lock()
            .contents
            .insert(output_name.to_string(), String::new());

        let writer = MemoryWriter {
            name: output_name.to_string(),
            buffer: Vec::new(),
            state: Arc::clone(&self.state),
        };
        Ok(OutputSink::new(path, Box::new(writer)))
    }
}

struct MemoryWriter {
    name: String,
    buffer: Vec<u8>,
    state: Arc<Mutex<MemoryState>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        self.state.lock().contents.insert(self.name.clone(), text);
        Ok(())
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        *self
            .state
            .lock()
            .releases
            .entry(self.name.clone())
            .or_insert(0) += 1;
    }
}
