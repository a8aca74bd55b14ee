//! Document sources and identifier extraction

use crate::error::{EngineError, Result};
use nausea_core::RawDocument;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static IDENTIFIER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn identifier_pattern() -> &'static Regex {
    IDENTIFIER_PATTERN.get_or_init(|| {
        // Literal pattern; compilation cannot fail
        Regex::new(r"\w+\.txt$").expect("identifier pattern is valid")
    })
}

/// Derive a document identifier from its path
///
/// The identifier is the trailing `<word characters>.txt` file name, so
/// `text_files/0001.txt` becomes `0001.txt`. Any other path is rejected.
pub fn extract_identifier(path: &Path) -> Result<String> {
    path.to_str()
        .and_then(|text| identifier_pattern().find(text))
        .map(|found| found.as_str().to_string())
        .ok_or_else(|| EngineError::IdentifierParse {
            path: path.to_path_buf(),
        })
}

/// Capability for reading raw document text
pub trait DocumentSource: Send + Sync {
    /// Read the full text stored at `path`
    fn read(&self, path: &Path) -> Result<String>;

    /// Read a document and key it by its identifier
    fn load(&self, path: &Path) -> Result<RawDocument> {
        let identifier = extract_identifier(path)?;
        let text = self.read(path)?;
        Ok(RawDocument { identifier, text })
    }
}

/// Reads UTF-8 documents from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl DocumentSource for FileSource {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| EngineError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory source keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<PathBuf, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, path: &Path) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| EngineError::DocumentRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "document not found"),
            })
    }
}
