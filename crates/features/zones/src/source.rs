//! Where reference documents come from.
//!
//! The store only needs raw bytes per document; parsing happens in [`crate::tables`].

use crate::error::{DataLoadError, DataLoadErrorExt};
use fxhash::FxHashMap;
use plzmap_domain::config::DataConfig;
use std::fmt;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The two reference documents fetched by every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// `{ "<plz>": <zone id>, ... }`
    PlzToZone,
    /// `{ "zones": {...}, "gebiet": {...} }`
    Zones,
}

impl Document {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlzToZone => "plz-to-zone table",
            Self::Zones => "zone/Gebiet table",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Async fetch capability for reference documents.
pub trait DataSource: Send + Sync {
    fn fetch(&self, document: Document) -> impl Future<Output = Result<Vec<u8>, DataLoadError>> + Send;
}

/// Reads documents from files below a root directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    plz_to_zone: PathBuf,
    zones: PathBuf,
}

impl FsSource {
    pub fn new(plz_to_zone: impl Into<PathBuf>, zones: impl Into<PathBuf>) -> Self {
        Self { plz_to_zone: plz_to_zone.into(), zones: zones.into() }
    }

    /// Resolves both file names against `config.root`.
    #[must_use]
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.root.join(&config.plz_to_zone), config.root.join(&config.zones))
    }

    #[must_use]
    pub fn path(&self, document: Document) -> &Path {
        match document {
            Document::PlzToZone => &self.plz_to_zone,
            Document::Zones => &self.zones,
        }
    }
}

impl DataSource for FsSource {
    async fn fetch(&self, document: Document) -> Result<Vec<u8>, DataLoadError> {
        let path = self.path(document);
        debug!(%document, path = %path.display(), "Reading reference document");
        tokio::fs::read(path).await.context(format!("{document} at {}", path.display()))
    }
}

/// In-memory documents, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: FxHashMap<Document, Vec<u8>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, document: Document, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(document, bytes.into());
        self
    }

    pub fn insert(&mut self, document: Document, bytes: impl Into<Vec<u8>>) {
        self.documents.insert(document, bytes.into());
    }

    pub fn remove(&mut self, document: Document) {
        self.documents.remove(&document);
    }
}

impl DataSource for MemorySource {
    async fn fetch(&self, document: Document) -> Result<Vec<u8>, DataLoadError> {
        self.documents.get(&document).cloned().ok_or_else(|| DataLoadError::Fetch {
            source: io::Error::new(io::ErrorKind::NotFound, "document not registered"),
            context: Some(document.as_str().into()),
        })
    }
}
