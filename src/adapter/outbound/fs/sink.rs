//! Directory-backed [`OutputSink`]: one `{sport}.json` file per sport.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::id::SportKey;
use crate::error::Result;
use crate::port::outbound::sink::OutputSink;

const EXTENSION: &str = "json";

/// Writes sport documents into a flat output directory.
///
/// The directory is created on first write. Files other than `*.json`
/// (such as a `.gitkeep`) are never touched.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for `sport`.
    ///
    /// # Errors
    ///
    /// Rejects keys that would escape the output directory.
    pub fn path_for(&self, sport: &SportKey) -> Result<PathBuf> {
        let key = sport.as_str();
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("sport key {key:?} is not a valid file name"),
            )
            .into());
        }
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }

    fn documents(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl OutputSink for DirectorySink {
    fn read(&self, sport: &SportKey) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(sport)?) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, sport: &SportKey, document: &str) -> Result<()> {
        let path = self.path_for(sport)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, document)?;
        debug!(path = %path.display(), bytes = document.len(), "Wrote opportunity log");
        Ok(())
    }

    fn clear(&self) -> Result<usize> {
        let documents = self.documents()?;
        for path in &documents {
            fs::remove_file(path)?;
        }
        Ok(documents.len())
    }

    fn sports(&self) -> Result<Vec<SportKey>> {
        Ok(self
            .documents()?
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| SportKey::new(stem.to_string_lossy()))
            .collect())
    }
}
