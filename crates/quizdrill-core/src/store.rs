//! Attempt persistence.
//!
//! One pretty-printed JSON file per completed attempt, named after the
//! attempt timestamp. Records are append-only: written once at session end,
//! never mutated.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::ExamAttempt;

/// Listing order for saved attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    NewestFirst,
    OldestFirst,
}

/// Reads and writes attempt records under one directory.
///
/// The directory is explicit configuration; nothing here consults ambient
/// process state.
#[derive(Debug, Clone)]
pub struct AttemptStore {
    dir: PathBuf,
}

impl AttemptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a finished attempt, returning the path written.
    ///
    /// The file name encodes the attempt timestamp; a numeric suffix keeps
    /// same-second saves distinct.
    pub fn save(&self, attempt: &ExamAttempt) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create attempt directory: {}", self.dir.display()))?;

        let stem = format!("exam_{}", attempt.timestamp.format("%Y%m%d_%H%M%S"));
        let mut path = self.dir.join(format!("{stem}.json"));
        let mut suffix = 1u32;
        while path.exists() {
            path = self.dir.join(format!("{stem}_{suffix}.json"));
            suffix += 1;
        }

        let json = serde_json::to_string_pretty(attempt).context("failed to serialize attempt")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write attempt to {}", path.display()))?;

        tracing::debug!("saved attempt to {}", path.display());
        Ok(path)
    }

    /// Paths of all saved attempts, sorted by the persisted-time their file
    /// names encode.
    pub fn list(&self, order: ListOrder) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read attempt directory: {}", self.dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();

        paths.sort();
        if order == ListOrder::NewestFirst {
            paths.reverse();
        }
        Ok(paths)
    }

    /// Load one attempt record; missing or corrupt files are fatal to the
    /// current operation.
    pub fn load(&self, path: &Path) -> Result<ExamAttempt> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read attempt from {}", path.display()))?;
        let attempt: ExamAttempt = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse attempt {}", path.display()))?;
        Ok(attempt)
    }

    /// Load every saved attempt in the given order.
    pub fn load_all(&self, order: ListOrder) -> Result<Vec<ExamAttempt>> {
        self.list(order)?.iter().map(|p| self.load(p)).collect()
    }
}
