//! The project record store.
//!
//! An ordered, immutable collection of project candidates. The store is built
//! once and handed to the views that need it; nothing reads project data from
//! a global.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::project::{validate_or_warn, ProjectCandidate, ProjectRecord};

/// Ordered project data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    entries: Vec<ProjectCandidate>,
}

impl ProjectStore {
    /// Build a store from candidates, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProjectId`] if two candidates share a
    /// string id.
    pub fn new(entries: Vec<ProjectCandidate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for id in entries.iter().filter_map(ProjectCandidate::id_str) {
            if !seen.insert(id) {
                return Err(Error::DuplicateProjectId { id: id.to_string() });
            }
        }
        Ok(Self { entries })
    }

    /// The built-in sample projects.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ProjectCandidate::new(
                    "project1",
                    "Portfolio Website",
                    "A responsive and modern portfolio website built with React to showcase \
                     my projects and skills.",
                    ["React", "JavaScript", "Styled-Components"],
                ),
                ProjectCandidate::new(
                    "project2",
                    "Task Manager App",
                    "A task management application with CRUD features and local storage \
                     persistence.",
                    ["React", "Redux", "JavaScript"],
                ),
                ProjectCandidate::new(
                    "project3",
                    "Weather Dashboard",
                    "A dashboard displaying weather data retrieved from public APIs.",
                    ["React", "API", "CSS"],
                ),
            ],
        }
    }

    /// Load a store from a JSON file holding an array of project entries.
    ///
    /// Entries that are not objects are kept as malformed candidates, so they
    /// are skipped at render time like any other bad record.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array, or
    /// repeats an id.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading project data from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let values: Vec<Value> =
            serde_json::from_str(&raw).map_err(|source| Error::ProjectData {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::new(values.into_iter().map(ProjectCandidate::from_value).collect())?;
        info!(
            count = store.len(),
            "Loaded project data from {}",
            path.display()
        );
        Ok(store)
    }

    /// The store selected by configuration: the configured data file, or the
    /// built-in projects when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.site.projects_path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Iterate over the entries in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectCandidate> {
        self.entries.iter()
    }

    /// Number of entries, malformed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries that validate, in store order. Malformed entries are
    /// logged and skipped.
    #[must_use]
    pub fn records(&self) -> Vec<ProjectRecord> {
        self.entries.iter().filter_map(validate_or_warn).collect()
    }
}

impl<'a> IntoIterator for &'a ProjectStore {
    type Item = &'a ProjectCandidate;
    type IntoIter = std::slice::Iter<'a, ProjectCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
