//! Project records shown on the Projects page.
//!
//! Project data arrives as [`ProjectCandidate`]s, whose fields may be missing
//! or of the wrong JSON type. A candidate becomes a [`ProjectRecord`] only
//! after passing shape validation; a failing candidate yields a
//! [`MalformedRecord`] describing the first defect found.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// The four fields of a project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// Unique identifier.
    Id,
    /// Display title.
    Title,
    /// Display description.
    Description,
    /// Technologies used, in display order.
    TechStack,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
            Self::TechStack => write!(f, "techStack"),
        }
    }
}

/// What is wrong with a malformed project entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordDefect {
    /// A required field is absent or null.
    #[error("missing field '{0}'")]
    Missing(RecordField),

    /// A text field holds something other than a string.
    #[error("field '{0}' is not a string")]
    NotAString(RecordField),

    /// A text field is the empty string.
    #[error("field '{0}' is empty")]
    Empty(RecordField),

    /// `techStack` is not an array.
    #[error("field 'techStack' is not an array")]
    TechStackNotArray,

    /// An entry of `techStack` is not a non-empty string.
    #[error("techStack entry {index} is not a non-empty string")]
    TechStackEntry {
        /// Position of the offending entry.
        index: usize,
    },

    /// The entry is a JSON value other than an object.
    #[error("entry is a JSON {0}, not an object")]
    NotAnObject(&'static str),
}

/// A project entry that failed validation and will not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed project record {}: {defect}", .id.as_deref().unwrap_or("<no id>"))]
pub struct MalformedRecord {
    /// The candidate's id, when it has a usable one.
    pub id: Option<String>,
    /// The first defect found.
    pub defect: RecordDefect,
}

/// An unvalidated project entry, as read from project data.
///
/// Every field is optional and untyped so that any JSON object can be
/// represented; `null` is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCandidate {
    /// Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Tech stack.
    #[serde(
        default,
        rename = "techStack",
        alias = "tech_stack",
        skip_serializing_if = "Option::is_none"
    )]
    pub tech_stack: Option<Value>,
    /// JSON type of an entry that was not an object.
    #[serde(skip)]
    non_object: Option<&'static str>,
}

impl ProjectCandidate {
    /// Build a well-formed candidate from plain values.
    #[must_use]
    pub fn new<I, S>(id: &str, title: &str, description: &str, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(Value::from(id)),
            title: Some(Value::from(title)),
            description: Some(Value::from(description)),
            tech_stack: Some(Value::Array(
                tech_stack
                    .into_iter()
                    .map(|tech| Value::String(tech.into()))
                    .collect(),
            )),
            non_object: None,
        }
    }

    /// A candidate from any JSON value.
    ///
    /// Objects are read field by field. Any other value yields a candidate
    /// that fails validation with [`RecordDefect::NotAnObject`].
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let kind = match &value {
            Value::Object(_) => return serde_json::from_value(value).unwrap_or_default(),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        };
        Self {
            non_object: Some(kind),
            ..Self::default()
        }
    }

    /// The candidate's id if it is a non-empty string.
    #[must_use]
    pub fn id_str(&self) -> Option<&str> {
        self.id
            .as_ref()
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Validate this candidate into a record.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedRecord`] naming the first defect found, checking
    /// `id`, `title`, `description` and `techStack` in that order.
    pub fn validate(&self) -> Result<ProjectRecord, MalformedRecord> {
        let malformed = |defect| MalformedRecord {
            id: self.id_str().map(str::to_string),
            defect,
        };

        if let Some(kind) = self.non_object {
            return Err(malformed(RecordDefect::NotAnObject(kind)));
        }

        let id = required_text(self.id.as_ref(), RecordField::Id).map_err(malformed)?;
        let title = required_text(self.title.as_ref(), RecordField::Title).map_err(malformed)?;
        let description =
            required_text(self.description.as_ref(), RecordField::Description).map_err(malformed)?;
        let tech_stack = tech_stack(self.tech_stack.as_ref()).map_err(malformed)?;

        Ok(ProjectRecord {
            id,
            title,
            description,
            tech_stack,
        })
    }
}

fn required_text(value: Option<&Value>, field: RecordField) -> Result<String, RecordDefect> {
    match value {
        None | Some(Value::Null) => Err(RecordDefect::Missing(field)),
        Some(Value::String(s)) if s.is_empty() => Err(RecordDefect::Empty(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RecordDefect::NotAString(field)),
    }
}

fn tech_stack(value: Option<&Value>) -> Result<Vec<String>, RecordDefect> {
    let entries = match value {
        None | Some(Value::Null) => return Err(RecordDefect::Missing(RecordField::TechStack)),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(RecordDefect::TechStackNotArray),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(s) if !s.is_empty() => Ok(s.clone()),
            _ => Err(RecordDefect::TechStackEntry { index }),
        })
        .collect()
}

impl From<&ProjectRecord> for ProjectCandidate {
    fn from(record: &ProjectRecord) -> Self {
        Self::new(
            &record.id,
            &record.title,
            &record.description,
            record.tech_stack.iter().cloned(),
        )
    }
}

/// A validated, immutable project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    id: String,
    title: String,
    description: String,
    #[serde(rename = "techStack")]
    tech_stack: Vec<String>,
}

impl ProjectRecord {
    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Display description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Technologies in display order, duplicates included.
    #[must_use]
    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    /// Tech entries that occur more than once, in order of first repetition.
    #[must_use]
    pub fn duplicate_tech(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for tech in &self.tech_stack {
            if !seen.insert(tech.as_str()) && !duplicates.contains(&tech.as_str()) {
                duplicates.push(tech.as_str());
            }
        }
        duplicates
    }
}

/// Validate a candidate, logging and discarding it when malformed.
pub(crate) fn validate_or_warn(candidate: &ProjectCandidate) -> Option<ProjectRecord> {
    match candidate.validate() {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(
                id = err.id.as_deref().unwrap_or("<no id>"),
                defect = %err.defect,
                "Skipping malformed project record"
            );
            None
        }
    }
}
