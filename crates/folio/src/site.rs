//! Static site builder.
//!
//! Writes every route to an `index.html` under an output directory. Files
//! whose content has not changed are left alone, so timestamps only move for
//! pages that actually differ.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::router::{Route, Shell};

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    /// The file was created or its content replaced.
    Written,
    /// The file already had identical content.
    Unchanged,
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
        };
        f.pad(status)
    }
}

/// One page of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltPage {
    /// The route rendered.
    pub route: Route,
    /// Output file path.
    pub path: PathBuf,
    /// BLAKE3 hash of the page content.
    pub content_hash: String,
    /// Whether the file was written.
    pub status: PageStatus,
}

/// Summary of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Pages in route order.
    pub pages: Vec<BuiltPage>,
}

impl BuildReport {
    /// Number of files written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.count(PageStatus::Written)
    }

    /// Number of files left unchanged.
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.count(PageStatus::Unchanged)
    }

    fn count(&self, status: PageStatus) -> usize {
        self.pages.iter().filter(|page| page.status == status).count()
    }
}

/// Output path of a route relative to the output directory.
#[must_use]
pub fn page_path(route: Route) -> PathBuf {
    let dir = route.path().trim_start_matches('/');
    Path::new(dir).join("index.html")
}

/// Compute the BLAKE3 hash of page content.
#[must_use]
pub fn content_hash(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Builds the static site from a shell.
#[derive(Debug, Clone)]
pub struct Site {
    shell: Shell,
}

impl Site {
    /// A site rendering pages through `shell`.
    #[must_use]
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Render every route into `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or a file cannot be
    /// written.
    pub fn build(&self, out_dir: impl AsRef<Path>) -> Result<BuildReport> {
        let out_dir = out_dir.as_ref();
        let mut report = BuildReport::default();

        for route in Route::ALL {
            let path = out_dir.join(page_path(route));
            let content = self.shell.render_route(route);
            let status = write_if_changed(&path, &content)?;
            report.pages.push(BuiltPage {
                route,
                path,
                content_hash: content_hash(&content),
                status,
            });
        }

        info!(
            written = report.written(),
            unchanged = report.unchanged(),
            "Site built in {}",
            out_dir.display()
        );
        Ok(report)
    }
}

fn write_if_changed(path: &Path, content: &str) -> Result<PageStatus> {
    match std::fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            debug!("Unchanged {}", path.display());
            return Ok(PageStatus::Unchanged);
        }
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(Error::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, content).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(PageStatus::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProjectStore;

    fn site() -> Site {
        Site::new(Shell::new(ProjectStore::builtin()))
    }

    #[test]
    fn test_page_path() {
        assert_eq!(page_path(Route::About), PathBuf::from("index.html"));
        assert_eq!(
            page_path(Route::Projects),
            PathBuf::from("projects/index.html")
        );
        assert_eq!(
            page_path(Route::Contact),
            PathBuf::from("contact/index.html")
        );
    }

    #[test]
    fn test_page_status_display() {
        assert_eq!(PageStatus::Written.to_string(), "written");
        assert_eq!(PageStatus::Unchanged.to_string(), "unchanged");
    }

    #[test]
    fn test_content_hash_consistency() {
        assert_eq!(content_hash("page"), content_hash("page"));
        assert_ne!(content_hash("page"), content_hash("other page"));
    }

    #[test]
    fn test_build_writes_every_route() {
        let dir = tempfile::tempdir().unwrap();
        let report = site().build(dir.path()).unwrap();

        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.written(), 3);
        assert_eq!(report.unchanged(), 0);

        let projects = std::fs::read_to_string(dir.path().join("projects/index.html")).unwrap();
        assert!(projects.contains("Weather Dashboard"));
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("contact/index.html").exists());
    }

    #[test]
    fn test_rebuild_leaves_unchanged_files() {
        let dir = tempfile::tempdir().unwrap();
        site().build(dir.path()).unwrap();

        let report = site().build(dir.path()).unwrap();
        assert_eq!(report.written(), 0);
        assert_eq!(report.unchanged(), 3);
    }

    #[test]
    fn test_rebuild_rewrites_modified_files() {
        let dir = tempfile::tempdir().unwrap();
        site().build(dir.path()).unwrap();
        std::fs::write(dir.path().join("index.html"), "stale").unwrap();

        let report = site().build(dir.path()).unwrap();
        assert_eq!(report.written(), 1);
        assert_eq!(report.pages[0].route, Route::About);
        assert_eq!(report.pages[0].status, PageStatus::Written);
    }

    #[test]
    fn test_rebuild_replaces_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), [0xff, 0xfe, 0x00]).unwrap();

        let report = site().build(dir.path()).unwrap();
        assert_eq!(report.pages[0].status, PageStatus::Written);
        assert_eq!(report.written(), 3);
    }

    #[test]
    fn test_unreadable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the page file should be cannot be read as a file
        std::fs::create_dir_all(dir.path().join("index.html")).unwrap();

        let result = site().build(dir.path());
        match result {
            Err(Error::FileRead { path, .. }) => {
                assert_eq!(path, dir.path().join("index.html"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn test_report_hash_matches_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = site().build(dir.path()).unwrap();

        for page in &report.pages {
            let content = std::fs::read_to_string(&page.path).unwrap();
            assert_eq!(content_hash(&content), page.content_hash);
        }
    }

    #[test]
    fn test_report_serialize() {
        let report = BuildReport {
            pages: vec![BuiltPage {
                route: Route::Contact,
                path: PathBuf::from("public/contact/index.html"),
                content_hash: content_hash("x"),
                status: PageStatus::Unchanged,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pages"][0]["route"], "contact");
        assert_eq!(json["pages"][0]["status"], "unchanged");
    }
}
