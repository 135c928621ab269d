//! The Projects page.

use tracing::warn;

use super::html::escape;
use super::View;
use crate::project::{validate_or_warn, ProjectCandidate, ProjectRecord};
use crate::store::ProjectStore;

/// Renders a single project entry.
///
/// A malformed entry renders nothing; the defect is logged, not returned.
#[derive(Debug, Clone, Copy)]
pub struct ProjectView<'a> {
    candidate: &'a ProjectCandidate,
}

impl<'a> ProjectView<'a> {
    /// A view of one project entry.
    #[must_use]
    pub fn new(candidate: &'a ProjectCandidate) -> Self {
        Self { candidate }
    }

    /// Render the entry, or `None` if it is malformed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        let record = validate_or_warn(self.candidate)?;

        // Tags are keyed by their text, so repeats would share a key
        let duplicates = record.duplicate_tech();
        if !duplicates.is_empty() {
            warn!(
                id = record.id(),
                duplicates = ?duplicates,
                "Project has duplicate tech entries; their keys collide"
            );
        }

        Some(render_record(&record))
    }
}

/// Render a validated project record.
#[must_use]
pub fn render_record(record: &ProjectRecord) -> String {
    let id = escape(record.id());
    let mut out = format!(
        "  <div class=\"project\" role=\"region\" aria-labelledby=\"project-{id}-title\" \
         data-key=\"{id}\">\n"
    );
    out.push_str(&format!(
        "    <h2 id=\"project-{id}-title\">{}</h2>\n",
        escape(record.title())
    ));
    out.push_str(&format!("    <p>{}</p>\n", escape(record.description())));
    out.push_str("    <ul class=\"tech-list\">\n");
    for tech in record.tech_stack() {
        let tech = escape(tech);
        out.push_str(&format!(
            "      <li class=\"tech\" data-key=\"{tech}\">{tech}</li>\n"
        ));
    }
    out.push_str("    </ul>\n");
    out.push_str("  </div>\n");
    out
}

/// Renders every project in a store, in store order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListView {
    store: ProjectStore,
}

impl ProjectListView {
    /// A list view over `store`.
    #[must_use]
    pub fn new(store: ProjectStore) -> Self {
        Self { store }
    }
}

impl View for ProjectListView {
    fn heading(&self) -> &'static str {
        "My Projects"
    }

    fn render(&self) -> String {
        let mut out = String::from("<section class=\"projects\">\n");
        out.push_str(&format!("  <h1>{}</h1>\n", self.heading()));
        for candidate in &self.store {
            if let Some(project) = ProjectView::new(candidate).render() {
                out.push_str(&project);
            }
        }
        out.push_str("</section>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture_logs;

    #[test]
    fn test_render_project() {
        let candidate = ProjectCandidate::new("1", "T", "D", ["X", "Y"]);
        let html = ProjectView::new(&candidate).render().unwrap();

        assert!(html.contains("<h2 id=\"project-1-title\">T</h2>"));
        assert!(html.contains("<p>D</p>"));
        assert!(html.contains("aria-labelledby=\"project-1-title\""));
        assert_eq!(html.matches("<li ").count(), 2);

        let x = html.find(">X</li>").unwrap();
        let y = html.find(">Y</li>").unwrap();
        assert!(x < y);
    }

    #[test]
    fn test_render_missing_title_renders_nothing() {
        let mut candidate = ProjectCandidate::new("1", "T", "D", ["X"]);
        candidate.title = None;

        let logs = capture_logs(|| assert!(ProjectView::new(&candidate).render().is_none()));
        assert!(logs.contains("Skipping malformed project record"));
        assert!(logs.contains("id=\"1\""));
        assert!(logs.contains("missing field 'title'"));
    }

    #[test]
    fn test_render_tech_stack_not_array_renders_nothing() {
        let mut candidate = ProjectCandidate::new("1", "T", "D", ["X"]);
        candidate.tech_stack = Some(serde_json::json!({"X": true}));

        assert!(ProjectView::new(&candidate).render().is_none());
    }

    #[test]
    fn test_render_duplicate_tech_keeps_every_entry() {
        let candidate = ProjectCandidate::new("1", "T", "D", ["Rust", "Rust"]);

        let mut html = None;
        let logs = capture_logs(|| html = ProjectView::new(&candidate).render());
        assert_eq!(html.unwrap().matches("data-key=\"Rust\"").count(), 2);
        assert!(logs.contains("duplicate tech entries"));
        assert!(logs.contains("Rust"));
    }

    #[test]
    fn test_render_distinct_tech_logs_nothing() {
        let candidate = ProjectCandidate::new("1", "T", "D", ["Rust", "Go"]);
        let logs = capture_logs(|| assert!(ProjectView::new(&candidate).render().is_some()));
        assert!(logs.is_empty());
    }

    #[test]
    fn test_render_escapes_text() {
        let candidate = ProjectCandidate::new("1", "<T>", "D & E", ["C++"]);
        let html = ProjectView::new(&candidate).render().unwrap();
        assert!(html.contains("&lt;T&gt;"));
        assert!(html.contains("D &amp; E"));
    }

    #[test]
    fn test_list_renders_in_store_order() {
        let html = ProjectListView::new(ProjectStore::builtin()).render();

        assert!(html.contains("<h1>My Projects</h1>"));
        let first = html.find("Portfolio Website").unwrap();
        let second = html.find("Task Manager App").unwrap();
        let third = html.find("Weather Dashboard").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("data-key=\"project2\""));
    }

    #[test]
    fn test_list_skips_malformed_entries() {
        let mut broken = ProjectCandidate::new("b", "Broken", "D", ["X"]);
        broken.description = None;
        let store = ProjectStore::new(vec![
            ProjectCandidate::new("a", "Alpha", "D", ["X"]),
            broken,
        ])
        .unwrap();

        let html = ProjectListView::new(store).render();
        assert!(html.contains("Alpha"));
        assert!(!html.contains("Broken"));
    }

    #[test]
    fn test_list_with_empty_store() {
        let html = ProjectListView::new(ProjectStore::default()).render();
        assert!(html.contains("My Projects"));
        assert!(!html.contains("class=\"project\""));
    }
}
