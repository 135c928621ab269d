//! The About page.

use super::html::escape;
use super::View;
use crate::config::SiteConfig;

/// Static profile content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    paragraphs: Vec<String>,
}

impl AboutView {
    /// An About view with the given paragraphs.
    #[must_use]
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self { paragraphs }
    }

    /// The About view described by the site configuration.
    #[must_use]
    pub fn from_config(site: &SiteConfig) -> Self {
        Self::new(site.about_paragraphs.clone())
    }
}

impl Default for AboutView {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl View for AboutView {
    fn heading(&self) -> &'static str {
        "About Me"
    }

    fn render(&self) -> String {
        let mut out = String::from("<section class=\"about\">\n");
        out.push_str(&format!("  <h1>{}</h1>\n", self.heading()));
        for paragraph in &self.paragraphs {
            out.push_str(&format!("  <p>{}</p>\n", escape(paragraph)));
        }
        out.push_str("</section>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let html = AboutView::default().render();
        assert!(html.contains("<h1>About Me</h1>"));
        assert!(html.contains("Hello! I&#39;m a passionate web developer"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_render_custom_paragraphs_in_order() {
        let html = AboutView::new(vec!["First".to_string(), "Second <b>".to_string()]).render();
        let first = html.find("First").unwrap();
        let second = html.find("Second &lt;b&gt;").unwrap();
        assert!(first < second);
    }
}
