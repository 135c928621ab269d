//! Route table and navigation shell.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::contact::ContactForm;
use crate::render::{page, AboutView, ContactView, ProjectListView, View};
use crate::store::ProjectStore;

/// One of the three pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// `/`
    About,
    /// `/projects`
    Projects,
    /// `/contact`
    Contact,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 3] = [Route::About, Route::Projects, Route::Contact];

    /// Look up the route for a path.
    ///
    /// A single trailing slash is ignored. Anything else that is not one of
    /// the three paths has no route.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// The route's path.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::About => "/",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    /// The navigation link text.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path())
    }
}

/// Selects and renders the page for a route.
#[derive(Debug, Clone)]
pub struct Shell {
    site_title: String,
    success_message: String,
    about: AboutView,
    projects: ProjectListView,
}

impl Shell {
    /// A shell rendering `store` on the Projects page, with default content
    /// everywhere else.
    #[must_use]
    pub fn new(store: ProjectStore) -> Self {
        Self::from_config(&Config::default(), store)
    }

    /// A shell using the configured site content.
    #[must_use]
    pub fn from_config(config: &Config, store: ProjectStore) -> Self {
        Self {
            site_title: config.site.title.clone(),
            success_message: config.contact.success_message.clone(),
            about: AboutView::from_config(&config.site),
            projects: ProjectListView::new(store),
        }
    }

    /// Render the page for `path`, or `None` if no route matches.
    #[must_use]
    pub fn render(&self, path: &str) -> Option<String> {
        let Some(route) = Route::from_path(path) else {
            debug!(path, "No route for path");
            return None;
        };
        Some(self.render_route(route))
    }

    /// Render a route. The Contact page shows a blank form.
    #[must_use]
    pub fn render_route(&self, route: Route) -> String {
        match route {
            Route::About => self.wrap(&self.about),
            Route::Projects => self.wrap(&self.projects),
            Route::Contact => self.render_contact(&ContactForm::new()),
        }
    }

    /// Render the Contact page showing `form`.
    #[must_use]
    pub fn render_contact(&self, form: &ContactForm) -> String {
        self.wrap(&ContactView::new(form, &self.success_message))
    }

    fn wrap(&self, view: &dyn View) -> String {
        debug!(heading = view.heading(), "Rendering page");
        page(&self.site_title, &view.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Field;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::About));
        assert_eq!(Route::from_path("/projects"), Some(Route::Projects));
        assert_eq!(Route::from_path("/contact"), Some(Route::Contact));
    }

    #[test]
    fn test_from_path_trailing_slash() {
        assert_eq!(Route::from_path("/projects/"), Some(Route::Projects));
        assert_eq!(Route::from_path("/contact/"), Some(Route::Contact));
    }

    #[test]
    fn test_from_path_unmatched() {
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path("/projects//"), None);
        assert_eq!(Route::from_path("/projects?page=2"), None);
        assert_eq!(Route::from_path("projects"), None);
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Projects.to_string(), "/projects");
    }

    #[test]
    fn test_shell_renders_each_route() {
        let shell = Shell::new(ProjectStore::builtin());

        assert!(shell.render("/").unwrap().contains("<h1>About Me</h1>"));
        assert!(shell
            .render("/projects")
            .unwrap()
            .contains("<h1>My Projects</h1>"));
        assert!(shell
            .render("/contact")
            .unwrap()
            .contains("<h1>Contact Me</h1>"));
    }

    #[test]
    fn test_shell_unmatched_renders_nothing() {
        let shell = Shell::new(ProjectStore::builtin());
        assert!(shell.render("/missing").is_none());
    }

    #[test]
    fn test_shell_uses_configured_title() {
        let mut config = Config::default();
        config.site.title = "Ada Lovelace".to_string();
        let shell = Shell::from_config(&config, ProjectStore::default());

        assert!(shell
            .render_route(Route::About)
            .contains("<title>Ada Lovelace</title>"));
    }

    #[test]
    fn test_render_contact_with_state() {
        let mut config = Config::default();
        config.contact.success_message = "Thanks!".to_string();
        let shell = Shell::from_config(&config, ProjectStore::default());

        let form = ContactForm::new()
            .apply_field_change(Field::Name, "Ada")
            .apply_field_change(Field::Email, "ada@example.com")
            .apply_field_change(Field::Message, "Hi");
        let (form, _) = form.apply_submit();

        assert!(shell.render_contact(&form).contains("Thanks!"));
    }

    #[test]
    fn test_every_page_has_nav() {
        let shell = Shell::new(ProjectStore::builtin());
        for route in Route::ALL {
            let html = shell.render_route(route);
            assert!(html.contains("<nav>"));
            assert!(html.contains("<a href=\"/contact\">Contact</a>"));
        }
    }
}
