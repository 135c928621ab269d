//! HTML views for the three pages.
//!
//! Each top-level view renders the body fragment of one page; [`page`] wraps
//! a fragment into a complete document with the navigation bar.

mod about;
mod contact;
pub mod html;
mod projects;

pub use about::AboutView;
pub use contact::ContactView;
pub use projects::{render_record, ProjectListView, ProjectView};

use crate::router::Route;
use html::{escape, STYLESHEET};

/// A page body.
pub trait View {
    /// The page's main heading.
    fn heading(&self) -> &'static str;

    /// Render the body fragment.
    fn render(&self) -> String;
}

/// Wrap a body fragment into a complete HTML document.
#[must_use]
pub fn page(site_title: &str, body: &str) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    out.push_str(&format!("<title>{}</title>\n", escape(site_title)));
    out.push_str(&format!("<style>\n{STYLESHEET}</style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&nav());
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn nav() -> String {
    let mut out = String::from("<nav>\n");
    for route in Route::ALL {
        out.push_str(&format!(
            "  <a href=\"{}\">{}</a>\n",
            route.path(),
            route.label()
        ));
    }
    out.push_str("</nav>\n");
    out
}
