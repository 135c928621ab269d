//! HTML text helpers.

/// Escape text for use in HTML element content and quoted attribute values.
#[must_use]
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Stylesheet embedded in every page.
pub const STYLESHEET: &str = "\
body { margin: 0; font-family: Arial, sans-serif; }
nav { display: flex; background: #282c34; padding: 1rem; justify-content: center; }
nav a { color: white; margin: 0 1rem; text-decoration: none; }
nav a:hover { text-decoration: underline; }
h1 { text-align: center; color: #282c34; }
.about { max-width: 750px; margin: 2rem auto; padding: 1rem; }
.about p { font-size: 1.125rem; line-height: 1.6; margin-bottom: 1rem; }
.projects { max-width: 900px; margin: 2rem auto; padding: 1rem; }
.projects h1 { margin-bottom: 1.5rem; }
.project { border: 1px solid #ccc; padding: 1rem; margin-bottom: 1rem; border-radius: 8px; background-color: #fafafa; }
.project h2, .project p { margin: 0 0 0.5rem 0; }
.tech-list { list-style-type: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tech { background-color: #007acc; color: white; padding: 0.25rem 0.5rem; border-radius: 4px; font-size: 0.875rem; }
.contact { max-width: 500px; margin: 2rem auto; padding: 1rem; }
.contact form { display: flex; flex-direction: column; }
.contact label { margin-top: 1rem; font-weight: bold; }
.contact input, .contact textarea { padding: 0.5rem; font-size: 1rem; margin-top: 0.25rem; border: 1px solid #ccc; border-radius: 4px; }
.contact textarea { resize: vertical; min-height: 100px; }
.contact button { margin-top: 1.5rem; padding: 0.75rem; font-size: 1rem; background-color: #007acc; color: white; border: none; border-radius: 4px; cursor: pointer; }
.contact button:hover { background-color: #005fa3; }
.error { color: red; margin-top: 0.5rem; }
.success { color: green; margin-top: 0.5rem; font-weight: bold; }
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Styled-Components"), "Styled-Components");
    }
}
