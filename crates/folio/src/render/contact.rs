//! The Contact page.

use super::html::escape;
use super::View;
use crate::contact::{ContactForm, ErrorKey, Field};

/// Renders a snapshot of the contact form.
#[derive(Debug, Clone, Copy)]
pub struct ContactView<'a> {
    form: &'a ContactForm,
    success_message: &'a str,
}

impl<'a> ContactView<'a> {
    /// A view of `form` that shows `success_message` once submitted.
    #[must_use]
    pub fn new(form: &'a ContactForm, success_message: &'a str) -> Self {
        Self {
            form,
            success_message,
        }
    }

    fn render_field(&self, field: Field, out: &mut String) {
        let name = field.as_str();
        let value = escape(self.form.state.get(field));

        out.push_str(&format!(
            "    <label for=\"{name}\">{}</label>\n",
            label(field)
        ));
        match field {
            Field::Message => out.push_str(&format!(
                "    <textarea id=\"{name}\" name=\"{name}\" aria-describedby=\"{name}-error\" \
                 required>{value}</textarea>\n"
            )),
            Field::Name | Field::Email => {
                let input_type = if field == Field::Email { "email" } else { "text" };
                out.push_str(&format!(
                    "    <input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" \
                     value=\"{value}\" aria-describedby=\"{name}-error\" required>\n"
                ));
            }
        }

        if let Some(error) = self.form.errors.get(field) {
            out.push_str(&format!(
                "    <p class=\"error\" id=\"{name}-error\">{}</p>\n",
                escape(error)
            ));
        }
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Message => "Message",
    }
}

impl View for ContactView<'_> {
    fn heading(&self) -> &'static str {
        "Contact Me"
    }

    fn render(&self) -> String {
        let mut out = String::from("<section class=\"contact\">\n");
        out.push_str(&format!("  <h1>{}</h1>\n", self.heading()));
        out.push_str("  <form method=\"post\" novalidate>\n");

        for field in Field::ALL {
            self.render_field(field, &mut out);
        }

        out.push_str("    <button type=\"submit\">Send</button>\n");
        if let Some(error) = self.form.errors.get(ErrorKey::Form) {
            out.push_str(&format!("    <p class=\"error\">{}</p>\n", escape(error)));
        }
        if self.form.submitted {
            out.push_str(&format!(
                "    <p class=\"success\">{}</p>\n",
                escape(self.success_message)
            ));
        }

        out.push_str("  </form>\n");
        out.push_str("</section>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS: &str = "Message sent successfully!";

    #[test]
    fn test_render_blank_form() {
        let form = ContactForm::new();
        let html = ContactView::new(&form, SUCCESS).render();

        assert!(html.contains("<h1>Contact Me</h1>"));
        assert!(html.contains("novalidate"));
        assert!(html.contains("<input type=\"text\" id=\"name\" name=\"name\" value=\"\""));
        assert!(html.contains("<input type=\"email\" id=\"email\""));
        assert!(html.contains("<textarea id=\"message\""));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains(SUCCESS));
    }

    #[test]
    fn test_render_field_errors() {
        let form = ContactForm::new()
            .apply_field_change(Field::Email, "bad")
            .apply_field_change(Field::Message, "hi");
        let (form, _) = form.apply_submit();
        let html = ContactView::new(&form, SUCCESS).render();

        assert!(html.contains("<p class=\"error\" id=\"name-error\">Name is required</p>"));
        assert!(html.contains("<p class=\"error\" id=\"email-error\">Invalid email address</p>"));
        assert!(!html.contains("id=\"message-error\""));
        assert!(html.contains("value=\"bad\""));
        assert!(html.contains(">hi</textarea>"));
    }

    #[test]
    fn test_render_success_message() {
        let form = ContactForm::new()
            .apply_field_change(Field::Name, "Ada")
            .apply_field_change(Field::Email, "ada@example.com")
            .apply_field_change(Field::Message, "Hello");
        let (form, _) = form.apply_submit();
        let html = ContactView::new(&form, SUCCESS).render();

        assert!(html.contains("<p class=\"success\">Message sent successfully!</p>"));
        assert!(html.contains("value=\"\""));
    }

    #[test]
    fn test_render_form_level_error() {
        let form = ContactForm::new().apply_delivery_failure("Failed to send");
        let html = ContactView::new(&form, SUCCESS).render();
        assert!(html.contains("<p class=\"error\">Failed to send</p>"));
    }

    #[test]
    fn test_render_escapes_values() {
        let form = ContactForm::new().apply_field_change(Field::Name, "\"><script>");
        let html = ContactView::new(&form, SUCCESS).render();
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }
}
