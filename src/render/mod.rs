//! HTML rendering of the portfolio page.
//!
//! The page is a single self-contained document. Every section is plain
//! markup that reads fine without scripting; the browser runtime then
//! attaches reveal animations, the active navigation highlight, smooth
//! scrolling, the pointer highlight and the ambient scene.

pub mod chrome;
pub mod sections;

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::Datelike;

use crate::branding::{FAVICON_PATH, STYLESHEET_PATH, WASM_MODULE_PATH};
use crate::models::SiteContent;
use crate::viewport::DEFAULT_REVEAL_THRESHOLD;

/// Page-level settings that are not part of the content.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Visible fraction at which sections reveal, handed to the browser runtime
    pub reveal_threshold: f64,
    /// Year printed in the footer
    pub year: i32,
    /// Module script that boots the browser runtime, if any
    pub runtime_module: Option<String>,
    /// Stylesheet URL
    pub stylesheet: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            year: chrono::Local::now().year(),
            runtime_module: Some(WASM_MODULE_PATH.to_string()),
            stylesheet: STYLESHEET_PATH.to_string(),
        }
    }
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Renders the complete HTML document.
pub fn render_page(content: &SiteContent, options: &PageOptions) -> String {
    let mut html = String::with_capacity(32 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(
        html,
        "<title>{} | {}</title>",
        escape(&content.owner.name),
        escape(content.owner.taglines.first().map_or("Portfolio", String::as_str))
    );
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape(&content.hero.intro)
    );
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape(&options.stylesheet)
    );
    let _ = writeln!(
        html,
        "<link rel=\"icon\" type=\"image/svg+xml\" href=\"{FAVICON_PATH}\">"
    );
    html.push_str("</head>\n");

    let _ = writeln!(
        html,
        "<body data-reveal-threshold=\"{}\" data-mail-recipient=\"{}\">",
        options.reveal_threshold,
        escape(&content.contact.email)
    );

    chrome::render_backdrop(&mut html);
    html.push_str("<div class=\"content\">\n");
    chrome::render_nav(&mut html, content);
    html.push_str("<main>\n");
    sections::render_hero(&mut html, content);
    sections::render_about(&mut html, content);
    sections::render_services(&mut html, content);
    sections::render_skills(&mut html, content);
    sections::render_projects(&mut html, content);
    sections::render_gallery(&mut html, content);
    sections::render_achievements(&mut html, content);
    sections::render_contact(&mut html, content);
    html.push_str("</main>\n");
    chrome::render_footer(&mut html, content, options.year);
    html.push_str("</div>\n");

    if let Some(module) = &options.runtime_module {
        let _ = writeln!(
            html,
            "<script type=\"module\">import init from \"{}\"; init();</script>",
            escape(module)
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GalleryImage, Section};

    fn options() -> PageOptions {
        PageOptions {
            year: 2026,
            ..PageOptions::default()
        }
    }

    fn builtin() -> SiteContent {
        SiteContent::builtin().unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_document_shell() {
        let html = render_page(&builtin(), &options());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Manya Jain | 3D Animator</title>"));
        assert!(html.contains("href=\"/assets/site.css\""));
        assert!(html.contains("data-reveal-threshold=\"0.3\""));
        assert!(html.contains("data-mail-recipient=\"manyaj.work@gmail.com\""));
        assert!(html.contains("import init from \"/pkg/folio.js\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_every_section_has_an_anchor() {
        let html = render_page(&builtin(), &options());
        for section in Section::ALL {
            assert!(
                html.contains(&format!("<section id=\"{}\"", section.id())),
                "missing anchor for {section}"
            );
        }
        assert!(html.contains("<section id=\"visual-art-gallery\""));
    }

    #[test]
    fn test_without_runtime_module() {
        let options = PageOptions {
            runtime_module: None,
            ..options()
        };
        let html = render_page(&builtin(), &options);
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_empty_gallery_renders_no_tiles() {
        let mut content = builtin();
        content.gallery.clear();
        let html = render_page(&content, &options());

        assert!(html.contains("id=\"visual-art-gallery\""));
        assert_eq!(html.matches("class=\"gallery-tile\"").count(), 0);
    }

    #[test]
    fn test_content_is_escaped() {
        let mut content = builtin();
        content.owner.name = "<script>alert(1)</script>".to_string();
        content.gallery = vec![GalleryImage::new("/a\"b.png")];
        let html = render_page(&content, &options());

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("src=\"/a&quot;b.png\""));
    }
}
