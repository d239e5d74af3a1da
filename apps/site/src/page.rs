//! The résumé page: its fixed regions and the document shell around them.

use crate::dom::Element;
use crate::theme::Theme;

pub const NAME_ID: &str = "name";
pub const TAGLINE_ID: &str = "tagline";
pub const CONTACT_ID: &str = "contact";
pub const TOC_ID: &str = "toc";
pub const CONTENT_ID: &str = "content";
pub const THEME_BUTTON_ID: &str = "themeBtn";
pub const PRINT_BUTTON_ID: &str = "printBtn";

const STYLESHEET: &str = r#"
:root { --bg: #0f1115; --fg: #e6e6e6; --muted: #9aa0a6; --accent: #7aa2f7; --chip: #1f2430; }
:root.light { --bg: #ffffff; --fg: #1b1b1b; --muted: #5f6368; --accent: #1a56db; --chip: #eef1f6; }
html { scroll-behavior: smooth; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; line-height: 1.5; }
.toolbar { display: flex; gap: 8px; justify-content: flex-end; padding: 12px 24px; }
.toolbar form { margin: 0; }
header { padding: 0 24px 16px; }
#name { margin: 0; font-size: 2em; }
#tagline { color: var(--muted); margin-bottom: 8px; }
#contact a { color: var(--accent); }
.layout { display: grid; grid-template-columns: 200px 1fr; gap: 24px; padding: 0 24px 48px; }
#toc { display: flex; flex-direction: column; gap: 4px; position: sticky; top: 12px; align-self: start; }
.toc-link { color: var(--fg); text-decoration: none; padding: 4px 8px; border-radius: 4px; }
.toc-link:hover { background: var(--chip); }
.section { scroll-margin-top: 0; margin-bottom: 24px; }
.item { margin: 10px 0; }
.item-title { font-weight: 600; }
.meta { color: var(--muted); font-size: 0.9em; }
.details { margin-top: 6px; }
.skills { display: flex; flex-wrap: wrap; gap: 6px; }
.chip { background: var(--chip); border-radius: 12px; padding: 2px 10px; font-size: 0.9em; }
@media print {
  .toolbar, #toc { display: none; }
  .layout { grid-template-columns: 1fr; }
}
"#;

/// Page regions the renderers populate. Every region exists from construction on.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: Element,
    pub tagline: Element,
    pub contact: Element,
    pub toc: Element,
    pub content: Element,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            name: Element::new("h1").with_id(NAME_ID),
            tagline: Element::new("div").with_id(TAGLINE_ID),
            contact: Element::new("div").with_id(CONTACT_ID),
            toc: Element::new("nav").with_id(TOC_ID),
            content: Element::new("main").with_id(CONTENT_ID),
        }
    }

    /// Looks up an element by id across all regions.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        [
            &self.name,
            &self.tagline,
            &self.contact,
            &self.toc,
            &self.content,
        ]
        .into_iter()
        .find_map(|region| region.find_by_id(id))
    }

    /// Serialises the full document, applying the theme class to the root element.
    pub fn to_html(&self, theme: Theme) -> String {
        let mut html = String::with_capacity(4096);

        match theme {
            Theme::Light => html.push_str("<!DOCTYPE html>\n<html lang=\"en\" class=\"light\">\n"),
            Theme::Dark => html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n"),
        }
        html.push_str("<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<title>Résumé</title>\n<style>");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str("<div class=\"toolbar\">\n");
        html.push_str(&format!(
            "<form method=\"post\" action=\"/theme/toggle\"><button id=\"{THEME_BUTTON_ID}\" type=\"submit\">{}</button></form>\n",
            match theme {
                Theme::Dark => "Light mode",
                Theme::Light => "Dark mode",
            }
        ));
        html.push_str(&format!(
            "<button id=\"{PRINT_BUTTON_ID}\" type=\"button\" onclick=\"window.print()\">Print / PDF</button>\n"
        ));
        html.push_str("</div>\n");

        html.push_str("<header>\n");
        html.push_str(&self.name.to_html());
        html.push('\n');
        html.push_str(&self.tagline.to_html());
        html.push('\n');
        html.push_str(&self.contact.to_html());
        html.push_str("\n</header>\n");

        html.push_str("<div class=\"layout\">\n");
        html.push_str(&self.toc.to_html());
        html.push('\n');
        html.push_str(&self.content.to_html());
        html.push_str("\n</div>\n</body>\n</html>\n");

        html
    }
}
