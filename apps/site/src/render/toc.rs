use crate::dom::Element;
use crate::markup::section_anchor;
use crate::models::resume::ResumeDocument;
use crate::page::Page;
use crate::render::{section_order, RenderError};

/// Rebuilds the navigation list: one link per section, in render order.
pub fn render_toc(page: &mut Page, doc: &ResumeDocument) -> Result<(), RenderError> {
    page.toc.clear();
    for name in section_order(doc)? {
        let mut link = Element::new("a")
            .with_class("toc-link")
            .with_attr("href", format!("#{}", section_anchor(&name)));
        link.set_text(name);
        page.toc.append_child(link);
    }
    Ok(())
}

/// Resolves the scroll target for a toc entry, or `None` when no section
/// carries the matching id (activation is then a no-op).
pub fn activate<'a>(page: &'a Page, name: &str) -> Option<&'a Element> {
    page.element_by_id(&section_anchor(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_sections;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ResumeDocument {
        ResumeDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_one_link_per_section_in_order() {
        let d = doc(json!({
            "order": ["Work Experience", "Education"],
            "sections": {"Education": [], "Work Experience": []}
        }));
        let mut page = Page::new();
        render_toc(&mut page, &d).unwrap();

        let links: Vec<_> = page.toc.child_elements().collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text_content(), "Work Experience");
        assert_eq!(links[0].attr("href"), Some("#section-work-experience"));
        assert_eq!(links[1].text_content(), "Education");
    }

    #[test]
    fn test_label_is_text() {
        let d = doc(json!({"order": ["<i>R&D</i>"]}));
        let mut page = Page::new();
        render_toc(&mut page, &d).unwrap();
        assert!(page.toc.inner_html().contains("&lt;i&gt;R&amp;D&lt;/i&gt;"));
    }

    #[test]
    fn test_rerender_replaces_links() {
        let mut page = Page::new();
        render_toc(&mut page, &doc(json!({"order": ["A", "B"]}))).unwrap();
        render_toc(&mut page, &doc(json!({"order": ["C"]}))).unwrap();
        assert_eq!(page.toc.child_elements().count(), 1);
    }

    #[test]
    fn test_activate_finds_rendered_section() {
        let d = doc(json!({"sections": {"Side Projects": []}}));
        let mut page = Page::new();
        render_toc(&mut page, &d).unwrap();
        render_sections(&mut page, &d).unwrap();

        let target = activate(&page, "Side Projects").unwrap();
        assert_eq!(target.id(), Some("section-side-projects"));
    }

    #[test]
    fn test_activate_without_section_is_noop() {
        let page = Page::new();
        assert!(activate(&page, "Experience").is_none());
    }
}
