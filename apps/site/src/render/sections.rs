use serde_json::{Map, Value};

use crate::dom::Element;
use crate::markup::{coerce, escape_html, field_text, section_anchor, text_content};
use crate::models::resume::ResumeDocument;
use crate::page::Page;
use crate::render::{section_order, RenderError};

/// Rebuilds the content area: one `<section>` per name in render order.
///
/// Sections are appended as they complete, so a failure part-way leaves the
/// sections before it in place.
pub fn render_sections(page: &mut Page, doc: &ResumeDocument) -> Result<(), RenderError> {
    page.content.clear();
    for name in section_order(doc)? {
        let section = render_section(doc, &name)?;
        page.content.append_child(section);
    }
    Ok(())
}

fn render_section(doc: &ResumeDocument, name: &str) -> Result<Element, RenderError> {
    let mut section = Element::new("section")
        .with_class("section")
        .with_id(section_anchor(name));
    let mut heading = Element::new("h2");
    heading.set_text(name);
    section.append_child(heading);

    // Any section whose name mentions skills shows the top-level "Skills"
    // list, whatever its own value holds.
    if is_skills_section(name) {
        section.append_child(skill_chips(doc));
        return Ok(section);
    }

    match doc.section(name) {
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                section.append_child(item_block(name, index, item)?);
            }
        }
        Some(Value::Object(entries)) => {
            for block in key_value_blocks(entries) {
                section.append_child(block);
            }
        }
        Some(Value::Null) => {
            return Err(RenderError::NullSection {
                section: name.to_string(),
            })
        }
        // Absent sections and scalars keep only their heading.
        _ => {}
    }

    Ok(section)
}

fn is_skills_section(name: &str) -> bool {
    name.to_lowercase().contains("skills")
}

fn skill_chips(doc: &ResumeDocument) -> Element {
    let mut wrap = Element::new("div").with_class("skills");
    if let Some(Value::Array(skills)) = doc.skills() {
        for skill in skills {
            let mut chip = Element::new("span").with_class("chip");
            chip.set_text(text_content(skill));
            wrap.append_child(chip);
        }
    }
    wrap
}

fn item_block(section: &str, index: usize, item: &Value) -> Result<Element, RenderError> {
    if item.is_null() {
        return Err(RenderError::NullItem {
            section: section.to_string(),
            index,
        });
    }

    let title = field_text(item.get("title"))
        .or_else(|| field_text(item.get("name")))
        .unwrap_or_default();

    let mut markup = format!("<div class=\"item-title\">{}</div>", escape_html(&title));
    if let Some(meta) = field_text(item.get("meta")) {
        markup.push_str(&format!("<div class=\"meta\">{}</div>", escape_html(&meta)));
    }
    if let Some(details) = field_text(item.get("details")) {
        markup.push_str(&format!(
            "<div class=\"details\">{}</div>",
            escape_html(&details)
        ));
    }

    let mut block = Element::new("div").with_class("item");
    block.set_inner_html(markup);
    Ok(block)
}

fn key_value_blocks(entries: &Map<String, Value>) -> impl Iterator<Item = Element> + '_ {
    entries.iter().map(|(key, value)| {
        let mut block = Element::new("div").with_class("item");
        block.set_inner_html(format!(
            "<div class=\"item-title\">{}</div><div class=\"meta\">{}</div>",
            escape_html(key),
            escape_html(&coerce(value))
        ));
        block
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: Value) -> Result<Page, RenderError> {
        let doc = ResumeDocument::from_value(value).unwrap();
        let mut page = Page::new();
        render_sections(&mut page, &doc)?;
        Ok(page)
    }

    fn sections(page: &Page) -> Vec<&Element> {
        page.content.child_elements().collect()
    }

    #[test]
    fn test_item_with_meta_no_details() {
        let page = render(json!({
            "order": ["Exp"],
            "sections": {"Exp": [{"title": "Eng", "meta": "2020-2022"}]}
        }))
        .unwrap();

        let secs = sections(&page);
        assert_eq!(secs.len(), 1);
        assert_eq!(secs[0].id(), Some("section-exp"));
        assert_eq!(secs[0].class(), Some("section"));

        let items: Vec<_> = secs[0].child_elements().skip(1).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].inner_html(),
            "<div class=\"item-title\">Eng</div><div class=\"meta\">2020-2022</div>"
        );
    }

    #[test]
    fn test_title_only_item_has_single_line() {
        let page = render(json!({"sections": {"Awards": [{"title": "X"}]}})).unwrap();
        let item = sections(&page)[0].child_elements().nth(1).unwrap().clone();
        assert_eq!(item.inner_html(), "<div class=\"item-title\">X</div>");
    }

    #[test]
    fn test_title_falls_back_to_name_then_empty() {
        let page = render(json!({"sections": {"Projects": [
            {"name": "petty", "details": "PDF engine"},
            {"meta": "2019"}
        ]}}))
        .unwrap();
        let items: Vec<_> = sections(&page)[0].child_elements().skip(1).collect();
        assert_eq!(
            items[0].inner_html(),
            "<div class=\"item-title\">petty</div><div class=\"details\">PDF engine</div>"
        );
        assert_eq!(
            items[1].inner_html(),
            "<div class=\"item-title\"></div><div class=\"meta\">2019</div>"
        );
    }

    #[test]
    fn test_item_fields_are_escaped() {
        let page = render(json!({"sections": {"Exp": [
            {"title": "<img src=x onerror=alert(1)>", "details": "R&D 'lead'"}
        ]}}))
        .unwrap();
        let html = page.content.to_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("R&amp;D &#39;lead&#39;"));
    }

    #[test]
    fn test_key_value_section() {
        let page = render(json!({"sections": {"Languages": {"English": "Native", "Years": 7}}}))
            .unwrap();
        let items: Vec<_> = sections(&page)[0].child_elements().skip(1).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].inner_html(),
            "<div class=\"item-title\">English</div><div class=\"meta\">Native</div>"
        );
        assert_eq!(
            items[1].inner_html(),
            "<div class=\"item-title\">Years</div><div class=\"meta\">7</div>"
        );
    }

    #[test]
    fn test_order_includes_absent_sections() {
        let page = render(json!({
            "order": ["Experience", "Volunteering"],
            "sections": {"Experience": [{"title": "Eng"}]}
        }))
        .unwrap();
        let secs = sections(&page);
        assert_eq!(secs.len(), 2);
        assert_eq!(secs[1].id(), Some("section-volunteering"));
        assert_eq!(secs[1].text_content(), "Volunteering");
        assert_eq!(secs[1].child_elements().count(), 1);
    }

    #[test]
    fn test_skills_section_renders_chips() {
        let page = render(json!({"sections": {"Skills": ["Rust", "SQL"]}})).unwrap();
        let wrap = sections(&page)[0].child_elements().nth(1).unwrap().clone();
        assert_eq!(wrap.class(), Some("skills"));
        let chips: Vec<_> = wrap.child_elements().map(|c| c.text_content()).collect();
        assert_eq!(chips, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_skills_redirect_ignores_own_value() {
        let page = render(json!({
            "order": ["Technical Skills"],
            "sections": {
                "Technical Skills": {"Backend": "Rust"},
                "Skills": ["Tokio", "Axum"]
            }
        }))
        .unwrap();
        let sec = sections(&page)[0];
        assert_eq!(sec.id(), Some("section-technical-skills"));
        let children: Vec<_> = sec.child_elements().collect();
        assert_eq!(children.len(), 2);
        let chips: Vec<_> = children[1]
            .child_elements()
            .map(|c| c.text_content())
            .collect();
        assert_eq!(chips, vec!["Tokio", "Axum"]);
        assert!(!page.content.to_html().contains("Backend"));
    }

    #[test]
    fn test_skills_without_top_level_key_renders_zero_chips() {
        let page = render(json!({"sections": {"Soft skills": ["Listening"]}})).unwrap();
        let wrap = sections(&page)[0].child_elements().nth(1).unwrap().clone();
        assert_eq!(wrap.child_elements().count(), 0);
    }

    #[test]
    fn test_chip_labels_are_text() {
        let page = render(json!({"sections": {"Skills": ["<b>C++</b>", null, 3]}})).unwrap();
        let html = page.content.to_html();
        assert!(html.contains("<span class=\"chip\">&lt;b&gt;C++&lt;/b&gt;</span>"));
        assert!(html.contains("<span class=\"chip\"></span>"));
        assert!(html.contains("<span class=\"chip\">3</span>"));
    }

    #[test]
    fn test_scalar_section_keeps_heading_only() {
        let page = render(json!({"sections": {"Summary": "Builds things"}})).unwrap();
        assert_eq!(sections(&page)[0].child_elements().count(), 1);
    }

    #[test]
    fn test_null_section_fails() {
        let err = render(json!({"sections": {"Experience": null}})).unwrap_err();
        assert_eq!(
            err,
            RenderError::NullSection {
                section: "Experience".into()
            }
        );
    }

    #[test]
    fn test_null_item_fails() {
        let err = render(json!({"sections": {"Exp": [{"title": "A"}, null]}})).unwrap_err();
        assert_eq!(
            err,
            RenderError::NullItem {
                section: "Exp".into(),
                index: 1
            }
        );
    }

    #[test]
    fn test_failure_keeps_earlier_sections() {
        let doc = ResumeDocument::from_value(json!({
            "sections": {"Exp": [{"title": "A"}], "Broken": null}
        }))
        .unwrap();
        let mut page = Page::new();
        assert!(render_sections(&mut page, &doc).is_err());
        assert_eq!(page.content.child_elements().count(), 1);
    }
}
