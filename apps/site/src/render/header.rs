use crate::markup::escape_html;
use crate::models::resume::ResumeDocument;
use crate::page::Page;

/// Fills name, tagline and the contact block.
///
/// Contact lines are emitted in the order phone, email, github, linkedin;
/// absent fields leave no trace.
pub fn render_header(page: &mut Page, doc: &ResumeDocument) {
    page.name.set_text(doc.name());
    page.tagline.set_text(doc.tagline());

    page.contact.clear();
    let Some(contact) = doc.contact() else {
        return;
    };

    if let Some(phone) = contact.phone {
        page.contact
            .append_html(format!("<div>{}</div>", escape_html(&phone)));
    }
    if let Some(email) = contact.email {
        let email = escape_html(&email);
        page.contact
            .append_html(format!("<div><a href=\"mailto:{email}\">{email}</a></div>"));
    }
    if let Some(github) = contact.github {
        page.contact.append_html(external_link(&github, "GitHub"));
    }
    if let Some(linkedin) = contact.linkedin {
        page.contact.append_html(external_link(&linkedin, "LinkedIn"));
    }
}

fn external_link(href: &str, label: &str) -> String {
    format!(
        "<div><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a></div>",
        escape_html(href)
    )
}
