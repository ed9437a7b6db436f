//! Link targets and attributes derived from profile fields.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// `target` for documents and external profiles.
pub const NEW_TAB_TARGET: &str = "_blank";
/// `rel` for every link opened in a new browsing context.
pub const NEW_TAB_REL: &str = "noopener noreferrer";

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// `tel:` target with formatting whitespace removed.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// Tooltip for a credential card.
pub fn open_document_title(title: &str) -> String {
    format!("Open {title} in new tab")
}

/// In-page anchor for a section id.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}
