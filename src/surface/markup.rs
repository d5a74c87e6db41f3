//! Start-tag scanner for rendered markup.
//!
//! Only finds opening tags and their attributes. Good enough to locate
//! reading links and the close affordance; it is not an HTML parser and
//! never rejects input.
//!
//! Comments and the contents of raw-text or inert elements (`<script>`,
//! `<style>`, `<template>`, ...) are consumed whole and yield no tags,
//! matching what a document query would see.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose contents never become live elements of the document.
const INERT_ELEMENTS: &[&str] = &["script", "style", "template", "textarea", "title"];

/// Run of attribute text; quoted values may contain `<` and `>`.
const ATTRIBUTE_TEXT: &str = r#"(?:"[^"]*"|'[^']*'|[^'"<>])*"#;

static MARKUP_RE: Lazy<Regex> = Lazy::new(|| {
    let inert = INERT_ELEMENTS
        .iter()
        .map(|name| format!(r"<{name}\b{ATTRIBUTE_TEXT}>.*?(?:</{name}\s*>|\z)"))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(?is)<!--.*?(?:-->|\z)|{inert}|<(?P<name>[a-z][a-z0-9-]*)(?P<attrs>(?:\s{ATTRIBUTE_TEXT})?)/?>"
    );
    Regex::new(&pattern).expect("valid markup regex")
});
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

/// An opening tag found in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Position among all live start tags of the scanned markup.
    pub ordinal: usize,
    /// Lowercased tag name.
    pub name: String,
    attributes: Vec<(String, String)>,
}

impl StartTag {
    /// Value of the first attribute with this (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

/// Scans `html` for live start tags, in document order.
pub fn start_tags(html: &str) -> impl Iterator<Item = StartTag> + '_ {
    MARKUP_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let name = caps.name("name")?.as_str().to_ascii_lowercase();
            let attributes = caps
                .name("attrs")
                .map(|m| parse_attributes(m.as_str()))
                .unwrap_or_default();
            Some((name, attributes))
        })
        .enumerate()
        .map(|(ordinal, (name, attributes))| StartTag {
            ordinal,
            name,
            attributes,
        })
}

fn parse_attributes(raw: &str) -> Vec<(String, String)> {
    ATTRIBUTE_RE
        .captures_iter(raw)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (caps[1].to_ascii_lowercase(), value)
        })
        .collect()
}
