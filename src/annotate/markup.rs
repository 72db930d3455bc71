//! Inline TEI-style word markup.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{LemmatagError, Result};

/// Configuration for the annotation element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Element name wrapping the word.
    pub element: String,
    /// Value of the `xml:id` attribute, omitted when `None`.
    pub xml_id: Option<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        MarkupConfig {
            element: "w".to_string(),
            xml_id: Some("w1".to_string()),
        }
    }
}

impl MarkupConfig {
    /// Check that the element name is usable as an XML name.
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.element.chars();
        let valid = match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
            }
            _ => false,
        };

        if !valid {
            return Err(LemmatagError::config(format!(
                "'{}' is not a valid element name",
                self.element
            )));
        }
        Ok(())
    }
}

/// Renders annotated words.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    config: MarkupConfig,
}

impl Markup {
    /// Create a renderer with the given configuration.
    pub fn new(config: MarkupConfig) -> Self {
        Markup { config }
    }

    /// Wrap `text` in the annotation element.
    ///
    /// ```
    /// use lemmatag::annotate::Markup;
    ///
    /// let markup = Markup::default();
    /// assert_eq!(
    ///     markup.render("metafore", "traslato", Some("http://example.org/skos/metafora")),
    ///     r#"<w xml:id="w1" lemma="traslato" ref="http://example.org/skos/metafora">metafore</w>"#
    /// );
    /// ```
    pub fn render(&self, text: &str, lemma: &str, reference: Option<&str>) -> String {
        let element = &self.config.element;

        let mut out = format!("<{element}");
        if let Some(id) = &self.config.xml_id {
            out.push_str(&format!(" xml:id=\"{}\"", escape_xml(id)));
        }
        out.push_str(&format!(" lemma=\"{}\"", escape_xml(lemma)));
        if let Some(reference) = reference {
            out.push_str(&format!(" ref=\"{}\"", escape_xml(reference)));
        }
        out.push_str(&format!(">{}</{element}>", escape_xml(text)));
        out
    }
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
