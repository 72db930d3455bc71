//! The annotate-a-word flow.

use std::ops::Range;

use log::info;
use serde::{Deserialize, Serialize};

use crate::annotate::markup::{Markup, MarkupConfig};
use crate::annotate::picker::{Picker, PickerOption, picker_options};
use crate::annotate::target::{WordTarget, extract_word};
use crate::error::{LemmatagError, Result};
use crate::resolve::Resolver;

/// Configuration for the annotation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Lemma assigned when the operator picks the unknown option.
    pub unknown_lemma: String,
    /// Markup settings.
    pub markup: MarkupConfig,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        AnnotatorConfig {
            unknown_lemma: "unknown".to_string(),
            markup: MarkupConfig::default(),
        }
    }
}

impl AnnotatorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.unknown_lemma.trim().is_empty() {
            return Err(LemmatagError::config("unknown_lemma must not be empty"));
        }
        self.markup.validate()
    }
}

/// A replacement of one range of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    /// Byte range being replaced.
    pub range: Range<usize>,
    /// Text inserted in its place.
    pub replacement: String,
}

impl Edit {
    /// Apply the edit to the text it was computed for.
    pub fn apply(&self, text: &str) -> String {
        let mut edited = String::with_capacity(text.len() + self.replacement.len());
        edited.push_str(&text[..self.range.start]);
        edited.push_str(&self.replacement);
        edited.push_str(&text[self.range.end..]);
        edited
    }
}

/// Result of one annotation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationOutcome {
    /// The word is to be replaced by its annotated form.
    Replaced(Edit),
    /// Nothing word-like at the target.
    NoWord,
    /// The operator declined a prompt; nothing changes.
    Declined,
}

/// Drives one annotation: extract, resolve, pick, render.
pub struct Annotator<'a> {
    resolver: Resolver<'a>,
    markup: Markup,
    unknown_lemma: String,
}

impl<'a> Annotator<'a> {
    /// Create an annotator with the default configuration.
    pub fn new(resolver: Resolver<'a>) -> Self {
        Self::with_config(resolver, AnnotatorConfig::default())
    }

    /// Create an annotator with a custom configuration.
    pub fn with_config(resolver: Resolver<'a>, config: AnnotatorConfig) -> Self {
        Annotator {
            resolver,
            markup: Markup::new(config.markup),
            unknown_lemma: config.unknown_lemma,
        }
    }

    /// Annotate the word at `target` in `text`.
    pub fn annotate<P>(
        &self,
        text: &str,
        target: &WordTarget,
        picker: &mut P,
    ) -> Result<AnnotationOutcome>
    where
        P: Picker + ?Sized,
    {
        let Some(span) = extract_word(text, target)? else {
            return Ok(AnnotationOutcome::NoWord);
        };

        let options = picker_options(self.resolver.resolve(&span.text));
        let prompt = format!("Select the value for \"{}\"", span.text);

        let Some(choice) = picker.pick(&prompt, &options)? else {
            info!("Annotation of '{}' declined", span.text);
            return Ok(AnnotationOutcome::Declined);
        };
        let option = options.get(choice).ok_or_else(|| {
            LemmatagError::invalid_argument(format!(
                "choice {} is out of range for {} options",
                choice,
                options.len()
            ))
        })?;

        let replacement = match option {
            PickerOption::Candidate(candidate) => self.markup.render(
                &span.text,
                &candidate.lemma,
                candidate.reference.as_deref(),
            ),
            PickerOption::Unknown => self.markup.render(&span.text, &self.unknown_lemma, None),
            PickerOption::Manual => {
                let lemma = picker
                    .prompt_text("Enter the lemma value manually")?
                    .map(|lemma| lemma.trim().to_string())
                    .filter(|lemma| !lemma.is_empty());
                let Some(lemma) = lemma else {
                    info!("Manual lemma for '{}' declined", span.text);
                    return Ok(AnnotationOutcome::Declined);
                };
                self.markup.render(&span.text, &lemma, None)
            }
        };

        info!("Annotated '{}' as {}", span.text, replacement);
        Ok(AnnotationOutcome::Replaced(Edit {
            range: span.range,
            replacement,
        }))
    }
}
