//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::annotate::PickerOption;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::lexicon::Record;
use crate::resolve::FuzzyPolicy;

/// Result structure for the distance command.
#[derive(Debug, Serialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub distance: usize,
}

/// Result structure for the resolve command.
#[derive(Debug, Serialize)]
pub struct ResolutionResult {
    pub word: String,
    pub policy: FuzzyPolicy,
    pub options: Vec<PickerOption>,
}

/// Result structure for the tag command.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TagResult {
    Replaced {
        word: String,
        replacement: String,
        text: String,
    },
    NoWord,
    Declined,
}

/// Result structure for the lexicon command.
#[derive(Debug, Serialize)]
pub struct LexiconSummary {
    pub records: Vec<Record>,
    pub forms: usize,
    pub vocabulary_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for DistanceResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.distance)
    }
}

impl HumanOutput for ResolutionResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Candidates for \"{}\":", self.word)?;
        for (i, option) in self.options.iter().enumerate() {
            match option {
                PickerOption::Candidate(candidate) => match &candidate.reference {
                    Some(reference) => writeln!(
                        out,
                        "  {}) {}  lemma={} ref={}",
                        i + 1,
                        candidate.label,
                        candidate.lemma,
                        reference
                    )?,
                    None => writeln!(
                        out,
                        "  {}) {}  lemma={}",
                        i + 1,
                        candidate.label,
                        candidate.lemma
                    )?,
                },
                other => writeln!(out, "  {}) {}", i + 1, other.label())?,
            }
        }
        Ok(())
    }
}

impl HumanOutput for TagResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            TagResult::Replaced { text, .. } => writeln!(out, "{text}"),
            TagResult::NoWord => writeln!(out, "No word found under the cursor."),
            TagResult::Declined => Ok(()),
        }
    }
}

impl HumanOutput for LexiconSummary {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Lexicon:")?;
        for record in &self.records {
            match &record.concept {
                Some(concept) => writeln!(
                    out,
                    "  {} [{}]: {}",
                    record.lemma,
                    concept,
                    record.forms.join(", ")
                )?,
                None => writeln!(out, "  {}: {}", record.lemma, record.forms.join(", "))?,
            }
        }
        writeln!(out)?;
        writeln!(out, "Records: {}", self.records.len())?;
        writeln!(out, "Forms: {}", self.forms)?;
        writeln!(out, "Vocabulary words: {}", self.vocabulary_size)?;

        if let Some(words) = &self.vocabulary {
            writeln!(out)?;
            for word in words {
                writeln!(out, "  {word}")?;
            }
        }
        Ok(())
    }
}

/// Write a result in the requested format.
pub fn write_result<T>(
    out: &mut dyn Write,
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write a result to standard output.
pub fn output_result<T>(result: &T, format: OutputFormat, pretty: bool) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, result, format, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::picker_options;
    use crate::resolve::Candidate;

    fn render<T: Serialize + HumanOutput>(result: &T, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_result(&mut buffer, result, format, false).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_resolution_human() {
        let result = ResolutionResult {
            word: "stenza".to_string(),
            policy: FuzzyPolicy::Nearest,
            options: picker_options(vec![Candidate::vocabulary("stanza", 1)]),
        };

        let text = render(&result, OutputFormat::Human);
        assert_eq!(
            text,
            "Candidates for \"stenza\":\n  1) stanza (vocabulary)  lemma=stanza\n  2) unknown\n  3) manual\n"
        );
    }

    #[test]
    fn test_resolution_json() {
        let result = ResolutionResult {
            word: "stenza".to_string(),
            policy: FuzzyPolicy::Nearest,
            options: picker_options(Vec::new()),
        };

        let value: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json)).unwrap();
        assert_eq!(value["policy"], "nearest");
        assert_eq!(value["options"][0]["option"], "unknown");
        assert_eq!(value["options"][1]["option"], "manual");
    }

    #[test]
    fn test_tag_result_json() {
        let result = TagResult::Declined;
        let value: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json)).unwrap();
        assert_eq!(value["outcome"], "declined");

        assert_eq!(render(&TagResult::Declined, OutputFormat::Human), "");
        assert_eq!(
            render(&TagResult::NoWord, OutputFormat::Human),
            "No word found under the cursor.\n"
        );
    }

    #[test]
    fn test_distance_human() {
        let result = DistanceResult {
            a: "kitten".to_string(),
            b: "sitting".to_string(),
            distance: 3,
        };
        assert_eq!(render(&result, OutputFormat::Human), "3\n");
    }
}
