//! The interactive choice boundary.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::error::Result;
use crate::resolve::Candidate;

/// One entry of the picker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "option", rename_all = "lowercase")]
pub enum PickerOption {
    /// A computed candidate.
    Candidate(Candidate),
    /// Assign the sentinel "unknown" lemma.
    Unknown,
    /// Ask the operator to type the lemma.
    Manual,
}

impl PickerOption {
    /// Text shown to the operator.
    pub fn label(&self) -> &str {
        match self {
            PickerOption::Candidate(candidate) => &candidate.label,
            PickerOption::Unknown => "unknown",
            PickerOption::Manual => "manual",
        }
    }
}

/// Turn resolver output into the picker list: candidates in order, then the
/// unknown and manual options.
pub fn picker_options(candidates: Vec<Candidate>) -> Vec<PickerOption> {
    candidates
        .into_iter()
        .map(PickerOption::Candidate)
        .chain([PickerOption::Unknown, PickerOption::Manual])
        .collect()
}

/// Something that can ask the operator to choose.
///
/// `Ok(None)` means the operator declined; errors are reserved for failures of
/// the interaction channel itself.
pub trait Picker {
    /// Let the operator choose one of `options`, returning its index.
    fn pick(&mut self, prompt: &str, options: &[PickerOption]) -> Result<Option<usize>>;

    /// Ask the operator for free text.
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// A picker with answers decided up front.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    choice: Option<usize>,
    text: Option<String>,
}

impl ScriptedPicker {
    /// Pick the option at `choice` (zero based); `None` declines.
    pub fn new(choice: Option<usize>) -> Self {
        ScriptedPicker { choice, text: None }
    }

    /// Answer the free-text prompt with `text`.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, _prompt: &str, _options: &[PickerOption]) -> Result<Option<usize>> {
        Ok(self.choice)
    }

    fn prompt_text(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.text.take())
    }
}

/// A line-oriented terminal picker.
///
/// Options are listed with 1-based numbers. An empty line or end of input
/// declines; anything else that is not a valid number asks again.
pub struct StdioPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPicker<R, W> {
    /// Create a picker reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        StdioPicker { input, output }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Picker for StdioPicker<R, W> {
    fn pick(&mut self, prompt: &str, options: &[PickerOption]) -> Result<Option<usize>> {
        writeln!(self.output, "{prompt}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option.label())?;
        }

        loop {
            write!(
                self.output,
                "Select [1-{}] (empty to cancel): ",
                options.len()
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(None);
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Invalid choice: {answer}")?,
            }
        }
    }

    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        self.read_line()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn options() -> Vec<PickerOption> {
        picker_options(vec![Candidate::vocabulary("stanza", 1)])
    }

    #[test]
    fn test_terminal_options_are_appended() {
        let labels: Vec<String> = options().iter().map(|o| o.label().to_string()).collect();
        assert_eq!(labels, vec!["stanza (vocabulary)", "unknown", "manual"]);

        let only_terminal = picker_options(Vec::new());
        assert_eq!(only_terminal, vec![PickerOption::Unknown, PickerOption::Manual]);
    }

    #[test]
    fn test_scripted_picker() {
        let mut picker = ScriptedPicker::new(Some(2)).with_text("strofa");
        assert_eq!(picker.pick("?", &options()).unwrap(), Some(2));
        assert_eq!(picker.prompt_text("?").unwrap().as_deref(), Some("strofa"));
        assert_eq!(picker.prompt_text("?").unwrap(), None);
    }

    #[test]
    fn test_stdio_picker_retries_invalid_input() {
        let input = Cursor::new("abc\n7\n2\n");
        let mut output = Vec::new();
        let mut picker = StdioPicker::new(input, &mut output);

        assert_eq!(picker.pick("Choose", &options()).unwrap(), Some(1));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("  1) stanza (vocabulary)"));
        assert!(shown.contains("  3) manual"));
        assert!(shown.contains("Invalid choice: abc"));
        assert!(shown.contains("Invalid choice: 7"));
    }

    #[test]
    fn test_stdio_picker_declines() {
        let mut output = Vec::new();
        let mut picker = StdioPicker::new(Cursor::new("\n"), &mut output);
        assert_eq!(picker.pick("Choose", &options()).unwrap(), None);

        let mut picker = StdioPicker::new(Cursor::new(""), &mut output);
        assert_eq!(picker.pick("Choose", &options()).unwrap(), None);
        assert_eq!(picker.prompt_text("Lemma").unwrap(), None);
    }

    #[test]
    fn test_stdio_prompt_text() {
        let mut output = Vec::new();
        let mut picker = StdioPicker::new(Cursor::new("  cesura \n"), &mut output);
        assert_eq!(
            picker.prompt_text("Lemma").unwrap().as_deref(),
            Some("cesura")
        );
    }
}
