//! Command implementations for the lemmatag CLI.

use std::borrow::Cow;
use std::fs;
use std::io;

use log::{debug, info};

use crate::annotate::{
    AnnotationOutcome, Annotator, ScriptedPicker, StdioPicker, WordTarget, byte_offset,
    picker_options,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::error::{LemmatagError, Result};
use crate::lexicon::{Lexicon, Vocabulary, normalize_word};
use crate::resolve::Resolver;
use crate::util::levenshtein::levenshtein_distance;

/// Lexicon data shared by every command.
struct Workspace {
    config: Config,
    lexicon: Cow<'static, Lexicon>,
    vocabulary: Vocabulary,
}

impl Workspace {
    fn load(args: &LemmatagArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let lexicon = match &args.lexicon {
            Some(path) => Cow::Owned(Lexicon::load(path, &config.lexicon.reference_base)?),
            None => {
                debug!("Using the built-in lexicon");
                Cow::Borrowed(Lexicon::builtin())
            }
        };

        let vocabulary = match &args.vocabulary {
            Some(path) => Vocabulary::load(path)?,
            None => Vocabulary::new(),
        };

        Ok(Workspace {
            config,
            lexicon,
            vocabulary,
        })
    }

    fn resolver(&self, overrides: &ResolverOverrides) -> Result<Resolver<'_>> {
        let config = overrides.apply(self.config.resolver.clone());
        config.validate()?;
        Ok(Resolver::with_config(&self.lexicon, &self.vocabulary, config))
    }
}

/// Execute a CLI command.
pub fn execute_command(args: LemmatagArgs) -> Result<()> {
    match &args.command {
        Command::Distance(distance_args) => compute_distance(distance_args, &args),
        Command::Resolve(resolve_args) => {
            let workspace = Workspace::load(&args)?;
            resolve_word(resolve_args, &workspace, &args)
        }
        Command::Tag(tag_args) => {
            let workspace = Workspace::load(&args)?;
            tag_word(tag_args, &workspace, &args)
        }
        Command::Lexicon(lexicon_args) => {
            let workspace = Workspace::load(&args)?;
            show_lexicon(lexicon_args, &workspace, &args)
        }
    }
}

/// Print the edit distance between two words.
fn compute_distance(args: &DistanceArgs, cli_args: &LemmatagArgs) -> Result<()> {
    let result = DistanceResult {
        a: args.a.clone(),
        b: args.b.clone(),
        distance: levenshtein_distance(&args.a, &args.b),
    };
    output_result(&result, cli_args.output_format, cli_args.pretty)
}

/// Print the candidates for a word, terminal options included.
fn resolve_word(
    args: &ResolveArgs,
    workspace: &Workspace,
    cli_args: &LemmatagArgs,
) -> Result<()> {
    let resolver = workspace.resolver(&args.resolver)?;
    let candidates = resolver.resolve(&args.word);
    info!("{} candidate(s) for '{}'", candidates.len(), args.word);

    let result = ResolutionResult {
        word: normalize_word(&args.word),
        policy: resolver.config().policy,
        options: picker_options(candidates),
    };
    output_result(&result, cli_args.output_format, cli_args.pretty)
}

/// Run the annotation flow on a text and print the edited text.
fn tag_word(args: &TagArgs, workspace: &Workspace, cli_args: &LemmatagArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(LemmatagError::invalid_argument(
                "either TEXT or --file is required",
            ));
        }
    };
    let target = parse_target(&text, args)?;

    let resolver = workspace.resolver(&args.resolver)?;
    let annotator = Annotator::with_config(resolver, workspace.config.annotator.clone());

    let outcome = match args.pick {
        Some(pick) => {
            let mut picker = ScriptedPicker::new(pick.checked_sub(1));
            if let Some(manual) = &args.manual {
                picker = picker.with_text(manual.clone());
            }
            annotator.annotate(&text, &target, &mut picker)?
        }
        None => {
            // Prompts go to stderr so stdout only carries the result
            let stdin = io::stdin();
            let mut picker = StdioPicker::new(stdin.lock(), io::stderr());
            annotator.annotate(&text, &target, &mut picker)?
        }
    };

    let result = match outcome {
        AnnotationOutcome::Replaced(edit) => TagResult::Replaced {
            word: text[edit.range.clone()].to_string(),
            text: edit.apply(&text),
            replacement: edit.replacement,
        },
        AnnotationOutcome::NoWord => TagResult::NoWord,
        AnnotationOutcome::Declined => {
            if cli_args.verbosity() > 1 {
                eprintln!("Annotation cancelled");
            }
            TagResult::Declined
        }
    };
    output_result(&result, cli_args.output_format, cli_args.pretty)
}

/// Translate character-based CLI positions into a byte-based target.
fn parse_target(text: &str, args: &TagArgs) -> Result<WordTarget> {
    if let Some(selection) = &args.selection {
        let (start, end) = selection.split_once(':').ok_or_else(|| {
            LemmatagError::invalid_argument(format!(
                "selection '{selection}' must be written START:END"
            ))
        })?;
        let start = parse_position(start)?;
        let end = parse_position(end)?;
        return Ok(WordTarget::Selection(
            byte_offset(text, start)?..byte_offset(text, end)?,
        ));
    }

    let cursor = args.cursor.unwrap_or(0);
    Ok(WordTarget::Cursor(byte_offset(text, cursor)?))
}

fn parse_position(value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        LemmatagError::invalid_argument(format!("'{value}' is not a character position"))
    })
}

/// Print the loaded lexicon.
fn show_lexicon(
    args: &LexiconArgs,
    workspace: &Workspace,
    cli_args: &LemmatagArgs,
) -> Result<()> {
    let result = LexiconSummary {
        records: workspace.lexicon.records().to_vec(),
        forms: workspace.lexicon.form_count(),
        vocabulary_size: workspace.vocabulary.len(),
        vocabulary: args.words.then(|| workspace.vocabulary.words().to_vec()),
    };
    output_result(&result, cli_args.output_format, cli_args.pretty)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn tag_args(argv: &[&str]) -> TagArgs {
        let mut full = vec!["lemmatag", "tag"];
        full.extend_from_slice(argv);
        match LemmatagArgs::parse_from(full).command {
            Command::Tag(tag) => tag,
            _ => panic!("expected tag command"),
        }
    }

    #[test]
    fn test_parse_target_cursor_in_chars() {
        let text = "città antica";
        let args = tag_args(&[text, "--cursor", "7"]);

        // char 7 is the 'n' of "antica", byte 8
        assert_eq!(parse_target(text, &args).unwrap(), WordTarget::Cursor(8));
    }

    #[test]
    fn test_parse_target_selection() {
        let text = "città antica";
        let args = tag_args(&[text, "--selection", "0:5"]);

        assert_eq!(
            parse_target(text, &args).unwrap(),
            WordTarget::Selection(0..6)
        );
    }

    #[test]
    fn test_parse_target_errors() {
        let text = "abc";
        assert!(parse_target(text, &tag_args(&[text, "--selection", "1-2"])).is_err());
        assert!(parse_target(text, &tag_args(&[text, "--selection", "x:2"])).is_err());
        assert!(parse_target(text, &tag_args(&[text, "--cursor", "9"])).is_err());
    }

    #[test]
    fn test_workspace_resolver_rejects_zero_limit() {
        let args = LemmatagArgs::parse_from(["lemmatag", "lexicon"]);
        let workspace = Workspace::load(&args).unwrap();

        let overrides = ResolverOverrides {
            limit: Some(0),
            ..Default::default()
        };
        assert!(workspace.resolver(&overrides).is_err());
    }
}
