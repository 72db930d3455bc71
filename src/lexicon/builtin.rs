//! The built-in lexicon of rhetorical terms.

use lazy_static::lazy_static;

use crate::lexicon::entry::LexiconEntry;
use crate::lexicon::store::Lexicon;

lazy_static! {
    static ref BUILTIN_LEXICON: Lexicon = Lexicon::from_entries(builtin_entries());
}

/// Entries shipped with the crate.
pub fn builtin_entries() -> Vec<LexiconEntry> {
    vec![
        LexiconEntry::new(
            "enjambement",
            "inarcatura",
            ["inarcature", "inarcamenti", "inarcare"],
        ),
        LexiconEntry::new("enjambement", "slittamento", ["slittamenti", "slittare"]),
        LexiconEntry::new("metafora", "traslato", ["traslazione", "traslati", "metafore"]),
    ]
}

impl Lexicon {
    /// The built-in lexicon, constructed on first use.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN_LEXICON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon() {
        let lexicon = Lexicon::builtin();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.form_count(), 8);
        assert!(std::ptr::eq(lexicon, Lexicon::builtin()));
    }
}
