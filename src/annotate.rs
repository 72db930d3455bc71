//! The editor-facing side of annotation.
//!
//! This layer sits between a text surface and the resolver: it finds the word
//! to annotate, offers the resolver's candidates plus the two terminal options
//! through a [`Picker`], and renders the chosen lemma as inline markup. Any
//! decline by the operator aborts the whole operation without producing an
//! edit.

pub mod annotator;
pub mod markup;
pub mod picker;
pub mod target;

// Re-export commonly used types
pub use annotator::*;
pub use markup::*;
pub use picker::*;
pub use target::*;
