//! Core file abstractions for ktpoet.
//!
//! The emission engine produces text; this crate turns that text into
//! source files that live at a package-derived path and can be written
//! below an output directory.

mod file;

pub use file::{FileRules, GeneratedFile, Overwrite, SourceFile, WriteResult};
