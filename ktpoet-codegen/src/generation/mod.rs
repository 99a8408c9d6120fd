//! Turning a file spec into text.
//!
//! - [`ImportResolver`] - decides which class names are imported
//! - `emitter` - the tree walk shared by import collection and rendering

pub(crate) mod emitter;
mod imports;

pub use imports::{Import, ImportResolver, Imports, Rendering};
