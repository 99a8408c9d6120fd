//! Target-language rules.
//!
//! - [`NamingConvention`] - reserved words and identifier escaping
//! - [`KOTLIN_NAMING`] - the Kotlin convention used by the emitter
//! - [`NameAllocator`] - unique identifiers for generated code

mod name_allocator;
mod naming;

pub use name_allocator::NameAllocator;
pub use naming::{KOTLIN_KEYWORDS, KOTLIN_NAMING, NamingConvention, is_identifier, is_keyword};
