//! Formatting options for rendered files.

use serde::Deserialize;

use crate::builder::Indent;

/// Packages whose classes Kotlin imports by default.
pub const DEFAULT_IMPLICIT_PACKAGES: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
    "java.lang",
];

/// How a file is laid out.
///
/// Loadable from TOML; missing keys keep their defaults:
///
/// ```
/// use ktpoet_codegen::builder::Indent;
/// use ktpoet_codegen::options::FormatOptions;
///
/// let options = FormatOptions::from_toml("indent = 4\ncolumn_limit = 120").unwrap();
/// assert_eq!(options.indent, Indent::Spaces(4));
/// assert_eq!(options.column_limit, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Indent unit, two spaces by default.
    pub indent: Indent,
    /// Column at which lines wrap at wrapping spaces.
    pub column_limit: usize,
    /// Packages that never need an import.
    pub implicit_packages: Vec<String>,
}

impl FormatOptions {
    pub fn from_toml(source: &str) -> crate::Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            column_limit: 100,
            implicit_packages: DEFAULT_IMPLICIT_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}
