//! Kotlin identifier rules and keyword escaping.

/// Identifier rules of a target language.
///
/// Defines which words are reserved and how a reserved word is made usable
/// as an identifier.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "in" -> "`in`" in Kotlin)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Escape every `.`-separated segment of a qualified name.
    pub fn safe_qualified_name(&self, name: &str) -> String {
        name.split('.')
            .map(|segment| self.safe_name(segment))
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn escape_with_backticks(name: &str) -> String {
    format!("`{}`", name)
}

/// Kotlin hard keywords. These cannot be used as identifiers without
/// backticks.
pub const KOTLIN_KEYWORDS: &[&str] = &[
    "as",
    "break",
    "class",
    "continue",
    "do",
    "else",
    "false",
    "for",
    "fun",
    "if",
    "in",
    "interface",
    "is",
    "null",
    "object",
    "package",
    "return",
    "super",
    "this",
    "throw",
    "true",
    "try",
    "typealias",
    "typeof",
    "val",
    "var",
    "when",
    "while",
];

pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    reserved_words: KOTLIN_KEYWORDS,
    escape_reserved: escape_with_backticks,
};

/// Whether `name` is a Kotlin hard keyword.
pub fn is_keyword(name: &str) -> bool {
    KOTLIN_NAMING.is_reserved(name)
}

/// Whether `name` is a plain identifier: a letter or `_` followed by
/// letters, digits or `_`. Keywords count as identifiers here; they are
/// escaped at emission.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
