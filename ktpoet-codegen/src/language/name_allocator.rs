//! Unique identifiers for generated locals and parameters.

use std::collections::{HashMap, HashSet};

use super::naming::KOTLIN_KEYWORDS;
use crate::error::SpecError;

/// Hands out identifiers that are valid, not keywords, and unique within
/// the allocator. Each name is registered under a tag so later code can
/// look it up again.
///
/// ```
/// use ktpoet_codegen::language::NameAllocator;
///
/// let mut names = NameAllocator::new();
/// assert_eq!(names.new_name("item", "first").unwrap(), "item");
/// assert_eq!(names.new_name("item", "second").unwrap(), "item_");
/// assert_eq!(names.new_name("1st-place", "third").unwrap(), "_1st_place");
/// assert_eq!(names.get("second").unwrap(), "item_");
/// ```
#[derive(Debug, Clone)]
pub struct NameAllocator {
    allocated: HashSet<String>,
    tags: HashMap<String, String>,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    /// An allocator with every Kotlin keyword already taken.
    pub fn new() -> Self {
        Self {
            allocated: KOTLIN_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            tags: HashMap::new(),
        }
    }

    /// Allocate a name close to `suggestion` and remember it under `tag`.
    pub fn new_name(
        &mut self,
        suggestion: &str,
        tag: impl Into<String>,
    ) -> Result<String, SpecError> {
        let tag = tag.into();
        if self.tags.contains_key(&tag) {
            return Err(SpecError::DuplicateTag { tag });
        }
        let mut name = to_identifier(suggestion);
        while self.allocated.contains(&name) {
            name.push('_');
        }
        self.allocated.insert(name.clone());
        self.tags.insert(tag, name.clone());
        Ok(name)
    }

    /// The name allocated for `tag`.
    pub fn get(&self, tag: &str) -> Result<&str, SpecError> {
        self.tags
            .get(tag)
            .map(String::as_str)
            .ok_or_else(|| SpecError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.allocated.contains(name)
    }
}

/// Replace characters that cannot appear in an identifier with `_`, and
/// prefix `_` when the first character cannot start one.
fn to_identifier(suggestion: &str) -> String {
    let mut out = String::with_capacity(suggestion.len() + 1);
    match suggestion.chars().next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => out.push('_'),
    }
    out.extend(suggestion.chars().map(|c| {
        if c.is_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::is_identifier;

    #[test]
    fn test_keywords_are_taken() {
        let mut names = NameAllocator::new();
        assert_eq!(names.new_name("object", "o").unwrap(), "object_");
        assert_eq!(names.new_name("", "empty").unwrap(), "_");
        assert!(is_identifier(names.get("empty").unwrap()));
    }

    #[test]
    fn test_tags_are_unique() {
        let mut names = NameAllocator::new();
        names.new_name("value", "v").unwrap();
        assert_eq!(
            names.new_name("other", "v").unwrap_err(),
            SpecError::DuplicateTag { tag: "v".into() }
        );
        assert!(!names.contains("other"));
        assert_eq!(
            names.get("missing").unwrap_err(),
            SpecError::UnknownTag {
                tag: "missing".into()
            }
        );
    }

    #[test]
    fn test_clones_allocate_independently() {
        let mut outer = NameAllocator::new();
        outer.new_name("it", "outer").unwrap();
        let mut inner = outer.clone();
        assert_eq!(inner.new_name("it", "inner").unwrap(), "it_");
        assert!(!outer.contains("it_"));
    }
}
