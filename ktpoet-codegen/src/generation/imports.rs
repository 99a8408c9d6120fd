//! Import resolution.
//!
//! A collecting pass walks the file with the same emitter used for output
//! and records every class and member name it writes. Names are grouped by
//! simple name; a group renders short only when it is unambiguous.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use indexmap::IndexMap;

use super::emitter;
use crate::builder::{ClassName, CodeWriter, FileSpec, MemberName, TypeSpec};
use crate::language::{KOTLIN_NAMING, is_keyword};
use crate::options::DEFAULT_IMPLICIT_PACKAGES;

/// How a class or member name is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Simple names only, e.g. `Map.Entry`.
    Short,
    /// Fully qualified.
    Qualified,
}

/// One `import` line: a class or member, optionally renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Import {
    package: String,
    names: Vec<String>,
    alias: Option<String>,
}

impl Import {
    pub fn class(class: &ClassName) -> Self {
        Self {
            package: class.package().to_string(),
            names: class.simple_names().to_vec(),
            alias: None,
        }
    }

    pub fn member(member: &MemberName) -> Self {
        let mut names = member
            .enclosing_class_name()
            .map(|enclosing| enclosing.simple_names().to_vec())
            .unwrap_or_default();
        names.push(member.simple_name().to_string());
        Self {
            package: member.package().to_string(),
            names,
            alias: None,
        }
    }

    /// Import under another name: `import a.B as C`.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn qualified_name(&self) -> String {
        let chain = self.names.join(".");
        if self.package.is_empty() {
            chain
        } else {
            format!("{}.{}", self.package, chain)
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&KOTLIN_NAMING.safe_qualified_name(&self.qualified_name()))?;
        if let Some(alias) = &self.alias {
            write!(f, " as {}", KOTLIN_NAMING.safe_name(alias))?;
        }
        Ok(())
    }
}

/// The rendering table for one file.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    /// Top-level simple name -> the one package it renders short for.
    short: HashMap<String, String>,
    /// Canonical names of the members that render by simple name.
    short_members: HashSet<String>,
    /// Type and type-variable names declared by the file.
    declared: HashSet<String>,
    /// Imported classes, sorted.
    classes: Vec<ClassName>,
    /// Imported members, sorted.
    members: Vec<MemberName>,
    /// Every import line, aliased ones included, sorted.
    lines: Vec<Import>,
}

impl Imports {
    pub fn rendering(&self, class: &ClassName) -> Rendering {
        let top = class.top_level_class_name();
        match self.short.get(top.simple_name()) {
            Some(package) if package == class.package() => Rendering::Short,
            _ => Rendering::Qualified,
        }
    }

    /// Rendering of a top-level member. Members nested in a class render
    /// through their enclosing class instead.
    pub fn member_rendering(&self, member: &MemberName) -> Rendering {
        if self.short_members.contains(&member.canonical_name()) {
            Rendering::Short
        } else {
            Rendering::Qualified
        }
    }

    /// Whether the file declares a type or type variable named `simple_name`.
    pub fn is_declared(&self, simple_name: &str) -> bool {
        self.declared.contains(simple_name)
    }

    /// Imported classes sorted by package, then simple names.
    pub fn classes(&self) -> &[ClassName] {
        &self.classes
    }

    /// Imported top-level members sorted by canonical name.
    pub fn members(&self) -> &[MemberName] {
        &self.members
    }

    /// The `import` lines of the file.
    pub fn lines(&self) -> &[Import] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassName> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decides which class and member names a file imports.
///
/// # Example
///
/// ```
/// use ktpoet_codegen::builder::ClassName;
/// use ktpoet_codegen::generation::{ImportResolver, Rendering};
///
/// let json = ClassName::new("org.json", ["JSONObject"]).unwrap();
/// let list = ClassName::list();
/// let imports = ImportResolver::default().assign("app", &[], [json.clone(), list.clone()]);
///
/// assert_eq!(imports.classes(), [json.clone()]);
/// assert_eq!(imports.rendering(&json), Rendering::Short);
/// assert_eq!(imports.rendering(&list), Rendering::Short);
/// ```
#[derive(Debug, Clone)]
pub struct ImportResolver {
    implicit_packages: HashSet<String>,
}

impl Default for ImportResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMPLICIT_PACKAGES.iter().map(|p| p.to_string()))
    }
}

impl ImportResolver {
    pub fn new(implicit_packages: impl IntoIterator<Item = String>) -> Self {
        Self {
            implicit_packages: implicit_packages.into_iter().collect(),
        }
    }

    /// Resolve imports for `file`.
    pub fn resolve(&self, file: &FileSpec) -> Imports {
        let mut collector = CodeWriter::for_file(file, None);
        emitter::emit_file(&mut collector, file, &[]);
        let classes = collector.take_referenced();
        let members = collector.take_referenced_members();

        let mut declared = Vec::new();
        for alias in file.type_aliases() {
            declared.push(alias.name().to_string());
            declared.extend(alias.type_variables().iter().map(|v| v.name().to_string()));
        }
        for type_spec in file.types() {
            declared_names(type_spec, &mut declared);
        }
        self.assign_all(
            file.package(),
            &declared,
            classes,
            members,
            file.aliased_imports(),
        )
    }

    /// Build the rendering table for classes referenced from `package`.
    /// `declared` holds the type and type-variable names the file declares;
    /// referenced names that collide with them stay qualified.
    pub fn assign(
        &self,
        package: &str,
        declared: &[String],
        referenced: impl IntoIterator<Item = ClassName>,
    ) -> Imports {
        self.assign_all(package, declared, referenced, Vec::new(), &[])
    }

    /// Like [`assign`](Self::assign), with referenced top-level members and
    /// explicitly aliased imports. Alias names are taken: nothing else
    /// renders short under them.
    pub fn assign_all(
        &self,
        package: &str,
        declared: &[String],
        referenced: impl IntoIterator<Item = ClassName>,
        members: impl IntoIterator<Item = MemberName>,
        aliased: &[Import],
    ) -> Imports {
        let declared: HashSet<String> = declared.iter().cloned().collect();
        let aliases: HashSet<&str> = aliased.iter().filter_map(Import::alias).collect();

        let mut groups: IndexMap<String, BTreeSet<String>> = IndexMap::new();
        for class in referenced {
            let top = class.top_level_class_name();
            groups
                .entry(top.simple_name().to_string())
                .or_default()
                .insert(top.package().to_string());
        }
        let mut extensions = BTreeSet::new();
        let mut member_groups: IndexMap<String, BTreeMap<String, MemberName>> = IndexMap::new();
        for member in members.into_iter().filter(|m| m.enclosing_class_name().is_none()) {
            if member.is_extension() {
                extensions.insert(member);
                continue;
            }
            member_groups
                .entry(member.simple_name().to_string())
                .or_default()
                .insert(member.canonical_name(), member);
        }

        let taken = |simple_name: &str| {
            if declared.contains(simple_name) {
                log::debug!("{simple_name} collides with a declared name, qualifying");
                return true;
            }
            if aliases.contains(simple_name) {
                log::debug!("{simple_name} collides with an import alias, qualifying");
                return true;
            }
            if is_keyword(simple_name) {
                log::debug!("{simple_name} is a keyword, qualifying");
                return true;
            }
            false
        };

        let mut short = HashMap::new();
        let mut classes = Vec::new();
        for (simple_name, packages) in &groups {
            let mut iter = packages.iter();
            let only = match (iter.next(), iter.next()) {
                (Some(only), None) => only.clone(),
                _ => {
                    log::debug!("{simple_name} is ambiguous across {packages:?}, qualifying");
                    continue;
                }
            };
            if taken(simple_name) {
                continue;
            }
            if self.needs_import(package, &only) {
                log::debug!("importing {only}.{simple_name}");
                classes.push(ClassName::unchecked(only.clone(), [simple_name.clone()]));
            }
            short.insert(simple_name.clone(), only);
        }

        let mut short_members = HashSet::new();
        let mut imported_members = Vec::new();
        // Extensions cannot be called qualified; overloads resolve by receiver.
        for member in extensions {
            if self.needs_import(package, member.package()) {
                log::debug!("importing extension {member}");
                imported_members.push(member.clone());
            }
            short_members.insert(member.canonical_name());
        }
        for (simple_name, candidates) in member_groups {
            let member = match candidates.values().collect::<Vec<_>>().as_slice() {
                [only] => (*only).clone(),
                _ => {
                    log::debug!("member {simple_name} is ambiguous, qualifying");
                    continue;
                }
            };
            if groups.contains_key(&simple_name) {
                log::debug!("member {simple_name} collides with a type name, qualifying");
                continue;
            }
            if taken(&simple_name) {
                continue;
            }
            if self.needs_import(package, member.package()) {
                log::debug!("importing member {member}");
                imported_members.push(member.clone());
            }
            short_members.insert(member.canonical_name());
        }

        classes.sort_by(|a, b| {
            (a.package(), a.simple_names()).cmp(&(b.package(), b.simple_names()))
        });
        imported_members.sort();

        let mut lines: Vec<Import> = classes
            .iter()
            .map(Import::class)
            .chain(imported_members.iter().map(Import::member))
            .chain(aliased.iter().cloned())
            .collect();
        lines.sort();
        lines.dedup();

        Imports {
            short,
            short_members,
            declared,
            classes,
            members: imported_members,
            lines,
        }
    }

    fn needs_import(&self, file_package: &str, package: &str) -> bool {
        !package.is_empty() && package != file_package && !self.implicit_packages.contains(package)
    }
}

/// Collect the type and type-variable names declared by `spec` and its
/// nested types.
fn declared_names(spec: &TypeSpec, out: &mut Vec<String>) {
    if let Some(name) = spec.name() {
        out.push(name.to_string());
    }
    out.extend(spec.type_variables().iter().map(|v| v.name().to_string()));
    for function in spec.functions().iter().chain(spec.primary_constructor()) {
        out.extend(function.type_variables().iter().map(|v| v.name().to_string()));
    }
    for body in spec.enum_constants().values() {
        declared_names(body, out);
    }
    for nested in spec.types() {
        declared_names(nested, out);
    }
}
