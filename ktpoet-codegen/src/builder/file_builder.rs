//! A Kotlin source file: package, imports and top-level types.

use std::fmt;
use std::path::PathBuf;

use ktpoet_core::{GeneratedFile, SourceFile};

use super::code_block::{Arg, CodeBlock, CodeBlockBuilder};
use super::{ClassName, CodeWriter, Indent, MemberName, TypeAliasSpec, TypeSpec};
use crate::error::{FormatError, SpecError};
use crate::generation::{Import, ImportResolver, emitter};
use crate::language::is_identifier;
use crate::options::FormatOptions;

/// A file holding top-level type aliases and types.
///
/// ```
/// use ktpoet_codegen::builder::{FileSpec, TypeSpec};
///
/// let greeter = TypeSpec::class_builder("Greeter").build().unwrap();
/// let file = FileSpec::get("com.example", greeter).unwrap();
/// assert_eq!(file.render(), "package com.example\n\nclass Greeter\n");
/// assert_eq!(file.relative_path().to_str(), Some("com/example/Greeter.kt"));
/// ```
#[derive(Debug, Clone)]
pub struct FileSpec {
    package: String,
    name: String,
    comment: CodeBlock,
    type_aliases: Vec<TypeAliasSpec>,
    types: Vec<TypeSpec>,
    aliased_imports: Vec<Import>,
    options: FormatOptions,
}

impl FileSpec {
    /// A file named `<name>.kt` in `package`. An empty package is the
    /// default package.
    pub fn builder(package: impl Into<String>, name: impl Into<String>) -> FileSpecBuilder {
        FileSpecBuilder {
            package: package.into(),
            name: name.into(),
            comment: CodeBlockBuilder::default(),
            type_aliases: Vec::new(),
            types: Vec::new(),
            aliased_imports: Vec::new(),
            options: FormatOptions::default(),
        }
    }

    /// A file holding just `type_spec`, named after it.
    pub fn get(package: impl Into<String>, type_spec: TypeSpec) -> Result<Self, SpecError> {
        let name = type_spec.name().unwrap_or_default().to_string();
        Self::builder(package, name).add_type(type_spec).build()
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The file name without the `.kt` extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &CodeBlock {
        &self.comment
    }

    pub fn type_aliases(&self) -> &[TypeAliasSpec] {
        &self.type_aliases
    }

    pub fn types(&self) -> &[TypeSpec] {
        &self.types
    }

    /// Imports added under an explicit alias.
    pub fn aliased_imports(&self) -> &[Import] {
        &self.aliased_imports
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render the file to Kotlin source text.
    pub fn render(&self) -> String {
        let imports = self.resolver().resolve(self);
        let mut writer = CodeWriter::for_file(self, Some(&imports));
        emitter::emit_file(&mut writer, self, imports.lines());
        let text = writer.into_string();
        log::debug!(
            "rendered {} ({} imports, {} bytes)",
            self.file_name(),
            imports.len(),
            text.len()
        );
        text
    }

    /// The classes this file imports without an alias, in emission order.
    pub fn imports(&self) -> Vec<ClassName> {
        self.resolver().resolve(self).classes().to_vec()
    }

    /// The top-level members this file imports without an alias.
    pub fn member_imports(&self) -> Vec<MemberName> {
        self.resolver().resolve(self).members().to_vec()
    }

    fn resolver(&self) -> ImportResolver {
        ImportResolver::new(self.options.implicit_packages.iter().cloned())
    }

    pub fn file_name(&self) -> String {
        format!("{}.kt", self.name)
    }

    /// `<package path>/<name>.kt`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(self.file_name());
        path
    }

    /// The rendered file as an in-memory source file.
    pub fn to_source_file(&self) -> SourceFile {
        SourceFile::new(self.relative_path(), self.render())
    }
}

impl GeneratedFile for FileSpec {
    fn relative_path(&self) -> PathBuf {
        FileSpec::relative_path(self)
    }

    fn render(&self) -> String {
        FileSpec::render(self)
    }
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Builder for [`FileSpec`].
#[derive(Debug, Clone)]
pub struct FileSpecBuilder {
    package: String,
    name: String,
    comment: CodeBlockBuilder,
    type_aliases: Vec<TypeAliasSpec>,
    types: Vec<TypeSpec>,
    aliased_imports: Vec<Import>,
    options: FormatOptions,
}

impl FileSpecBuilder {
    pub fn add_type(mut self, type_spec: TypeSpec) -> Self {
        self.types.push(type_spec);
        self
    }

    pub fn add_types(mut self, types: impl IntoIterator<Item = TypeSpec>) -> Self {
        self.types.extend(types);
        self
    }

    /// Type aliases are written after the imports, before any type.
    pub fn add_type_alias(mut self, type_alias: TypeAliasSpec) -> Self {
        self.type_aliases.push(type_alias);
        self
    }

    /// `import a.B as Alias`; every reference to `a.B` renders as `Alias`.
    pub fn add_aliased_import(mut self, class: &ClassName, alias: impl Into<String>) -> Self {
        self.aliased_imports.push(Import::class(class).with_alias(alias));
        self
    }

    /// `import a.b as alias`; every `%M` of the member renders as `alias`.
    pub fn add_aliased_member_import(
        mut self,
        member: &MemberName,
        alias: impl Into<String>,
    ) -> Self {
        self.aliased_imports.push(Import::member(member).with_alias(alias));
        self
    }

    /// Append to the `//` comment at the top of the file.
    pub fn add_comment(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.comment = self.comment.add(format, args)?;
        Ok(self)
    }

    pub fn options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.options.indent = indent;
        self
    }

    pub fn build(self) -> Result<FileSpec, SpecError> {
        if self.name.is_empty() || self.name.contains(['/', '\\']) || self.name.ends_with(".kt") {
            return Err(SpecError::InvalidFileName { name: self.name });
        }
        if !self.package.is_empty() {
            if let Some(segment) = self.package.split('.').find(|s| !is_identifier(s)) {
                return Err(SpecError::InvalidName {
                    name: segment.to_string(),
                    context: "package",
                });
            }
        }
        if self.types.iter().any(TypeSpec::is_anonymous) {
            return Err(SpecError::AnonymousTopLevelType { file: self.name });
        }
        let aliased_imports = check_aliases(self.aliased_imports)?;

        Ok(FileSpec {
            package: self.package,
            name: self.name,
            comment: self.comment.build(),
            type_aliases: self.type_aliases,
            types: self.types,
            aliased_imports,
            options: self.options,
        })
    }
}

/// Aliases must be identifiers and name one target each. Repeats of the
/// same import are dropped.
fn check_aliases(imports: Vec<Import>) -> Result<Vec<Import>, SpecError> {
    let mut seen: Vec<Import> = Vec::new();
    for import in imports {
        let alias = import.alias().unwrap_or_default();
        if !is_identifier(alias) {
            return Err(SpecError::InvalidName {
                name: alias.to_string(),
                context: "import alias",
            });
        }
        match seen.iter().find(|s| s.alias() == import.alias()) {
            Some(existing) if *existing == import => {}
            Some(existing) => {
                return Err(SpecError::DuplicateImportAlias {
                    alias: alias.to_string(),
                    first: existing.qualified_name(),
                    second: import.qualified_name(),
                });
            }
            None => seen.push(import),
        }
    }
    Ok(seen)
}
