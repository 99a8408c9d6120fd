//! Indentation-aware writer that the emitter drives.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::code_block::{Instruction, string_literal};
use super::line_wrapper::LineWrapper;
use super::{
    ClassName, CodeBlock, FileSpec, MemberName, Modifier, Projection, TypeName, TypeSpec,
    TypeVariableName,
};
use crate::generation::{Imports, Rendering, emitter};
use crate::language::KOTLIN_NAMING;
use crate::options::FormatOptions;

/// Writes code with lazy indentation, statement-scoped wrapping, KDoc and
/// comment prefixes, and import-aware type names.
///
/// Indentation is written when the first character of a line arrives, so
/// empty lines carry no trailing whitespace and the first line of the output
/// is never indented.
///
/// ```
/// use ktpoet_codegen::builder::CodeWriter;
/// use ktpoet_codegen::options::FormatOptions;
///
/// let options = FormatOptions::default();
/// let mut writer = CodeWriter::new(&options);
/// writer.emit("fun main() {\n").indent(1).emit("println()\n").unindent(1).emit("}\n");
/// assert_eq!(writer.into_string(), "fun main() {\n  println()\n}\n");
/// ```
#[derive(Debug)]
pub struct CodeWriter<'a> {
    out: LineWrapper,
    indent: String,
    indent_level: usize,
    /// Indent level of each open statement, innermost last.
    statements: Vec<usize>,
    doc: bool,
    comment: bool,
    at_line_start: bool,
    trailing_newlines: usize,
    started: bool,
    package: String,
    /// Top-level type names declared by the file being written.
    own_types: HashSet<String>,
    type_stack: Vec<TypeScope>,
    /// Qualified name -> alias, from the file's aliased imports.
    aliases: HashMap<String, String>,
    imports: Option<&'a Imports>,
    referenced: Vec<ClassName>,
    referenced_members: Vec<MemberName>,
}

/// A named type whose body is being written.
#[derive(Debug)]
struct TypeScope {
    class_name: ClassName,
    nested: Vec<String>,
    functions: Vec<String>,
}

impl<'a> CodeWriter<'a> {
    /// A writer outside any file: every type renders fully qualified.
    pub fn new(options: &FormatOptions) -> Self {
        let indent = options.indent.unit();
        Self {
            out: LineWrapper::new(indent.clone(), options.column_limit),
            indent,
            indent_level: 0,
            statements: Vec::new(),
            doc: false,
            comment: false,
            at_line_start: false,
            trailing_newlines: 0,
            started: false,
            package: String::new(),
            own_types: HashSet::new(),
            type_stack: Vec::new(),
            aliases: HashMap::new(),
            imports: None,
            referenced: Vec::new(),
            referenced_members: Vec::new(),
        }
    }

    /// A writer for `file`. Without `imports` the writer only collects the
    /// class and member names it is asked to write.
    pub(crate) fn for_file(file: &FileSpec, imports: Option<&'a Imports>) -> Self {
        let mut writer = Self::new(file.options());
        writer.package = file.package().to_string();
        writer.own_types = file
            .types()
            .iter()
            .filter_map(|t| t.name().map(str::to_string))
            .chain(file.type_aliases().iter().map(|a| a.name().to_string()))
            .collect();
        writer.aliases = file
            .aliased_imports()
            .iter()
            .filter_map(|i| Some((i.qualified_name(), i.alias()?.to_string())))
            .collect();
        writer.imports = imports;
        writer
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Write text, indenting each new line lazily.
    pub fn emit(&mut self, s: &str) -> &mut Self {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                if (self.doc || self.comment) && self.at_line_start {
                    self.emit_indentation();
                    self.out.append(if self.doc { " *" } else { "//" });
                    self.trailing_newlines = 0;
                }
                self.out.append("\n");
                self.at_line_start = true;
                self.trailing_newlines += 1;
                self.started = true;
            }
            if line.is_empty() {
                continue;
            }
            if self.at_line_start {
                self.emit_indentation();
                if self.doc {
                    self.out.append(" * ");
                } else if self.comment {
                    self.out.append("// ");
                }
            }
            self.out.append(line);
            self.at_line_start = false;
            self.trailing_newlines = 0;
            self.started = true;
        }
        self
    }

    fn emit_indentation(&mut self) {
        for _ in 0..self.indent_level {
            self.out.append(&self.indent);
        }
    }

    /// Write every instruction of `code`.
    pub fn emit_code(&mut self, code: &CodeBlock) -> &mut Self {
        for instruction in code.instructions() {
            match instruction {
                Instruction::Text(text) => {
                    self.emit(text);
                }
                Instruction::Name(name) => {
                    let name = KOTLIN_NAMING.safe_name(name);
                    self.emit(&name);
                }
                Instruction::StringLiteral(value) => {
                    self.emit(&string_literal(value));
                }
                Instruction::Type(type_name) => {
                    self.emit_type(type_name);
                }
                Instruction::Member(member) => {
                    let name = self.lookup_member(member);
                    self.emit(&name);
                }
                Instruction::AnonymousType(spec) => emitter::emit_anonymous_type(self, spec),
                Instruction::Indent => {
                    self.indent(1);
                }
                Instruction::Unindent => {
                    self.unindent(1);
                }
                Instruction::BeginStatement => {
                    self.begin_statement();
                }
                Instruction::EndStatement => {
                    self.end_statement();
                }
                Instruction::WrappingSpace => {
                    self.wrapping_space();
                }
            }
        }
        self
    }

    /// Write a KDoc block. Does nothing for an empty doc.
    pub(crate) fn emit_doc(&mut self, doc: &CodeBlock) {
        if doc.is_empty() {
            return;
        }
        self.emit("/**\n");
        self.doc = true;
        self.emit_code(doc);
        self.ensure_newline();
        self.doc = false;
        self.emit(" */\n");
    }

    /// Write a `//` comment, one prefix per line.
    pub(crate) fn emit_comment(&mut self, comment: &CodeBlock) {
        if comment.is_empty() {
            return;
        }
        self.at_line_start = true;
        self.comment = true;
        self.emit_code(comment);
        self.ensure_newline();
        self.comment = false;
    }

    /// End the current line unless it is already ended.
    pub(crate) fn ensure_newline(&mut self) {
        if self.started && !self.at_line_start {
            self.emit("\n");
        }
    }

    /// Separate members with exactly one blank line. Does nothing at the
    /// start of the output or after an existing blank line.
    pub fn blank_line(&mut self) -> &mut Self {
        if !self.started {
            return self;
        }
        self.ensure_newline();
        if self.trailing_newlines < 2 {
            self.emit("\n");
        }
        self
    }

    // =========================================================================
    // Indentation and wrapping
    // =========================================================================

    pub fn indent(&mut self, levels: usize) -> &mut Self {
        self.indent_level += levels;
        self
    }

    /// Unindenting below zero stays at zero.
    pub fn unindent(&mut self, levels: usize) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(levels);
        self
    }

    pub fn begin_statement(&mut self) -> &mut Self {
        self.statements.push(self.indent_level);
        self
    }

    /// A statement end without a matching begin is ignored.
    pub fn end_statement(&mut self) -> &mut Self {
        self.statements.pop();
        self
    }

    /// A space where the line may break. Continuation lines are indented one
    /// level past the current statement, or past the current indent outside
    /// a statement.
    pub fn wrapping_space(&mut self) -> &mut Self {
        if self.doc || self.comment {
            return self.emit(" ");
        }
        let level = self.continuation_level();
        self.out.wrapping_space(level);
        self
    }

    fn zero_width_space(&mut self) {
        if !(self.doc || self.comment) {
            let level = self.continuation_level();
            self.out.zero_width_space(level);
        }
    }

    fn continuation_level(&self) -> usize {
        self.statements.last().copied().unwrap_or(self.indent_level) + 1
    }

    /// Detach the open statements while an anonymous type is written.
    pub(crate) fn suspend_statements(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.statements)
    }

    pub(crate) fn resume_statements(&mut self, statements: Vec<usize>) {
        self.statements = statements;
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Write a type name, shortened where the import table allows it.
    pub fn emit_type(&mut self, type_name: &TypeName) -> &mut Self {
        match type_name {
            TypeName::Primitive(primitive) => {
                let name = self.builtin(primitive.simple_name());
                self.emit(&name);
            }
            TypeName::Array(element) => {
                let name = self.builtin("Array");
                self.emit(&name);
                self.emit_type_arguments(std::slice::from_ref(element.as_ref()));
            }
            TypeName::Declared(class) => {
                let name = self.lookup(class);
                self.emit(&name);
                self.emit_type_arguments(class.type_arguments());
                if class.is_nullable() {
                    self.emit("?");
                }
            }
            TypeName::TypeVariable(variable) => {
                self.emit(&KOTLIN_NAMING.safe_name(variable.name()));
                if variable.is_nullable() {
                    self.emit("?");
                }
            }
            TypeName::Wildcard(wildcard) => match wildcard.projection() {
                Projection::Star => {
                    self.emit("*");
                }
                Projection::Out(upper) => {
                    self.emit("out ").emit_type(upper);
                }
                Projection::In(lower) => {
                    self.emit("in ").emit_type(lower);
                }
            },
        }
        self
    }

    fn emit_type_arguments(&mut self, arguments: &[TypeName]) {
        if arguments.is_empty() {
            return;
        }
        self.emit("<");
        self.zero_width_space();
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.emit_type(argument);
        }
        self.emit(">");
    }

    /// `Int`, or `kotlin.Int` when another `Int` is declared or imported.
    /// Outside a file builtins always render short.
    fn builtin(&mut self, simple_name: &str) -> String {
        let class = ClassName::kotlin(simple_name);
        if let Some(aliased) = self.aliased(&class) {
            return aliased;
        }
        match self.imports {
            Some(imports) if imports.rendering(&class) == Rendering::Qualified => {
                class.canonical_name()
            }
            Some(_) => simple_name.to_string(),
            None => {
                self.referenced.push(class);
                simple_name.to_string()
            }
        }
    }

    fn lookup(&mut self, class: &ClassName) -> String {
        if let Some(aliased) = self.aliased(class) {
            return aliased;
        }
        if self.is_own(class) {
            let visible = self.visible_name(class);
            return KOTLIN_NAMING.safe_qualified_name(&visible);
        }
        let rendering = match self.imports {
            Some(imports) => imports.rendering(class),
            None => {
                self.referenced.push(class.top_level_class_name());
                Rendering::Qualified
            }
        };
        let text = match rendering {
            Rendering::Short => class.simple_names().join("."),
            Rendering::Qualified => class.canonical_name(),
        };
        KOTLIN_NAMING.safe_qualified_name(&text)
    }

    /// `Alias.Rest` when `class` or one of its enclosing classes was
    /// imported under an alias.
    fn aliased(&self, class: &ClassName) -> Option<String> {
        if self.aliases.is_empty() {
            return None;
        }
        let names = class.simple_names();
        (1..=names.len()).rev().find_map(|end| {
            let qualified = ClassName::unchecked(class.package(), &names[..end]).canonical_name();
            let alias = self.aliases.get(&qualified)?;
            let rest = names[end..].iter().map(|n| KOTLIN_NAMING.safe_name(n));
            Some(
                std::iter::once(KOTLIN_NAMING.safe_name(alias))
                    .chain(rest)
                    .collect::<Vec<_>>()
                    .join("."),
            )
        })
    }

    /// A member reference written by `%M`.
    ///
    /// Aliases win. Members of a class render through the class name. A
    /// top-level function shadowed by a function of an enclosing type stays
    /// qualified; anything else follows the import table.
    fn lookup_member(&mut self, member: &MemberName) -> String {
        if let Some(alias) = self.aliases.get(&member.canonical_name()) {
            return KOTLIN_NAMING.safe_name(alias);
        }
        let simple_name = KOTLIN_NAMING.safe_name(member.simple_name());
        if let Some(enclosing) = member.enclosing_class_name() {
            let enclosing = self.lookup(enclosing);
            return format!("{enclosing}.{simple_name}");
        }
        let shadowed = !member.is_extension()
            && self
                .type_stack
                .iter()
                .any(|scope| scope.functions.iter().any(|f| f == member.simple_name()));
        if shadowed {
            return KOTLIN_NAMING.safe_qualified_name(&member.canonical_name());
        }
        let rendering = match self.imports {
            Some(imports) => imports.member_rendering(member),
            None => {
                self.referenced_members.push(member.clone());
                Rendering::Qualified
            }
        };
        match rendering {
            Rendering::Short => simple_name,
            Rendering::Qualified => KOTLIN_NAMING.safe_qualified_name(&member.canonical_name()),
        }
    }

    fn is_own(&self, class: &ClassName) -> bool {
        class.package() == self.package
            && class
                .simple_names()
                .first()
                .is_some_and(|top| self.own_types.contains(top))
    }

    /// The shortest suffix of `class`'s nesting chain that resolves to it
    /// from the current type scope.
    fn visible_name(&self, class: &ClassName) -> String {
        let names = class.simple_names();
        for start in (0..names.len()).rev() {
            let resolves = self
                .resolve_simple_name(&names[start])
                .is_some_and(|resolved| {
                    resolved.package() == class.package()
                        && resolved.simple_names() == &names[..=start]
                });
            if resolves {
                return names[start..].join(".");
            }
        }
        let top = class.top_level_class_name();
        let shadowed = self
            .resolve_simple_name(&names[0])
            .is_some_and(|resolved| !resolved.same_class(&top));
        if shadowed {
            class.canonical_name()
        } else {
            names.join(".")
        }
    }

    fn resolve_simple_name(&self, simple_name: &str) -> Option<ClassName> {
        for scope in self.type_stack.iter().rev() {
            if scope.nested.iter().any(|n| n == simple_name) {
                let mut names = scope.class_name.simple_names().to_vec();
                names.push(simple_name.to_string());
                return Some(ClassName::unchecked(scope.class_name.package(), names));
            }
        }
        self.type_stack
            .first()
            .filter(|top| top.class_name.simple_name() == simple_name)
            .map(|top| top.class_name.clone())
    }

    /// Enter the body of a named type.
    pub(crate) fn push_type(&mut self, name: &str, spec: &TypeSpec) {
        let class_name = match self.type_stack.last() {
            Some(parent) => {
                let mut names = parent.class_name.simple_names().to_vec();
                names.push(name.to_string());
                ClassName::unchecked(self.package.clone(), names)
            }
            None => ClassName::unchecked(self.package.clone(), [name]),
        };
        let nested = spec
            .types()
            .iter()
            .filter_map(|t| t.name().map(str::to_string))
            .collect();
        let functions = spec
            .functions()
            .iter()
            .filter(|f| !f.is_constructor())
            .map(|f| f.name().to_string())
            .collect();
        self.type_stack.push(TypeScope {
            class_name,
            nested,
            functions,
        });
    }

    pub(crate) fn pop_type(&mut self) {
        self.type_stack.pop();
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Modifiers in declaration order, each followed by a space. Modifiers
    /// in `implicit` are left out.
    pub(crate) fn emit_modifiers(&mut self, modifiers: &BTreeSet<Modifier>, implicit: &[Modifier]) {
        for modifier in modifiers.iter().filter(|m| !implicit.contains(m)) {
            self.emit(modifier.keyword()).emit(" ");
        }
    }

    /// `<in T, reified U : Bound>`; variables with several bounds get theirs
    /// from [`emit_where_block`](Self::emit_where_block).
    pub(crate) fn emit_type_variables(&mut self, variables: &[TypeVariableName]) {
        if variables.is_empty() {
            return;
        }
        self.emit("<");
        for (i, variable) in variables.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            if let Some(variance) = variable.variance() {
                self.emit(variance.keyword()).emit(" ");
            }
            if variable.is_reified() {
                self.emit("reified ");
            }
            self.emit(&KOTLIN_NAMING.safe_name(variable.name()));
            if let [bound] = variable.bounds() {
                self.emit(" : ").emit_type(bound);
            }
        }
        self.emit(">");
    }

    /// ` where T : A, T : B` for every variable with more than one bound.
    pub(crate) fn emit_where_block(&mut self, variables: &[TypeVariableName]) {
        let mut first = true;
        for variable in variables.iter().filter(|v| v.bounds().len() > 1) {
            for bound in variable.bounds() {
                self.emit(if first { " where " } else { ", " });
                self.emit(&KOTLIN_NAMING.safe_name(variable.name()));
                self.emit(" : ").emit_type(bound);
                first = false;
            }
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Top-level class names written so far by a collecting writer.
    pub(crate) fn take_referenced(&mut self) -> Vec<ClassName> {
        std::mem::take(&mut self.referenced)
    }

    /// Member names written so far by a collecting writer.
    pub(crate) fn take_referenced_members(&mut self) -> Vec<MemberName> {
        std::mem::take(&mut self.referenced_members)
    }

    pub fn into_string(self) -> String {
        self.out.finish()
    }
}
