//! Format strings and the code blocks they resolve to.
//!
//! A template mixes plain text with directives:
//!
//! | directive | emits |
//! |-----------|-------|
//! | `%L` | a literal: text, number, `CodeBlock` or anonymous type |
//! | `%S` | a quoted, escaped string literal (`null` for a null argument) |
//! | `%T` | a type name, shortened when it is imported |
//! | `%N` | an identifier, backtick-escaped if it is a keyword |
//! | `%M` | a member name, shortened when it is imported |
//! | `%%` | a literal `%` |
//! | `%>` / `%<` | indent / unindent one level |
//! | `%[` / `%]` | begin / end a statement |
//! | `%W` | a space where the line may wrap |
//!
//! Arguments bind by position (`%L`), by 1-based index (`%2L`) or by name
//! (`%name:L`). All binding errors are reported when the block is built.

use std::fmt;

use indexmap::IndexMap;

use super::{CodeWriter, FunSpec, MemberName, ParameterSpec, PropertySpec, TypeName, TypeSpec};
use crate::error::FormatError;
use crate::options::FormatOptions;

/// Build a [`CodeBlock`] from a template and arguments convertible to [`Arg`].
///
/// ```
/// use ktpoet_codegen::code_block;
/// use ktpoet_codegen::builder::TypeName;
///
/// let block = code_block!("val %N: %T = %S", "greeting", TypeName::string(), "hi").unwrap();
/// assert_eq!(block.to_string(), "val greeting: kotlin.String = \"hi\"");
/// ```
#[macro_export]
macro_rules! code_block {
    ($format:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::builder::Arg> =
            ::std::vec![$($crate::builder::Arg::from($arg)),*];
        $crate::builder::CodeBlock::of($format, args)
    }};
}

/// A template argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// Text: a string, a character or an identifier.
    Text(String),
    /// A number or boolean, already formatted.
    Literal(String),
    /// Kotlin `null`.
    Null,
    Type(TypeName),
    Member(MemberName),
    Code(CodeBlock),
    /// An anonymous type, emitted as an object expression.
    Spec(Box<TypeSpec>),
}

impl Arg {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Literal(_) => "a literal",
            Self::Null => "null",
            Self::Type(_) => "a type",
            Self::Member(_) => "a member",
            Self::Code(_) => "a code block",
            Self::Spec(_) => "a type spec",
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! literal_args {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Self::Literal(value.to_string())
            }
        }
    )*};
}

literal_args!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<TypeName> for Arg {
    fn from(value: TypeName) -> Self {
        Self::Type(value)
    }
}

impl From<super::ClassName> for Arg {
    fn from(value: super::ClassName) -> Self {
        Self::Type(value.into())
    }
}

impl From<super::TypeVariableName> for Arg {
    fn from(value: super::TypeVariableName) -> Self {
        Self::Type(value.into())
    }
}

impl From<super::PrimitiveType> for Arg {
    fn from(value: super::PrimitiveType) -> Self {
        Self::Type(value.into())
    }
}

impl From<MemberName> for Arg {
    fn from(value: MemberName) -> Self {
        Self::Member(value)
    }
}

impl From<CodeBlock> for Arg {
    fn from(value: CodeBlock) -> Self {
        Self::Code(value)
    }
}

impl From<TypeSpec> for Arg {
    fn from(value: TypeSpec) -> Self {
        Self::Spec(Box::new(value))
    }
}

impl From<&PropertySpec> for Arg {
    fn from(value: &PropertySpec) -> Self {
        Self::Text(value.name().to_string())
    }
}

impl From<&ParameterSpec> for Arg {
    fn from(value: &ParameterSpec) -> Self {
        Self::Text(value.name().to_string())
    }
}

impl From<&FunSpec> for Arg {
    fn from(value: &FunSpec) -> Self {
        Self::Text(value.name().to_string())
    }
}

/// One resolved emit step.
#[derive(Debug, Clone)]
pub enum Instruction {
    Text(String),
    /// An identifier, escaped on emission.
    Name(String),
    /// Unquoted string contents, quoted and escaped on emission.
    StringLiteral(String),
    Type(TypeName),
    Member(MemberName),
    AnonymousType(Box<TypeSpec>),
    Indent,
    Unindent,
    BeginStatement,
    EndStatement,
    WrappingSpace,
}

/// An immutable sequence of resolved instructions.
///
/// Two blocks are equal when they render to the same text.
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    instructions: Vec<Instruction>,
}

impl CodeBlock {
    /// Interpret `format` with positional arguments.
    pub fn of(format: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self, FormatError> {
        let args: Vec<Arg> = args.into_iter().collect();
        Ok(Self {
            instructions: interpret(format, &args)?,
        })
    }

    /// Interpret `format` with named arguments (`%name:T`).
    pub fn of_named(format: &str, args: &IndexMap<String, Arg>) -> Result<Self, FormatError> {
        Ok(Self {
            instructions: interpret_named(format, args)?,
        })
    }

    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// Concatenate `blocks`, interpreting `separator` (e.g. `",%W"`) between
    /// each pair.
    pub fn join(
        blocks: impl IntoIterator<Item = CodeBlock>,
        separator: &str,
    ) -> Result<Self, FormatError> {
        let separator = interpret(separator, &[])?;
        let mut instructions = Vec::new();
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                instructions.extend(separator.iter().cloned());
            }
            instructions.extend(block.instructions);
        }
        Ok(Self { instructions })
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn to_builder(&self) -> CodeBlockBuilder {
        CodeBlockBuilder {
            instructions: self.instructions.clone(),
        }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = FormatOptions::default();
        let mut writer = CodeWriter::new(&options);
        writer.emit_code(self);
        f.write_str(&writer.into_string())
    }
}

impl PartialEq for CodeBlock {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for CodeBlock {}

/// Accumulates instructions for a [`CodeBlock`].
#[derive(Debug, Clone, Default)]
pub struct CodeBlockBuilder {
    instructions: Vec<Instruction>,
}

impl CodeBlockBuilder {
    pub fn add(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        let args: Vec<Arg> = args.into_iter().collect();
        self.instructions.extend(interpret(format, &args)?);
        Ok(self)
    }

    pub fn add_named(
        mut self,
        format: &str,
        args: &IndexMap<String, Arg>,
    ) -> Result<Self, FormatError> {
        self.instructions.extend(interpret_named(format, args)?);
        Ok(self)
    }

    pub fn add_code(mut self, code: CodeBlock) -> Self {
        self.instructions.extend(code.instructions);
        self
    }

    /// Add `format` as one statement terminated by a newline. Wrapping
    /// spaces inside it continue one level deeper than the statement.
    pub fn add_statement(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        let args: Vec<Arg> = args.into_iter().collect();
        let body = interpret(format, &args)?;
        self.instructions.push(Instruction::BeginStatement);
        self.instructions.extend(body);
        self.push_text("\n");
        self.instructions.push(Instruction::EndStatement);
        Ok(self)
    }

    /// Open a braced block, e.g. `if (x > 0)` becomes `if (x > 0) {`.
    pub fn begin_control_flow(
        mut self,
        control_flow: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        let args: Vec<Arg> = args.into_iter().collect();
        self.instructions.extend(interpret(control_flow, &args)?);
        let opener = if control_flow.trim_end().ends_with('{') { "\n" } else { " {\n" };
        self.push_text(opener);
        self.instructions.push(Instruction::Indent);
        Ok(self)
    }

    /// Close the current block and open another, e.g. `} else {`.
    pub fn next_control_flow(
        mut self,
        control_flow: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        let args: Vec<Arg> = args.into_iter().collect();
        let flow = interpret(control_flow, &args)?;
        self.instructions.push(Instruction::Unindent);
        self.push_text("} ");
        self.instructions.extend(flow);
        self.push_text(" {\n");
        self.instructions.push(Instruction::Indent);
        Ok(self)
    }

    pub fn end_control_flow(mut self) -> Self {
        self.instructions.push(Instruction::Unindent);
        self.push_text("}\n");
        self
    }

    pub fn indent(mut self) -> Self {
        self.instructions.push(Instruction::Indent);
        self
    }

    pub fn unindent(mut self) -> Self {
        self.instructions.push(Instruction::Unindent);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn build(self) -> CodeBlock {
        CodeBlock {
            instructions: self.instructions,
        }
    }

    /// Append plain text, no directives interpreted.
    pub(crate) fn add_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    fn push_text(&mut self, text: &str) {
        self.instructions.push(Instruction::Text(text.to_string()));
    }
}

// ============================================================================
// Interpreter
// ============================================================================

/// Resolve a template against positional arguments.
pub fn interpret(template: &str, args: &[Arg]) -> Result<Vec<Instruction>, FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = Instructions::default();
    let mut cursor = 0;
    let mut p = 0;

    while p < chars.len() {
        if chars[p] != '%' {
            out.text.push(chars[p]);
            p += 1;
            continue;
        }
        let start = p;
        p += 1;
        let digits_start = p;
        while p < chars.len() && chars[p].is_ascii_digit() {
            p += 1;
        }
        let Some(&directive) = chars.get(p) else {
            return Err(FormatError::Dangling {
                template: template.to_string(),
            });
        };
        let digits: String = chars[digits_start..p].iter().collect();
        p += 1;

        if out.push_marker(directive) {
            if !digits.is_empty() {
                return Err(FormatError::UnexpectedIndex {
                    template: template.to_string(),
                    position: start,
                    directive,
                });
            }
            continue;
        }
        if !matches!(directive, 'L' | 'S' | 'T' | 'N' | 'M') {
            return Err(FormatError::UnknownDirective {
                template: template.to_string(),
                position: start,
                directive,
            });
        }

        let index = if digits.is_empty() {
            cursor += 1;
            cursor - 1
        } else {
            let explicit = parse_index(template, &digits, args.len())?;
            if explicit > cursor {
                return Err(FormatError::SkipsAhead {
                    template: template.to_string(),
                    index: explicit,
                    next: cursor,
                });
            }
            if explicit == cursor {
                cursor += 1;
            }
            explicit
        };
        let arg = args.get(index).ok_or_else(|| FormatError::MissingArgument {
            template: template.to_string(),
            index,
            received: args.len(),
        })?;
        out.push_argument(template, directive, index, arg)?;
    }

    if cursor < args.len() {
        return Err(FormatError::UnusedArguments {
            template: template.to_string(),
            used: cursor,
            received: args.len(),
        });
    }
    Ok(out.finish())
}

/// Resolve a template whose argument directives are all named
/// (`%name:L`). Arguments the template never mentions are allowed.
pub fn interpret_named(
    template: &str,
    args: &IndexMap<String, Arg>,
) -> Result<Vec<Instruction>, FormatError> {
    if let Some(name) = args.keys().find(|name| !is_argument_name(name)) {
        return Err(FormatError::InvalidArgumentName { name: name.clone() });
    }

    let chars: Vec<char> = template.chars().collect();
    let mut out = Instructions::default();
    let mut p = 0;

    while p < chars.len() {
        if chars[p] != '%' {
            out.text.push(chars[p]);
            p += 1;
            continue;
        }
        let start = p;
        p += 1;
        let Some(&next) = chars.get(p) else {
            return Err(FormatError::Dangling {
                template: template.to_string(),
            });
        };
        if out.push_marker(next) {
            p += 1;
            continue;
        }

        let name_end = if next.is_ascii_lowercase() {
            chars[p..]
                .iter()
                .position(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
                .map_or(chars.len(), |offset| p + offset)
        } else {
            p
        };
        let directive = chars.get(name_end + 1).copied();
        if name_end == p || chars.get(name_end) != Some(&':') {
            return Err(FormatError::UnknownDirective {
                template: template.to_string(),
                position: start,
                directive: next,
            });
        }
        let Some(directive) = directive.filter(|d| matches!(d, 'L' | 'S' | 'T' | 'N' | 'M')) else {
            return Err(FormatError::UnknownDirective {
                template: template.to_string(),
                position: start,
                directive: ':',
            });
        };

        let name: String = chars[p..name_end].iter().collect();
        let Some((index, _, arg)) = args.get_full(&name) else {
            return Err(FormatError::MissingNamedArgument {
                template: template.to_string(),
                name,
            });
        };
        out.push_argument(template, directive, index, arg)?;
        p = name_end + 2;
    }

    Ok(out.finish())
}

fn parse_index(template: &str, digits: &str, received: usize) -> Result<usize, FormatError> {
    match digits.parse::<usize>() {
        Ok(0) => Err(FormatError::ZeroIndex {
            template: template.to_string(),
        }),
        Ok(n) => Ok(n - 1),
        // More digits than fit in usize: certainly past the last argument.
        Err(_) => Err(FormatError::MissingArgument {
            template: template.to_string(),
            index: usize::MAX,
            received,
        }),
    }
}

fn is_argument_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Instruction list with pending text merged into single runs.
#[derive(Default)]
struct Instructions {
    list: Vec<Instruction>,
    text: String,
}

impl Instructions {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.list.push(Instruction::Text(std::mem::take(&mut self.text)));
        }
    }

    fn push(&mut self, instruction: Instruction) {
        self.flush_text();
        self.list.push(instruction);
    }

    /// Push an argument-free directive. Returns false if `directive` takes
    /// an argument or is unknown.
    fn push_marker(&mut self, directive: char) -> bool {
        let instruction = match directive {
            '%' => {
                self.text.push('%');
                return true;
            }
            '>' => Instruction::Indent,
            '<' => Instruction::Unindent,
            '[' => Instruction::BeginStatement,
            ']' => Instruction::EndStatement,
            'W' => Instruction::WrappingSpace,
            _ => return false,
        };
        self.push(instruction);
        true
    }

    fn push_argument(
        &mut self,
        template: &str,
        directive: char,
        index: usize,
        arg: &Arg,
    ) -> Result<(), FormatError> {
        let wrong_kind = |expected: &'static str| FormatError::ArgumentKind {
            template: template.to_string(),
            index,
            directive,
            expected,
            found: arg.kind(),
        };

        match (directive, arg) {
            ('L', Arg::Text(value) | Arg::Literal(value)) => self.text.push_str(value),
            ('L' | 'S', Arg::Null) => self.text.push_str("null"),
            ('L', Arg::Type(type_name)) => self.text.push_str(&type_name.canonical()),
            ('L', Arg::Member(member)) => self.text.push_str(&member.canonical_name()),
            ('L', Arg::Code(code)) => {
                self.flush_text();
                self.list.extend(code.instructions.iter().cloned());
            }
            ('L', Arg::Spec(spec)) => self.push(Instruction::AnonymousType(spec.clone())),
            ('S', Arg::Text(value) | Arg::Literal(value)) => {
                self.push(Instruction::StringLiteral(value.clone()))
            }
            ('S', _) => return Err(wrong_kind("text")),
            ('T', Arg::Type(type_name)) => self.push(Instruction::Type(type_name.clone())),
            ('T', _) => return Err(wrong_kind("a type")),
            ('N', Arg::Text(name)) => self.push(Instruction::Name(name.clone())),
            ('N', _) => return Err(wrong_kind("a name")),
            ('M', Arg::Member(member)) => self.push(Instruction::Member(member.clone())),
            ('M', _) => return Err(wrong_kind("a member")),
            _ => unreachable!("argument directives are L, S, T, N and M"),
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<Instruction> {
        self.flush_text();
        self.list
    }
}

// ============================================================================
// String literals
// ============================================================================

/// Quote and escape `value` as a Kotlin string literal.
///
/// Backslash, quote, `$` and the common control characters get backslash
/// escapes. Other control characters and all non-ASCII characters become
/// `\uXXXX` UTF-16 units, both halves of a surrogate pair together.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '$' => out.push_str("\\$"),
            c if c.is_ascii_control() || !c.is_ascii() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ClassName;

    fn render(block: &CodeBlock) -> String {
        block.to_string()
    }

    #[test]
    fn test_relative_arguments() {
        let block = code_block!("%L + %L = %L", 1, 2, 3).unwrap();
        assert_eq!(render(&block), "1 + 2 = 3");
    }

    #[test]
    fn test_indexed_arguments_reuse_earlier() {
        let block = code_block!("%1L %2L %1L", "a", "b").unwrap();
        assert_eq!(render(&block), "a b a");
    }

    #[test]
    fn test_indexed_argument_skips_ahead() {
        let err = code_block!("%2L", "a", "b").unwrap_err();
        assert_eq!(
            err,
            FormatError::SkipsAhead {
                template: "%2L".into(),
                index: 1,
                next: 0,
            }
        );
    }

    #[test]
    fn test_missing_argument_reports_index() {
        let err = code_block!("%L and %L", "only").unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                template: "%L and %L".into(),
                index: 1,
                received: 1,
            }
        );
    }

    #[test]
    fn test_oversized_index_reports_received_count() {
        let err = code_block!("%99999999999999999999999L", "a", "b").unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                template: "%99999999999999999999999L".into(),
                index: usize::MAX,
                received: 2,
            }
        );
    }

    #[test]
    fn test_unused_arguments() {
        let err = code_block!("%L", 1, 2).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnusedArguments {
                used: 1,
                received: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_and_dangling() {
        assert!(matches!(
            code_block!("100%").unwrap_err(),
            FormatError::Dangling { .. }
        ));
        assert!(matches!(
            code_block!("%Q").unwrap_err(),
            FormatError::UnknownDirective { directive: 'Q', position: 0, .. }
        ));
        assert!(matches!(
            code_block!("%1%").unwrap_err(),
            FormatError::UnexpectedIndex { directive: '%', .. }
        ));
        assert!(matches!(
            code_block!("%0L", 1).unwrap_err(),
            FormatError::ZeroIndex { .. }
        ));
    }

    #[test]
    fn test_percent_and_markers() {
        let block = code_block!("100%% done").unwrap();
        assert_eq!(render(&block), "100% done");

        let block = CodeBlock::builder()
            .add("if (x) {\n%>y()\n%<}\n", Vec::new())
            .unwrap()
            .build();
        assert_eq!(render(&block), "if (x) {\n  y()\n}\n");
    }

    #[test]
    fn test_argument_kinds() {
        let block = code_block!("%S", "x").unwrap();
        assert!(matches!(block.instructions(), [Instruction::StringLiteral(s)] if s == "x"));

        let inner = code_block!("a").unwrap();
        assert!(matches!(
            code_block!("%S", inner.clone()).unwrap_err(),
            FormatError::ArgumentKind { directive: 'S', found: "a code block", .. }
        ));
        assert!(matches!(
            code_block!("%N", inner.clone()).unwrap_err(),
            FormatError::ArgumentKind { directive: 'N', .. }
        ));
        assert!(matches!(
            code_block!("%T", "kotlin.String").unwrap_err(),
            FormatError::ArgumentKind { directive: 'T', expected: "a type", .. }
        ));
        assert_eq!(render(&code_block!("f(%L)", inner).unwrap()), "f(a)");
    }

    #[test]
    fn test_null_arguments() {
        let block = code_block!("%S ?: %L", None::<&str>, None::<i32>).unwrap();
        assert_eq!(render(&block), "null ?: null");
    }

    #[test]
    fn test_name_escapes_keywords() {
        let block = code_block!("val %N = %N", "in", "name").unwrap();
        assert_eq!(render(&block), "val `in` = name");
    }

    #[test]
    fn test_type_renders_qualified_outside_a_file() {
        let list = ClassName::list().parameterized_by([TypeName::string()]).unwrap();
        let block = code_block!("val xs: %T", list).unwrap();
        assert_eq!(
            render(&block),
            "val xs: kotlin.collections.List<kotlin.String>"
        );
    }

    #[test]
    fn test_member_renders_qualified_outside_a_file() {
        let list_of = MemberName::new("kotlin.collections", "listOf").unwrap();
        let load = ClassName::new("app", ["Config"]).unwrap().member("load").unwrap();
        let block = code_block!("%M(%M())", list_of.clone(), load).unwrap();
        assert_eq!(render(&block), "kotlin.collections.listOf(app.Config.load())");

        assert_eq!(
            render(&code_block!("%L", list_of).unwrap()),
            "kotlin.collections.listOf"
        );
        assert!(matches!(
            code_block!("%M", "listOf").unwrap_err(),
            FormatError::ArgumentKind { directive: 'M', expected: "a member", .. }
        ));
    }

    #[test]
    fn test_named_arguments() {
        let mut args = IndexMap::new();
        args.insert("food".to_string(), Arg::from("tacos"));
        args.insert("count".to_string(), Arg::from(3));
        args.insert("unused".to_string(), Arg::from(true));
        let block = CodeBlock::of_named("I ate %count:L %food:L, 100%%", &args).unwrap();
        assert_eq!(render(&block), "I ate 3 tacos, 100%");
    }

    #[test]
    fn test_named_argument_errors() {
        let mut args = IndexMap::new();
        args.insert("Food".to_string(), Arg::from("tacos"));
        assert_eq!(
            CodeBlock::of_named("%Food:L", &args).unwrap_err(),
            FormatError::InvalidArgumentName {
                name: "Food".into()
            }
        );

        let args = IndexMap::new();
        assert_eq!(
            CodeBlock::of_named("%food:L", &args).unwrap_err(),
            FormatError::MissingNamedArgument {
                template: "%food:L".into(),
                name: "food".into(),
            }
        );
        assert!(matches!(
            CodeBlock::of_named("%food", &args).unwrap_err(),
            FormatError::UnknownDirective { .. }
        ));
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(string_literal("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(string_literal("$name"), r#""\$name""#);
        assert_eq!(string_literal("\n\r\t\u{8}"), r#""\n\r\t\b""#);
        assert_eq!(string_literal("\u{0}\u{7f}"), r#""\u0000\u007f""#);
        assert_eq!(string_literal("é"), r#""\u00e9""#);
        assert_eq!(string_literal("😀"), r#""\ud83d\ude00""#);
        assert_eq!(string_literal("it's"), r#""it's""#);
    }

    #[test]
    fn test_control_flow() {
        let block = CodeBlock::builder()
            .begin_control_flow("if (%N > 0)", [Arg::from("count")])
            .unwrap()
            .add_statement("return %S", [Arg::from("positive")])
            .unwrap()
            .next_control_flow("else", Vec::new())
            .unwrap()
            .add_statement("return %S", [Arg::from("other")])
            .unwrap()
            .end_control_flow()
            .build();
        assert_eq!(
            render(&block),
            "if (count > 0) {\n  return \"positive\"\n} else {\n  return \"other\"\n}\n"
        );
    }

    #[test]
    fn test_join() {
        let blocks = ["a", "b", "c"].map(|s| code_block!("%L", s).unwrap());
        let joined = CodeBlock::join(blocks, ", ").unwrap();
        assert_eq!(render(&joined), "a, b, c");
        assert!(CodeBlock::join(Vec::new(), ", ").unwrap().is_empty());
    }

    #[test]
    fn test_equality_by_rendering() {
        assert_eq!(code_block!("%L", 1).unwrap(), code_block!("1").unwrap());
    }
}
