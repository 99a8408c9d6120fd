//! Walks a spec tree and drives a [`CodeWriter`].
//!
//! The same walk serves both the import-collecting pass and the rendering
//! pass, so both see exactly the same type references.

use std::collections::{BTreeSet, HashSet};

use super::Import;
use crate::builder::{
    AnnotationSpec, CodeBlock, CodeWriter, FileSpec, FunSpec, Modifier, ParameterSpec, PropertySpec,
    TypeAliasSpec, TypeKind, TypeName, TypeSpec,
};
use crate::language::KOTLIN_NAMING;
use crate::options::FormatOptions;

/// Render with a standalone writer, outside any file.
pub(crate) fn render_detached(emit: impl FnOnce(&mut CodeWriter<'_>)) -> String {
    let options = FormatOptions::default();
    let mut writer = CodeWriter::new(&options);
    emit(&mut writer);
    writer.into_string()
}

/// Comment, package line, imports, type aliases, then each top-level type.
pub(crate) fn emit_file(w: &mut CodeWriter<'_>, file: &FileSpec, imports: &[Import]) {
    w.emit_comment(file.comment());

    if !file.package().is_empty() {
        w.blank_line();
        let package = KOTLIN_NAMING.safe_qualified_name(file.package());
        w.emit("package ").emit(&package).emit("\n");
    }

    if !imports.is_empty() {
        w.blank_line();
        for import in imports {
            w.emit("import ").emit(&import.to_string()).emit("\n");
        }
    }

    for type_alias in file.type_aliases() {
        w.blank_line();
        emit_type_alias(w, type_alias);
    }

    for type_spec in file.types() {
        w.blank_line();
        emit_type(w, type_spec);
    }
}

/// A type declaration, or an object expression for an anonymous type.
pub(crate) fn emit_type(w: &mut CodeWriter<'_>, spec: &TypeSpec) {
    match spec.name() {
        Some(name) => emit_named_type(w, name, spec),
        None => emit_anonymous_type(w, spec),
    }
}

/// `typealias Name<T> = Type` with its doc and annotations.
pub(crate) fn emit_type_alias(w: &mut CodeWriter<'_>, spec: &TypeAliasSpec) {
    w.emit_doc(spec.doc());
    for annotation in spec.annotations() {
        emit_annotation(w, annotation);
        w.emit("\n");
    }
    w.emit_modifiers(spec.modifiers(), &[Modifier::Public]);
    w.emit("typealias ").emit(&KOTLIN_NAMING.safe_name(spec.name()));
    w.emit_type_variables(spec.type_variables());
    w.emit(" = ").emit_type(spec.type_name()).emit("\n");
}

fn emit_named_type(w: &mut CodeWriter<'_>, name: &str, spec: &TypeSpec) {
    let statements = w.suspend_statements();

    w.emit_doc(&type_doc(spec));
    for annotation in spec.annotations() {
        emit_annotation(w, annotation);
        w.emit("\n");
    }
    w.emit_modifiers(spec.modifiers(), &[Modifier::Public]);
    w.emit(spec.kind().keyword())
        .emit(" ")
        .emit(&KOTLIN_NAMING.safe_name(name));
    w.emit_type_variables(spec.type_variables());

    if spec.kind() == TypeKind::Annotation {
        emit_annotation_members(w, spec);
    } else if let Some(constructor) = spec.primary_constructor() {
        emit_primary_constructor(w, spec, constructor);
    }
    emit_supertypes(w, spec);
    w.emit_where_block(spec.type_variables());

    let members = Members::of(spec);
    if members.is_empty() {
        w.emit("\n");
    } else {
        w.emit(" {\n");
        w.push_type(name, spec);
        w.indent(1);
        members.emit(w, spec);
        w.unindent(1);
        w.pop_type();
        w.emit("}\n");
    }

    w.resume_statements(statements);
}

/// The type's KDoc followed by an `@property` tag for every property folded
/// into the primary constructor that carries its own doc.
fn type_doc(spec: &TypeSpec) -> CodeBlock {
    let Some(constructor) = spec.primary_constructor() else {
        return spec.doc().clone();
    };
    let documented: Vec<&PropertySpec> = constructor
        .parameters()
        .iter()
        .filter_map(|p| constructor_property(spec, p))
        .filter(|property| !property.doc().is_empty())
        .collect();
    if documented.is_empty() {
        return spec.doc().clone();
    }

    let mut doc = spec.doc().to_builder();
    if !spec.doc().is_empty() {
        let ended = spec.doc().to_string().ends_with('\n');
        doc = doc.add_text(if ended { "\n" } else { "\n\n" });
    }
    for property in documented {
        let tag = format!("@property {} ", KOTLIN_NAMING.safe_name(property.name()));
        doc = doc.add_text(&tag).add_code(property.doc().clone());
        if !property.doc().to_string().ends_with('\n') {
            doc = doc.add_text("\n");
        }
    }
    doc.build()
}

/// `object : Super(args) { ... }` without a trailing newline, so it can sit
/// inside an expression.
pub(crate) fn emit_anonymous_type(w: &mut CodeWriter<'_>, spec: &TypeSpec) {
    let statements = w.suspend_statements();

    w.emit("object");
    if let Some(superclass) = spec.superclass() {
        w.emit(" : ").emit_type(superclass);
        emit_arguments(w, spec.superclass_constructor_args());
    } else if let Some(superinterface) = spec.superinterfaces().first() {
        w.emit(" : ").emit_type(superinterface);
    }
    w.emit(" {\n");
    w.indent(1);
    Members::of(spec).emit(w, spec);
    w.unindent(1);
    w.emit("}");

    w.resume_statements(statements);
}

fn emit_annotation_members(w: &mut CodeWriter<'_>, spec: &TypeSpec) {
    if spec.functions().is_empty() {
        return;
    }
    w.emit("(");
    for (i, member) in spec.functions().iter().enumerate() {
        if i > 0 {
            w.emit(",").wrapping_space();
        }
        w.emit("val ").emit(&KOTLIN_NAMING.safe_name(member.name()));
        if let Some(return_type) = member.return_type() {
            w.emit(": ").emit_type(return_type);
        }
        if let Some(default) = member.default_value() {
            w.emit(" = ").emit_code(default);
        }
    }
    w.emit(")");
}

fn emit_primary_constructor(w: &mut CodeWriter<'_>, spec: &TypeSpec, constructor: &FunSpec) {
    let explicit = !constructor.annotations().is_empty()
        || constructor.modifiers().iter().any(|m| *m != Modifier::Public);
    if explicit {
        w.emit(" ");
        for annotation in constructor.annotations() {
            emit_annotation(w, annotation);
            w.emit(" ");
        }
        w.emit_modifiers(constructor.modifiers(), &[Modifier::Public]);
        w.emit("constructor");
    }
    emit_parameter_list(w, constructor.parameters(), |w, parameter| {
        match constructor_property(spec, parameter) {
            Some(property) => emit_property_parameter(w, parameter, property),
            None => emit_parameter(w, parameter),
        }
    });
}

/// The property declared through a primary constructor parameter: same
/// name and type, initialized from the parameter.
fn constructor_property<'s>(
    spec: &'s TypeSpec,
    parameter: &ParameterSpec,
) -> Option<&'s PropertySpec> {
    spec.properties().iter().find(|property| {
        !property.is_static()
            && property.name() == parameter.name()
            && property.type_name() == parameter.type_name()
            && property
                .initializer()
                .is_some_and(|init| init.to_string() == KOTLIN_NAMING.safe_name(parameter.name()))
    })
}

fn emit_property_parameter(
    w: &mut CodeWriter<'_>,
    parameter: &ParameterSpec,
    property: &PropertySpec,
) {
    for annotation in property.annotations().iter().chain(parameter.annotations()) {
        emit_annotation(w, annotation);
        w.emit(" ");
    }
    let modifiers: BTreeSet<Modifier> = property
        .modifiers()
        .union(parameter.modifiers())
        .copied()
        .collect();
    w.emit_modifiers(&modifiers, &[Modifier::Public]);
    w.emit(if property.is_mutable() { "var " } else { "val " });
    w.emit(&KOTLIN_NAMING.safe_name(parameter.name()))
        .emit(": ")
        .emit_type(parameter.type_name());
    if let Some(default) = parameter.default_value() {
        w.emit(" = ").emit_code(default);
    }
}

fn emit_supertypes(w: &mut CodeWriter<'_>, spec: &TypeSpec) {
    let mut separator = " : ";
    if let Some(superclass) = spec.superclass() {
        w.emit(separator).emit_type(superclass);
        let has_secondary = spec.functions().iter().any(FunSpec::is_constructor);
        if spec.primary_constructor().is_some() || !has_secondary {
            emit_arguments(w, spec.superclass_constructor_args());
        }
        separator = ", ";
    }
    for superinterface in spec.superinterfaces() {
        w.emit(separator).emit_type(superinterface);
        separator = ", ";
    }
}

/// `(a, b)`, always with parentheses.
fn emit_arguments(w: &mut CodeWriter<'_>, arguments: &[CodeBlock]) {
    w.emit("(");
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            w.emit(", ");
        }
        w.emit_code(argument);
    }
    w.emit(")");
}

fn emit_parameter_list(
    w: &mut CodeWriter<'_>,
    parameters: &[ParameterSpec],
    mut emit_one: impl FnMut(&mut CodeWriter<'_>, &ParameterSpec),
) {
    w.emit("(");
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            w.emit(",").wrapping_space();
        }
        emit_one(w, parameter);
    }
    w.emit(")");
}

// ============================================================================
// Members
// ============================================================================

/// A type's members, grouped in emission order.
struct Members<'s> {
    constants: Vec<(&'s str, &'s TypeSpec)>,
    /// Hosted in a companion object; empty for objects, which own their
    /// statics directly.
    statics: Vec<&'s PropertySpec>,
    static_block: Option<&'s CodeBlock>,
    properties: Vec<&'s PropertySpec>,
    initializers: Vec<&'s CodeBlock>,
    constructors: Vec<&'s FunSpec>,
    functions: Vec<&'s FunSpec>,
    types: &'s [TypeSpec],
}

impl<'s> Members<'s> {
    fn of(spec: &'s TypeSpec) -> Self {
        let companion = spec.kind() != TypeKind::Object && !spec.is_anonymous();
        let declared_inline: HashSet<&str> = match spec.primary_constructor() {
            Some(constructor) => constructor
                .parameters()
                .iter()
                .filter_map(|p| constructor_property(spec, p))
                .map(PropertySpec::name)
                .collect(),
            None => HashSet::new(),
        };

        let mut members = Self {
            constants: spec
                .enum_constants()
                .iter()
                .map(|(name, body)| (name.as_str(), body))
                .collect(),
            statics: Vec::new(),
            static_block: None,
            properties: Vec::new(),
            initializers: Vec::new(),
            constructors: Vec::new(),
            functions: Vec::new(),
            types: spec.types(),
        };

        let (statics, instance): (Vec<_>, Vec<_>) =
            spec.properties().iter().partition(|p| p.is_static());
        let instance = instance
            .into_iter()
            .filter(|p| !declared_inline.contains(p.name()));
        if companion {
            members.statics = statics;
            members.properties = instance.collect();
        } else {
            members.properties = statics.into_iter().chain(instance).collect();
        }

        let static_block = Some(spec.static_block()).filter(|b| !b.is_empty());
        if companion {
            members.static_block = static_block;
        } else {
            members.initializers.extend(static_block);
        }
        let primary_body = spec.primary_constructor().map(FunSpec::body);
        members.initializers.extend(
            primary_body
                .into_iter()
                .chain([spec.initializer_block()])
                .filter(|b| !b.is_empty()),
        );

        if spec.kind() != TypeKind::Annotation {
            let (constructors, functions): (Vec<_>, Vec<_>) =
                spec.functions().iter().partition(|f| f.is_constructor());
            members.constructors = constructors;
            members.functions = functions;
        }
        members
    }

    fn is_empty(&self) -> bool {
        self.constants.is_empty() && self.after_constants_is_empty()
    }

    fn after_constants_is_empty(&self) -> bool {
        self.statics.is_empty()
            && self.static_block.is_none()
            && self.properties.is_empty()
            && self.initializers.is_empty()
            && self.constructors.is_empty()
            && self.functions.is_empty()
            && self.types.is_empty()
    }

    /// Write the groups, a blank line between any two.
    fn emit(&self, w: &mut CodeWriter<'_>, spec: &TypeSpec) {
        let mut separate = false;
        let mut next_group = |w: &mut CodeWriter<'_>| {
            if separate {
                w.blank_line();
            }
            separate = true;
        };

        if !self.constants.is_empty() {
            next_group(w);
            for (i, (name, body)) in self.constants.iter().enumerate() {
                if i > 0 {
                    w.emit(",\n");
                }
                emit_enum_constant(w, name, body);
            }
            w.emit(if self.after_constants_is_empty() { "\n" } else { ";\n" });
        }

        if !self.statics.is_empty() || self.static_block.is_some() {
            next_group(w);
            w.emit("companion object {\n").indent(1);
            for property in &self.statics {
                emit_property(w, property);
            }
            if let Some(block) = self.static_block {
                if !self.statics.is_empty() {
                    w.blank_line();
                }
                emit_initializer(w, block);
            }
            w.unindent(1).emit("}\n");
        }

        if !self.properties.is_empty() {
            next_group(w);
            for property in &self.properties {
                emit_property(w, property);
            }
        }

        if !self.initializers.is_empty() {
            next_group(w);
            let block = CodeBlock::builder();
            let block = self
                .initializers
                .iter()
                .fold(block, |block, code| block.add_code((*code).clone()))
                .build();
            emit_initializer(w, &block);
        }

        for constructor in &self.constructors {
            next_group(w);
            emit_function(w, constructor, Some(spec));
        }

        for function in &self.functions {
            next_group(w);
            emit_function(w, function, Some(spec));
        }

        for nested in self.types {
            next_group(w);
            emit_type(w, nested);
        }
    }
}

fn emit_initializer(w: &mut CodeWriter<'_>, code: &CodeBlock) {
    w.emit("init {\n").indent(1);
    w.emit_code(code);
    w.ensure_newline();
    w.unindent(1).emit("}\n");
}

fn emit_enum_constant(w: &mut CodeWriter<'_>, name: &str, body: &TypeSpec) {
    w.emit_doc(body.doc());
    for annotation in body.annotations() {
        emit_annotation(w, annotation);
        w.emit("\n");
    }
    w.emit(&KOTLIN_NAMING.safe_name(name));
    if !body.superclass_constructor_args().is_empty() {
        emit_arguments(w, body.superclass_constructor_args());
    }
    let members = Members::of(body);
    if !members.is_empty() {
        w.emit(" {\n").indent(1);
        members.emit(w, body);
        w.unindent(1).emit("}");
    }
}

// ============================================================================
// Functions, properties, parameters, annotations
// ============================================================================

/// A function or secondary constructor. Members of an interface are
/// implicitly abstract when they have no body.
pub(crate) fn emit_function(w: &mut CodeWriter<'_>, fun: &FunSpec, enclosing: Option<&TypeSpec>) {
    let in_interface = enclosing.is_some_and(|t| t.kind() == TypeKind::Interface);

    w.emit_doc(fun.doc());
    for annotation in fun.annotations() {
        emit_annotation(w, annotation);
        w.emit("\n");
    }
    let implicit: &[Modifier] = if in_interface {
        &[Modifier::Public, Modifier::Abstract]
    } else {
        &[Modifier::Public]
    };
    w.emit_modifiers(fun.modifiers(), implicit);

    if fun.is_constructor() {
        w.emit("constructor");
    } else {
        w.emit("fun ");
        if !fun.type_variables().is_empty() {
            w.emit_type_variables(fun.type_variables());
            w.emit(" ");
        }
        if let Some(receiver) = fun.receiver() {
            w.emit_type(receiver).emit(".");
        }
        w.emit(&KOTLIN_NAMING.safe_name(fun.name()));
    }
    emit_parameter_list(w, fun.parameters(), emit_parameter);

    if let Some(return_type) = fun.return_type().filter(|t| !t.is_unit()) {
        w.emit(": ").emit_type(return_type);
    }
    if let Some(delegation) = fun.delegation() {
        w.emit(" : ").emit(delegation.keyword());
        emit_arguments(w, delegation.arguments());
    }
    w.emit_where_block(fun.type_variables());

    let declared_only = [Modifier::Abstract, Modifier::Expect, Modifier::External]
        .iter()
        .any(|m| fun.modifiers().contains(m));
    let bodyless = declared_only || (!fun.has_body() && (in_interface || fun.is_constructor()));
    if bodyless {
        w.emit("\n");
        return;
    }

    w.emit(" {\n").indent(1);
    w.emit_code(fun.body());
    w.ensure_newline();
    w.unindent(1).emit("}\n");
}

/// `val name: Type = initializer` on its own line.
pub(crate) fn emit_property(w: &mut CodeWriter<'_>, property: &PropertySpec) {
    w.emit_doc(property.doc());
    for annotation in property.annotations() {
        emit_annotation(w, annotation);
        w.emit("\n");
    }
    w.begin_statement();
    w.emit_modifiers(property.modifiers(), &[Modifier::Public]);
    w.emit(if property.is_mutable() { "var " } else { "val " });
    w.emit(&KOTLIN_NAMING.safe_name(property.name()))
        .emit(": ")
        .emit_type(property.type_name());
    if let Some(initializer) = property.initializer() {
        w.emit(" = ").emit_code(initializer);
    }
    w.ensure_newline();
    w.end_statement();
}

pub(crate) fn emit_parameter(w: &mut CodeWriter<'_>, parameter: &ParameterSpec) {
    for annotation in parameter.annotations() {
        emit_annotation(w, annotation);
        w.emit(" ");
    }
    w.emit_modifiers(parameter.modifiers(), &[]);
    w.emit(&KOTLIN_NAMING.safe_name(parameter.name()))
        .emit(": ")
        .emit_type(parameter.type_name());
    if let Some(default) = parameter.default_value() {
        w.emit(" = ").emit_code(default);
    }
}

/// `@Type`, `@Type(value)` or `@Type(a = x, b = y)`, without a trailing
/// separator.
pub(crate) fn emit_annotation(w: &mut CodeWriter<'_>, annotation: &AnnotationSpec) {
    w.emit("@")
        .emit_type(&TypeName::Declared(annotation.type_name().clone()));

    let members = annotation.members();
    if members.is_empty() {
        return;
    }
    w.emit("(");
    match members.first() {
        Some((name, value)) if members.len() == 1 && name == "value" => {
            w.emit_code(value);
        }
        _ => {
            for (i, (name, value)) in members.iter().enumerate() {
                if i > 0 {
                    w.emit(",").wrapping_space();
                }
                w.emit(&KOTLIN_NAMING.safe_name(name)).emit(" = ");
                w.emit_code(value);
            }
        }
    }
    w.emit(")");
}
