//! Type declarations and their members.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;

use super::code_block::{Arg, CodeBlock, CodeBlockBuilder};
use super::{ClassName, FunSpec, Modifier, TypeName, TypeVariableName};
use crate::error::{FormatError, SpecError};
use crate::generation::emitter;
use crate::language::is_identifier;

/// What a [`TypeSpec`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Object,
}

impl TypeKind {
    /// Declaration keyword, e.g. `enum class`.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum class",
            Self::Annotation => "annotation class",
            Self::Object => "object",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
            Self::Object => "object",
        }
    }
}

/// A class, interface, enum, annotation or object declaration. Without a
/// name it is an anonymous object expression or an enum constant body.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    kind: TypeKind,
    name: Option<String>,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariableName>,
    superclass: Option<TypeName>,
    superclass_constructor_args: Vec<CodeBlock>,
    superinterfaces: Vec<TypeName>,
    enum_constants: IndexMap<String, TypeSpec>,
    properties: Vec<PropertySpec>,
    primary_constructor: Option<FunSpec>,
    static_block: CodeBlock,
    initializer_block: CodeBlock,
    functions: Vec<FunSpec>,
    types: Vec<TypeSpec>,
}

impl TypeSpec {
    pub fn class_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Class, Some(name.into()))
    }

    pub fn interface_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Interface, Some(name.into()))
    }

    pub fn enum_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Enum, Some(name.into()))
    }

    pub fn annotation_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Annotation, Some(name.into()))
    }

    pub fn object_builder(name: impl Into<String>) -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Object, Some(name.into()))
    }

    /// An object expression, or the body of an enum constant.
    pub fn anonymous_builder() -> TypeSpecBuilder {
        TypeSpecBuilder::new(TypeKind::Class, None)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The declared name; `None` for anonymous types.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    pub fn doc(&self) -> &CodeBlock {
        &self.doc
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn type_variables(&self) -> &[TypeVariableName] {
        &self.type_variables
    }

    pub fn superclass(&self) -> Option<&TypeName> {
        self.superclass.as_ref()
    }

    pub fn superclass_constructor_args(&self) -> &[CodeBlock] {
        &self.superclass_constructor_args
    }

    pub fn superinterfaces(&self) -> &[TypeName] {
        &self.superinterfaces
    }

    /// Enum constants in declaration order, each with its (possibly empty)
    /// anonymous body.
    pub fn enum_constants(&self) -> &IndexMap<String, TypeSpec> {
        &self.enum_constants
    }

    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    pub fn primary_constructor(&self) -> Option<&FunSpec> {
        self.primary_constructor.as_ref()
    }

    /// Code run once per class, emitted in the companion object.
    pub fn static_block(&self) -> &CodeBlock {
        &self.static_block
    }

    /// Code run per instance, emitted as `init { }`.
    pub fn initializer_block(&self) -> &CodeBlock {
        &self.initializer_block
    }

    pub fn functions(&self) -> &[FunSpec] {
        &self.functions
    }

    /// Nested types.
    pub fn types(&self) -> &[TypeSpec] {
        &self.types
    }

    pub fn to_builder(&self) -> TypeSpecBuilder {
        TypeSpecBuilder {
            kind: self.kind,
            name: self.name.clone(),
            doc: self.doc.to_builder(),
            annotations: self.annotations.clone(),
            modifiers: self.modifiers.clone(),
            type_variables: self.type_variables.clone(),
            superclass: self.superclass.clone(),
            superclass_constructor_args: self.superclass_constructor_args.clone(),
            superinterfaces: self.superinterfaces.clone(),
            enum_constants: self.enum_constants.clone(),
            duplicate_constant: None,
            properties: self.properties.clone(),
            primary_constructor: self.primary_constructor.clone(),
            static_block: self.static_block.to_builder(),
            initializer_block: self.initializer_block.to_builder(),
            functions: self.functions.clone(),
            types: self.types.clone(),
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emitter::render_detached(|w| emitter::emit_type(w, self)))
    }
}

/// Builder for [`TypeSpec`].
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    kind: TypeKind,
    name: Option<String>,
    doc: CodeBlockBuilder,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariableName>,
    superclass: Option<TypeName>,
    superclass_constructor_args: Vec<CodeBlock>,
    superinterfaces: Vec<TypeName>,
    enum_constants: IndexMap<String, TypeSpec>,
    duplicate_constant: Option<String>,
    properties: Vec<PropertySpec>,
    primary_constructor: Option<FunSpec>,
    static_block: CodeBlockBuilder,
    initializer_block: CodeBlockBuilder,
    functions: Vec<FunSpec>,
    types: Vec<TypeSpec>,
}

impl TypeSpecBuilder {
    fn new(kind: TypeKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            doc: CodeBlockBuilder::default(),
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            type_variables: Vec::new(),
            superclass: None,
            superclass_constructor_args: Vec::new(),
            superinterfaces: Vec::new(),
            enum_constants: IndexMap::new(),
            duplicate_constant: None,
            properties: Vec::new(),
            primary_constructor: None,
            static_block: CodeBlockBuilder::default(),
            initializer_block: CodeBlockBuilder::default(),
            functions: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Append to the KDoc.
    pub fn add_doc(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.doc = self.doc.add(format, args)?;
        Ok(self)
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn add_type_variable(mut self, variable: TypeVariableName) -> Self {
        self.type_variables.push(variable);
        self
    }

    pub fn superclass(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Argument passed to the superclass constructor, or to the enum's
    /// constructor for an enum constant.
    pub fn add_superclass_constructor_arg(mut self, arg: CodeBlock) -> Self {
        self.superclass_constructor_args.push(arg);
        self
    }

    pub fn add_superinterface(mut self, superinterface: impl Into<TypeName>) -> Self {
        self.superinterfaces.push(superinterface.into());
        self
    }

    pub fn add_enum_constant(self, name: impl Into<String>) -> Self {
        let body = TypeSpec::anonymous_builder().finish();
        self.add_enum_constant_with(name, body)
    }

    /// An enum constant with constructor arguments or a body.
    pub fn add_enum_constant_with(mut self, name: impl Into<String>, body: TypeSpec) -> Self {
        let name = name.into();
        if self.enum_constants.contains_key(&name) {
            self.duplicate_constant.get_or_insert(name);
        } else {
            self.enum_constants.insert(name, body);
        }
        self
    }

    pub fn add_property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn add_properties(mut self, properties: impl IntoIterator<Item = PropertySpec>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Set the primary constructor, built with [`FunSpec::constructor_builder`].
    ///
    /// A property whose initializer is exactly a constructor parameter of the
    /// same name and type is declared inline as `val name: Type`.
    pub fn primary_constructor(mut self, constructor: FunSpec) -> Self {
        self.primary_constructor = Some(constructor);
        self
    }

    pub fn add_function(mut self, function: FunSpec) -> Self {
        self.functions.push(function);
        self
    }

    pub fn add_functions(mut self, functions: impl IntoIterator<Item = FunSpec>) -> Self {
        self.functions.extend(functions);
        self
    }

    /// Add a nested type.
    pub fn add_type(mut self, nested: TypeSpec) -> Self {
        self.types.push(nested);
        self
    }

    pub fn add_static_block(mut self, code: CodeBlock) -> Self {
        self.static_block = self.static_block.add_code(code);
        self
    }

    pub fn add_initializer_block(mut self, code: CodeBlock) -> Self {
        self.initializer_block = self.initializer_block.add_code(code);
        self
    }

    pub fn build(self) -> Result<TypeSpec, SpecError> {
        let type_name = self.name.clone().unwrap_or_else(|| "<anonymous>".to_string());

        if let Some(name) = &self.name {
            if !is_identifier(name) {
                return Err(SpecError::InvalidName {
                    name: name.clone(),
                    context: "type",
                });
            }
        }
        self.check_enum(&type_name)?;
        self.check_anonymous()?;
        self.check_constructors(&type_name)?;

        if self.kind == TypeKind::Interface {
            if !self.static_block.is_empty() || !self.initializer_block.is_empty() {
                return Err(SpecError::InterfaceInitializer { type_name });
            }
            if self.superclass.is_some() {
                return Err(SpecError::InterfaceSuperclass { type_name });
            }
        }

        for function in &self.functions {
            if self.kind == TypeKind::Annotation {
                check_annotation_member(&type_name, function)?;
            } else if function.default_value().is_some() {
                return Err(SpecError::DefaultValueOutsideAnnotation {
                    member: format!("{}.{}", type_name, function.name()),
                });
            }
        }

        Ok(self.finish())
    }

    fn check_enum(&self, type_name: &str) -> Result<(), SpecError> {
        if self.kind == TypeKind::Enum && self.enum_constants.is_empty() {
            return Err(SpecError::EnumWithoutConstants {
                type_name: type_name.to_string(),
            });
        }
        if self.kind != TypeKind::Enum && !self.enum_constants.is_empty() {
            return Err(SpecError::ConstantsOnNonEnum {
                type_name: type_name.to_string(),
            });
        }
        if let Some(constant) = &self.duplicate_constant {
            return Err(SpecError::DuplicateEnumConstant {
                type_name: type_name.to_string(),
                constant: constant.clone(),
            });
        }
        if let Some(constant) = self.enum_constants.keys().find(|c| !is_identifier(c)) {
            return Err(SpecError::InvalidName {
                name: constant.clone(),
                context: "enum constant",
            });
        }
        Ok(())
    }

    fn check_anonymous(&self) -> Result<(), SpecError> {
        if self.name.is_some() {
            return Ok(());
        }
        if !self.type_variables.is_empty() {
            return Err(SpecError::AnonymousTypeVariables);
        }
        if !self.modifiers.is_empty() {
            return Err(SpecError::AnonymousModifiers);
        }
        if usize::from(self.superclass.is_some()) + self.superinterfaces.len() > 1 {
            return Err(SpecError::AnonymousSupertypes);
        }
        Ok(())
    }

    fn check_constructors(&self, type_name: &str) -> Result<(), SpecError> {
        let has_constructor = self.primary_constructor.is_some()
            || self.functions.iter().any(FunSpec::is_constructor);
        if !has_constructor {
            return Ok(());
        }
        let kind = match (self.kind, &self.name) {
            (_, None) => "anonymous type",
            (TypeKind::Interface | TypeKind::Annotation | TypeKind::Object, _) => self.kind.label(),
            _ => return Ok(()),
        };
        Err(SpecError::ConstructorNotAllowed {
            type_name: type_name.to_string(),
            kind,
        })
    }

    fn finish(self) -> TypeSpec {
        TypeSpec {
            kind: self.kind,
            name: self.name,
            doc: self.doc.build(),
            annotations: self.annotations,
            modifiers: self.modifiers,
            type_variables: self.type_variables,
            superclass: self.superclass,
            superclass_constructor_args: self.superclass_constructor_args,
            superinterfaces: self.superinterfaces,
            enum_constants: self.enum_constants,
            properties: self.properties,
            primary_constructor: self.primary_constructor,
            static_block: self.static_block.build(),
            initializer_block: self.initializer_block.build(),
            functions: self.functions,
            types: self.types,
        }
    }
}

fn check_annotation_member(type_name: &str, member: &FunSpec) -> Result<(), SpecError> {
    let error = match member {
        m if m.has_body() => SpecError::AnnotationMemberWithBody {
            type_name: type_name.to_string(),
            member: m.name().to_string(),
        },
        m if !m.parameters().is_empty() => SpecError::AnnotationMemberWithParameters {
            type_name: type_name.to_string(),
            member: m.name().to_string(),
        },
        m if m.return_type().is_none() => SpecError::AnnotationMemberWithoutType {
            type_name: type_name.to_string(),
            member: m.name().to_string(),
        },
        _ => return Ok(()),
    };
    Err(error)
}

// ============================================================================
// Properties
// ============================================================================

/// A `val` or `var` declaration.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    name: String,
    type_name: TypeName,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    mutable: bool,
    initializer: Option<CodeBlock>,
    is_static: bool,
}

impl PropertySpec {
    pub fn builder(name: impl Into<String>, type_name: impl Into<TypeName>) -> PropertySpecBuilder {
        PropertySpecBuilder {
            spec: PropertySpec {
                name: name.into(),
                type_name: type_name.into(),
                doc: CodeBlock::default(),
                annotations: Vec::new(),
                modifiers: BTreeSet::new(),
                mutable: false,
                initializer: None,
                is_static: false,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn doc(&self) -> &CodeBlock {
        &self.doc
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    /// `var` rather than `val`.
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn initializer(&self) -> Option<&CodeBlock> {
        self.initializer.as_ref()
    }

    /// Declared in the companion object.
    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

impl fmt::Display for PropertySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emitter::render_detached(|w| emitter::emit_property(w, self)))
    }
}

/// Builder for [`PropertySpec`].
#[derive(Debug, Clone)]
pub struct PropertySpecBuilder {
    spec: PropertySpec,
}

impl PropertySpecBuilder {
    pub fn add_doc(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        let doc = std::mem::take(&mut self.spec.doc);
        self.spec.doc = doc.to_builder().add(format, args)?.build();
        Ok(self)
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.spec.modifiers.insert(modifier);
        self
    }

    pub fn add_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.spec.modifiers.extend(modifiers);
        self
    }

    /// Declare with `var`.
    pub fn mutable(mut self) -> Self {
        self.spec.mutable = true;
        self
    }

    /// Move the property into the companion object.
    pub fn static_(mut self) -> Self {
        self.spec.is_static = true;
        self
    }

    pub fn initializer(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.spec.initializer = Some(CodeBlock::of(format, args)?);
        Ok(self)
    }

    pub fn initializer_code(mut self, code: CodeBlock) -> Self {
        self.spec.initializer = Some(code);
        self
    }

    pub fn build(self) -> Result<PropertySpec, SpecError> {
        if !is_identifier(&self.spec.name) {
            return Err(SpecError::InvalidName {
                name: self.spec.name,
                context: "property",
            });
        }
        Ok(self.spec)
    }
}

// ============================================================================
// Annotations
// ============================================================================

/// An annotation use such as `@Deprecated("use other")`.
#[derive(Debug, Clone)]
pub struct AnnotationSpec {
    type_name: ClassName,
    members: IndexMap<String, CodeBlock>,
}

impl AnnotationSpec {
    /// An annotation without arguments.
    pub fn of(type_name: ClassName) -> Self {
        Self {
            type_name,
            members: IndexMap::new(),
        }
    }

    pub fn builder(type_name: ClassName) -> AnnotationSpecBuilder {
        AnnotationSpecBuilder {
            spec: Self::of(type_name),
        }
    }

    pub fn type_name(&self) -> &ClassName {
        &self.type_name
    }

    /// Member values in insertion order. A single `value` member is
    /// emitted positionally.
    pub fn members(&self) -> &IndexMap<String, CodeBlock> {
        &self.members
    }
}

impl fmt::Display for AnnotationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emitter::render_detached(|w| emitter::emit_annotation(w, self)))
    }
}

/// Builder for [`AnnotationSpec`].
#[derive(Debug, Clone)]
pub struct AnnotationSpecBuilder {
    spec: AnnotationSpec,
}

impl AnnotationSpecBuilder {
    pub fn add_member(
        self,
        name: impl Into<String>,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        let value = CodeBlock::of(format, args)?;
        Ok(self.add_member_code(name, value))
    }

    pub fn add_member_code(mut self, name: impl Into<String>, value: CodeBlock) -> Self {
        self.spec.members.insert(name.into(), value);
        self
    }

    pub fn build(self) -> Result<AnnotationSpec, SpecError> {
        if let Some(name) = self.spec.members.keys().find(|n| !is_identifier(n)) {
            return Err(SpecError::InvalidName {
                name: name.clone(),
                context: "annotation member",
            });
        }
        Ok(self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_block;

    #[test]
    fn test_enum_requires_constants() {
        assert_eq!(
            TypeSpec::enum_builder("Color").build().unwrap_err(),
            SpecError::EnumWithoutConstants {
                type_name: "Color".into()
            }
        );
    }

    #[test]
    fn test_duplicate_enum_constant() {
        let err = TypeSpec::enum_builder("Color")
            .add_enum_constant("RED")
            .add_enum_constant("RED")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SpecError::DuplicateEnumConstant {
                type_name: "Color".into(),
                constant: "RED".into()
            }
        );
    }

    #[test]
    fn test_constants_on_class() {
        assert!(matches!(
            TypeSpec::class_builder("A").add_enum_constant("X").build(),
            Err(SpecError::ConstantsOnNonEnum { .. })
        ));
    }

    #[test]
    fn test_anonymous_restrictions() {
        assert_eq!(
            TypeSpec::anonymous_builder()
                .add_type_variable(TypeVariableName::new("T"))
                .build()
                .unwrap_err(),
            SpecError::AnonymousTypeVariables
        );
        assert_eq!(
            TypeSpec::anonymous_builder()
                .add_modifier(Modifier::Private)
                .build()
                .unwrap_err(),
            SpecError::AnonymousModifiers
        );
        assert_eq!(
            TypeSpec::anonymous_builder()
                .superclass(ClassName::any())
                .add_superinterface(ClassName::comparable())
                .build()
                .unwrap_err(),
            SpecError::AnonymousSupertypes
        );
        assert!(
            TypeSpec::anonymous_builder()
                .add_superinterface(ClassName::comparable())
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_annotation_members() {
        let with_body = FunSpec::builder("value")
            .returns(TypeName::string())
            .add_statement("return %S", [Arg::from("x")])
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            TypeSpec::annotation_builder("Tag").add_function(with_body).build(),
            Err(SpecError::AnnotationMemberWithBody { .. })
        ));

        let untyped = FunSpec::builder("value").build().unwrap();
        assert!(matches!(
            TypeSpec::annotation_builder("Tag").add_function(untyped).build(),
            Err(SpecError::AnnotationMemberWithoutType { .. })
        ));

        let with_default = FunSpec::builder("value")
            .returns(TypeName::INT)
            .default_value("%L", [Arg::from(1)])
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            TypeSpec::class_builder("A").add_function(with_default.clone()).build(),
            Err(SpecError::DefaultValueOutsideAnnotation { .. })
        ));
        assert!(
            TypeSpec::annotation_builder("Tag")
                .add_function(with_default)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_interface_restrictions() {
        assert!(matches!(
            TypeSpec::interface_builder("I")
                .add_initializer_block(code_block!("println()\n").unwrap())
                .build(),
            Err(SpecError::InterfaceInitializer { .. })
        ));
        assert!(matches!(
            TypeSpec::interface_builder("I").superclass(ClassName::any()).build(),
            Err(SpecError::InterfaceSuperclass { .. })
        ));
        let ctor = FunSpec::constructor_builder().build().unwrap();
        assert_eq!(
            TypeSpec::interface_builder("I").add_function(ctor.clone()).build().unwrap_err(),
            SpecError::ConstructorNotAllowed {
                type_name: "I".into(),
                kind: "interface"
            }
        );
        assert!(matches!(
            TypeSpec::object_builder("O").primary_constructor(ctor).build(),
            Err(SpecError::ConstructorNotAllowed { kind: "object", .. })
        ));
    }

    #[test]
    fn test_invalid_names() {
        assert!(matches!(
            TypeSpec::class_builder("my class").build(),
            Err(SpecError::InvalidName { context: "type", .. })
        ));
        assert!(matches!(
            PropertySpec::builder("a-b", TypeName::INT).build(),
            Err(SpecError::InvalidName { context: "property", .. })
        ));
    }

    #[test]
    fn test_property_display() {
        let property = PropertySpec::builder("count", TypeName::INT)
            .mutable()
            .add_modifier(Modifier::Private)
            .initializer("%L", [Arg::from(0)])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(property.to_string(), "private var count: Int = 0\n");
    }

    #[test]
    fn test_annotation_display() {
        let deprecated = ClassName::kotlin("Deprecated");
        let single = AnnotationSpec::builder(deprecated.clone())
            .add_member("value", "%S", [Arg::from("old")])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(single.to_string(), "@kotlin.Deprecated(\"old\")");

        let named = AnnotationSpec::builder(deprecated)
            .add_member("message", "%S", [Arg::from("old")])
            .unwrap()
            .add_member("level", "%L", [Arg::from("DeprecationLevel.ERROR")])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            named.to_string(),
            "@kotlin.Deprecated(message = \"old\", level = DeprecationLevel.ERROR)"
        );
    }
}
