//! Functions, constructors and their parameters.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;

use super::code_block::{Arg, CodeBlock, CodeBlockBuilder};
use super::{AnnotationSpec, Modifier, TypeName, TypeVariableName};
use crate::error::{FormatError, SpecError};
use crate::generation::emitter;
use crate::language::is_identifier;

const CONSTRUCTOR: &str = "constructor";

/// A call from a secondary constructor to another constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorDelegation {
    /// `: this(args)`
    This(Vec<CodeBlock>),
    /// `: super(args)`
    Super(Vec<CodeBlock>),
}

impl ConstructorDelegation {
    pub(crate) fn keyword(&self) -> &'static str {
        match self {
            Self::This(_) => "this",
            Self::Super(_) => "super",
        }
    }

    pub(crate) fn arguments(&self) -> &[CodeBlock] {
        match self {
            Self::This(args) | Self::Super(args) => args,
        }
    }
}

/// A function, an annotation member, or a constructor.
#[derive(Debug, Clone)]
pub struct FunSpec {
    name: String,
    constructor: bool,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariableName>,
    receiver: Option<TypeName>,
    parameters: Vec<ParameterSpec>,
    return_type: Option<TypeName>,
    body: CodeBlock,
    default_value: Option<CodeBlock>,
    delegation: Option<ConstructorDelegation>,
}

impl FunSpec {
    pub fn builder(name: impl Into<String>) -> FunSpecBuilder {
        FunSpecBuilder::new(name.into(), false)
    }

    /// A secondary constructor, or a primary constructor when passed to
    /// [`TypeSpecBuilder::primary_constructor`](super::TypeSpecBuilder::primary_constructor).
    pub fn constructor_builder() -> FunSpecBuilder {
        FunSpecBuilder::new(CONSTRUCTOR.to_string(), true)
    }

    /// The function name, or `constructor` for constructors.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_constructor(&self) -> bool {
        self.constructor
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

    /// Receiver type of an extension function.
    pub fn receiver(&self) -> Option<&TypeName> {
        self.receiver.as_ref()
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }

    /// Default value of an annotation member.
    pub fn default_value(&self) -> Option<&CodeBlock> {
        self.default_value.as_ref()
    }

    pub fn delegation(&self) -> Option<&ConstructorDelegation> {
        self.delegation.as_ref()
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn to_builder(&self) -> FunSpecBuilder {
        FunSpecBuilder {
            name: self.name.clone(),
            constructor: self.constructor,
            doc: self.doc.to_builder(),
            annotations: self.annotations.clone(),
            modifiers: self.modifiers.clone(),
            type_variables: self.type_variables.clone(),
            receiver: self.receiver.clone(),
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
            body: self.body.to_builder(),
            default_value: self.default_value.clone(),
            delegation: self.delegation.clone(),
        }
    }
}

impl fmt::Display for FunSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emitter::render_detached(|w| emitter::emit_function(w, self, None)))
    }
}

/// Builder for [`FunSpec`].
#[derive(Debug, Clone)]
pub struct FunSpecBuilder {
    name: String,
    constructor: bool,
    doc: CodeBlockBuilder,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariableName>,
    receiver: Option<TypeName>,
    parameters: Vec<ParameterSpec>,
    return_type: Option<TypeName>,
    body: CodeBlockBuilder,
    default_value: Option<CodeBlock>,
    delegation: Option<ConstructorDelegation>,
}

impl FunSpecBuilder {
    fn new(name: String, constructor: bool) -> Self {
        Self {
            name,
            constructor,
            doc: CodeBlockBuilder::default(),
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            type_variables: Vec::new(),
            receiver: None,
            parameters: Vec::new(),
            return_type: None,
            body: CodeBlockBuilder::default(),
            default_value: None,
            delegation: None,
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

    /// Make this an extension function on `receiver`.
    pub fn receiver(mut self, receiver: impl Into<TypeName>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn add_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a plain `name: Type` parameter.
    pub fn add_param(self, name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        self.add_parameter(ParameterSpec::new(name, type_name))
    }

    /// Set the return type. `Unit` is left out when emitted.
    pub fn returns(mut self, return_type: impl Into<TypeName>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn add_code(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.body = self.body.add(format, args)?;
        Ok(self)
    }

    pub fn add_named_code(
        mut self,
        format: &str,
        args: &IndexMap<String, Arg>,
    ) -> Result<Self, FormatError> {
        self.body = self.body.add_named(format, args)?;
        Ok(self)
    }

    /// Append an already built block to the body.
    pub fn add_block(mut self, code: CodeBlock) -> Self {
        self.body = self.body.add_code(code);
        self
    }

    pub fn add_statement(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.body = self.body.add_statement(format, args)?;
        Ok(self)
    }

    pub fn begin_control_flow(
        mut self,
        control_flow: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.body = self.body.begin_control_flow(control_flow, args)?;
        Ok(self)
    }

    pub fn next_control_flow(
        mut self,
        control_flow: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.body = self.body.next_control_flow(control_flow, args)?;
        Ok(self)
    }

    pub fn end_control_flow(mut self) -> Self {
        self.body = self.body.end_control_flow();
        self
    }

    /// Default value of an annotation member.
    pub fn default_value(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.default_value = Some(CodeBlock::of(format, args)?);
        Ok(self)
    }

    /// Delegate to another constructor of the same class.
    pub fn call_this_constructor(mut self, args: impl IntoIterator<Item = CodeBlock>) -> Self {
        self.delegation = Some(ConstructorDelegation::This(args.into_iter().collect()));
        self
    }

    /// Delegate to a superclass constructor.
    pub fn call_super_constructor(mut self, args: impl IntoIterator<Item = CodeBlock>) -> Self {
        self.delegation = Some(ConstructorDelegation::Super(args.into_iter().collect()));
        self
    }

    pub fn build(self) -> Result<FunSpec, SpecError> {
        if !self.constructor && !is_identifier(&self.name) {
            return Err(SpecError::InvalidName {
                name: self.name,
                context: "function",
            });
        }
        if self.constructor && self.return_type.is_some() {
            return Err(SpecError::ConstructorWithReturnType);
        }
        if !self.constructor && self.delegation.is_some() {
            return Err(SpecError::DelegationOnFunction { function: self.name });
        }
        if self.modifiers.contains(&Modifier::Abstract) && !self.body.is_empty() {
            return Err(SpecError::AbstractFunctionWithBody { function: self.name });
        }
        if let Some(parameter) = self.parameters.iter().find(|p| !is_identifier(&p.name)) {
            return Err(SpecError::InvalidName {
                name: parameter.name.clone(),
                context: "parameter",
            });
        }

        Ok(FunSpec {
            name: self.name,
            constructor: self.constructor,
            doc: self.doc.build(),
            annotations: self.annotations,
            modifiers: self.modifiers,
            type_variables: self.type_variables,
            receiver: self.receiver,
            parameters: self.parameters,
            return_type: self.return_type,
            body: self.body.build(),
            default_value: self.default_value,
            delegation: self.delegation,
        })
    }
}

/// A function or constructor parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    name: String,
    type_name: TypeName,
    modifiers: BTreeSet<Modifier>,
    annotations: Vec<AnnotationSpec>,
    default_value: Option<CodeBlock>,
}

impl ParameterSpec {
    /// A plain parameter. The name is checked when the enclosing function
    /// is built.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            default_value: None,
        }
    }

    pub fn builder(
        name: impl Into<String>,
        type_name: impl Into<TypeName>,
    ) -> ParameterSpecBuilder {
        ParameterSpecBuilder {
            spec: Self::new(name, type_name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    pub fn default_value(&self) -> Option<&CodeBlock> {
        self.default_value.as_ref()
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emitter::render_detached(|w| emitter::emit_parameter(w, self)))
    }
}

/// Builder for [`ParameterSpec`].
#[derive(Debug, Clone)]
pub struct ParameterSpecBuilder {
    spec: ParameterSpec,
}

impl ParameterSpecBuilder {
    /// `vararg`, `noinline` or `crossinline`.
    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.spec.modifiers.insert(modifier);
        self
    }

    pub fn add_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.spec.annotations.push(annotation);
        self
    }

    pub fn default_value(
        mut self,
        format: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self, FormatError> {
        self.spec.default_value = Some(CodeBlock::of(format, args)?);
        Ok(self)
    }

    pub fn default_value_code(mut self, code: CodeBlock) -> Self {
        self.spec.default_value = Some(code);
        self
    }

    pub fn build(self) -> Result<ParameterSpec, SpecError> {
        if !is_identifier(&self.spec.name) {
            return Err(SpecError::InvalidName {
                name: self.spec.name,
                context: "parameter",
            });
        }
        Ok(self.spec)
    }
}
