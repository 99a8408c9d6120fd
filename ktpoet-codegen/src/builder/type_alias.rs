//! Top-level `typealias` declarations.

use std::collections::BTreeSet;
use std::fmt;

use super::code_block::{Arg, CodeBlock};
use super::{AnnotationSpec, Modifier, TypeName, TypeVariableName};
use crate::error::{FormatError, SpecError};
use crate::generation::emitter;
use crate::language::is_identifier;

/// `typealias Name<T> = Type`.
///
/// ```
/// use ktpoet_codegen::builder::{ClassName, TypeAliasSpec, TypeName};
///
/// let names = ClassName::list().parameterized_by([TypeName::string()]).unwrap();
/// let alias = TypeAliasSpec::builder("Names", names).build().unwrap();
/// assert_eq!(
///     alias.to_string(),
///     "typealias Names = kotlin.collections.List<kotlin.String>\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TypeAliasSpec {
    name: String,
    type_name: TypeName,
    doc: CodeBlock,
    annotations: Vec<AnnotationSpec>,
    modifiers: BTreeSet<Modifier>,
    type_variables: Vec<TypeVariableName>,
}

impl TypeAliasSpec {
    pub fn builder(
        name: impl Into<String>,
        type_name: impl Into<TypeName>,
    ) -> TypeAliasSpecBuilder {
        TypeAliasSpecBuilder {
            spec: TypeAliasSpec {
                name: name.into(),
                type_name: type_name.into(),
                doc: CodeBlock::default(),
                annotations: Vec::new(),
                modifiers: BTreeSet::new(),
                type_variables: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The aliased type.
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

    pub fn type_variables(&self) -> &[TypeVariableName] {
        &self.type_variables
    }
}

impl fmt::Display for TypeAliasSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emitter::render_detached(|w| emitter::emit_type_alias(w, self)))
    }
}

/// Builder for [`TypeAliasSpec`].
#[derive(Debug, Clone)]
pub struct TypeAliasSpecBuilder {
    spec: TypeAliasSpec,
}

/// Modifiers a type alias may carry.
const ALIAS_MODIFIERS: [Modifier; 4] = [
    Modifier::Public,
    Modifier::Internal,
    Modifier::Private,
    Modifier::Actual,
];

impl TypeAliasSpecBuilder {
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

    pub fn add_type_variable(mut self, variable: TypeVariableName) -> Self {
        self.spec.type_variables.push(variable);
        self
    }

    pub fn build(self) -> Result<TypeAliasSpec, SpecError> {
        if !is_identifier(&self.spec.name) {
            return Err(SpecError::InvalidName {
                name: self.spec.name,
                context: "type alias",
            });
        }
        if let Some(modifier) = self
            .spec
            .modifiers
            .iter()
            .find(|m| !ALIAS_MODIFIERS.contains(m))
        {
            return Err(SpecError::ModifierNotAllowed {
                modifier: modifier.keyword(),
                target: format!("type alias {}", self.spec.name),
            });
        }
        Ok(self.spec)
    }
}
