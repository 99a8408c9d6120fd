//! The source model and the writer that renders it.
//!
//! - [`TypeName`], [`ClassName`] and friends - references to types
//! - [`CodeBlock`] - format strings resolved into instructions
//! - [`FileSpec`], [`TypeSpec`], [`FunSpec`], [`PropertySpec`],
//!   [`ParameterSpec`], [`AnnotationSpec`], [`TypeAliasSpec`] - the
//!   declaration tree
//! - [`CodeWriter`] - indentation, wrapping and type-name rendering
//!
//! Every spec is built through a builder that validates it; a built tree
//! always renders.

mod code_block;
mod code_writer;
mod file_builder;
mod function;
mod indent;
mod line_wrapper;
mod modifier;
mod structure;
mod type_alias;
mod types;

pub use code_block::{
    Arg, CodeBlock, CodeBlockBuilder, Instruction, interpret, interpret_named, string_literal,
};
pub use code_writer::CodeWriter;
pub use file_builder::{FileSpec, FileSpecBuilder};
pub use function::{
    ConstructorDelegation, FunSpec, FunSpecBuilder, ParameterSpec, ParameterSpecBuilder,
};
pub use indent::Indent;
pub use modifier::Modifier;
pub use structure::{
    AnnotationSpec, AnnotationSpecBuilder, PropertySpec, PropertySpecBuilder, TypeKind, TypeSpec,
    TypeSpecBuilder,
};
pub use type_alias::{TypeAliasSpec, TypeAliasSpecBuilder};
pub use types::{
    ClassName, MemberName, PrimitiveType, Projection, TypeName, TypeVariableName, Variance,
    WildcardName,
};
