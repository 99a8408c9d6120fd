//! Kotlin source generation.
//!
//! Build a tree of specs, wrap it in a [`FileSpec`] and render it:
//!
//! ```
//! use ktpoet_codegen::builder::{Arg, FileSpec, FunSpec, PropertySpec, TypeName, TypeSpec};
//! use ktpoet_codegen::code_block;
//!
//! # fn main() -> ktpoet_codegen::Result<()> {
//! let name = PropertySpec::builder("name", TypeName::string())
//!     .initializer_code(code_block!("%S", "World")?)
//!     .build()?;
//! let greet = FunSpec::builder("greet")
//!     .returns(TypeName::string())
//!     .add_statement("return %S + name", [Arg::from("Hello, ")])?
//!     .build()?;
//! let greeter = TypeSpec::class_builder("Greeter")
//!     .add_property(name)
//!     .add_function(greet)
//!     .build()?;
//!
//! let file = FileSpec::get("com.example", greeter)?;
//! assert!(file.render().starts_with("package com.example\n\nclass Greeter {\n"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - type names, code blocks, specs and the code writer
//! - [`generation`] - import resolution and the emitter
//! - [`language`] - Kotlin keywords, identifier rules and name allocation
//! - [`options`] - formatting options, loadable from TOML
//! - [`error`] - error types

pub mod builder;
pub mod error;
pub mod generation;
pub mod language;
pub mod options;

pub use builder::{
    AnnotationSpec, ClassName, CodeBlock, FileSpec, FunSpec, MemberName, ParameterSpec,
    PropertySpec, TypeAliasSpec, TypeName, TypeSpec,
};
pub use error::{Error, FormatError, NameError, Result, SpecError};
pub use options::FormatOptions;
