//! Error types for names, templates and spec construction.
//!
//! Every error surfaces when a value is built. Rendering a built tree
//! never fails.

use miette::Diagnostic;
use thiserror::Error;

/// Result type using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced while assembling a source model.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Spec(#[from] SpecError),

    #[error("failed to parse format options")]
    #[diagnostic(code(ktpoet::options::parse))]
    Options(#[from] toml::de::Error),
}

/// Invalid type names.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum NameError {
    #[error("a class name needs at least one simple name")]
    #[diagnostic(code(ktpoet::name::empty))]
    NoSimpleNames,

    #[error("invalid simple name '{name}'")]
    #[diagnostic(
        code(ktpoet::name::invalid_simple_name),
        help("simple names are non-empty and contain no '.'")
    )]
    InvalidSimpleName { name: String },

    #[error("couldn't make a guess for '{input}'")]
    #[diagnostic(
        code(ktpoet::name::best_guess),
        help("build the name explicitly with ClassName::new(package, simple_names)")
    )]
    BestGuess { input: String },

    #[error("{name} cannot be parameterized")]
    #[diagnostic(code(ktpoet::name::not_generic))]
    NotGeneric { name: String },

    #[error("{name} is already parameterized")]
    #[diagnostic(code(ktpoet::name::already_parameterized))]
    AlreadyParameterized { name: String },

    #[error("no type arguments given for {name}")]
    #[diagnostic(code(ktpoet::name::empty_type_arguments))]
    EmptyTypeArguments { name: String },
}

/// Malformed templates and argument mismatches.
///
/// Positions are character offsets into the template. Argument indexes are
/// 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FormatError {
    #[error("dangling '%' at the end of '{template}'")]
    #[diagnostic(code(ktpoet::format::dangling), help("write '%%' for a literal percent"))]
    Dangling { template: String },

    #[error("unknown directive '%{directive}' at {position} in '{template}'")]
    #[diagnostic(
        code(ktpoet::format::unknown_directive),
        help("directives are %L %S %T %N %M %% %> %< %[ %] %W")
    )]
    UnknownDirective {
        template: String,
        position: usize,
        directive: char,
    },

    #[error("'%{directive}' at {position} in '{template}' does not take an index")]
    #[diagnostic(code(ktpoet::format::unexpected_index))]
    UnexpectedIndex {
        template: String,
        position: usize,
        directive: char,
    },

    #[error("argument indexes start at 1, found %0 in '{template}'")]
    #[diagnostic(code(ktpoet::format::zero_index))]
    ZeroIndex { template: String },

    #[error("missing argument {index} for '{template}' ({received} given)")]
    #[diagnostic(code(ktpoet::format::missing_argument))]
    MissingArgument {
        template: String,
        index: usize,
        received: usize,
    },

    #[error("argument {index} skips ahead of argument {next} in '{template}'")]
    #[diagnostic(
        code(ktpoet::format::skips_ahead),
        help("an indexed directive may reuse earlier arguments or take the next one")
    )]
    SkipsAhead {
        template: String,
        index: usize,
        next: usize,
    },

    #[error("unused arguments for '{template}': {used} of {received} consumed")]
    #[diagnostic(code(ktpoet::format::unused_arguments))]
    UnusedArguments {
        template: String,
        used: usize,
        received: usize,
    },

    #[error("'%{directive}' expects {expected}, argument {index} is {found} in '{template}'")]
    #[diagnostic(code(ktpoet::format::argument_kind))]
    ArgumentKind {
        template: String,
        index: usize,
        directive: char,
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing named argument '{name}' for '{template}'")]
    #[diagnostic(code(ktpoet::format::missing_named_argument))]
    MissingNamedArgument { template: String, name: String },

    #[error("argument name '{name}' must start with a lowercase letter")]
    #[diagnostic(
        code(ktpoet::format::invalid_argument_name),
        help("argument names match [a-z][A-Za-z0-9_]*")
    )]
    InvalidArgumentName { name: String },
}

/// Structurally invalid specs, reported by the builders.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SpecError {
    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(ktpoet::spec::invalid_name),
        help("use letters, digits and underscores, starting with a letter or underscore")
    )]
    InvalidName { name: String, context: &'static str },

    #[error("enum {type_name} has no constants")]
    #[diagnostic(code(ktpoet::spec::enum_without_constants))]
    EnumWithoutConstants { type_name: String },

    #[error("{type_name} is not an enum but declares constants")]
    #[diagnostic(code(ktpoet::spec::constants_on_non_enum))]
    ConstantsOnNonEnum { type_name: String },

    #[error("enum {type_name} declares '{constant}' twice")]
    #[diagnostic(code(ktpoet::spec::duplicate_enum_constant))]
    DuplicateEnumConstant { type_name: String, constant: String },

    #[error("annotation member {type_name}.{member} has a body")]
    #[diagnostic(
        code(ktpoet::spec::annotation_member_body),
        help("annotation members may only carry a default value")
    )]
    AnnotationMemberWithBody { type_name: String, member: String },

    #[error("annotation member {type_name}.{member} takes parameters")]
    #[diagnostic(code(ktpoet::spec::annotation_member_parameters))]
    AnnotationMemberWithParameters { type_name: String, member: String },

    #[error("annotation member {type_name}.{member} has no type")]
    #[diagnostic(code(ktpoet::spec::annotation_member_type))]
    AnnotationMemberWithoutType { type_name: String, member: String },

    #[error("{member} has a default value outside an annotation")]
    #[diagnostic(code(ktpoet::spec::default_value))]
    DefaultValueOutsideAnnotation { member: String },

    #[error("anonymous types cannot declare type variables")]
    #[diagnostic(code(ktpoet::spec::anonymous_type_variables))]
    AnonymousTypeVariables,

    #[error("anonymous types cannot have modifiers")]
    #[diagnostic(code(ktpoet::spec::anonymous_modifiers))]
    AnonymousModifiers,

    #[error("anonymous types have at most one supertype")]
    #[diagnostic(code(ktpoet::spec::anonymous_supertypes))]
    AnonymousSupertypes,

    #[error("interface {type_name} cannot have initializer blocks")]
    #[diagnostic(code(ktpoet::spec::interface_initializer))]
    InterfaceInitializer { type_name: String },

    #[error("interface {type_name} cannot extend a class")]
    #[diagnostic(
        code(ktpoet::spec::interface_superclass),
        help("list the supertype with add_superinterface instead")
    )]
    InterfaceSuperclass { type_name: String },

    #[error("{kind} {type_name} cannot have constructors")]
    #[diagnostic(code(ktpoet::spec::constructor_not_allowed))]
    ConstructorNotAllowed {
        type_name: String,
        kind: &'static str,
    },

    #[error("constructors cannot declare a return type")]
    #[diagnostic(code(ktpoet::spec::constructor_return_type))]
    ConstructorWithReturnType,

    #[error("{function} is not a constructor and cannot delegate")]
    #[diagnostic(code(ktpoet::spec::delegation_on_function))]
    DelegationOnFunction { function: String },

    #[error("abstract function {function} has a body")]
    #[diagnostic(code(ktpoet::spec::abstract_function_body))]
    AbstractFunctionWithBody { function: String },

    #[error("file {file} contains an anonymous top-level type")]
    #[diagnostic(code(ktpoet::spec::anonymous_top_level_type))]
    AnonymousTopLevelType { file: String },

    #[error("invalid file name '{name}'")]
    #[diagnostic(
        code(ktpoet::spec::invalid_file_name),
        help("file names are non-empty, without path separators or the .kt extension")
    )]
    InvalidFileName { name: String },

    #[error("import alias '{alias}' is used for both {first} and {second}")]
    #[diagnostic(code(ktpoet::spec::duplicate_import_alias))]
    DuplicateImportAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("modifier '{modifier}' is not allowed on {target}")]
    #[diagnostic(code(ktpoet::spec::modifier_not_allowed))]
    ModifierNotAllowed {
        modifier: &'static str,
        target: String,
    },

    #[error("name tag '{tag}' is already allocated")]
    #[diagnostic(code(ktpoet::spec::duplicate_tag))]
    DuplicateTag { tag: String },

    #[error("no name allocated for tag '{tag}'")]
    #[diagnostic(code(ktpoet::spec::unknown_tag))]
    UnknownTag { tag: String },
}
