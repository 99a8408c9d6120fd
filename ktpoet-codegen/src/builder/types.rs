//! Type names: the values a template refers to with `%T`.
//!
//! Every name has a canonical text (`kotlin.Int`, `kotlin.collections.List<T>`,
//! `out kotlin.Number`). Equality, hashing and ordering are all defined over
//! that text, so names built in different ways compare equal when they spell
//! the same type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::NameError;

/// Kotlin's built-in value types, plus `Unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Unit,
}

impl PrimitiveType {
    /// The unqualified name, e.g. `Int`.
    pub fn simple_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Char",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Unit => "Unit",
        }
    }

    /// The equivalent declared name in the `kotlin` package.
    pub fn class_name(&self) -> ClassName {
        ClassName::kotlin(self.simple_name())
    }
}

/// A reference to a type.
#[derive(Debug, Clone)]
pub enum TypeName {
    /// A built-in value type such as `Int`.
    Primitive(PrimitiveType),
    /// `Array<E>`.
    Array(Box<TypeName>),
    /// A class, interface or object, possibly with type arguments.
    Declared(ClassName),
    /// A type variable such as `T`.
    TypeVariable(TypeVariableName),
    /// A use-site projection: `out T`, `in T` or `*`.
    Wildcard(WildcardName),
}

impl TypeName {
    pub const BOOLEAN: Self = Self::Primitive(PrimitiveType::Boolean);
    pub const BYTE: Self = Self::Primitive(PrimitiveType::Byte);
    pub const CHAR: Self = Self::Primitive(PrimitiveType::Char);
    pub const DOUBLE: Self = Self::Primitive(PrimitiveType::Double);
    pub const FLOAT: Self = Self::Primitive(PrimitiveType::Float);
    pub const INT: Self = Self::Primitive(PrimitiveType::Int);
    pub const LONG: Self = Self::Primitive(PrimitiveType::Long);
    pub const SHORT: Self = Self::Primitive(PrimitiveType::Short);
    pub const UNIT: Self = Self::Primitive(PrimitiveType::Unit);

    /// `kotlin.String`.
    pub fn string() -> Self {
        Self::Declared(ClassName::string())
    }

    /// `kotlin.Any`.
    pub fn any() -> Self {
        Self::Declared(ClassName::any())
    }

    /// `Array<E>`.
    pub fn array_of(element: impl Into<TypeName>) -> Self {
        Self::Array(Box::new(element.into()))
    }

    /// Apply type arguments to a declared name.
    ///
    /// Fails for every other kind of name, for names that already carry
    /// arguments, and for an empty argument list.
    pub fn parameterized_by(
        self,
        arguments: impl IntoIterator<Item = TypeName>,
    ) -> Result<Self, NameError> {
        match self {
            Self::Declared(class) => class.parameterized_by(arguments).map(Self::Declared),
            other => Err(NameError::NotGeneric {
                name: other.canonical(),
            }),
        }
    }

    /// A nullable (or non-null) copy of this name.
    ///
    /// Primitives and arrays become their declared `kotlin.*` form when made
    /// nullable; wildcards are returned unchanged.
    pub fn copy_nullable(self, nullable: bool) -> Self {
        match self {
            Self::Declared(class) => Self::Declared(class.copy_nullable(nullable)),
            Self::TypeVariable(variable) => Self::TypeVariable(variable.copy_nullable(nullable)),
            Self::Primitive(primitive) if nullable => {
                Self::Declared(primitive.class_name().copy_nullable(true))
            }
            Self::Array(element) if nullable => Self::Declared(ClassName {
                type_arguments: vec![*element],
                nullable: true,
                ..ClassName::kotlin("Array")
            }),
            other => other,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Unit))
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Declared(class) => class.nullable,
            Self::TypeVariable(variable) => variable.nullable,
            _ => false,
        }
    }

    /// Fully qualified text of this name.
    pub fn canonical(&self) -> String {
        match self {
            Self::Primitive(primitive) => format!("kotlin.{}", primitive.simple_name()),
            Self::Array(element) => format!("kotlin.Array<{}>", element.canonical()),
            Self::Declared(class) => class.canonical(),
            Self::TypeVariable(variable) => variable.canonical(),
            Self::Wildcard(wildcard) => wildcard.canonical(),
        }
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        Self::Declared(class)
    }
}

impl From<TypeVariableName> for TypeName {
    fn from(variable: TypeVariableName) -> Self {
        Self::TypeVariable(variable)
    }
}

impl From<WildcardName> for TypeName {
    fn from(wildcard: WildcardName) -> Self {
        Self::Wildcard(wildcard)
    }
}

/// A declared type: package, nesting chain and optional type arguments.
#[derive(Debug, Clone)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
    type_arguments: Vec<TypeName>,
    nullable: bool,
}

impl ClassName {
    /// Create a class name from a package and a non-empty nesting chain,
    /// outermost first.
    pub fn new<S: Into<String>>(
        package: impl Into<String>,
        simple_names: impl IntoIterator<Item = S>,
    ) -> Result<Self, NameError> {
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();
        if simple_names.is_empty() {
            return Err(NameError::NoSimpleNames);
        }
        if let Some(bad) = simple_names.iter().find(|n| !is_simple_name(n)) {
            return Err(NameError::InvalidSimpleName { name: bad.clone() });
        }
        Ok(Self::unchecked(package.into(), simple_names))
    }

    /// Split a dotted name into package and simple names.
    ///
    /// Leading lowercase segments form the package; the first uppercase
    /// segment starts the nesting chain and every later segment must be
    /// uppercase too. `java.lang.Object` and `Map.Entry` work;
    /// `com.example.sub.package` does not.
    pub fn best_guess(name: &str) -> Result<Self, NameError> {
        let fail = || NameError::BestGuess {
            input: name.to_string(),
        };
        let segments: Vec<&str> = name.split('.').collect();
        let starts_upper = |s: &&str| s.chars().next().is_some_and(char::is_uppercase);

        let first_class = segments.iter().position(starts_upper).ok_or_else(fail)?;
        let (package, classes) = segments.split_at(first_class);
        let package_ok = package
            .iter()
            .all(|s| s.chars().next().is_some_and(|c| c.is_lowercase() || c == '_'));
        if !package_ok || !classes.iter().all(starts_upper) {
            return Err(fail());
        }
        Ok(Self::unchecked(package.join("."), classes.iter().copied()))
    }

    pub(crate) fn unchecked<S: Into<String>>(
        package: impl Into<String>,
        simple_names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            package: package.into(),
            simple_names: simple_names.into_iter().map(Into::into).collect(),
            type_arguments: Vec::new(),
            nullable: false,
        }
    }

    pub(crate) fn kotlin(simple_name: &str) -> Self {
        Self::unchecked("kotlin", [simple_name])
    }

    fn kotlin_collections(simple_name: &str) -> Self {
        Self::unchecked("kotlin.collections", [simple_name])
    }

    pub fn any() -> Self {
        Self::kotlin("Any")
    }

    pub fn string() -> Self {
        Self::kotlin("String")
    }

    pub fn char_sequence() -> Self {
        Self::kotlin("CharSequence")
    }

    pub fn number() -> Self {
        Self::kotlin("Number")
    }

    pub fn nothing() -> Self {
        Self::kotlin("Nothing")
    }

    pub fn throwable() -> Self {
        Self::kotlin("Throwable")
    }

    pub fn comparable() -> Self {
        Self::kotlin("Comparable")
    }

    pub fn iterable() -> Self {
        Self::kotlin_collections("Iterable")
    }

    pub fn list() -> Self {
        Self::kotlin_collections("List")
    }

    pub fn mutable_list() -> Self {
        Self::kotlin_collections("MutableList")
    }

    pub fn set() -> Self {
        Self::kotlin_collections("Set")
    }

    pub fn map() -> Self {
        Self::kotlin_collections("Map")
    }

    pub fn mutable_map() -> Self {
        Self::kotlin_collections("MutableMap")
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Nesting chain, outermost first.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    pub fn type_arguments(&self) -> &[TypeName] {
        &self.type_arguments
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// This name without type arguments or nullability.
    pub fn raw(&self) -> Self {
        Self::unchecked(self.package.clone(), self.simple_names.iter().cloned())
    }

    /// A class nested directly inside this one.
    pub fn nested_class(&self, name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if !is_simple_name(&name) {
            return Err(NameError::InvalidSimpleName { name });
        }
        let mut nested = self.raw();
        nested.simple_names.push(name);
        Ok(nested)
    }

    /// A class in the same package, nested in the same enclosing class.
    pub fn peer_class(&self, name: impl Into<String>) -> Result<Self, NameError> {
        match self.enclosing_class_name() {
            Some(enclosing) => enclosing.nested_class(name),
            None => Self::new(self.package.clone(), [name.into()]),
        }
    }

    /// The class this one is nested in, if any.
    pub fn enclosing_class_name(&self) -> Option<Self> {
        let (_, outer) = self.simple_names.split_last()?;
        if outer.is_empty() {
            return None;
        }
        Some(Self::unchecked(self.package.clone(), outer.iter().cloned()))
    }

    /// The outermost class of the nesting chain.
    pub fn top_level_class_name(&self) -> Self {
        Self::unchecked(self.package.clone(), self.simple_names.iter().take(1).cloned())
    }

    /// Binary name with `$` between nested classes, e.g. `java.util.Map$Entry`.
    pub fn reflection_name(&self) -> String {
        let chain = self.simple_names.join("$");
        if self.package.is_empty() {
            chain
        } else {
            format!("{}.{}", self.package, chain)
        }
    }

    pub fn copy_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Apply type arguments, e.g. `List` to `List<String>`.
    pub fn parameterized_by(
        self,
        arguments: impl IntoIterator<Item = TypeName>,
    ) -> Result<Self, NameError> {
        if !self.type_arguments.is_empty() {
            return Err(NameError::AlreadyParameterized {
                name: self.canonical(),
            });
        }
        let type_arguments: Vec<TypeName> = arguments.into_iter().collect();
        if type_arguments.is_empty() {
            return Err(NameError::EmptyTypeArguments {
                name: self.canonical(),
            });
        }
        Ok(Self {
            type_arguments,
            ..self
        })
    }

    /// Package and nesting chain joined with `.`, without type arguments.
    pub fn canonical_name(&self) -> String {
        let chain = self.simple_names.join(".");
        if self.package.is_empty() {
            chain
        } else {
            format!("{}.{}", self.package, chain)
        }
    }

    pub fn canonical(&self) -> String {
        let mut out = self.canonical_name();
        if !self.type_arguments.is_empty() {
            out.push('<');
            out.push_str(&join_canonical(&self.type_arguments));
            out.push('>');
        }
        if self.nullable {
            out.push('?');
        }
        out
    }

    /// A member declared inside this class.
    pub fn member(&self, simple_name: impl Into<String>) -> Result<MemberName, NameError> {
        MemberName::in_class(self, simple_name)
    }

    /// Whether `other` names the same class, ignoring type arguments and
    /// nullability.
    pub(crate) fn same_class(&self, other: &ClassName) -> bool {
        self.package == other.package && self.simple_names == other.simple_names
    }
}

/// A function or property, either top-level in a package or inside a class.
/// `%M` refers to members the way `%T` refers to types.
///
/// ```
/// use ktpoet_codegen::builder::{ClassName, MemberName};
///
/// let list_of = MemberName::new("kotlin.collections", "listOf").unwrap();
/// assert_eq!(list_of.canonical_name(), "kotlin.collections.listOf");
///
/// let load = ClassName::new("app", ["Config"]).unwrap().member("load").unwrap();
/// assert_eq!(load.to_string(), "app.Config.load");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberName {
    package: String,
    enclosing: Option<ClassName>,
    simple_name: String,
    extension: bool,
}

impl MemberName {
    /// A top-level member of `package`.
    pub fn new(
        package: impl Into<String>,
        simple_name: impl Into<String>,
    ) -> Result<Self, NameError> {
        let simple_name = simple_name.into();
        if !is_simple_name(&simple_name) {
            return Err(NameError::InvalidSimpleName { name: simple_name });
        }
        Ok(Self {
            package: package.into(),
            enclosing: None,
            simple_name,
            extension: false,
        })
    }

    /// A member declared inside `enclosing`.
    pub fn in_class(
        enclosing: &ClassName,
        simple_name: impl Into<String>,
    ) -> Result<Self, NameError> {
        let mut member = Self::new(enclosing.package(), simple_name)?;
        member.enclosing = Some(enclosing.raw());
        Ok(member)
    }

    /// Mark this member as an extension. Extensions are imported even when
    /// the enclosing type declares a function with the same name.
    pub fn extension(mut self) -> Self {
        self.extension = true;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn enclosing_class_name(&self) -> Option<&ClassName> {
        self.enclosing.as_ref()
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn is_extension(&self) -> bool {
        self.extension
    }

    pub fn canonical_name(&self) -> String {
        match &self.enclosing {
            Some(enclosing) => format!("{}.{}", enclosing.canonical_name(), self.simple_name),
            None if self.package.is_empty() => self.simple_name.clone(),
            None => format!("{}.{}", self.package, self.simple_name),
        }
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

fn is_simple_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('.')
}

fn join_canonical(names: &[TypeName]) -> String {
    names
        .iter()
        .map(TypeName::canonical)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Declaration-site variance of a type variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variance {
    In,
    Out,
}

impl Variance {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// A type variable such as `T` or `T : Comparable<T>`.
#[derive(Debug, Clone)]
pub struct TypeVariableName {
    name: String,
    bounds: Vec<TypeName>,
    variance: Option<Variance>,
    reified: bool,
    nullable: bool,
}

impl TypeVariableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
            variance: None,
            reified: false,
            nullable: false,
        }
    }

    /// A type variable with upper bounds. More than one bound is emitted
    /// as a `where` clause.
    pub fn bounded(name: impl Into<String>, bounds: impl IntoIterator<Item = TypeName>) -> Self {
        Self {
            bounds: bounds.into_iter().collect(),
            ..Self::new(name)
        }
    }

    pub fn with_variance(mut self, variance: Variance) -> Self {
        self.variance = Some(variance);
        self
    }

    pub fn reified(mut self) -> Self {
        self.reified = true;
        self
    }

    pub fn copy_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[TypeName] {
        &self.bounds
    }

    pub fn variance(&self) -> Option<Variance> {
        self.variance
    }

    pub fn is_reified(&self) -> bool {
        self.reified
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn canonical(&self) -> String {
        if self.nullable {
            format!("{}?", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// How a wildcard projects its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection<'a> {
    /// `*`
    Star,
    /// `out T`
    Out(&'a TypeName),
    /// `in T`
    In(&'a TypeName),
}

/// A use-site projection.
#[derive(Debug, Clone)]
pub struct WildcardName {
    upper_bounds: Vec<TypeName>,
    lower_bounds: Vec<TypeName>,
}

impl WildcardName {
    /// `out T`
    pub fn producer_of(upper: impl Into<TypeName>) -> Self {
        Self {
            upper_bounds: vec![upper.into()],
            lower_bounds: Vec::new(),
        }
    }

    /// `in T`
    pub fn consumer_of(lower: impl Into<TypeName>) -> Self {
        Self {
            upper_bounds: vec![nullable_any()],
            lower_bounds: vec![lower.into()],
        }
    }

    /// `*`
    pub fn star() -> Self {
        Self {
            upper_bounds: vec![nullable_any()],
            lower_bounds: Vec::new(),
        }
    }

    pub fn upper_bounds(&self) -> &[TypeName] {
        &self.upper_bounds
    }

    pub fn lower_bounds(&self) -> &[TypeName] {
        &self.lower_bounds
    }

    /// A lower bound makes an `in` projection; an upper bound other than
    /// `Any?` makes an `out` projection; anything else is `*`.
    pub fn projection(&self) -> Projection<'_> {
        if let Some(lower) = self.lower_bounds.first() {
            return Projection::In(lower);
        }
        match self.upper_bounds.first() {
            Some(upper) if *upper != nullable_any() => Projection::Out(upper),
            _ => Projection::Star,
        }
    }

    pub fn canonical(&self) -> String {
        match self.projection() {
            Projection::Star => "*".to_string(),
            Projection::Out(upper) => format!("out {}", upper.canonical()),
            Projection::In(lower) => format!("in {}", lower.canonical()),
        }
    }
}

fn nullable_any() -> TypeName {
    TypeName::Declared(ClassName::any().copy_nullable(true))
}

macro_rules! canonical_identity {
    ($($ty:ty),* $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.canonical() == other.canonical()
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.canonical().hash(state);
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.canonical().cmp(&other.canonical())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.canonical())
            }
        }
    )*};
}

canonical_identity!(TypeName, ClassName, TypeVariableName, WildcardName);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn class(package: &str, names: &[&str]) -> ClassName {
        ClassName::new(package, names.iter().copied()).unwrap()
    }

    #[test]
    fn test_best_guess_matches_explicit() {
        let guessed = ClassName::best_guess("java.lang.Object").unwrap();
        assert_eq!(guessed, class("java.lang", &["Object"]));
        assert_eq!(guessed.package(), "java.lang");

        let nested = ClassName::best_guess("java.util.Map.Entry").unwrap();
        assert_eq!(nested.simple_names(), ["Map", "Entry"]);

        let default_package = ClassName::best_guess("Greeter").unwrap();
        assert_eq!(default_package.package(), "");
    }

    #[test]
    fn test_best_guess_failures() {
        for input in ["", "foo", "com.example", "com.Example.inner", "Com..Foo", ".Foo"] {
            assert_eq!(
                ClassName::best_guess(input),
                Err(NameError::BestGuess {
                    input: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn test_new_validates_simple_names() {
        assert_eq!(
            ClassName::new("a", Vec::<String>::new()),
            Err(NameError::NoSimpleNames)
        );
        assert_eq!(
            ClassName::new("a", ["Outer.Inner"]),
            Err(NameError::InvalidSimpleName {
                name: "Outer.Inner".into()
            })
        );
        assert!(ClassName::new("a", [""]).is_err());
    }

    #[test]
    fn test_primitive_canonical() {
        assert_eq!(TypeName::INT.canonical(), "kotlin.Int");
        assert_eq!(TypeName::UNIT.canonical(), "kotlin.Unit");
        assert_eq!(
            TypeName::array_of(TypeName::BYTE).canonical(),
            "kotlin.Array<kotlin.Byte>"
        );
        assert_eq!(TypeName::INT, TypeName::from(PrimitiveType::Int.class_name()));
    }

    #[test]
    fn test_parameterized_canonical() {
        let map = TypeName::from(ClassName::map())
            .parameterized_by([
                TypeName::string(),
                WildcardName::producer_of(ClassName::number()).into(),
            ])
            .unwrap();
        assert_eq!(
            map.canonical(),
            "kotlin.collections.Map<kotlin.String, out kotlin.Number>"
        );
    }

    #[test]
    fn test_parameterized_by_rejects_non_generic() {
        assert_eq!(
            TypeName::INT.parameterized_by([TypeName::string()]),
            Err(NameError::NotGeneric {
                name: "kotlin.Int".into()
            })
        );
        assert!(
            TypeName::from(TypeVariableName::new("T"))
                .parameterized_by([TypeName::INT])
                .is_err()
        );
        assert_eq!(
            ClassName::list().parameterized_by(Vec::<TypeName>::new()),
            Err(NameError::EmptyTypeArguments {
                name: "kotlin.collections.List".into()
            })
        );

        let list = ClassName::list().parameterized_by([TypeName::INT]).unwrap();
        assert!(matches!(
            list.parameterized_by([TypeName::INT]),
            Err(NameError::AlreadyParameterized { .. })
        ));
    }

    #[test]
    fn test_wildcard_projections() {
        assert_eq!(WildcardName::star().canonical(), "*");
        assert_eq!(
            WildcardName::producer_of(ClassName::number()).canonical(),
            "out kotlin.Number"
        );
        assert_eq!(
            WildcardName::consumer_of(TypeName::INT).canonical(),
            "in kotlin.Int"
        );
    }

    #[test]
    fn test_nullability_is_part_of_identity() {
        let string = TypeName::string();
        let nullable = string.clone().copy_nullable(true);
        assert_ne!(string, nullable);
        assert_eq!(nullable.canonical(), "kotlin.String?");
        assert_eq!(TypeName::INT.copy_nullable(true).canonical(), "kotlin.Int?");
        assert_eq!(
            TypeName::from(TypeVariableName::new("T").copy_nullable(true)).canonical(),
            "T?"
        );
    }

    #[test]
    fn test_nesting_helpers() {
        let outer = class("com.example", &["Outer"]);
        let inner = outer.nested_class("Inner").unwrap();
        assert_eq!(inner.canonical(), "com.example.Outer.Inner");
        assert_eq!(inner.reflection_name(), "com.example.Outer$Inner");
        assert_eq!(inner.enclosing_class_name(), Some(outer.clone()));
        assert_eq!(inner.top_level_class_name(), outer);
        assert_eq!(outer.enclosing_class_name(), None);
        assert_eq!(inner.simple_name(), "Inner");
        assert_eq!(
            inner.peer_class("Sibling").unwrap().canonical(),
            "com.example.Outer.Sibling"
        );
        assert_eq!(
            outer.peer_class("Other").unwrap().canonical(),
            "com.example.Other"
        );
    }

    #[test]
    fn test_hash_uses_canonical_text() {
        let mut set = HashSet::new();
        set.insert(TypeName::from(class("java.lang", &["Object"])));
        set.insert(TypeName::from(ClassName::best_guess("java.lang.Object").unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_is_canonical() {
        let entry = class("java.util", &["Map", "Entry"]);
        assert_eq!(entry.to_string(), "java.util.Map.Entry");
    }

    #[test]
    fn test_member_names() {
        let top = MemberName::new("com.example", "greet").unwrap();
        assert_eq!(top.canonical_name(), "com.example.greet");
        assert!(top.enclosing_class_name().is_none());

        let entry = class("java.util", &["Map", "Entry"])
            .parameterized_by([TypeName::string()])
            .unwrap();
        let member = entry.member("comparingByKey").unwrap();
        assert_eq!(member.package(), "java.util");
        assert_eq!(member.canonical_name(), "java.util.Map.Entry.comparingByKey");

        let rooted = MemberName::new("", "main").unwrap().extension();
        assert_eq!(rooted.to_string(), "main");
        assert!(rooted.is_extension());

        assert_eq!(
            MemberName::new("app", "a.b").unwrap_err(),
            NameError::InvalidSimpleName { name: "a.b".into() }
        );
    }
}
