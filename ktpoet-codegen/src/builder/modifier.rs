//! Declaration modifiers.

/// A Kotlin modifier keyword.
///
/// Variants are declared in the order Kotlin's coding conventions list them,
/// so a `BTreeSet<Modifier>` iterates in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Internal,
    Expect,
    Actual,
    Final,
    Open,
    Abstract,
    Sealed,
    Const,
    External,
    Override,
    Lateinit,
    Tailrec,
    Vararg,
    Suspend,
    Inner,
    Data,
    Inline,
    Noinline,
    Crossinline,
    Infix,
    Operator,
}

impl Modifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Internal => "internal",
            Self::Expect => "expect",
            Self::Actual => "actual",
            Self::Final => "final",
            Self::Open => "open",
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::Const => "const",
            Self::External => "external",
            Self::Override => "override",
            Self::Lateinit => "lateinit",
            Self::Tailrec => "tailrec",
            Self::Vararg => "vararg",
            Self::Suspend => "suspend",
            Self::Inner => "inner",
            Self::Data => "data",
            Self::Inline => "inline",
            Self::Noinline => "noinline",
            Self::Crossinline => "crossinline",
            Self::Infix => "infix",
            Self::Operator => "operator",
        }
    }
}
