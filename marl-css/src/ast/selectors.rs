use smol_str::SmolStr;

use super::{NameToken, Token};

/// A comma-separated alternative: compound selectors joined by combinators.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComplexSelector {
    pub selectors: Vec<CompoundSelector>,
}

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CompoundSelector {
    /// Set when the compound selector begins with the `&` nesting prefix.
    pub has_nesting_prefix: bool,

    /// The combinator joining this to the previous compound selector;
    /// absent for the first one and for descendant combination.
    pub combinator: Option<Combinator>,

    pub type_selector: Option<NamespacedName>,
    pub subclass_selectors: Vec<SubclassSelector>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Combinator {
    Child,
    NextSibling,
    LaterSibling,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamespacedName {
    /// An explicit namespace: `ns|name`, `*|name`, or the empty prefix in
    /// `|name`.
    pub namespace_prefix: Option<NameToken>,
    pub name: NameToken,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SubclassSelector {
    Id(SmolStr),
    Class(SmolStr),
    Attribute(AttributeSelector),
    Pseudo(PseudoSelector),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AttributeSelector {
    pub name: NamespacedName,
    pub matcher: Option<AttributeMatcher>,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AttributeMatcher {
    /// `=`, `~=`, `|=`, `^=`, `$=`, or `*=`.
    pub op: SmolStr,
    pub value: SmolStr,

    /// The case-sensitivity modifier, lowercased: `i` or `s`.
    pub modifier: Option<char>,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PseudoSelector {
    pub name: SmolStr,

    /// Arguments of a functional pseudo, as a component-value tree.
    pub args: Vec<Token>,

    /// True for `::element`, false for `:class`.
    pub is_element: bool,
}
