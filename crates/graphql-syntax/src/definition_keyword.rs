/// The keywords that can introduce a top-level definition.
///
/// The parser looks a `Name` token up in [`DefinitionKeyword::TABLE`] once
/// per definition and dispatches on the result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKeyword {
    /// `query`, `mutation` and `subscription` operations.
    Query,
    Mutation,
    Subscription,
    /// `fragment Name on Type { ... }`
    Fragment,
    /// `schema { ... }`
    Schema,
    Scalar,
    /// `type Name { ... }` (object types)
    Type,
    Interface,
    Union,
    Enum,
    /// `input Name { ... }`
    Input,
    /// `extend type Name { ... }`
    Extend,
    /// `directive @name on ...`
    Directive,
}

impl DefinitionKeyword {
    /// Keyword spelling to keyword, for every definition keyword.
    pub const TABLE: &'static [(&'static str, DefinitionKeyword)] = &[
        ("query", DefinitionKeyword::Query),
        ("mutation", DefinitionKeyword::Mutation),
        ("subscription", DefinitionKeyword::Subscription),
        ("fragment", DefinitionKeyword::Fragment),
        ("schema", DefinitionKeyword::Schema),
        ("scalar", DefinitionKeyword::Scalar),
        ("type", DefinitionKeyword::Type),
        ("interface", DefinitionKeyword::Interface),
        ("union", DefinitionKeyword::Union),
        ("enum", DefinitionKeyword::Enum),
        ("input", DefinitionKeyword::Input),
        ("extend", DefinitionKeyword::Extend),
        ("directive", DefinitionKeyword::Directive),
    ];

    /// Looks up a keyword by its exact (case-sensitive) spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(spelling, _)| *spelling == name)
            .map(|(_, keyword)| *keyword)
    }

    /// Returns the keyword's spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKeyword::Query => "query",
            DefinitionKeyword::Mutation => "mutation",
            DefinitionKeyword::Subscription => "subscription",
            DefinitionKeyword::Fragment => "fragment",
            DefinitionKeyword::Schema => "schema",
            DefinitionKeyword::Scalar => "scalar",
            DefinitionKeyword::Type => "type",
            DefinitionKeyword::Interface => "interface",
            DefinitionKeyword::Union => "union",
            DefinitionKeyword::Enum => "enum",
            DefinitionKeyword::Input => "input",
            DefinitionKeyword::Extend => "extend",
            DefinitionKeyword::Directive => "directive",
        }
    }

    /// Returns `true` for keywords that introduce an executable definition.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DefinitionKeyword::Query
                | DefinitionKeyword::Mutation
                | DefinitionKeyword::Subscription
                | DefinitionKeyword::Fragment,
        )
    }
}
