use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A top-level definition in a [`Document`](crate::ast::Document).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    // Executable definitions
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),

    // Type-system definitions
    Schema(SchemaDefinition),
    ScalarType(ScalarTypeDefinition),
    ObjectType(ObjectTypeDefinition),
    InterfaceType(InterfaceTypeDefinition),
    UnionType(UnionTypeDefinition),
    EnumType(EnumTypeDefinition),
    InputObjectType(InputObjectTypeDefinition),
    TypeExtension(TypeExtensionDefinition),
    Directive(DirectiveDefinition),
}

impl Definition {
    /// Returns `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn span(&self) -> ByteSpan {
        match self {
            Definition::Operation(d) => d.span,
            Definition::Fragment(d) => d.span,
            Definition::Schema(d) => d.span,
            Definition::ScalarType(d) => d.span,
            Definition::ObjectType(d) => d.span,
            Definition::InterfaceType(d) => d.span,
            Definition::UnionType(d) => d.span,
            Definition::EnumType(d) => d.span,
            Definition::InputObjectType(d) => d.span,
            Definition::TypeExtension(d) => d.span,
            Definition::Directive(d) => d.span,
        }
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
