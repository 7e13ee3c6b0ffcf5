//! AST types for parsed GraphQL documents.
//!
//! The tree is fully owned: names and literal text are copied out of the
//! [`Source`](crate::Source) while parsing, so a [`Document`] has no
//! lifetime parameter and outlives the text it was parsed from.
//!
//! Every node carries a [`ByteSpan`](crate::ByteSpan) into the normalized
//! source and implements [`AstNode`]. A parent's span always contains the
//! spans of its children.
//!
//! # Example
//!
//! ```rust
//! use graphql_syntax::ast::Definition;
//! use graphql_syntax::ast::OperationType;
//!
//! let doc = graphql_syntax::parse("query Hero { hero { name } }").unwrap();
//! let Definition::Operation(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(op.operation, OperationType::Query);
//! assert_eq!(op.name.as_ref().map(|n| n.value.as_str()), Some("Hero"));
//! ```

mod argument;
mod ast_node;
mod boolean_value;
mod definition;
mod directive;
mod directive_definition;
mod document;
mod enum_type_definition;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_value_definition;
mod int_value;
mod interface_type_definition;
mod list_type;
mod list_value;
mod name;
mod named_type;
mod non_null_type;
mod null_value;
mod object_field;
mod object_type_definition;
mod object_value;
mod operation_definition;
mod operation_type;
mod operation_type_definition;
mod scalar_type_definition;
mod schema_definition;
mod selection;
mod selection_set;
mod string_value;
mod type_extension_definition;
mod type_reference;
mod union_type_definition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use definition::Definition;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use int_value::IntValue;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use list_type::ListType;
pub use list_value::ListValue;
pub use name::Name;
pub use named_type::NamedType;
pub use non_null_type::NonNullType;
pub use non_null_type::NullableType;
pub use null_value::NullValue;
pub use object_field::ObjectField;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use operation_type_definition::OperationTypeDefinition;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_extension_definition::TypeExtensionDefinition;
pub use type_reference::Type;
pub use union_type_definition::UnionTypeDefinition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
