//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] pulls tokens from [`lex()`] one at a time, holding a
//! single token of lookahead, and builds an owned [`ast::Document`].
//!
//! # Failure Semantics
//!
//! The parser is non-recovering. Every `parse_*` method returns
//! `Result<_, GraphQLParseError>` and the first lexical or syntax error is
//! propagated straight out of [`GraphQLParser::parse_document()`] with `?`.
//! There is no partial AST.
//!
//! # Spans
//!
//! A node's span runs from the start of its first token to the end of the
//! last token it consumed. The lookahead token is never included, so a
//! parent span always contains the spans of its children.

use crate::ast;
use crate::ByteSpan;
use crate::DefinitionKeyword;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::Source;
use crate::lex;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Context for parsing values, determining whether variables are allowed.
///
/// Threaded through every value-parsing entry point. Lists and objects pass
/// their context on to their elements, so a variable is rejected at any
/// depth inside a constant value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConstContext {
    /// Field arguments and directive arguments on executable constructs.
    AllowVariables,
    /// Default values and directive arguments on type-system constructs.
    Constant,
}

/// A recursive descent parser for GraphQL documents.
///
/// # Usage
///
/// ```
/// use graphql_syntax::GraphQLParser;
/// use graphql_syntax::Source;
///
/// let source = Source::new("type Query { hello: String }");
/// let doc = GraphQLParser::new(&source)
///     .and_then(|parser| parser.parse_document())
///     .unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct GraphQLParser<'src> {
    source: &'src Source,

    /// The lookahead token. Always the next unconsumed token.
    current: GraphQLToken<'src>,

    /// End offset of the most recently consumed token; the `end` of every
    /// span built by [`make_span()`](Self::make_span).
    last_end: usize,

    /// Number of open selection sets, list or object values, and list
    /// types.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum number of containers (selection sets, list and object
    /// values, list types) open at once.
    ///
    /// Prevents stack overflow from adversarial inputs like `[[[[[...`.
    /// Real documents rarely nest more than 15 levels.
    const MAX_RECURSION_DEPTH: usize = 128;

    /// Creates a parser positioned at the first token of `source`.
    ///
    /// Fails if that first token is malformed.
    pub fn new(source: &'src Source) -> Result<Self, GraphQLParseError> {
        let current = lex(source, 0)?;
        Ok(Self {
            source,
            current,
            last_end: 0,
            recursion_depth: 0,
        })
    }

    /// Parses the whole source as a document.
    ///
    /// An empty or whitespace-only source yields a document with no
    /// definitions.
    pub fn parse_document(mut self) -> Result<ast::Document, GraphQLParseError> {
        let start = self.current.span.start;
        let mut definitions = Vec::new();
        while !self.peek(GraphQLTokenKind::Eof) {
            definitions.push(self.parse_definition()?);
        }

        let span = if definitions.is_empty() {
            ByteSpan::default()
        } else {
            self.make_span(start)
        };
        Ok(ast::Document { definitions, span })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Consumes the current token, lexes the next one, and returns the
    /// consumed token.
    fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let next = lex(self.source, self.current.span.end)?;
        let consumed = std::mem::replace(&mut self.current, next);
        self.last_end = consumed.span.end;
        Ok(consumed)
    }

    /// Checks if the current token is of the given kind without consuming.
    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.current.kind == kind
    }

    /// Checks if the current token is the given keyword without consuming.
    fn peek_keyword(&self, keyword: &str) -> bool {
        self.current.is_keyword(keyword)
    }

    /// Consumes the current token if it is of the given kind. Returns whether
    /// it did.
    fn skip(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLParseError> {
        if self.peek(kind) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Expects a specific token kind and consumes it.
    fn expect(
        &mut self,
        kind: GraphQLTokenKind,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek(kind) {
            return self.advance();
        }

        let found = self.current.to_string();
        Err(self.syntax_error(
            format!("Expected {kind}, found {found}"),
            GraphQLParseErrorKind::UnexpectedToken {
                expected: kind.to_string(),
                found,
            },
        ))
    }

    /// Expects a `Name` token spelled exactly `keyword` and consumes it.
    fn expect_keyword(
        &mut self,
        keyword: &str,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek_keyword(keyword) {
            return self.advance();
        }

        let found = self.current.to_string();
        Err(self.syntax_error(
            format!("Expected \"{keyword}\", found {found}"),
            GraphQLParseErrorKind::UnexpectedKeyword {
                expected: keyword.to_string(),
                found,
            },
        ))
    }

    /// Builds the error for a token no production accepts.
    fn unexpected(&self) -> GraphQLParseError {
        let found = self.current.to_string();
        self.syntax_error(
            format!("Unexpected {found}"),
            GraphQLParseErrorKind::Unexpected { found },
        )
    }

    /// Builds a syntax error located at the start of the current token.
    fn syntax_error(
        &self,
        message: String,
        kind: GraphQLParseErrorKind,
    ) -> GraphQLParseError {
        GraphQLParseError::new(
            message,
            self.source.name(),
            self.current.span.start,
            kind,
        )
    }

    /// Builds a span from `start` to the end of the last consumed token.
    fn make_span(&self, start: usize) -> ByteSpan {
        ByteSpan::new(start, self.last_end)
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Checks recursion depth and returns an error if the limit is
    /// exceeded. On success, increments the depth counter; the caller
    /// must call `exit_recursion()` when done.
    fn enter_recursion(&mut self) -> Result<(), GraphQLParseError> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(self.syntax_error(
                "Maximum nesting depth exceeded".to_string(),
                GraphQLParseErrorKind::MaxDepthExceeded,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    /// Decrements the recursion depth counter.
    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> Result<ast::Definition, GraphQLParseError> {
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ast::Definition::Operation(self.parse_operation_definition()?));
        }

        let keyword = if self.peek(GraphQLTokenKind::Name) {
            DefinitionKeyword::from_name(&self.current.value)
        } else {
            None
        };
        let Some(keyword) = keyword else {
            return Err(self.unexpected());
        };

        Ok(match keyword {
            DefinitionKeyword::Query
            | DefinitionKeyword::Mutation
            | DefinitionKeyword::Subscription => {
                ast::Definition::Operation(self.parse_operation_definition()?)
            },
            DefinitionKeyword::Fragment => {
                ast::Definition::Fragment(self.parse_fragment_definition()?)
            },
            DefinitionKeyword::Schema => {
                ast::Definition::Schema(self.parse_schema_definition()?)
            },
            DefinitionKeyword::Scalar => {
                ast::Definition::ScalarType(self.parse_scalar_type_definition()?)
            },
            DefinitionKeyword::Type => {
                ast::Definition::ObjectType(self.parse_object_type_definition()?)
            },
            DefinitionKeyword::Interface => {
                ast::Definition::InterfaceType(self.parse_interface_type_definition()?)
            },
            DefinitionKeyword::Union => {
                ast::Definition::UnionType(self.parse_union_type_definition()?)
            },
            DefinitionKeyword::Enum => {
                ast::Definition::EnumType(self.parse_enum_type_definition()?)
            },
            DefinitionKeyword::Input => {
                ast::Definition::InputObjectType(self.parse_input_object_type_definition()?)
            },
            DefinitionKeyword::Extend => {
                ast::Definition::TypeExtension(self.parse_type_extension_definition()?)
            },
            DefinitionKeyword::Directive => {
                ast::Definition::Directive(self.parse_directive_definition()?)
            },
        })
    }

    // =========================================================================
    // Names and named types
    // =========================================================================

    fn parse_name(&mut self) -> Result<ast::Name, GraphQLParseError> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(ast::Name {
            value: token.value.into_owned(),
            span: token.span,
        })
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType, GraphQLParseError> {
        let start = self.current.span.start;
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            name,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses a named operation, or the `{ ... }` shorthand for an anonymous
    /// query.
    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition, GraphQLParseError> {
        let start = self.current.span.start;

        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                span: self.make_span(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.make_span(start),
        })
    }

    fn parse_operation_type(&mut self) -> Result<ast::OperationType, GraphQLParseError> {
        let operation = if self.peek(GraphQLTokenKind::Name) {
            ast::OperationType::from_keyword(&self.current.value)
        } else {
            None
        };
        match operation {
            Some(operation) => {
                self.advance()?;
                Ok(operation)
            },
            None => Err(self.unexpected()),
        }
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition>, GraphQLParseError> {
        if !self.skip(GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }

        let mut definitions = vec![self.parse_variable_definition()?];
        while !self.skip(GraphQLTokenKind::ParenClose)? {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::Constant)?)
        } else {
            None
        };

        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            span: self.make_span(start),
        })
    }

    fn parse_variable(&mut self) -> Result<ast::Variable, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            name,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<ast::SelectionSet, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        let mut selections = vec![self.parse_selection()?];
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            selections.push(self.parse_selection()?);
        }

        Ok(ast::SelectionSet {
            selections,
            span: self.make_span(start),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, GraphQLParseError> {
        if self.peek(GraphQLTokenKind::Ellipsis) {
            return self.parse_fragment();
        }
        Ok(ast::Selection::Field(self.parse_field()?))
    }

    /// Parses `alias: name(args) @directives { ... }`.
    fn parse_field(&mut self) -> Result<ast::Field, GraphQLParseError> {
        let start = self.current.span.start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };

        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.make_span(start),
        })
    }

    /// Parses what follows `...`: a fragment spread when the next token is a
    /// name other than `on`, an inline fragment otherwise.
    fn parse_fragment(&mut self) -> Result<ast::Selection, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect(GraphQLTokenKind::Ellipsis)?;

        if self.peek(GraphQLTokenKind::Name) && !self.peek_keyword("on") {
            let name = self.parse_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                span: self.make_span(start),
            }));
        }

        let type_condition = if self.peek_keyword("on") {
            self.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.make_span(start),
        }))
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("fragment")?;

        if self.peek_keyword("on") {
            return Err(self.unexpected());
        }
        let name = self.parse_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    fn parse_arguments(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::Argument>, GraphQLParseError> {
        if !self.skip(GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }

        let mut arguments = vec![self.parse_argument(context)?];
        while !self.skip(GraphQLTokenKind::ParenClose)? {
            arguments.push(self.parse_argument(context)?);
        }
        Ok(arguments)
    }

    fn parse_argument(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::Argument, GraphQLParseError> {
        let start = self.current.span.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ast::Argument {
            name,
            value,
            span: self.make_span(start),
        })
    }

    fn parse_directives(
        &mut self,
        context: ConstContext,
    ) -> Result<Vec<ast::Directive>, GraphQLParseError> {
        let mut directives = Vec::new();
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive(context)?);
        }
        Ok(directives)
    }

    fn parse_directive(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::Directive, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(context)?;
        Ok(ast::Directive {
            name,
            arguments,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value (literal or variable reference).
    ///
    /// The `context` parameter specifies whether variables are allowed. In
    /// the constant context a `$` is not a value start and is reported as
    /// unexpected.
    ///
    /// Only lists and objects count towards the nesting limit; a scalar
    /// leaf adds no depth.
    fn parse_value(&mut self, context: ConstContext) -> Result<ast::Value, GraphQLParseError> {
        match self.current.kind {
            GraphQLTokenKind::SquareBracketOpen => {
                self.enter_recursion()?;
                let list = self.parse_list_value(context);
                self.exit_recursion();
                Ok(ast::Value::List(list?))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                self.enter_recursion()?;
                let object = self.parse_object_value(context);
                self.exit_recursion();
                Ok(ast::Value::Object(object?))
            },
            GraphQLTokenKind::Int => {
                let token = self.advance()?;
                Ok(ast::Value::Int(ast::IntValue {
                    value: token.value.into_owned(),
                    span: token.span,
                }))
            },
            GraphQLTokenKind::Float => {
                let token = self.advance()?;
                Ok(ast::Value::Float(ast::FloatValue {
                    value: token.value.into_owned(),
                    span: token.span,
                }))
            },
            GraphQLTokenKind::String => {
                let token = self.advance()?;
                Ok(ast::Value::String(ast::StringValue {
                    value: token.value.into_owned(),
                    span: token.span,
                }))
            },
            GraphQLTokenKind::Name => {
                let token = self.advance()?;
                let span = token.span;
                Ok(match &*token.value {
                    "true" => ast::Value::Boolean(ast::BooleanValue { value: true, span }),
                    "false" => ast::Value::Boolean(ast::BooleanValue { value: false, span }),
                    "null" => ast::Value::Null(ast::NullValue { span }),
                    other => ast::Value::Enum(ast::EnumValue {
                        value: other.to_string(),
                        span,
                    }),
                })
            },
            GraphQLTokenKind::Dollar if context == ConstContext::AllowVariables => {
                Ok(ast::Value::Variable(self.parse_variable()?))
            },
            _ => Err(self.unexpected()),
        }
    }

    fn parse_list_value(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::ListValue, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect(GraphQLTokenKind::SquareBracketOpen)?;

        let mut values = Vec::new();
        while !self.skip(GraphQLTokenKind::SquareBracketClose)? {
            values.push(self.parse_value(context)?);
        }

        Ok(ast::ListValue {
            values,
            span: self.make_span(start),
        })
    }

    fn parse_object_value(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::ObjectValue, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        let mut fields = Vec::new();
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            fields.push(self.parse_object_field(context)?);
        }

        Ok(ast::ObjectValue {
            fields,
            span: self.make_span(start),
        })
    }

    fn parse_object_field(
        &mut self,
        context: ConstContext,
    ) -> Result<ast::ObjectField, GraphQLParseError> {
        let start = self.current.span.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ast::ObjectField {
            name,
            value,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses `Name`, `[Type]`, and either of those followed by `!`.
    ///
    /// Each `[` counts one level towards the nesting limit.
    fn parse_type(&mut self) -> Result<ast::Type, GraphQLParseError> {
        let start = self.current.span.start;
        let nullable = if self.peek(GraphQLTokenKind::SquareBracketOpen) {
            self.enter_recursion()?;
            let list = self.parse_list_type(start);
            self.exit_recursion();
            ast::NullableType::List(list?)
        } else {
            ast::NullableType::Named(self.parse_named_type()?)
        };

        if self.skip(GraphQLTokenKind::Bang)? {
            return Ok(ast::Type::NonNull(Box::new(ast::NonNullType {
                of_type: nullable,
                span: self.make_span(start),
            })));
        }
        Ok(nullable.into())
    }

    fn parse_list_type(&mut self, start: usize) -> Result<ast::ListType, GraphQLParseError> {
        self.expect(GraphQLTokenKind::SquareBracketOpen)?;
        let of_type = self.parse_type()?;
        self.expect(GraphQLTokenKind::SquareBracketClose)?;
        Ok(ast::ListType {
            of_type: Box::new(of_type),
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        let mut operation_types = vec![self.parse_operation_type_definition()?];
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            operation_types.push(self.parse_operation_type_definition()?);
        }

        Ok(ast::SchemaDefinition {
            directives,
            operation_types,
            span: self.make_span(start),
        })
    }

    fn parse_operation_type_definition(
        &mut self,
    ) -> Result<ast::OperationTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        let operation = self.parse_operation_type()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation,
            named_type,
            span: self.make_span(start),
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
    ) -> Result<ast::ScalarTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        Ok(ast::ScalarTypeDefinition {
            name,
            directives,
            span: self.make_span(start),
        })
    }

    fn parse_object_type_definition(
        &mut self,
    ) -> Result<ast::ObjectTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            name,
            interfaces,
            directives,
            fields,
            span: self.make_span(start),
        })
    }

    /// Parses `implements A B C`. Interfaces are bare names separated only by
    /// ignored tokens (whitespace and commas).
    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::NamedType>, GraphQLParseError> {
        let mut interfaces = Vec::new();
        if !self.peek_keyword("implements") {
            return Ok(interfaces);
        }
        self.advance()?;

        loop {
            interfaces.push(self.parse_named_type()?);
            if !self.peek(GraphQLTokenKind::Name) {
                break;
            }
        }
        Ok(interfaces)
    }

    /// Parses a `{`-delimited, possibly empty, list of field definitions.
    fn parse_fields_definition(&mut self) -> Result<Vec<ast::FieldDefinition>, GraphQLParseError> {
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        let mut fields = Vec::new();
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            fields.push(self.parse_field_definition()?);
        }
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        Ok(ast::FieldDefinition {
            name,
            arguments,
            field_type,
            directives,
            span: self.make_span(start),
        })
    }

    /// Parses the `(name: Type = default, ...)` argument list of a field or
    /// directive definition. Absent parentheses mean no arguments; present
    /// parentheses must hold at least one.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition>, GraphQLParseError> {
        if !self.skip(GraphQLTokenKind::ParenOpen)? {
            return Ok(Vec::new());
        }

        let mut arguments = vec![self.parse_input_value_definition()?];
        while !self.skip(GraphQLTokenKind::ParenClose)? {
            arguments.push(self.parse_input_value_definition()?);
        }
        Ok(arguments)
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<ast::InputValueDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::Constant)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::Constant)?;
        Ok(ast::InputValueDefinition {
            name,
            value_type,
            default_value,
            directives,
            span: self.make_span(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<ast::InterfaceTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            name,
            directives,
            fields,
            span: self.make_span(start),
        })
    }

    fn parse_union_type_definition(
        &mut self,
    ) -> Result<ast::UnionTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        self.expect(GraphQLTokenKind::Equals)?;

        let mut types = vec![self.parse_named_type()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            types.push(self.parse_named_type()?);
        }

        Ok(ast::UnionTypeDefinition {
            name,
            directives,
            types,
            span: self.make_span(start),
        })
    }

    fn parse_enum_type_definition(
        &mut self,
    ) -> Result<ast::EnumTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        let mut values = vec![self.parse_enum_value_definition()?];
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            values.push(self.parse_enum_value_definition()?);
        }

        Ok(ast::EnumTypeDefinition {
            name,
            directives,
            values,
            span: self.make_span(start),
        })
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        Ok(ast::EnumValueDefinition {
            name,
            directives,
            span: self.make_span(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<ast::InputObjectTypeDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Constant)?;
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        let mut fields = Vec::new();
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            fields.push(self.parse_input_value_definition()?);
        }

        Ok(ast::InputObjectTypeDefinition {
            name,
            directives,
            fields,
            span: self.make_span(start),
        })
    }

    fn parse_type_extension_definition(
        &mut self,
    ) -> Result<ast::TypeExtensionDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(ast::TypeExtensionDefinition {
            definition,
            span: self.make_span(start),
        })
    }

    fn parse_directive_definition(
        &mut self,
    ) -> Result<ast::DirectiveDefinition, GraphQLParseError> {
        let start = self.current.span.start;
        self.expect_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect_keyword("on")?;

        let mut locations = vec![self.parse_name()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            locations.push(self.parse_name()?);
        }

        Ok(ast::DirectiveDefinition {
            name,
            arguments,
            locations,
            span: self.make_span(start),
        })
    }
}
