//! Helpers shared by the parser tests.

use crate::GraphQLParseError;
use crate::ast;

/// Parses `text`, panicking with the detailed diagnostic on failure.
pub(super) fn parse_ok(text: &str) -> ast::Document {
    let source = crate::Source::new(text);
    match crate::parse_source(&source) {
        Ok(doc) => doc,
        Err(err) => panic!("unexpected parse error:\n{}", err.format_detailed(&source)),
    }
}

/// Parses `text`, panicking if it unexpectedly succeeds.
pub(super) fn parse_err(text: &str) -> GraphQLParseError {
    match crate::parse(text) {
        Ok(doc) => panic!("expected a parse error, got: {doc:?}"),
        Err(err) => err,
    }
}

/// Returns the first definition of `text` as an operation.
pub(super) fn first_operation(text: &str) -> ast::OperationDefinition {
    match parse_ok(text).definitions.into_iter().next() {
        Some(ast::Definition::Operation(op)) => op,
        other => panic!("Expected an operation, got: {other:?}"),
    }
}

/// Returns the first definition of `text`.
pub(super) fn first_definition(text: &str) -> ast::Definition {
    match parse_ok(text).definitions.into_iter().next() {
        Some(definition) => definition,
        None => panic!("Expected at least one definition in {text:?}"),
    }
}

/// Returns the first selection of `selection_set` as a field.
pub(super) fn first_field(selection_set: &ast::SelectionSet) -> &ast::Field {
    match selection_set.selections.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("Expected a field, got: {other:?}"),
    }
}

/// Returns the value of the first argument of `field`.
pub(super) fn first_arg_value(field: &ast::Field) -> &ast::Value {
    match field.arguments.first() {
        Some(argument) => &argument.value,
        None => panic!("Expected field `{}` to have an argument", field.name.value),
    }
}

/// Parses `{ f(arg: <value>) }` and returns the argument value.
pub(super) fn parse_arg_value(value: &str) -> ast::Value {
    let op = first_operation(&format!("{{ f(arg: {value}) }}"));
    first_arg_value(first_field(&op.selection_set)).clone()
}

/// Renders the field names of `selection_set` in source order, with nested
/// selection sets in braces, e.g. `a b { c }`. Arguments and directives are
/// left out.
pub(super) fn selection_outline(selection_set: &ast::SelectionSet) -> String {
    let parts: Vec<String> = selection_set
        .selections
        .iter()
        .map(|selection| match selection {
            ast::Selection::Field(field) => match &field.selection_set {
                Some(nested) => format!("{} {{ {} }}", field.name.value, selection_outline(nested)),
                None => field.name.value.clone(),
            },
            ast::Selection::FragmentSpread(spread) => format!("...{}", spread.name.value),
            ast::Selection::InlineFragment(inline) => {
                format!("... {{ {} }}", selection_outline(&inline.selection_set))
            },
        })
        .collect();
    parts.join(" ")
}
