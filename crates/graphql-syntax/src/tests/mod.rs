mod graphql_lexer_tests;
mod utils;
