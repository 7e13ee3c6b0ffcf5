#![no_main]

use graphql_syntax::GraphQLLexer;
use graphql_syntax::Source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::new(text);
    let mut last_end = 0;
    for token in GraphQLLexer::new(&source) {
        let Ok(token) = token else {
            break;
        };
        assert!(token.span.start >= last_end);
        assert!(token.span.end <= source.len());
        if token.kind.is_punctuator() {
            assert_eq!(source.slice(token.span), token.kind.description());
        }
        last_end = token.span.end;
    }
});
