#![no_main]

use graphql_syntax::Source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::new(text);
    if let Err(err) = graphql_syntax::parse_source(&source) {
        // Rendering must not panic for any offset the parser reports.
        let _ = err.format_detailed(&source);
    }
});
