mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_syntax::GraphQLLexer;
use graphql_syntax::Source;

// ─── Group 1: Document Parsing ──────────────────────────

fn document_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_parse");

    let large_schema = fixtures::generators::synthetic_schema(500);
    let nested_10 = fixtures::generators::deeply_nested_query(10);
    let nested_60 = fixtures::generators::deeply_nested_query(60);
    let many_ops = fixtures::generators::many_operations(50);

    let inputs: &[(&str, &str)] = &[
        ("simple_query", fixtures::SIMPLE_QUERY),
        ("kitchen_sink", fixtures::KITCHEN_SINK),
        ("starwars_schema", fixtures::STARWARS_SCHEMA),
        ("synthetic_schema_500", large_schema.as_str()),
        ("nested_depth_10", nested_10.as_str()),
        ("nested_depth_60", nested_60.as_str()),
        ("many_operations_50", many_ops.as_str()),
    ];

    for &(label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(label, &input, |b, input| {
            b.iter(|| black_box(graphql_syntax::parse(input)))
        });
    }

    group.finish();
}

// ─── Group 2: Lexer (Tokenization Only) ─────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let large_schema = Source::new(fixtures::generators::synthetic_schema(500));
    let kitchen_sink = Source::new(fixtures::KITCHEN_SINK);
    let starwars = Source::new(fixtures::STARWARS_SCHEMA);

    let inputs: &[(&str, &Source)] = &[
        ("kitchen_sink", &kitchen_sink),
        ("starwars_schema", &starwars),
        ("synthetic_schema_500", &large_schema),
    ];

    for &(label, source) in inputs {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                for token in GraphQLLexer::new(source) {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

// ─── Group 3: Cross-Parser Comparisons ──────────────────

fn compare_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_parsers");

    let large_schema = fixtures::generators::synthetic_schema(500);
    let schemas: &[(&str, &str)] = &[
        ("starwars", fixtures::STARWARS_SCHEMA),
        ("synthetic_500", large_schema.as_str()),
    ];
    for &(label, input) in schemas {
        group.bench_with_input(
            BenchmarkId::new("graphql_syntax", label),
            &input,
            |b, input| b.iter(|| black_box(graphql_syntax::parse(input))),
        );
        group.bench_with_input(
            BenchmarkId::new("graphql_parser", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(graphql_parser::schema::parse_schema::<String>(input))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("apollo_parser", label),
            &input,
            |b, input| b.iter(|| black_box(apollo_parser::Parser::new(input).parse())),
        );
    }

    let queries: &[(&str, &str)] = &[
        ("simple", fixtures::SIMPLE_QUERY),
        ("kitchen_sink", fixtures::KITCHEN_SINK),
    ];
    for &(label, input) in queries {
        group.bench_with_input(
            BenchmarkId::new("graphql_syntax", label),
            &input,
            |b, input| b.iter(|| black_box(graphql_syntax::parse(input))),
        );
        group.bench_with_input(
            BenchmarkId::new("graphql_parser", label),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(graphql_parser::query::parse_query::<String>(input))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("apollo_parser", label),
            &input,
            |b, input| b.iter(|| black_box(apollo_parser::Parser::new(input).parse())),
        );
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, document_parse, lexer, compare_parsers);
criterion_main!(benches);
