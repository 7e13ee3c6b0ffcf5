use std::fmt::Write;

/// A query whose selection sets nest `depth` levels deep, each level
/// selecting `id` next to the nested field.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::from("query Nested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}level{level} {{\n{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// A document of `count` small named operations, each taking a variable.
pub fn many_operations(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let _ = writeln!(
            out,
            "query Op{i}($id: ID!, $first: Int = {i}) {{\n  \
             node(id: $id) {{ id name items(first: $first) {{ key{i}: value }} }}\n}}\n",
        );
    }
    out
}

/// A schema of `count` object types, each with a handful of fields that
/// reference neighboring types, plus one enum and one input type per ten
/// objects.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let next = (i + 1) % count.max(1);
        let _ = writeln!(
            out,
            "type Type{i} implements Node @key(fields: \"id\") {{\n  \
             id: ID!\n  \
             name: String\n  \
             next: Type{next}\n  \
             list(first: Int = 10, filter: Filter{f}): [Type{next}!]!\n}}\n",
            f = i / 10,
        );
        if i % 10 == 0 {
            let f = i / 10;
            let _ = writeln!(out, "enum Kind{f} {{ A B C D }}\n");
            let _ = writeln!(out, "input Filter{f} {{ kind: Kind{f} = A, limit: Int }}\n");
        }
    }
    out
}
