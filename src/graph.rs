//! Graphviz rendering of serialized trees.
//!
//! Works on the text form directly and knows nothing about node kinds: every
//! non-blank line becomes a graph node labelled with the line's text, and its parent
//! is the closest preceding line with smaller indentation. The result can be fed to
//! `dot -Tpng` to get an image.

use std::fmt::Write;

struct Open {
    indent: usize,
    id: usize,
}

/// Build a `digraph` from indentation-delimited tree text.
pub fn to_dot(text: &str) -> String {
    let mut out = String::from("digraph AST {\n");
    let mut stack: Vec<Open> = Vec::new();
    let mut next_id = 0;

    for line in text.lines() {
        let label = line.trim();
        if label.is_empty() {
            continue;
        }
        let indent = line.len() - line.trim_start_matches(' ').len();

        let id = next_id;
        next_id += 1;
        let _ = writeln!(out, "  n{id} [label=\"{}\"];", escape_label(label));

        while stack.last().is_some_and(|open| open.indent >= indent) {
            stack.pop();
        }
        if let Some(parent) = stack.last() {
            let _ = writeln!(out, "  n{} -> n{id};", parent.id);
        }
        stack.push(Open { indent, id });
    }

    out.push_str("}\n");
    tracing::debug!(nodes = next_id, "rendered graph");
    out
}

fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            c => escaped.push(c),
        }
    }
    escaped
}
