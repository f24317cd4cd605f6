use crate::rendering::{Line, LineModel, RenderFragment, TaggedSpan};

/// Renders the model as one row per line: `"{label:<3} | {content}"`.
///
/// The label is the line number, `-` when there is none. Spans render as
/// `{tag/type/subtype: …}` with absent levels left out, and whitespace runs
/// collapse to a single space.
pub fn outline(model: &LineModel) -> String {
    model
        .lines()
        .iter()
        .map(outline_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn outline_line(line: &Line) -> String {
    let label = line
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut raw = String::new();
    for s in &line.segments {
        push_fragment(s, &mut raw);
    }
    let content = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{label:<3} | {content}").trim_end().to_string()
}

fn push_fragment(f: &RenderFragment, out: &mut String) {
    match f {
        RenderFragment::Span(span) => push_span(span, out),
        RenderFragment::LineNumber(_) => {}
        other => other.push_display(out),
    }
}

fn push_span(span: &TaggedSpan, out: &mut String) {
    out.push('{');
    out.push_str(&span.tag.tag_name);
    for level in [span.tag.type_(), span.tag.subtype()].into_iter().flatten() {
        out.push('/');
        out.push_str(level);
    }
    out.push_str(": ");
    for c in &span.children {
        push_fragment(c, out);
    }
    out.push('}');
}
