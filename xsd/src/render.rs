use super::expr::{Field, TypeExpr};

const INDENT: &str = "  ";

/// Serializes `expr` as the pseudo-schema document of `root_name`.
///
/// An object root renders as `root_name:` followed by its indented fields; any other root is
/// written inline as `root_name: <expr>`. The output always ends with exactly one newline.
pub fn render(root_name: &str, expr: &TypeExpr) -> String {
    let mut lines = Vec::new();
    if expr.is_object() {
        lines.push(format!("{root_name}:"));
        render_expr(&mut lines, expr, 1);
    } else {
        render_expr(&mut lines, expr, 0);
        lines[0].insert_str(0, &format!("{root_name}: "));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Appends the lines of `expr` at the given depth. Always appends at least one line.
fn render_expr(lines: &mut Vec<String>, expr: &TypeExpr, depth: usize) {
    let pad = INDENT.repeat(depth);
    match expr {
        TypeExpr::Scalar(scalar) => lines.push(format!("{pad}{scalar}")),
        TypeExpr::Object(fields) if fields.is_empty() => lines.push(format!("{pad}{{}}")),
        TypeExpr::Object(fields) => {
            for field in fields {
                render_field(lines, field, depth);
            }
        }
        TypeExpr::List(inner) => render_wrapper(lines, "list", inner, depth),
        TypeExpr::Optional(inner) => render_wrapper(lines, "optional", inner, depth),
    }
}

fn render_wrapper(lines: &mut Vec<String>, keyword: &str, inner: &TypeExpr, depth: usize) {
    let pad = INDENT.repeat(depth);
    if let TypeExpr::Scalar(scalar) = inner {
        lines.push(format!("{pad}{keyword}<{scalar}>"));
        return;
    }
    lines.push(format!("{pad}{keyword}<"));
    render_expr(lines, inner, depth + 1);
    lines.push(format!("{pad}>"));
}

fn render_field(lines: &mut Vec<String>, field: &Field, depth: usize) {
    let pad = INDENT.repeat(depth);
    if field.expr.is_object() {
        lines.push(format!("{pad}{}:", field.name));
        render_expr(lines, &field.expr, depth + 1);
        return;
    }

    // the first line of a scalar or wrapper carries the field name
    let first = lines.len();
    render_expr(lines, &field.expr, depth);
    lines[first].insert_str(pad.len(), &format!("{}: ", field.name));
}
