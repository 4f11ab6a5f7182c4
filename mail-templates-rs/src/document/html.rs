//! HTML serialization with placeholder substitution
//!
//! Serializes a [`Document`] tree to a single self-contained HTML string.
//! Substitution happens during the walk: literal template text is emitted
//! verbatim, while caller-supplied values are entity-escaped wherever they
//! land (text or attribute position).

use std::collections::{BTreeMap, BTreeSet};

use crate::document::types::{Document, Node, Style};

/// Opening marker of a placeholder token.
const TOKEN_OPEN: &str = "%%_";
/// Closing marker of a placeholder token.
const TOKEN_CLOSE: &str = "_%%";

/// Serialize a document to HTML, replacing every `%%_NAME_%%` token with its
/// value from `values`. Tokens without a value are left in place; callers
/// validate completeness beforehand.
pub fn render_document(doc: &Document, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>");
    out.push_str("<html lang=\"en\">");
    out.push_str("<head><meta charset=\"utf-8\"/>");
    for (name, content) in doc.meta {
        out.push_str("<meta name=\"");
        out.push_str(name);
        out.push_str("\" content=\"");
        out.push_str(content);
        out.push_str("\"/>");
    }
    out.push_str("</head>");

    out.push_str("<body");
    push_style(&mut out, doc.body_style);
    out.push('>');

    // Hidden preview line, surfaced by mail clients next to the subject
    if !doc.preview.is_empty() {
        out.push_str(
            "<div style=\"display:none;overflow:hidden;line-height:1px;\
             opacity:0;max-height:0;max-width:0\">",
        );
        substitute_into(&mut out, doc.preview, values);
        out.push_str("</div>");
    }

    for node in &doc.children {
        push_node(&mut out, node, values);
    }

    out.push_str("</body></html>");
    out
}

fn push_node(out: &mut String, node: &Node, values: &BTreeMap<String, String>) {
    match node {
        Node::Container { style, children } => {
            out.push_str("<div");
            push_style(out, style);
            out.push('>');
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</div>");
        }
        Node::Row { style, columns } => {
            out.push_str("<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\"");
            push_style(out, style);
            out.push_str("><tbody><tr>");
            for column in columns {
                push_node(out, column, values);
            }
            out.push_str("</tr></tbody></table>");
        }
        Node::Column {
            width,
            style,
            children,
        } => {
            out.push_str("<td");
            if let Some(width) = width {
                out.push_str(" width=\"");
                out.push_str(width);
                out.push('"');
            }
            push_style(out, style);
            out.push('>');
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</td>");
        }
        Node::Text { style, children } => {
            out.push_str("<p");
            push_style(out, style);
            out.push('>');
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</p>");
        }
        Node::Span { style, children } => {
            out.push_str("<span");
            push_style(out, style);
            out.push('>');
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</span>");
        }
        Node::Strong { children } => {
            out.push_str("<strong>");
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</strong>");
        }
        Node::Link {
            href,
            style,
            new_tab,
            children,
        } => {
            out.push_str("<a");
            push_attr(out, "href", href, values);
            if *new_tab {
                out.push_str(" target=\"_blank\"");
            }
            push_style(out, style);
            out.push('>');
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</a>");
        }
        Node::Button {
            href,
            style,
            children,
        } => {
            out.push_str("<a");
            push_attr(out, "href", href, values);
            out.push_str(" target=\"_blank\"");
            push_style(out, style);
            out.push('>');
            for child in children {
                push_node(out, child, values);
            }
            out.push_str("</a>");
        }
        Node::Image {
            src,
            width,
            height,
            alt,
            style,
        } => {
            out.push_str("<img");
            push_attr(out, "src", src, values);
            out.push_str(" width=\"");
            out.push_str(width);
            out.push_str("\" height=\"");
            out.push_str(height);
            out.push('"');
            if !alt.is_empty() {
                push_attr(out, "alt", alt, values);
            }
            push_style(out, style);
            out.push_str("/>");
        }
        Node::Run(text) => substitute_into(out, text, values),
    }
}

/// Emit a `style="prop:value;..."` attribute. CSS values may contain double
/// quotes (font stacks), which must be entity-escaped inside the attribute.
fn push_style(out: &mut String, style: Style) {
    if style.is_empty() {
        return;
    }
    out.push_str(" style=\"");
    for (i, (property, value)) in style.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(property);
        out.push(':');
        for c in value.chars() {
            if c == '"' {
                out.push_str("&quot;");
            } else {
                out.push(c);
            }
        }
    }
    out.push('"');
}

fn push_attr(out: &mut String, name: &str, raw: &str, values: &BTreeMap<String, String>) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    substitute_into(out, raw, values);
    out.push('"');
}

/// Copy `raw` into `out`, replacing each `%%_NAME_%%` token with the escaped
/// value from `values`. Literal segments are copied verbatim.
pub(crate) fn substitute_into(out: &mut String, raw: &str, values: &BTreeMap<String, String>) {
    let mut rest = raw;
    while let Some(start) = rest.find(TOKEN_OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + TOKEN_OPEN.len()..];
        let Some(end) = after.find(TOKEN_CLOSE) else {
            // Unterminated marker, emit as-is
            out.push_str(&rest[start..]);
            return;
        };
        let name = &after[..end];
        match values.get(name) {
            Some(value) => escape_into(out, value),
            None => out.push_str(&rest[start..start + TOKEN_OPEN.len() + end + TOKEN_CLOSE.len()]),
        }
        rest = &after[end + TOKEN_CLOSE.len()..];
    }
    out.push_str(rest);
}

/// Collect placeholder token names present in `raw`.
pub(crate) fn scan_placeholders(raw: &str, found: &mut BTreeSet<String>) {
    let mut rest = raw;
    while let Some(start) = rest.find(TOKEN_OPEN) {
        let after = &rest[start + TOKEN_OPEN.len()..];
        let Some(end) = after.find(TOKEN_CLOSE) else {
            return;
        };
        found.insert(after[..end].to_string());
        rest = &after[end + TOKEN_CLOSE.len()..];
    }
}

/// Entity-escape a caller-supplied value for embedding in text or attribute
/// position.
fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
