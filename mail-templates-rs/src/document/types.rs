//! Document tree types

use std::collections::BTreeSet;

use crate::document::html::scan_placeholders;

/// Inline style map: CSS property/value pairs rendered into a `style`
/// attribute. Styles are template-authored constants, never caller input.
pub type Style = &'static [(&'static str, &'static str)];

/// A complete email document: head metadata, hidden preview text, and the
/// body tree. Template content is fixed at build time; only placeholder
/// tokens (`%%_NAME_%%`) vary per send.
#[derive(Debug)]
pub struct Document {
    /// `<meta>` name/content pairs emitted in the document head
    pub meta: &'static [(&'static str, &'static str)],
    /// Preview text shown by email clients, hidden in the rendered body
    pub preview: &'static str,
    /// Inline style applied to `<body>`
    pub body_style: Style,
    /// Top-level body nodes
    pub children: Vec<Node>,
}

/// A typed node in the document tree.
///
/// Literal text runs are emitted verbatim (they may carry entity references
/// such as `&copy;`); placeholder tokens inside runs and inside `href`,
/// `src`, and `alt` attributes are replaced at serialization time.
#[derive(Debug)]
pub enum Node {
    /// Block wrapper, serialized as `<div>`
    Container { style: Style, children: Vec<Node> },
    /// Horizontal layout row, serialized as a full-width table
    Row { style: Style, columns: Vec<Node> },
    /// A cell within a [`Node::Row`]
    Column {
        width: Option<&'static str>,
        style: Style,
        children: Vec<Node>,
    },
    /// Paragraph of inline content
    Text { style: Style, children: Vec<Node> },
    /// Inline wrapper
    Span { style: Style, children: Vec<Node> },
    /// Bold inline content, serialized as a bare `<strong>`
    Strong { children: Vec<Node> },
    /// Hyperlink
    Link {
        href: &'static str,
        style: Style,
        new_tab: bool,
        children: Vec<Node>,
    },
    /// Call-to-action link, always opened in a new tab
    Button {
        href: &'static str,
        style: Style,
        children: Vec<Node>,
    },
    /// Remote image; never fetched by this crate
    Image {
        src: &'static str,
        width: &'static str,
        height: &'static str,
        alt: &'static str,
        style: Style,
    },
    /// Literal text run
    Run(&'static str),
}

impl Document {
    /// Collect every placeholder token name present in this document,
    /// including the preview text and link/image attributes.
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        scan_placeholders(self.preview, &mut found);
        for node in &self.children {
            node.collect_placeholders(&mut found);
        }
        found
    }
}

impl Node {
    pub fn container(style: Style, children: Vec<Node>) -> Self {
        Node::Container { style, children }
    }

    pub fn row(style: Style, columns: Vec<Node>) -> Self {
        Node::Row { style, columns }
    }

    pub fn column(width: Option<&'static str>, style: Style, children: Vec<Node>) -> Self {
        Node::Column {
            width,
            style,
            children,
        }
    }

    pub fn text(style: Style, children: Vec<Node>) -> Self {
        Node::Text { style, children }
    }

    pub fn span(style: Style, children: Vec<Node>) -> Self {
        Node::Span { style, children }
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong { children }
    }

    pub fn link(href: &'static str, style: Style, children: Vec<Node>) -> Self {
        Node::Link {
            href,
            style,
            new_tab: false,
            children,
        }
    }

    pub fn link_new_tab(href: &'static str, style: Style, children: Vec<Node>) -> Self {
        Node::Link {
            href,
            style,
            new_tab: true,
            children,
        }
    }

    pub fn button(href: &'static str, style: Style, children: Vec<Node>) -> Self {
        Node::Button {
            href,
            style,
            children,
        }
    }

    pub fn image(src: &'static str, width: &'static str, height: &'static str, style: Style) -> Self {
        Node::Image {
            src,
            width,
            height,
            alt: "",
            style,
        }
    }

    pub fn image_alt(
        src: &'static str,
        width: &'static str,
        height: &'static str,
        alt: &'static str,
        style: Style,
    ) -> Self {
        Node::Image {
            src,
            width,
            height,
            alt,
            style,
        }
    }

    pub fn run(text: &'static str) -> Self {
        Node::Run(text)
    }

    fn collect_placeholders(&self, found: &mut BTreeSet<String>) {
        match self {
            Node::Container { children, .. }
            | Node::Column { children, .. }
            | Node::Text { children, .. }
            | Node::Span { children, .. }
            | Node::Strong { children } => {
                for child in children {
                    child.collect_placeholders(found);
                }
            }
            Node::Row { columns, .. } => {
                for column in columns {
                    column.collect_placeholders(found);
                }
            }
            Node::Link { href, children, .. } | Node::Button { href, children, .. } => {
                scan_placeholders(href, found);
                for child in children {
                    child.collect_placeholders(found);
                }
            }
            Node::Image { src, alt, .. } => {
                scan_placeholders(src, found);
                scan_placeholders(alt, found);
            }
            Node::Run(text) => scan_placeholders(text, found),
        }
    }
}
