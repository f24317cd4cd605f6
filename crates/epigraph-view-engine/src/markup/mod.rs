//! # Markup Tree
//!
//! The annotated-text dialect (TEI-flavoured XML) is parsed into a small,
//! library-independent tree of [`MarkupNode`]s. Everything downstream (the
//! tree walker, the line segmenter) pattern-matches on this tree and never
//! sees the XML reader.
//!
//! ## Modules
//!
//! - **`xml`**: [`XmlMarkupParser`], the default [`MarkupParser`] over `quick-xml`
//! - **`tag`**: [`Tag`], the name/type/subtype view of an element used for styling
//!
//! ## Failure Model
//!
//! [`parse_markup`] never fails. Input the parser rejects is returned as a
//! single [`MarkupNode::Text`] holding the raw input, so the caller still has
//! something to render.

pub mod tag;
pub mod xml;

pub use tag::Tag;
pub use xml::XmlMarkupParser;

/// A single attribute on an element, kept in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` when the host parser reports the attribute without a value.
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// A node of the parsed markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// A run of character data, already unescaped.
    Text(String),
    /// An element with its attributes and ordered children.
    Element {
        tag_name: String,
        attributes: Vec<Attribute>,
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text(content.into())
    }

    pub fn element(
        tag_name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<MarkupNode>,
    ) -> Self {
        MarkupNode::Element {
            tag_name: tag_name.into(),
            attributes,
            children,
        }
    }

    /// Returns the tag name for elements, `None` for text.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            MarkupNode::Element { tag_name, .. } => Some(tag_name),
            MarkupNode::Text(_) => None,
        }
    }

    /// True if this is an element whose name matches `name` ignoring ASCII case.
    pub fn is_element(&self, name: &str) -> bool {
        self.tag_name()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(name))
    }

    /// Looks up an attribute value by exact name.
    ///
    /// Attributes present without a value report `None`, the same as absent ones.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            MarkupNode::Element { attributes, .. } => attributes
                .iter()
                .find(|a| a.name == name)
                .and_then(|a| a.value.as_deref()),
            MarkupNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Element { children, .. } => children,
            MarkupNode::Text(_) => &[],
        }
    }

    /// True if any descendant (not this node itself) is an `lb` element.
    pub fn has_descendant_line_break(&self) -> bool {
        self.children()
            .iter()
            .any(|c| c.is_element("lb") || c.has_descendant_line_break())
    }

    /// Concatenated text of all descendant text runs, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            MarkupNode::Text(t) => out.push_str(t),
            MarkupNode::Element { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }
}

/// Errors a [`MarkupParser`] may report. Callers going through
/// [`parse_markup`] never see these; they are degraded to opaque text.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
    #[error("Invalid UTF-8 in markup: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Unexpected closing tag </{0}>")]
    UnexpectedClose(String),
    #[error("Mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClose { expected: String, found: String },
    #[error("Unclosed element <{0}>")]
    Unclosed(String),
    #[error("Document has no root element")]
    NoRoot,
    #[error("Content found outside the root element")]
    ContentOutsideRoot,
}

/// A pluggable markup parser producing the root element of the document.
///
/// Implementations report malformed input as a [`MarkupError`]; they should
/// not attempt recovery themselves.
pub trait MarkupParser {
    fn parse(&self, input: &str) -> Result<MarkupNode, MarkupError>;
}

/// Parses `input` with the default XML parser, degrading to opaque text on error.
pub fn parse_markup(input: &str) -> MarkupNode {
    parse_markup_with(&XmlMarkupParser, input)
}

/// Parses `input` with `parser`, degrading to opaque text on error.
pub fn parse_markup_with<P: MarkupParser + ?Sized>(parser: &P, input: &str) -> MarkupNode {
    match parser.parse(input) {
        Ok(root) => root,
        Err(e) => {
            log::warn!("Falling back to plain text for unparsable markup: {e}");
            MarkupNode::Text(input.to_string())
        }
    }
}
