//! [`MarkupParser`] implementation over the `quick-xml` pull reader.
//!
//! The reader emits a flat event stream; [`TreeBuilder`] folds it into a
//! [`MarkupNode`] tree with an explicit stack of open elements. Start pushes,
//! End pops, text is appended to whatever element is on top.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{Attribute, MarkupError, MarkupNode, MarkupParser};

/// The default parser for the annotated-text dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlMarkupParser;

impl MarkupParser for XmlMarkupParser {
    fn parse(&self, input: &str) -> Result<MarkupNode, MarkupError> {
        let mut reader = Reader::from_str(input);
        let mut builder = TreeBuilder::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let (name, attributes) = element_parts(&e)?;
                    builder.open(name, attributes)?;
                }
                Event::Empty(e) => {
                    let (name, attributes) = element_parts(&e)?;
                    builder.open(name.clone(), attributes)?;
                    builder.close(&name)?;
                }
                Event::End(e) => {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    builder.close(&name)?;
                }
                Event::Text(t) => builder.text(t.unescape()?.into_owned())?,
                Event::CData(c) => builder.text(std::str::from_utf8(&c)?.to_string())?,
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes.
                _ => {}
            }
        }

        builder.finish()
    }
}

fn element_parts(e: &BytesStart<'_>) -> Result<(String, Vec<Attribute>), MarkupError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        attributes.push(Attribute {
            name: std::str::from_utf8(attr.key.as_ref())?.to_string(),
            value: Some(attr.unescape_value()?.into_owned()),
        });
    }
    Ok((name, attributes))
}

struct OpenElement {
    tag_name: String,
    attributes: Vec<Attribute>,
    children: Vec<MarkupNode>,
}

/// Builds a single-rooted tree from open/close/text calls.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<OpenElement>,
    root: Option<MarkupNode>,
}

impl TreeBuilder {
    fn open(&mut self, tag_name: String, attributes: Vec<Attribute>) -> Result<(), MarkupError> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(MarkupError::ContentOutsideRoot);
        }
        self.stack.push(OpenElement {
            tag_name,
            attributes,
            children: vec![],
        });
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<(), MarkupError> {
        let open = self
            .stack
            .pop()
            .ok_or_else(|| MarkupError::UnexpectedClose(name.to_string()))?;
        if open.tag_name != name {
            return Err(MarkupError::MismatchedClose {
                expected: open.tag_name,
                found: name.to_string(),
            });
        }

        let node = MarkupNode::Element {
            tag_name: open.tag_name,
            attributes: open.attributes,
            children: open.children,
        };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root = Some(node),
        }
        Ok(())
    }

    fn text(&mut self, content: String) -> Result<(), MarkupError> {
        match self.stack.last_mut() {
            Some(parent) => {
                // Adjacent text and CDATA runs merge into one node.
                if let Some(MarkupNode::Text(prev)) = parent.children.last_mut() {
                    prev.push_str(&content);
                } else if !content.is_empty() {
                    parent.children.push(MarkupNode::Text(content));
                }
                Ok(())
            }
            None if content.trim().is_empty() => Ok(()),
            None => Err(MarkupError::ContentOutsideRoot),
        }
    }

    fn finish(mut self) -> Result<MarkupNode, MarkupError> {
        if let Some(open) = self.stack.pop() {
            return Err(MarkupError::Unclosed(open.tag_name));
        }
        self.root.ok_or(MarkupError::NoRoot)
    }
}
