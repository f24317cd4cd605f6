use super::{Attribute, MarkupNode};

/// The styling-relevant view of a semantic element such as `persName`.
///
/// Carries the element's attributes so panels can show them as a tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub tag_name: String,
    pub attributes: Vec<Attribute>,
}

impl Tag {
    pub fn new(tag_name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
        }
    }

    /// Builds the tag view of an element; `None` for text nodes.
    pub fn from_node(node: &MarkupNode) -> Option<Self> {
        match node {
            MarkupNode::Element {
                tag_name,
                attributes,
                ..
            } => Some(Self::new(tag_name.clone(), attributes.clone())),
            MarkupNode::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    pub fn type_(&self) -> Option<&str> {
        self.attribute("type")
    }

    pub fn subtype(&self) -> Option<&str> {
        self.attribute("subtype")
    }

    /// `rs` only marks content; it never gets a tooltip or pointer interaction.
    pub fn is_interactive(&self) -> bool {
        !self.tag_name.eq_ignore_ascii_case("rs")
    }

    /// `key: value` pairs joined with `, `, skipping valueless attributes.
    ///
    /// Falls back to the tag name when nothing is left. Non-interactive
    /// tags have no tooltip at all.
    pub fn tooltip(&self) -> Option<String> {
        if !self.is_interactive() {
            return None;
        }
        let text = self
            .attributes
            .iter()
            .filter_map(|a| a.value.as_ref().map(|v| format!("{}: {v}", a.name)))
            .collect::<Vec<_>>()
            .join(", ");
        if text.is_empty() {
            Some(self.tag_name.clone())
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_lists_attributes_in_source_order() {
        let tag = Tag::new(
            "persName",
            vec![
                Attribute::new("type", "royal"),
                Attribute::new("subtype", "withTitle"),
            ],
        );
        assert_eq!(
            tag.tooltip().as_deref(),
            Some("type: royal, subtype: withTitle")
        );
    }

    #[test]
    fn tooltip_skips_valueless_attributes() {
        let tag = Tag::new(
            "placeName",
            vec![
                Attribute {
                    name: "ref".into(),
                    value: None,
                },
                Attribute::new("type", "place"),
            ],
        );
        assert_eq!(tag.tooltip().as_deref(), Some("type: place"));
    }

    #[test]
    fn tooltip_falls_back_to_tag_name() {
        let tag = Tag::new("orgName", vec![]);
        assert_eq!(tag.tooltip().as_deref(), Some("orgName"));
    }

    #[test]
    fn rs_is_never_interactive() {
        let tag = Tag::new("rs", vec![Attribute::new("type", "divine")]);
        assert!(!tag.is_interactive());
        assert_eq!(tag.tooltip(), None);
    }

    #[test]
    fn type_and_subtype_accessors() {
        let tag = Tag::new(
            "persName",
            vec![Attribute::new("subtype", "m"), Attribute::new("type", "gender")],
        );
        assert_eq!(tag.type_(), Some("gender"));
        assert_eq!(tag.subtype(), Some("m"));
        assert!(Tag::from_node(&MarkupNode::text("x")).is_none());
    }
}
