//! Semantic tag classification.
//!
//! Maps a tag's `(name, type, subtype)` triple to a [`StyleId`]. Resolution
//! order is subtype, then type, then tag name, then [`StyleId::Neutral`].
//! Tag names compare ignoring ASCII case; type and subtype values are exact.

/// Which level of the triple produced a style. Higher wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StyleLevel {
    Neutral,
    TagName,
    Type,
    Subtype,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    Neutral,

    // Tag names
    PersName,
    OrgName,
    PlaceName,
    Rs,
    Surplus,

    // `type` values
    Royal,
    Gender,
    Group,
    Complex,
    Divine,
    Theonym,
    Place,
    Building,
    Sanctuary,
    Patronymic,
    Tribe,
    Epithet,
    Ciphers,

    // `subtype` values
    WithoutTitle,
    WithTitle,
    Masculine,
    Feminine,
    DivineSubtype,
}

impl StyleId {
    pub fn level(self) -> StyleLevel {
        use StyleId::*;
        match self {
            Neutral => StyleLevel::Neutral,
            PersName | OrgName | PlaceName | Rs | Surplus => StyleLevel::TagName,
            Royal | Gender | Group | Complex | Divine | Theonym | Place | Building | Sanctuary
            | Patronymic | Tribe | Epithet | Ciphers => StyleLevel::Type,
            WithoutTitle | WithTitle | Masculine | Feminine | DivineSubtype => StyleLevel::Subtype,
        }
    }

    /// Base colour of the style as RGB.
    pub fn rgb(self) -> (u8, u8, u8) {
        use StyleId::*;
        match self {
            Neutral => (0x6b, 0x72, 0x80),
            PersName => (0x3b, 0x82, 0xf6),
            OrgName => (0x22, 0xc5, 0x5e),
            PlaceName => (0xa8, 0x55, 0xf7),
            Rs => (0xea, 0xb3, 0x08),
            Surplus => (0xa8, 0xa2, 0x9e),
            Royal | WithTitle => (0x93, 0x33, 0xea),
            Gender => (0xec, 0x48, 0x99),
            Group => (0x10, 0xb9, 0x81),
            Complex => (0xf5, 0x9e, 0x0b),
            Divine => (0xdc, 0x26, 0x26),
            Theonym => (0xef, 0x44, 0x44),
            Place => (0x63, 0x66, 0xf1),
            Building => (0x4f, 0x46, 0xe5),
            Sanctuary => (0x14, 0xb8, 0xa6),
            Patronymic => (0x03, 0x69, 0xa1),
            Tribe => (0xb4, 0x53, 0x09),
            Epithet => (0xf9, 0x73, 0x16),
            Ciphers => (0x0e, 0x74, 0x90),
            WithoutTitle => (0x25, 0x63, 0xeb),
            Masculine => (0x06, 0xb6, 0xd4),
            Feminine => (0xf4, 0x3f, 0x5e),
            DivineSubtype => (0xc2, 0x41, 0x0c),
        }
    }

    fn for_subtype(subtype: &str) -> Option<Self> {
        Some(match subtype {
            "withoutTitle" => StyleId::WithoutTitle,
            "withTitle" => StyleId::WithTitle,
            "m" => StyleId::Masculine,
            "f" => StyleId::Feminine,
            "divine" => StyleId::DivineSubtype,
            _ => return None,
        })
    }

    fn for_type(type_: &str) -> Option<Self> {
        Some(match type_ {
            "royal" => StyleId::Royal,
            "gender" => StyleId::Gender,
            "group" => StyleId::Group,
            "complex" => StyleId::Complex,
            "divine" => StyleId::Divine,
            "theonym" => StyleId::Theonym,
            "place" => StyleId::Place,
            "building" => StyleId::Building,
            "sanctuary" => StyleId::Sanctuary,
            "patronymic" => StyleId::Patronymic,
            "tribe" => StyleId::Tribe,
            "epithet" => StyleId::Epithet,
            "ciphers" => StyleId::Ciphers,
            _ => return None,
        })
    }

    fn for_tag_name(tag_name: &str) -> Option<Self> {
        Some(match tag_name.to_ascii_lowercase().as_str() {
            "persname" => StyleId::PersName,
            "orgname" => StyleId::OrgName,
            "placename" => StyleId::PlaceName,
            "rs" => StyleId::Rs,
            "surplus" => StyleId::Surplus,
            _ => return None,
        })
    }
}

/// Resolves the style for a tag. Total and side-effect free.
pub fn classify(tag_name: &str, type_: Option<&str>, subtype: Option<&str>) -> StyleId {
    subtype
        .and_then(StyleId::for_subtype)
        .or_else(|| type_.and_then(StyleId::for_type))
        .or_else(|| StyleId::for_tag_name(tag_name))
        .unwrap_or(StyleId::Neutral)
}
