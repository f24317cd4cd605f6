/// One line of a translation, numbered by position from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationLine {
    pub number: u32,
    pub text: String,
}

/// Translation text split into numbered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationLines {
    lines: Vec<TranslationLine>,
}

impl TranslationLines {
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let lines = text
            .split('\n')
            .zip(1u32..)
            .map(|(line, number)| TranslationLine {
                number,
                text: line.strip_suffix('\r').unwrap_or(line).to_string(),
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[TranslationLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, number: u32) -> Option<&TranslationLine> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.lines.get(index)
    }
}
