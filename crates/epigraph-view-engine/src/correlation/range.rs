use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Widest range a note may reference. Ranges are expanded line by line, so
/// anything wider is rejected when parsed.
pub const MAX_RANGE_LINES: u32 = 1000;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\s*(?:-\s*([0-9]+))?\s*$").expect("line range pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineRangeError {
    #[error("Not a line range: {0:?}")]
    Syntax(String),
    #[error("Line number out of range: {0}")]
    Overflow(String),
    #[error("Line range {0} spans more than {max} lines", max = MAX_RANGE_LINES)]
    TooWide(LineRange),
}

/// An inclusive run of line numbers. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    /// Builds a range from two bounds in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn single(line: u32) -> Self {
        Self::new(line, line)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, line: u32) -> bool {
        (self.start..=self.end).contains(&line)
    }

    pub fn lines(&self) -> BTreeSet<u32> {
        (self.start..=self.end).collect()
    }
}

impl FromStr for LineRange {
    type Err = LineRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RANGE_RE
            .captures(s)
            .ok_or_else(|| LineRangeError::Syntax(s.to_string()))?;
        let bound = |m: regex::Match<'_>| {
            m.as_str()
                .parse::<u32>()
                .map_err(|_| LineRangeError::Overflow(m.as_str().to_string()))
        };
        let start = bound(caps.get(1).ok_or_else(|| LineRangeError::Syntax(s.to_string()))?)?;
        let end = match caps.get(2) {
            Some(m) => bound(m)?,
            None => start,
        };
        let range = LineRange::new(start, end);
        if range.end - range.start >= MAX_RANGE_LINES {
            return Err(LineRangeError::TooWide(range));
        }
        Ok(range)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Expands a line-range string to its line numbers. Empty when it does not parse.
pub fn parse_line_range(s: &str) -> BTreeSet<u32> {
    s.parse::<LineRange>()
        .map(|r| r.lines())
        .unwrap_or_default()
}
