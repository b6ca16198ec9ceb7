use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::offset::Offset;
use crate::subtitle::Subtitle;

const BLOCK_SEPARATOR: &str = "\n\n";

/// An SRT file: subtitles in file order.
///
/// Index labels are round-tripped, never used for ordering or renumbered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    subtitles: Vec<Subtitle>,
}

/// A timestamp that was clamped to zero while shifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedEntry {
    /// Position of the subtitle in the document, starting at 0.
    pub position: usize,
    /// The subtitle's own index label.
    pub index: u32,
    pub start: bool,
    pub end: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftReport {
    pub shifted: usize,
    pub clamped: Vec<ClampedEntry>,
}

impl Document {
    pub fn new(subtitles: Vec<Subtitle>) -> Self {
        Self { subtitles }
    }

    pub fn subtitles(&self) -> &[Subtitle] {
        &self.subtitles
    }

    pub fn len(&self) -> usize {
        self.subtitles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtitles.is_empty()
    }

    pub fn into_subtitles(self) -> Vec<Subtitle> {
        self.subtitles
    }

    /// Shift every subtitle in file order, reporting clamped timestamps.
    pub fn shift_all(&mut self, offset: &Offset) -> ShiftReport {
        let mut report = ShiftReport::default();

        for (position, subtitle) in self.subtitles.iter_mut().enumerate() {
            let result = subtitle.shift(offset);
            report.shifted += 1;
            if result.clamped() {
                report.clamped.push(ClampedEntry {
                    position,
                    index: subtitle.index,
                    start: result.start_clamped,
                    end: result.end_clamped,
                });
            }
        }

        report
    }
}

impl FromStr for Document {
    type Err = ParseError;

    /// Blocks are separated by an empty line. Whitespace around the input
    /// and around each block is dropped, and so are blocks left empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let subtitles = s
            .trim()
            .split(BLOCK_SEPARATOR)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(i, block)| {
                block.parse::<Subtitle>().map_err(|e| ParseError::Block {
                    block: i + 1,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { subtitles })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for subtitle in &self.subtitles {
            write!(f, "{}{}", subtitle, BLOCK_SEPARATOR)?;
        }
        Ok(())
    }
}

impl IntoIterator for Document {
    type Item = Subtitle;
    type IntoIter = std::vec::IntoIter<Subtitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.subtitles.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Subtitle;
    type IntoIter = std::slice::Iter<'a, Subtitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.subtitles.iter()
    }
}
