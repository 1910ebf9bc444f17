//! Half-open index selection over directory entries.

use std::fmt;
use std::str::FromStr;

/// A `[start, end)` slice of the sorted directory listing, parsed from
/// the `--range` flag. Accepts `a..b`, `a..` and `..b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    /// Exclusive upper bound; `None` runs to the end of the listing
    pub end: Option<usize>,
}

impl IndexRange {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Select the covered sub-slice, clamped to the item count.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = self.end.unwrap_or(items.len()).min(items.len()).max(start);
        &items[start..end]
    }
}

impl FromStr for IndexRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once("..")
            .ok_or_else(|| format!("invalid range '{}', expected START..END", s))?;

        let start = if a.is_empty() {
            0
        } else {
            a.parse()
                .map_err(|_| format!("invalid range start: {}", a))?
        };
        let end = if b.is_empty() {
            None
        } else {
            Some(b.parse().map_err(|_| format!("invalid range end: {}", b))?)
        };

        if let Some(end) = end
            && end < start
        {
            return Err(format!("range end {} is before start {}", end, start));
        }

        Ok(Self { start, end })
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_range() {
        let range: IndexRange = "11..15".parse().unwrap();
        assert_eq!(range, IndexRange::new(11, Some(15)));
    }

    #[test]
    fn test_parse_open_ends() {
        assert_eq!("3..".parse::<IndexRange>().unwrap(), IndexRange::new(3, None));
        assert_eq!(
            "..5".parse::<IndexRange>().unwrap(),
            IndexRange::new(0, Some(5))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("5".parse::<IndexRange>().is_err());
        assert!("a..b".parse::<IndexRange>().is_err());
        assert!("9..4".parse::<IndexRange>().is_err());
    }

    #[test]
    fn test_slice_clamps_to_len() {
        let items: Vec<u32> = (0..15).collect();
        let range: IndexRange = "11..15".parse().unwrap();
        assert_eq!(range.slice(&items), &[11, 12, 13, 14]);

        let range: IndexRange = "11..100".parse().unwrap();
        assert_eq!(range.slice(&items), &[11, 12, 13, 14]);

        let range: IndexRange = "20..30".parse().unwrap();
        assert!(range.slice(&items).is_empty());
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(IndexRange::new(11, Some(15)).to_string(), "11..15");
        assert_eq!(IndexRange::new(3, None).to_string(), "3..");
    }
}
