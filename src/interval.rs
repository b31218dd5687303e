//! Genomic interval restriction
//!
//! Intervals come from `-i` (comma separated) and `-I` (one per line). The
//! reader uses them to skip records outside every interval, so the dedup
//! filter only ever sees records inside the requested regions.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::DedupError;

/// A 1-based, inclusive range on one chromosome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeInterval {
    pub chromosome: String,
    pub start: usize,
    pub end: usize,
}

impl GenomeInterval {
    /// True when `start..=end` on `chromosome` shares at least one base with this interval.
    #[inline]
    pub fn overlaps(&self, chromosome: &str, start: usize, end: usize) -> bool {
        self.chromosome == chromosome && start <= self.end && end >= self.start
    }
}

impl fmt::Display for GenomeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (1, usize::MAX) => write!(f, "{}", self.chromosome),
            (s, e) if s == e => write!(f, "{}:{}", self.chromosome, s),
            (s, e) => write!(f, "{}:{}-{}", self.chromosome, s, e),
        }
    }
}

impl FromStr for GenomeInterval {
    type Err = DedupError;

    /// Accepts `chr`, `chr:pos` and `chr:start-end`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (chromosome, range) = match s.rsplit_once(':') {
            Some((chrom, range)) => (chrom, Some(range)),
            None => (s, None),
        };
        if chromosome.is_empty() {
            return Err(DedupError::argument(format!("interval {s:?} has no chromosome")));
        }

        let parse_pos = |p: &str| -> Result<usize, DedupError> {
            match p.trim().parse::<usize>() {
                Ok(0) | Err(_) => Err(DedupError::argument(format!(
                    "interval {s:?} has an invalid position {p:?}"
                ))),
                Ok(n) => Ok(n),
            }
        };

        let (start, end) = match range {
            None => (1, usize::MAX),
            Some(range) => match range.split_once('-') {
                Some((a, b)) => (parse_pos(a)?, parse_pos(b)?),
                None => {
                    let p = parse_pos(range)?;
                    (p, p)
                }
            },
        };
        if start > end {
            return Err(DedupError::argument(format!(
                "interval {s:?} starts after it ends"
            )));
        }

        Ok(Self {
            chromosome: chromosome.to_owned(),
            start,
            end,
        })
    }
}

/// Parse a comma separated interval list. Empty entries are skipped.
pub fn parse_interval_list(spec: &str) -> Result<Vec<GenomeInterval>, DedupError> {
    spec.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Read one interval per line; blank lines and `#` comments are skipped.
pub fn read_interval_file<P: AsRef<Path>>(path: P) -> Result<Vec<GenomeInterval>, DedupError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        DedupError::argument(format!("cannot read interval list {}: {e}", path.display()))
    })?;

    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::parse)
        .collect()
}

/// Combine `-i` and `-I` into a single list, `-i` entries first.
pub fn load_intervals(
    spec: Option<&str>,
    file: Option<&Path>,
) -> Result<Vec<GenomeInterval>, DedupError> {
    let mut intervals = match spec {
        Some(spec) => parse_interval_list(spec)?,
        None => Vec::new(),
    };
    if let Some(file) = file {
        intervals.extend(read_interval_file(file)?);
    }
    Ok(intervals)
}

/// True when `intervals` is empty or any interval overlaps `start..=end`.
#[inline]
pub fn overlaps_any(intervals: &[GenomeInterval], chromosome: &str, start: usize, end: usize) -> bool {
    intervals.is_empty() || intervals.iter().any(|i| i.overlaps(chromosome, start, end))
}
