//! Run statistics

use std::fmt;

/// Counters for one dedup run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    pub total_variants_seen: u64,
    pub unique_variants_emitted: u64,
}

impl RunStatistics {
    /// Count one input record, and one emitted record when `emitted` is set.
    #[inline]
    pub fn record(&mut self, emitted: bool) {
        self.total_variants_seen += 1;
        if emitted {
            self.unique_variants_emitted += 1;
        }
    }

    #[inline]
    pub fn duplicates_dropped(&self) -> u64 {
        self.total_variants_seen - self.unique_variants_emitted
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "stats: Total Number of Observed Variants   {}",
            self.total_variants_seen
        )?;
        writeln!(
            f,
            "       Total Number of Unique Variants     {}",
            self.unique_variants_emitted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut stats = RunStatistics::default();
        stats.record(true);
        stats.record(false);
        stats.record(true);
        assert_eq!(stats.total_variants_seen, 3);
        assert_eq!(stats.unique_variants_emitted, 2);
        assert_eq!(stats.duplicates_dropped(), 1);
    }

    #[test]
    fn test_display() {
        let stats = RunStatistics {
            total_variants_seen: 10,
            unique_variants_emitted: 8,
        };
        let text = stats.to_string();
        assert!(text.contains("Observed Variants   10"));
        assert!(text.contains("Unique Variants     8"));
    }
}
