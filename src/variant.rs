//! Dedup keys for variant records
//!
//! A record is reduced to a [`DedupKey`] before it is looked up in the
//! seen-set. Which fields take part depends on the [`MergeMode`].

use noodles::vcf::variant::RecordBuf;

/// How two records are judged to be the same variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Same chromosome and position, alleles ignored. Distinct alleles at
    /// one site collapse onto the first record seen there.
    ByPosition,
    /// Same chromosome, position and ordered allele list (exact strings).
    #[default]
    ByPositionAndAlleles,
}

/// The fields of a variant record that take part in deduplication
pub trait Variant {
    fn chromosome(&self) -> &str;

    /// 1-based position; 0 when the record has none.
    fn position(&self) -> usize;

    /// Reference allele first, then alternates in file order.
    fn alleles(&self) -> Vec<&str>;

    /// Last reference base covered, `POS + len(REF) - 1`.
    fn reference_end(&self) -> usize {
        let ref_len = self.alleles().first().map_or(1, |r| r.len().max(1));
        self.position() + ref_len - 1
    }
}

impl Variant for RecordBuf {
    fn chromosome(&self) -> &str {
        self.reference_sequence_name()
    }

    fn position(&self) -> usize {
        self.variant_start().map(|p| p.get()).unwrap_or(0)
    }

    fn alleles(&self) -> Vec<&str> {
        std::iter::once(self.reference_bases())
            .chain(self.alternate_bases().as_ref().iter().map(String::as_str))
            .collect()
    }
}

/// Key used for the seen-set
///
/// `alleles` is `None` in [`MergeMode::ByPosition`], so keys built in
/// different modes never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub chromosome: String,
    pub position: usize,
    pub alleles: Option<Vec<String>>,
}

impl DedupKey {
    pub fn from_variant<V: Variant + ?Sized>(record: &V, mode: MergeMode) -> Self {
        let alleles = match mode {
            MergeMode::ByPosition => None,
            MergeMode::ByPositionAndAlleles => {
                Some(record.alleles().into_iter().map(str::to_owned).collect())
            }
        };

        Self {
            chromosome: record.chromosome().to_owned(),
            position: record.position(),
            alleles,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal in-memory variant used across the crate's tests
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TestVariant {
        pub chrom: &'static str,
        pub pos: usize,
        pub alleles: Vec<&'static str>,
        pub id: usize,
    }

    pub fn var(chrom: &'static str, pos: usize, alleles: &[&'static str], id: usize) -> TestVariant {
        TestVariant {
            chrom,
            pos,
            alleles: alleles.to_vec(),
            id,
        }
    }

    impl Variant for TestVariant {
        fn chromosome(&self) -> &str {
            self.chrom
        }

        fn position(&self) -> usize {
            self.pos
        }

        fn alleles(&self) -> Vec<&str> {
            self.alleles.clone()
        }
    }

    #[test]
    fn test_position_key_ignores_alleles() {
        let a = DedupKey::from_variant(&var("chr1", 100, &["A", "G"], 0), MergeMode::ByPosition);
        let b = DedupKey::from_variant(&var("chr1", 100, &["A", "T"], 1), MergeMode::ByPosition);
        assert_eq!(a, b);
        assert!(a.alleles.is_none());
    }

    #[test]
    fn test_allele_key_is_order_sensitive() {
        let mode = MergeMode::ByPositionAndAlleles;
        let a = DedupKey::from_variant(&var("chr1", 100, &["A", "G", "T"], 0), mode);
        let b = DedupKey::from_variant(&var("chr1", 100, &["A", "T", "G"], 1), mode);
        assert_ne!(a, b);
    }

    #[test]
    fn test_allele_key_is_case_sensitive() {
        let mode = MergeMode::ByPositionAndAlleles;
        let a = DedupKey::from_variant(&var("chr1", 100, &["A", "G"], 0), mode);
        let b = DedupKey::from_variant(&var("chr1", 100, &["a", "g"], 1), mode);
        assert_ne!(a, b);
    }

    #[test]
    fn test_chromosome_separates_keys() {
        let mode = MergeMode::ByPosition;
        let a = DedupKey::from_variant(&var("chr1", 100, &["A"], 0), mode);
        let b = DedupKey::from_variant(&var("chr2", 100, &["A"], 1), mode);
        assert_ne!(a, b);
    }

    #[test]
    fn test_end_spans_reference_allele() {
        assert_eq!(var("chr1", 95, &["ACGTACGTACGT", "A"], 0).reference_end(), 106);
        assert_eq!(var("chr1", 100, &["A", "G"], 0).reference_end(), 100);
        assert_eq!(var("chr1", 100, &[], 0).reference_end(), 100);
    }

    #[test]
    fn test_default_mode_uses_alleles() {
        assert_eq!(MergeMode::default(), MergeMode::ByPositionAndAlleles);
    }
}
