//! First-wins duplicate removal
//!
//! Records stream through a [`DedupFilter`] one at a time. The first record
//! carrying a given [`DedupKey`] is forwarded to the sink; every later record
//! with the same key is dropped. Input order is preserved.
//!
//! The seen-set is never pruned, so memory grows with the number of unique
//! keys in the input. Forgetting a key would let a later duplicate through.

use std::collections::HashSet;
use std::io;

use crate::error::DedupError;
use crate::stats::RunStatistics;
use crate::variant::{DedupKey, MergeMode, Variant};

/// A forward-only stream of variant records
pub trait RecordSource {
    type Record: Variant;

    /// Returns `Ok(None)` once the stream is exhausted.
    fn read_record(&mut self) -> io::Result<Option<Self::Record>>;

    /// Records pulled from the underlying file so far, including any the
    /// source skipped itself. `None` when every record read is returned.
    fn records_read(&self) -> Option<u64> {
        None
    }
}

/// Destination for records that survive deduplication
pub trait RecordSink<R> {
    fn write_record(&mut self, record: &R) -> io::Result<()>;

    /// Flush and close the underlying output.
    fn finish(&mut self) -> io::Result<()>;
}

/// Seen-set plus counters for one run
#[derive(Debug)]
pub struct DedupFilter {
    mode: MergeMode,
    seen: HashSet<DedupKey>,
    stats: RunStatistics,
}

impl DedupFilter {
    pub fn new(mode: MergeMode) -> Self {
        Self {
            mode,
            seen: HashSet::new(),
            stats: RunStatistics::default(),
        }
    }

    /// Returns true when `record` is the first with its key and should be emitted.
    pub fn admit<V: Variant + ?Sized>(&mut self, record: &V) -> bool {
        let key = DedupKey::from_variant(record, self.mode);
        let is_new = self.seen.insert(key);
        self.stats.record(is_new);
        is_new
    }

    #[inline]
    pub fn stats(&self) -> RunStatistics {
        self.stats
    }

    /// Number of distinct keys seen so far
    #[inline]
    pub fn unique_keys(&self) -> usize {
        self.seen.len()
    }
}

/// Drain `source` into `sink`, dropping records whose key was already seen.
///
/// The sink is finished once the source is exhausted. Any read or write
/// failure aborts the run; records already written stay written.
pub fn run<S, W>(source: &mut S, sink: &mut W, mode: MergeMode) -> Result<RunStatistics, DedupError>
where
    S: RecordSource,
    W: RecordSink<S::Record>,
{
    let mut filter = DedupFilter::new(mode);

    loop {
        let record = match source.read_record() {
            Ok(Some(record)) => record,
            Ok(None) => break,
            Err(e) => {
                let pulled = source
                    .records_read()
                    .unwrap_or_else(|| filter.stats().total_variants_seen);
                return Err(DedupError::StreamCorruption {
                    record: pulled + 1,
                    source: e,
                });
            }
        };

        if filter.admit(&record) {
            sink.write_record(&record).map_err(DedupError::SinkWrite)?;
        }
    }

    sink.finish().map_err(DedupError::SinkWrite)?;

    Ok(filter.stats())
}

impl<V: Variant> RecordSource for std::vec::IntoIter<V> {
    type Record = V;

    fn read_record(&mut self) -> io::Result<Option<V>> {
        Ok(self.next())
    }
}

impl<R: Clone> RecordSink<R> for Vec<R> {
    fn write_record(&mut self, record: &R) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
