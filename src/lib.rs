//! vardedup - first-wins deduplication of VCF/BCF variant records
//!
//! Records that share a chromosome and position (and, by default, the same
//! ordered allele list) are collapsed onto the first one seen. Everything
//! else is passed through in input order.
//!
//! # Example
//!
//! ```ignore
//! use vardedup::{MergeMode, io::open_pair, run};
//!
//! let (mut reader, mut writer) = open_pair("in.vcf".as_ref(), "out.vcf".as_ref(), Vec::new())?;
//! let stats = run(&mut reader, &mut writer, MergeMode::ByPosition)?;
//! eprint!("{stats}");
//! ```

pub mod algorithm;
pub mod args;
pub mod error;
pub mod interval;
pub mod io;
pub mod stats;
pub mod utils;
pub mod variant;

// Re-export commonly used items
pub use algorithm::{DedupFilter, RecordSink, RecordSource, run};
pub use args::Args;
pub use error::DedupError;
pub use interval::GenomeInterval;
pub use stats::RunStatistics;
pub use variant::{DedupKey, MergeMode, Variant};
