// Command-line argument parsing
use std::path::PathBuf;

use clap::Parser;

use crate::error::DedupError;
use crate::interval::{GenomeInterval, load_intervals};
use crate::variant::MergeMode;

#[derive(Parser, Debug)]
#[command(
    name = "vardedup",
    about = "Merges duplicate variants by position with the option of considering alleles. \
             The duplicate appearing later in the file is discarded."
)]
pub struct Args {
    /// Input VCF/BCF file, `-` for stdin
    pub input: PathBuf,
    /// Output VCF/BCF file, `-` for stdout
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,
    /// Merge by position only, ignoring alleles
    #[arg(short = 'p', long)]
    pub merge_by_position: bool,
    /// Comma separated intervals, e.g. chr1:100-200,chr2
    #[arg(short = 'i', long)]
    pub intervals: Option<String>,
    /// File containing one interval per line
    #[arg(short = 'I', long)]
    pub interval_list: Option<PathBuf>,
    /// Do not report options and statistics on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    #[inline]
    pub fn merge_mode(&self) -> MergeMode {
        if self.merge_by_position {
            MergeMode::ByPosition
        } else {
            MergeMode::ByPositionAndAlleles
        }
    }

    /// Resolve `-i` and `-I` into one interval list.
    pub fn load_intervals(&self) -> Result<Vec<GenomeInterval>, DedupError> {
        load_intervals(self.intervals.as_deref(), self.interval_list.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["vardedup", "calls.vcf"]).unwrap();
        assert_eq!(args.input, PathBuf::from("calls.vcf"));
        assert_eq!(args.output, PathBuf::from("-"));
        assert_eq!(args.merge_mode(), MergeMode::ByPositionAndAlleles);
        assert!(args.load_intervals().unwrap().is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_merge_by_position_flag() {
        let args =
            Args::try_parse_from(["vardedup", "-p", "-o", "out.bcf", "calls.bcf"]).unwrap();
        assert_eq!(args.merge_mode(), MergeMode::ByPosition);
        assert_eq!(args.output, PathBuf::from("out.bcf"));
    }

    #[test]
    fn test_intervals_option() {
        let args =
            Args::try_parse_from(["vardedup", "-i", "chr1:1-100,chr2", "calls.vcf"]).unwrap();
        let intervals = args.load_intervals().unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].to_string(), "chr1:1-100");
    }

    #[test]
    fn test_bad_interval_is_argument_error() {
        let args = Args::try_parse_from(["vardedup", "-i", "chr1:9-1", "calls.vcf"]).unwrap();
        assert!(matches!(args.load_intervals(), Err(DedupError::Argument(_))));
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(Args::try_parse_from(["vardedup", "-p"]).is_err());
    }
}
