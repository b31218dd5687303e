use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;

use vardedup::io::{describe_path, open_pair};
use vardedup::utils::{format_elapsed, percent};
use vardedup::{Args, MergeMode, run};

#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    let args = Args::parse();
    let mode = args.merge_mode();

    // intervals are resolved before any variant file is touched
    let intervals = args.load_intervals()?;

    if !args.quiet {
        eprintln!("vardedup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!();
        eprintln!("options:     input VCF file        {}", describe_path(&args.input, "<stdin>"));
        eprintln!("         [o] output VCF file       {}", describe_path(&args.output, "<stdout>"));
        eprintln!(
            "         [p] merge by              {}",
            match mode {
                MergeMode::ByPosition => "position",
                MergeMode::ByPositionAndAlleles => "position and alleles",
            }
        );
        eprintln!("         [i] intervals             {} intervals", intervals.len());
        eprintln!();
    }

    let start = Instant::now();
    let (mut reader, mut writer) = open_pair(&args.input, &args.output, intervals)?;

    let stats = run(&mut reader, &mut writer, mode).with_context(|| {
        format!("deduplication of {} failed", args.input.display())
    })?;

    if !args.quiet {
        eprint!("{stats}");
        eprintln!(
            "       Duplicates Discarded                {} ({:.2}%)",
            stats.duplicates_dropped(),
            percent(stats.duplicates_dropped(), stats.total_variants_seen)
        );
        eprintln!();
        eprintln!("done in {}", format_elapsed(start.elapsed()));
    }

    Ok(())
}
