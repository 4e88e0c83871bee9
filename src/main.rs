//! VM Simulator - Main Entry Point
//!
//! Usage: vm-sim [OPTIONS] [INPUT]
//!
//! Reads virtual addresses (one per line, decimal or 0x hex) and prints how
//! each one travels through the TLB, page table and physical cache.
//! Set RUST_LOG for finer control over diagnostics than --verbose gives.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use vm_sim::constants::*;
use vm_sim::io::{read_virtual_addresses, write_report, write_results};
use vm_sim::stats::SimStats;
use vm_sim::{SimConfig, TranslationPipeline};

/// Translates virtual addresses through a TLB, page table and physical cache
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of virtual addresses, one per line
    #[arg(default_value = "input_addresses.txt")]
    input: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page (and frame) size in bytes
    #[arg(long, default_value_t = PAGE_SIZE)]
    page_size: u32,

    /// Virtual address space in bytes
    #[arg(long, default_value_t = VIRTUAL_ADDR_SPACE)]
    virtual_size: u32,

    /// Physical memory in bytes
    #[arg(long, default_value_t = PHYSICAL_MEMORY_SIZE)]
    physical_size: u32,

    /// TLB entries
    #[arg(long, default_value_t = TLB_SIZE)]
    tlb_size: usize,

    /// Physical cache blocks
    #[arg(long, default_value_t = CACHE_SIZE)]
    cache_size: usize,

    /// Print hit rates and fault counts after the report
    #[arg(short, long)]
    stats: bool,

    /// Log pipeline activity (allocations, evictions) to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn sim_config(&self) -> SimConfig {
        SimConfig {
            page_size: self.page_size,
            virtual_size: self.virtual_size,
            physical_size: self.physical_size,
            tlb_size: self.tlb_size,
            cache_size: self.cache_size,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Step 1: Build the pipeline
    let mut pipeline =
        TranslationPipeline::new(args.sim_config()).context("invalid machine configuration")?;

    // Step 2: Read virtual addresses
    let vas = read_virtual_addresses(&args.input)
        .with_context(|| format!("failed to load addresses from {}", args.input.display()))?;

    // Step 3: Translate each VA
    let results = pipeline.access_all(&vas);

    // Step 4: Report
    match &args.output {
        Some(path) => {
            write_results(path, &results)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            log::info!("results written to {}", path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_report(&mut out, &results).context("failed to write report")?;
        }
    }

    if args.stats {
        let stats = SimStats::from_results(&results, pipeline.page_table().frames_allocated());
        println!("{}", stats);
    }

    Ok(())
}
