#![doc = include_str!("../README.md")]
//! Synthetic transaction file generator.
//!
//! Produces inputs large enough to exercise the bounded pool's eviction path.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use eyre::{Result, WrapErr};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

const ID_BYTES: usize = 32;
const SIGNATURE_BYTES: usize = 65;

/// Transaction file generator CLI.
#[derive(Parser, Debug)]
#[command(name = "txgen", about = "Synthetic transaction file generator for txrank")]
struct Args {
    /// Number of transactions to write.
    #[arg(long, default_value = "10000")]
    count: u64,

    /// Output file.
    #[arg(long, default_value = "data/transactions.txt")]
    out: PathBuf,

    /// RNG seed.
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Largest gas amount generated.
    #[arg(long, default_value = "1000000")]
    max_gas: u64,

    /// Largest fee per gas generated.
    #[arg(long, default_value = "1000.0")]
    max_fee_per_gas: f64,

    /// Fraction of transactions generated with a zero gas amount.
    #[arg(long, default_value = "0.01")]
    zero_ratio: f64,

    /// Enable verbose logging.
    #[arg(long)]
    verbose: bool,
}

/// Parameters for random transaction lines.
#[derive(Debug, Clone, Copy)]
struct LineShape {
    max_gas: u64,
    max_fee_per_gas: f64,
    zero_ratio: f64,
}

impl LineShape {
    fn from_args(args: &Args) -> Result<Self> {
        if !(0.0..=1.0).contains(&args.zero_ratio) {
            eyre::bail!("zero ratio must be within [0, 1], got {}", args.zero_ratio);
        }
        if !(args.max_fee_per_gas.is_finite() && args.max_fee_per_gas > 0.0) {
            eyre::bail!("max fee per gas must be positive, got {}", args.max_fee_per_gas);
        }
        if args.max_gas == 0 {
            eyre::bail!("max gas must be positive");
        }
        Ok(Self {
            max_gas: args.max_gas,
            max_fee_per_gas: args.max_fee_per_gas,
            zero_ratio: args.zero_ratio,
        })
    }

    fn line(&self, rng: &mut impl Rng) -> String {
        let id: [u8; ID_BYTES] = rng.r#gen();
        let mut signature = [0u8; SIGNATURE_BYTES];
        rng.fill(&mut signature[..]);

        let gas = if rng.gen_bool(self.zero_ratio) { 0 } else { rng.gen_range(1..=self.max_gas) };
        let fee_per_gas = rng.gen_range(0.0..self.max_fee_per_gas);

        format!(
            "0x{} gas:{gas} feePerGas:{fee_per_gas:.6} 0x{}",
            hex::encode(id),
            hex::encode(signature)
        )
    }
}

fn main() -> Result<()> {
    txrank_cli::Backtracing::enable();

    let args = Args::parse();
    txrank_cli::init_tracing(args.verbose);

    let shape = LineShape::from_args(&args)?;
    info!(
        count = args.count,
        out = %args.out.display(),
        seed = args.seed,
        "Generating transactions"
    );

    let start = Instant::now();
    let file = File::create(&args.out)
        .wrap_err_with(|| format!("create output file {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    let mut rng = StdRng::seed_from_u64(args.seed);

    for _ in 0..args.count {
        writeln!(writer, "{}", shape.line(&mut rng)).wrap_err("writing to output file")?;
    }
    writer.flush().wrap_err("flushing output file")?;

    info!(count = args.count, elapsed = ?start.elapsed(), "Done");
    Ok(())
}
