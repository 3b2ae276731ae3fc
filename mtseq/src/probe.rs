use clap::{Parser, Subcommand, ValueEnum};
use mt19937::Mt19937;
use mtseq_core::{
    random_sample_53, Histogram, SequenceGenerator, Summary, UniformReal, DEFAULT_COUNT,
    DEFAULT_SEED,
};
use std::fmt::Display;
use std::io::{self, Write};

mod logging;

const BAR_WIDTH: usize = 50;

#[derive(Parser)]
#[command(name = "mtseq-probe")]
#[command(about = "Inspect mt19937 streams and the uniform samples drawn from them", long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump raw 32-bit engine outputs
    Raw {
        #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
        seed: u32,

        /// Number of outputs to print
        #[arg(short = 'n', long = "count", default_value_t = 20)]
        count: usize,

        /// Outputs to discard before printing
        #[arg(long = "start", default_value_t = 0)]
        start: u64,
    },

    /// Print retained samples, one per line
    Samples {
        #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
        seed: u32,

        #[arg(short = 'n', long = "count", default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Raw outputs discarded after each sample
        #[arg(long = "skip", default_value_t = 1)]
        skip: u64,

        #[arg(short = 'm', long = "mapping", value_enum, default_value_t = Mapping::Float)]
        mapping: Mapping,

        #[arg(long = "low", default_value_t = 0.0, allow_negative_numbers = true)]
        low: f64,

        #[arg(long = "high", default_value_t = 1.0, allow_negative_numbers = true)]
        high: f64,
    },

    /// Summarise a contiguous stream of samples with a text histogram
    Stats {
        #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
        seed: u32,

        #[arg(long = "size", default_value_t = 10_000)]
        size: usize,

        #[arg(long = "bins", default_value_t = 20)]
        bins: usize,

        #[arg(short = 'm', long = "mapping", value_enum, default_value_t = Mapping::Float)]
        mapping: Mapping,

        #[arg(long = "low", default_value_t = 0.0, allow_negative_numbers = true)]
        low: f64,

        #[arg(long = "high", default_value_t = 1.0, allow_negative_numbers = true)]
        high: f64,
    },
}

/// How raw engine output becomes a sample.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mapping {
    /// Single precision, one draw (C++ uniform_real_distribution<float>)
    Float,
    /// Double precision, two draws (C++ uniform_real_distribution<double>)
    Double,
    /// 53-bit double, two draws (numpy legacy random_sample)
    #[value(name = "legacy53")]
    Legacy53,
}

enum Samples {
    Single(Vec<f32>),
    Double(Vec<f64>),
}

impl Samples {
    fn draw(
        mapping: Mapping,
        seed: u32,
        count: usize,
        skip: u64,
        low: f64,
        high: f64,
    ) -> anyhow::Result<Self> {
        let samples = match mapping {
            Mapping::Float => {
                let dist = UniformReal::new(low as f32, high as f32)?;
                let mut gen = SequenceGenerator::with_distribution(seed, dist).with_skip(skip);
                Samples::Single(gen.generate_many(count))
            }
            Mapping::Double => {
                let dist = UniformReal::new(low, high)?;
                let mut gen = SequenceGenerator::with_distribution(seed, dist).with_skip(skip);
                Samples::Double(gen.generate_many(count))
            }
            Mapping::Legacy53 => {
                let dist = UniformReal::new(low, high)?;
                let mut rng = Mt19937::new(seed);
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    let u = random_sample_53(&mut rng);
                    values.push(dist.low() + (dist.high() - dist.low()) * u);
                    rng.discard(skip);
                }
                Samples::Double(values)
            }
        };
        Ok(samples)
    }

    fn summary(&self) -> anyhow::Result<Summary> {
        Ok(match self {
            Samples::Single(v) => Summary::from_samples(v.as_slice())?,
            Samples::Double(v) => Summary::from_samples(v.as_slice())?,
        })
    }

    fn histogram(&self, bins: usize, low: f64, high: f64) -> anyhow::Result<Histogram> {
        Ok(match self {
            Samples::Single(v) => Histogram::build(v.as_slice(), bins, low, high)?,
            Samples::Double(v) => Histogram::build(v.as_slice(), bins, low, high)?,
        })
    }

    fn write_lines(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Samples::Single(v) => write_values(out, v.as_slice()),
            Samples::Double(v) => write_values(out, v.as_slice()),
        }
    }
}

fn write_values<T: Display>(out: &mut impl Write, values: &[T]) -> io::Result<()> {
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

fn write_stats(out: &mut impl Write, summary: &Summary, hist: &Histogram) -> io::Result<()> {
    writeln!(out, "count = {}", summary.count)?;
    writeln!(out, "mean = {:.3}", summary.mean)?;
    writeln!(out, "std = {:.3}", summary.std_dev)?;
    writeln!(out, "min = {}", summary.min)?;
    writeln!(out, "max = {}", summary.max)?;
    writeln!(out)?;

    let peak = hist.counts().iter().copied().max().unwrap_or(0).max(1);
    let densities = hist.densities();
    for (i, (&count, density)) in hist.counts().iter().zip(densities).enumerate() {
        let (start, end) = hist.bin_edges(i);
        let bar = "#".repeat(count * BAR_WIDTH / peak);
        writeln!(
            out,
            "[{:>8.3}, {:>8.3}) {:>8} {:>7.3} {}",
            start, end, count, density, bar
        )?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, true);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Raw { seed, count, start } => {
            let mut rng = Mt19937::new(seed);
            rng.discard(start);
            tracing::debug!(seed, start, count, "dumping raw outputs");

            for i in start..start + count as u64 {
                let val = rng.next_u32();
                writeln!(out, "[{}] = 0x{:08x} ({})", i, val, val)?;
            }
        }
        Command::Samples {
            seed,
            count,
            skip,
            mapping,
            low,
            high,
        } => {
            let samples = Samples::draw(mapping, seed, count, skip, low, high)?;
            samples.write_lines(&mut out)?;
        }
        Command::Stats {
            seed,
            size,
            bins,
            mapping,
            low,
            high,
        } => {
            tracing::info!(seed, size, bins, ?mapping, "summarising");
            let samples = Samples::draw(mapping, seed, size, 0, low, high)?;
            let summary = samples.summary()?;
            let hist = samples.histogram(bins, low, high)?;
            write_stats(&mut out, &summary, &hist)?;
        }
    }

    out.flush()?;
    Ok(())
}
