use mtseq_core::{format_line, SequenceConfig};
use std::io::{self, Write};

mod logging;

fn main() -> anyhow::Result<()> {
    // Takes no arguments or environment; the seed and count are the defaults
    logging::init("warn", false);

    let config = SequenceConfig::default();
    let samples = config.generate();
    tracing::debug!(seed = config.seed, count = samples.len(), "generated");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", format_line(&samples))?;
    out.flush()?;

    Ok(())
}
