mod canonical;
mod error;
mod format;
mod sequence;
mod stats;
mod uniform;

pub use canonical::{random_sample_53, Canonical};
pub use error::SamplingError;
pub use format::{format_line, LINE_PREFIX};
pub use sequence::{
    draw_sample, generate_sequence, skip_step, SequenceConfig, SequenceGenerator, DEFAULT_COUNT,
    DEFAULT_SEED,
};
pub use stats::{Histogram, Summary};
pub use uniform::UniformReal;
