//! Configuration: CLI flags and environment variables → `AdderConfig`.
//!
//! Environment:
//!   - `BINADD_MODE`: `unsigned` (default) or `signed`
//!   - `BINADD_MIN`:  inclusive lower bound (default: the mode's minimum)
//!   - `BINADD_MAX`:  inclusive upper bound (default: the mode's maximum)

use adder_kernel::{AdderConfig, Mode};
use clap::{Args, ValueEnum};

use crate::error::{RuntimeError, RuntimeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    #[default]
    Unsigned,
    Signed,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Unsigned => Mode::Unsigned,
            ModeArg::Signed => Mode::Signed,
        }
    }
}

/// Arithmetic configuration shared by every subcommand that adds.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Arithmetic mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Unsigned, env = "BINADD_MODE")]
    pub mode: ModeArg,

    /// Shorthand for `--mode signed`
    #[arg(short, long)]
    pub signed: bool,

    /// Inclusive lower operand bound
    #[arg(long, allow_negative_numbers = true, env = "BINADD_MIN")]
    pub min: Option<i64>,

    /// Inclusive upper operand bound
    #[arg(long, allow_negative_numbers = true, env = "BINADD_MAX")]
    pub max: Option<i64>,
}

impl ConfigArgs {
    pub fn mode(&self) -> Mode {
        if self.signed {
            Mode::Signed
        } else {
            self.mode.into()
        }
    }

    pub fn to_config(&self) -> RuntimeResult<AdderConfig> {
        build_config(self.mode(), self.min, self.max)
    }
}

/// Build a config, filling missing bounds from the mode's limits.
pub fn build_config(mode: Mode, min: Option<i64>, max: Option<i64>) -> RuntimeResult<AdderConfig> {
    let (lo, hi) = mode.limits();
    let config = AdderConfig::for_mode(mode).with_bounds(min.unwrap_or(lo), max.unwrap_or(hi));
    validate_config(&config)?;
    Ok(config)
}

/// Reject inverted bounds and bounds outside the mode's limits.
pub fn validate_config(config: &AdderConfig) -> RuntimeResult<()> {
    let (lo, hi) = config.mode.limits();
    if config.min > config.max {
        return Err(RuntimeError::Config(format!(
            "lower bound {} is above upper bound {}",
            config.min, config.max
        )));
    }
    if config.min < lo || config.max > hi {
        return Err(RuntimeError::Config(format!(
            "bounds {} - {} leave the {} range {} - {}",
            config.min, config.max, config.mode, lo, hi
        )));
    }
    Ok(())
}
