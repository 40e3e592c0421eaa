//! # CLI Module
//!
//! Command-line surface of the `toolcheck` binary and its mapping onto
//! [`RunnerConfig`].

use clap::Parser;

use crate::config::{AgePolicy, FloatStyle, RunnerConfig, DEFAULT_TOOLCHAIN, MAX_FLOAT_DIGITS};

#[derive(Parser, Debug)]
#[command(name = "toolcheck")]
#[command(about = "Runs eight labeled checks to confirm a compiler toolchain works", long_about = None)]
pub struct Cli {
    /// Compiler name shown in the banners.
    #[arg(long, default_value = DEFAULT_TOOLCHAIN)]
    pub toolchain: String,

    /// Print floats with this many significant digits (%g style).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=MAX_FLOAT_DIGITS as i64))]
    pub float_digits: Option<u8>,

    /// Fail instead of defaulting to 0 when the age is not an integer.
    #[arg(long)]
    pub strict_age: bool,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> RunnerConfig {
        let age_policy = if self.strict_age {
            AgePolicy::Strict
        } else {
            AgePolicy::Lenient
        };
        let float_style = match self.float_digits {
            Some(n) => FloatStyle::Significant(usize::from(n)),
            None => FloatStyle::Shortest,
        };

        RunnerConfig::default()
            .with_toolchain(self.toolchain.clone())
            .with_age_policy(age_policy)
            .with_float_style(float_style)
    }

    /// Default `EnvFilter` directive for the given `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
