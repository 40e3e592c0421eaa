//! # Config Module
//!
//! Run-wide settings. Built from the command line in `main.rs`, or via
//! [`RunnerConfig::default`] in tests.

/// Name shown in the opening and closing banners when none is given.
pub const DEFAULT_TOOLCHAIN: &str = "Rust";

/// Largest precision accepted for [`FloatStyle::Significant`]. Seventeen
/// significant digits are enough to round-trip any `f64`.
pub const MAX_FLOAT_DIGITS: usize = 17;

/// How the age line is turned into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgePolicy {
    /// Take the leading integer, default to 0 when there is none, saturate
    /// when out of range.
    #[default]
    Lenient,
    /// The trimmed line must be exactly one `i32`.
    Strict,
}

/// How floating-point results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatStyle {
    /// Rust's `Display`: the shortest text that round-trips.
    #[default]
    Shortest,
    /// `%g` with the given number of significant digits.
    Significant(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub toolchain: String,
    pub age_policy: AgePolicy,
    pub float_style: FloatStyle,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
            age_policy: AgePolicy::default(),
            float_style: FloatStyle::default(),
        }
    }
}

impl RunnerConfig {
    pub fn with_toolchain(mut self, toolchain: impl Into<String>) -> Self {
        self.toolchain = toolchain.into();
        self
    }

    pub fn with_age_policy(mut self, policy: AgePolicy) -> Self {
        self.age_policy = policy;
        self
    }

    pub fn with_float_style(mut self, style: FloatStyle) -> Self {
        self.float_style = style;
        self
    }
}
