//! # Ops Module
//!
//! The computations behind each check, kept free of I/O so they can be
//! tested directly. Every check in [`crate::check`] formats one of the
//! reports produced here.

use crate::error::{ToolcheckError, ToolcheckResult};

// -----------------------------------------------------------------------------
// FIXED OPERANDS
// -----------------------------------------------------------------------------

pub const INT_A: i32 = 15;
pub const INT_B: i32 = 7;

pub const FLOAT_X: f64 = 3.14159;
pub const FLOAT_Y: f64 = 2.71828;

pub const WORD_LEFT: &str = "Hello";
pub const WORD_RIGHT: &str = "World";

pub const SEQUENCE: [i32; 5] = [1, 2, 3, 4, 5];

/// Upper bound (inclusive) of the counting loop.
pub const COUNT_TO: i32 = 5;

pub const FACTORIAL_INPUT: u32 = 5;

/// Lowest age classified as [`Band::Adult`].
pub const ADULT_AGE: i32 = 18;
/// Lowest age classified as [`Band::Teenager`].
pub const TEEN_AGE: i32 = 13;

// -----------------------------------------------------------------------------
// INTEGER ARITHMETIC
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerReport {
    pub a: i32,
    pub b: i32,
    pub sum: i32,
    pub difference: i32,
    pub product: i32,
    /// Truncated toward zero.
    pub quotient: i32,
    /// Takes the sign of `a`.
    pub remainder: i32,
}

impl IntegerReport {
    pub fn compute(a: i32, b: i32) -> ToolcheckResult<Self> {
        let overflow =
            |op: &str| ToolcheckError::arithmetic(format!("{} {} {} overflows i32", a, op, b));

        Ok(Self {
            a,
            b,
            sum: a.checked_add(b).ok_or_else(|| overflow("+"))?,
            difference: a.checked_sub(b).ok_or_else(|| overflow("-"))?,
            product: a.checked_mul(b).ok_or_else(|| overflow("*"))?,
            quotient: checked_div(a, b)?,
            remainder: checked_rem(a, b)?,
        })
    }
}

fn checked_div(a: i32, b: i32) -> ToolcheckResult<i32> {
    if b == 0 {
        return Err(ToolcheckError::arithmetic(format!("{} / 0: division by zero", a)));
    }
    a.checked_div(b)
        .ok_or_else(|| ToolcheckError::arithmetic(format!("{} / {} overflows i32", a, b)))
}

fn checked_rem(a: i32, b: i32) -> ToolcheckResult<i32> {
    if b == 0 {
        return Err(ToolcheckError::arithmetic(format!("{} % 0: division by zero", a)));
    }
    a.checked_rem(b)
        .ok_or_else(|| ToolcheckError::arithmetic(format!("{} % {} overflows i32", a, b)))
}

// -----------------------------------------------------------------------------
// FLOATING POINT
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatReport {
    pub x: f64,
    pub y: f64,
    pub sum: f64,
    pub product: f64,
    pub sqrt_x: f64,
    pub x_squared: f64,
}

impl FloatReport {
    pub fn compute(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            sum: x + y,
            product: x * y,
            sqrt_x: x.sqrt(),
            x_squared: x.powf(2.0),
        }
    }
}

// -----------------------------------------------------------------------------
// STRINGS AND SEQUENCES
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatReport {
    pub left: String,
    pub right: String,
    pub combined: String,
    /// Length of `combined` in UTF-8 bytes.
    pub len: usize,
}

impl ConcatReport {
    /// Joins `left` and `right` with a single space.
    pub fn compute(left: &str, right: &str) -> Self {
        let combined = format!("{} {}", left, right);
        let len = combined.len();
        Self {
            left: left.to_string(),
            right: right.to_string(),
            combined,
            len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    pub values: Vec<i32>,
    pub sum: i64,
}

impl SequenceReport {
    pub fn compute(values: &[i32]) -> Self {
        let mut sum = 0i64;
        for &value in values {
            sum += i64::from(value);
        }
        Self {
            values: values.to_vec(),
            sum,
        }
    }

    /// Every element followed by one space, trailing space included.
    pub fn spaced(&self) -> String {
        let mut out = String::new();
        for value in &self.values {
            out.push_str(&value.to_string());
            out.push(' ');
        }
        out
    }
}

// -----------------------------------------------------------------------------
// AGE BANDS
// -----------------------------------------------------------------------------

/// The three ordinal age classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    Child,
    Teenager,
    Adult,
}

impl Band {
    /// Total over `i32`: split at exactly [`TEEN_AGE`] and [`ADULT_AGE`].
    pub fn classify(age: i32) -> Self {
        if age >= ADULT_AGE {
            Band::Adult
        } else if age >= TEEN_AGE {
            Band::Teenager
        } else {
            Band::Child
        }
    }

    /// The sentence printed by the classification check.
    pub fn sentence(self) -> &'static str {
        match self {
            Band::Child => "You are a child.",
            Band::Teenager => "You are a teenager.",
            Band::Adult => "You are an adult.",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Band::Child => write!(f, "child"),
            Band::Teenager => write!(f, "teenager"),
            Band::Adult => write!(f, "adult"),
        }
    }
}

// -----------------------------------------------------------------------------
// AGE PARSING
// -----------------------------------------------------------------------------

/// Result of reading an age line under the lenient policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeReading {
    /// A leading integer was found and fits in `i32`.
    Parsed(i32),
    /// No digits were found; the age defaults to 0.
    Missing,
    /// The leading integer was out of range and was clamped.
    Saturated(i32),
}

impl AgeReading {
    pub fn value(self) -> i32 {
        match self {
            AgeReading::Parsed(v) | AgeReading::Saturated(v) => v,
            AgeReading::Missing => 0,
        }
    }
}

/// Reads the leading integer of `line` the way stream extraction does.
///
/// Leading whitespace is skipped, one optional sign is accepted, and
/// everything after the last digit is ignored.
pub fn parse_age_lenient(line: &str) -> AgeReading {
    let bytes = line.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    // Magnitude is capped just past i32::MIN's so it cannot overflow i64.
    let limit = i64::from(i32::MAX) + 1;
    let mut magnitude: i64 = 0;
    let mut digits = 0usize;
    let mut clamped = false;

    while let Some(&byte) = bytes.get(pos) {
        if !byte.is_ascii_digit() {
            break;
        }
        digits += 1;
        if !clamped {
            magnitude = magnitude * 10 + i64::from(byte - b'0');
            if magnitude > limit {
                clamped = true;
            }
        }
        pos += 1;
    }

    if digits == 0 {
        return AgeReading::Missing;
    }

    let signed = if negative { -magnitude } else { magnitude };
    match i32::try_from(signed) {
        Ok(v) if !clamped => AgeReading::Parsed(v),
        _ if negative => AgeReading::Saturated(i32::MIN),
        _ => AgeReading::Saturated(i32::MAX),
    }
}

/// Parses the trimmed line as exactly one `i32`.
pub fn parse_age_strict(line: &str) -> ToolcheckResult<i32> {
    let trimmed = line.trim();
    trimmed
        .parse::<i32>()
        .map_err(|e| ToolcheckError::input(format!("invalid age '{}': {}", trimmed, e)))
}

// -----------------------------------------------------------------------------
// FACTORIAL
// -----------------------------------------------------------------------------

/// `n!` by direct recursion. `None` when the result overflows `u64`.
pub fn factorial(n: u32) -> Option<u64> {
    if n <= 1 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(u64::from(n))
}
