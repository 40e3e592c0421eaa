//! # Check Module
//!
//! Trait-based system for the demonstration steps run by the
//! [`Runner`](crate::runner::Runner). Each check implements [`Check`],
//! gets a header from the runner, and writes its own result lines.
//!
//! ## Provided Checks
//! 1. [`GreetingCheck`] — reads a name, greets it.
//! 2. [`ArithmeticCheck`] — integer `+ - * / %` on 15 and 7.
//! 3. [`FloatCheck`] — `f64` sum, product, sqrt and square.
//! 4. [`StringCheck`] — concatenation and length.
//! 5. [`SequenceCheck`] — prints and sums a five-element vector.
//! 6. [`ClassificationCheck`] — reads an age, prints its band.
//! 7. [`CountingCheck`] — counts 1 to 5.
//! 8. [`FactorialCheck`] — recursive `5!`.

use crate::config::{AgePolicy, RunnerConfig};
use crate::console::Console;
use crate::error::{ToolcheckError, ToolcheckResult};
use crate::format::format_float;
use crate::ops::{self, AgeReading, Band, ConcatReport, FloatReport, IntegerReport, SequenceReport};

use std::io::{BufRead, Write};

use tracing::{debug, warn};

// -----------------------------------------------------------------------------
// CHECK TRAIT
// -----------------------------------------------------------------------------

/// What a check sees while it runs.
pub struct CheckContext<'a, R, W> {
    pub console: &'a mut Console<R, W>,
    pub config: &'a RunnerConfig,
}

/// One self-contained demonstration step.
///
/// The runner prints `Test <n>: <title>` before calling [`Check::run`] and
/// a blank line after it, so implementors only write their result lines.
pub trait Check<R, W> {
    /// Header text, e.g. `"Basic Input/Output"`.
    fn title(&self) -> &'static str;

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()>;
}

/// The eight checks in the order they run.
pub fn default_checks<R: BufRead, W: Write>() -> Vec<Box<dyn Check<R, W>>> {
    vec![
        Box::new(GreetingCheck),
        Box::new(ArithmeticCheck),
        Box::new(FloatCheck),
        Box::new(StringCheck),
        Box::new(SequenceCheck),
        Box::new(ClassificationCheck),
        Box::new(CountingCheck),
        Box::new(FactorialCheck),
    ]
}

// -----------------------------------------------------------------------------
// 1. GREETING
// -----------------------------------------------------------------------------

pub struct GreetingCheck;

impl<R: BufRead, W: Write> Check<R, W> for GreetingCheck {
    fn title(&self) -> &'static str {
        "Basic Input/Output"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let name = ctx.console.prompt("Enter your name: ")?;
        ctx.console.line(format!("Hello, {}!", name))
    }
}

// -----------------------------------------------------------------------------
// 2. INTEGER ARITHMETIC
// -----------------------------------------------------------------------------

pub struct ArithmeticCheck;

impl<R: BufRead, W: Write> Check<R, W> for ArithmeticCheck {
    fn title(&self) -> &'static str {
        "Arithmetic Operations"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let r = IntegerReport::compute(ops::INT_A, ops::INT_B)?;
        let console = &mut *ctx.console;

        console.line(format!("a = {}, b = {}", r.a, r.b))?;
        console.line(format!("a + b = {}", r.sum))?;
        console.line(format!("a - b = {}", r.difference))?;
        console.line(format!("a * b = {}", r.product))?;
        console.line(format!("a / b = {}", r.quotient))?;
        console.line(format!("a % b = {}", r.remainder))
    }
}

// -----------------------------------------------------------------------------
// 3. FLOATING POINT
// -----------------------------------------------------------------------------

pub struct FloatCheck;

impl<R: BufRead, W: Write> Check<R, W> for FloatCheck {
    fn title(&self) -> &'static str {
        "Floating Point Operations"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let r = FloatReport::compute(ops::FLOAT_X, ops::FLOAT_Y);
        let style = ctx.config.float_style;
        let f = |v: f64| format_float(v, style);
        let console = &mut *ctx.console;

        console.line(format!("x = {}, y = {}", f(r.x), f(r.y)))?;
        console.line(format!("x + y = {}", f(r.sum)))?;
        console.line(format!("x * y = {}", f(r.product)))?;
        console.line(format!("sqrt(x) = {}", f(r.sqrt_x)))?;
        console.line(format!("pow(x, 2) = {}", f(r.x_squared)))
    }
}

// -----------------------------------------------------------------------------
// 4. STRINGS
// -----------------------------------------------------------------------------

pub struct StringCheck;

impl<R: BufRead, W: Write> Check<R, W> for StringCheck {
    fn title(&self) -> &'static str {
        "String Operations"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let r = ConcatReport::compute(ops::WORD_LEFT, ops::WORD_RIGHT);
        let console = &mut *ctx.console;

        console.line(format!("str1 = {}", r.left))?;
        console.line(format!("str2 = {}", r.right))?;
        console.line(format!("combined = {}", r.combined))?;
        console.line(format!("Length of combined = {}", r.len))
    }
}

// -----------------------------------------------------------------------------
// 5. SEQUENCE
// -----------------------------------------------------------------------------

pub struct SequenceCheck;

impl<R: BufRead, W: Write> Check<R, W> for SequenceCheck {
    fn title(&self) -> &'static str {
        "Vector Operations"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let r = SequenceReport::compute(&ops::SEQUENCE);
        let console = &mut *ctx.console;

        console.text("Numbers: ")?;
        console.line(r.spaced())?;
        console.line(format!("Sum of numbers = {}", r.sum))
    }
}

// -----------------------------------------------------------------------------
// 6. CLASSIFICATION
// -----------------------------------------------------------------------------

pub struct ClassificationCheck;

impl ClassificationCheck {
    fn read_age(line: &str, policy: AgePolicy) -> ToolcheckResult<i32> {
        match policy {
            AgePolicy::Strict => ops::parse_age_strict(line),
            AgePolicy::Lenient => {
                let reading = ops::parse_age_lenient(line);
                match reading {
                    AgeReading::Parsed(_) => {}
                    AgeReading::Missing => {
                        warn!(input = %line, "no integer in age input, using 0")
                    }
                    AgeReading::Saturated(v) => {
                        warn!(input = %line, clamped = v, "age out of range, clamped")
                    }
                }
                Ok(reading.value())
            }
        }
    }
}

impl<R: BufRead, W: Write> Check<R, W> for ClassificationCheck {
    fn title(&self) -> &'static str {
        "Conditional Statements"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let line = ctx.console.prompt("Enter your age: ")?;
        let age = Self::read_age(&line, ctx.config.age_policy)?;
        let band = Band::classify(age);
        debug!(age, %band, "classified age");
        ctx.console.line(band.sentence())
    }
}

// -----------------------------------------------------------------------------
// 7. COUNTING
// -----------------------------------------------------------------------------

pub struct CountingCheck;

impl<R: BufRead, W: Write> Check<R, W> for CountingCheck {
    fn title(&self) -> &'static str {
        "Loop Operations"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        ctx.console
            .line(format!("Counting from 1 to {}:", ops::COUNT_TO))?;
        for i in 1..=ops::COUNT_TO {
            ctx.console.line(format!("  {}", i))?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 8. FACTORIAL
// -----------------------------------------------------------------------------

pub struct FactorialCheck;

impl<R: BufRead, W: Write> Check<R, W> for FactorialCheck {
    fn title(&self) -> &'static str {
        "Function Calls"
    }

    fn run(&self, ctx: &mut CheckContext<'_, R, W>) -> ToolcheckResult<()> {
        let n = ops::FACTORIAL_INPUT;
        let value = ops::factorial(n)
            .ok_or_else(|| ToolcheckError::arithmetic(format!("{}! overflows u64", n)))?;
        ctx.console.line(format!("Factorial of {} = {}", n, value))
    }
}
