//! # Runner Module
//!
//! The demonstration runner: prints the opening banner, runs every
//! registered check in order under a numbered header, then prints the
//! closing banner. There is no branching between checks and no retry; the
//! first error aborts the run.

use crate::check::{default_checks, Check, CheckContext};
use crate::config::RunnerConfig;
use crate::console::Console;
use crate::error::ToolcheckResult;

use std::io::{BufRead, Write};

use tracing::{debug, info};

/// Width of the `=` rules framing both banners.
pub const RULE_WIDTH: usize = 43;

pub struct Runner<R, W> {
    config: RunnerConfig,
    checks: Vec<Box<dyn Check<R, W>>>,
}

impl<R: BufRead, W: Write> Runner<R, W> {
    /// Creates a runner with no checks registered.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            checks: Vec::new(),
        }
    }

    /// Creates a runner with the standard eight checks.
    pub fn with_default_checks(config: RunnerConfig) -> Self {
        let mut runner = Self::new(config);
        for check in default_checks() {
            runner.register(check);
        }
        runner
    }

    /// Appends a check; it runs after every check registered before it.
    pub fn register(&mut self, check: Box<dyn Check<R, W>>) {
        self.checks.push(check);
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Titles of the registered checks, in run order.
    pub fn titles(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.title()).collect()
    }

    /// Runs every check against `console` and returns how many ran.
    pub fn run(&self, console: &mut Console<R, W>) -> ToolcheckResult<usize> {
        let rule = "=".repeat(RULE_WIDTH);

        console.line(&rule)?;
        console.line(format!("    {} Compiler Test Program", self.config.toolchain))?;
        console.line(&rule)?;
        console.blank()?;

        for (index, check) in self.checks.iter().enumerate() {
            let number = index + 1;
            let title = check.title();
            debug!(number, title, "running check");

            console.line(format!("Test {}: {}", number, title))?;
            let mut ctx = CheckContext {
                console: &mut *console,
                config: &self.config,
            };
            check.run(&mut ctx)?;
            console.blank()?;

            debug!(number, title, "check finished");
        }

        console.line(&rule)?;
        console.line("    All tests completed successfully!")?;
        console.line(format!(
            "    Your {} compiler is working properly!",
            self.config.toolchain
        ))?;
        console.line(&rule)?;
        console.flush()?;

        info!(checks = self.checks.len(), "all checks completed");
        Ok(self.checks.len())
    }
}
