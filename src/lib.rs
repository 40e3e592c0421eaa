//! # toolcheck — Compiler Toolchain Smoke Test
//!
//! A fixed script of eight console checks that exercise basic language
//! features: line input, integer and floating-point arithmetic, string
//! concatenation, vector iteration, conditionals, loops and recursion. A
//! toolchain that builds this crate and prints the closing banner is
//! working.
//!
//! ## Flow
//! stdin → Console → Runner → Check 1..8 → Console → stdout
//!
//! ## Key Points
//! - Checks are trait objects behind [`check::Check`]; the runner numbers
//!   and frames them.
//! - The console is generic over `BufRead`/`Write`, so a whole run can be
//!   driven from memory.
//! - Tracing goes to stderr and never touches the check output.

pub mod check;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod logging;
pub mod ops;
pub mod runner;
