//! Stdout output.
//!
//! Both the result line and input failures go to stdout; diagnostics from
//! [`super::logging`] go to stderr.

use std::fmt::Display;

use crate::commands::check::Verdict;

pub fn verdict(verdict: &Verdict) {
    println!("{verdict}");
}

/// Prints a failure as the bare message, with no prefix or color.
pub fn failure<E: Display>(err: &E) {
    println!("{err}");
}
