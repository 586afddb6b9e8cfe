//! Assertion and debug macros for competitive-programming work.
//!
//! Compared to plain `assert!` these:
//! - print the failing expression (or your message) to stderr with its
//!   `file:line`, colored for quick scanning
//! - stay active in both debug and release profiles
//! - raise a catchable [`CheckFailure`] instead of aborting, so a stress
//!   loop can record the failing input and keep going
//!
//! ```
//! use contest_check::{assert_check, debug_print, warn_check};
//!
//! let v = vec![1, 2, 3];
//! debug_print!(v.len());
//! warn_check!(v.len() > 1);
//! assert_check!(!v.is_empty(), "input must not be empty");
//! ```
//!
//! # Stress testing
//!
//! Wrap a trial run in [`catch_failure`] to collect failing cases instead
//! of stopping at the first one:
//!
//! ```
//! use contest_check::{assert_check, catch_failure};
//!
//! fn run_case(n: u32) {
//!   assert_check!(n + 1 > n);
//! }
//!
//! let mut failing = Vec::new();
//! for n in 0..20 {
//!   if let Err(failure) = catch_failure(|| run_case(n)) {
//!     eprintln!("case {n}: {failure}");
//!     failing.push(n);
//!   }
//! }
//! assert!(failing.is_empty());
//! ```
//!
//! # Stripping for submission
//!
//! Judges reject extra output and dependencies, so the whole facility can
//! be swapped for a stub before submitting: build with
//! `--no-default-features` (or turn the `checks` feature off in the host
//! crate). The same call sites compile unchanged, but `assert_check!`
//! forwards to `debug_assert!`, `warn_check!` and `debug_print!` expand to
//! nothing without evaluating their arguments, and `unreachable_code!`
//! exits the process with code 42.
//!
//! Note the asymmetry: with `checks` on, a failed assertion is catchable;
//! with `checks` off it follows the platform's standard assertion
//! behavior and is not a [`CheckFailure`]. Strictness is a build-time
//! property, not a runtime one.

pub mod catch;
#[cfg(feature = "checks")]
pub mod diag;
pub mod failure;
mod macros;
pub mod style;

pub use catch::catch_failure;
pub use failure::CheckFailure;
pub use style::{paint, Style};
