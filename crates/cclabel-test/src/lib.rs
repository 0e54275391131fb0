//! cclabel-test - Regression test framework for the cclabel crates
//!
//! Provides a small regression harness in the style of numbered checks:
//! every comparison increments an index, failures are collected, and
//! [`RegParams::cleanup`] reports the outcome.
//!
//! # Usage
//!
//! ```ignore
//! use cclabel_test::{RegParams, mask_from_ascii};
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{mask_from_ascii, random_mask, same_partition};
pub use params::{RegParams, RegTestMode};
