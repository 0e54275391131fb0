//! Regression test parameters and operations

use crate::fixtures::same_partition;
use cclabel_core::{Grid, LabelGrid, Mask};
use std::fmt::Debug;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Compare and additionally print the grids under test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status. Each
/// comparison bumps the index so failures can be traced back to the
/// check that produced them.
pub struct RegParams {
    /// Name of the test (e.g., "label")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two grids cell by cell
    ///
    /// Returns `true` if dimensions and every cell match.
    pub fn compare_grids<T: PartialEq + Debug>(
        &mut self,
        expected: &Grid<T>,
        actual: &Grid<T>,
    ) -> bool {
        self.index += 1;

        if !expected.same_dimensions(actual) {
            self.fail(format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        let mismatch = expected.iter().zip(actual.iter()).position(|(e, a)| e != a);
        if let Some(i) = mismatch {
            let (x, y) = expected.coords_of(i);
            self.fail(format!(
                "Failure in {}_reg: grid comparison for index {} - cell mismatch at ({}, {}): \
                 expected {:?}, got {:?}",
                self.test_name,
                self.index,
                x,
                y,
                expected.as_slice()[i],
                actual.as_slice()[i]
            ));
            return false;
        }

        true
    }

    /// Compare the partitions induced by two label grids
    ///
    /// Label values may differ; the check passes when both grids have the
    /// same background and group foreground cells identically.
    pub fn compare_partitions(&mut self, expected: &LabelGrid, actual: &LabelGrid) -> bool {
        self.index += 1;

        if !same_partition(expected, actual) {
            self.fail(format!(
                "Failure in {}_reg: partition comparison for index {}",
                self.test_name, self.index
            ));
            false
        } else {
            true
        }
    }

    /// Print a mask when running in display mode
    pub fn show_mask(&self, title: &str, mask: &Mask) {
        if self.display() {
            eprintln!("--- {} ({}x{}) ---", title, mask.width(), mask.height());
            eprint!("{}", mask);
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
