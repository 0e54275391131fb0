//! Mask fixtures and partition checks

use crate::error::{TestError, TestResult};
use cclabel_core::{Grid, LabelGrid, Mask};
use std::collections::HashMap;

/// Build a mask from an ASCII drawing.
///
/// `#`, `1` and `X` are foreground; `.`, `0` and space are background.
/// Rows must all have the same length.
///
/// ```
/// use cclabel_test::mask_from_ascii;
///
/// let mask = mask_from_ascii(&["#.", "##"]).unwrap();
/// assert_eq!(mask.count_foreground(), 3);
/// ```
pub fn mask_from_ascii(rows: &[&str]) -> TestResult<Mask> {
    let mut cells = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let parsed = line
            .chars()
            .enumerate()
            .map(|(col, ch)| match ch {
                '#' | '1' | 'X' => Ok(true),
                '.' | '0' | ' ' => Ok(false),
                _ => Err(TestError::InvalidFixture { row, col, ch }),
            })
            .collect::<TestResult<Vec<bool>>>()?;
        cells.push(parsed);
    }
    Ok(Grid::from_rows(&cells)?)
}

/// Deterministic pseudo-random mask.
///
/// Each cell is foreground with probability `density`. The same `seed`
/// always yields the same mask.
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Mask> {
    let mut rng = SimpleRng::new(seed);
    let mut mask: Mask = Grid::new(width, height)?;
    for cell in mask.as_mut_slice() {
        *cell = rng.next_f64() < density;
    }
    Ok(mask)
}

/// `true` if both label grids describe the same partition.
///
/// Background must coincide, and the label values must correspond
/// one-to-one: two cells share a label in `a` exactly when they share one
/// in `b`.
pub fn same_partition(a: &LabelGrid, b: &LabelGrid) -> bool {
    if !a.same_dimensions(b) {
        return false;
    }

    let mut forward: HashMap<u32, u32> = HashMap::new();
    let mut backward: HashMap<u32, u32> = HashMap::new();

    for (&la, &lb) in a.iter().zip(b.iter()) {
        if (la == 0) != (lb == 0) {
            return false;
        }
        if la == 0 {
            continue;
        }
        if *forward.entry(la).or_insert(lb) != lb || *backward.entry(lb).or_insert(la) != la {
            return false;
        }
    }

    true
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        // The high bits of an LCG are the well-mixed ones.
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }
}
