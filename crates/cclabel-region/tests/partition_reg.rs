//! Partition equivalence regression test
//!
//! The flood-fill and two-pass labelers must group foreground pixels
//! identically for every input, even though their label values differ.
//! Random masks across a range of densities exercise the merge paths of
//! the two-pass labeler far more than hand-drawn cases.
//!
//! Run with:
//! ```text
//! cargo test -p cclabel-region --test partition_reg
//! ```

use cclabel_core::{Grid, LabelGrid, Mask};
use cclabel_region::{
    LabelAlgorithm, count_components, label_components, label_components_two_pass, label_with,
    renumber_labels,
};
use cclabel_test::{RegParams, random_mask, same_partition};

/// Background is 0, foreground is non-zero, and every pair of 4-adjacent
/// foreground pixels shares a label.
fn adjacent_pixels_agree(mask: &Mask, labels: &LabelGrid) -> bool {
    let (width, height) = mask.dimensions();
    for y in 0..height {
        for x in 0..width {
            if !mask[(x, y)] {
                if labels[(x, y)] != 0 {
                    return false;
                }
                continue;
            }
            if labels[(x, y)] == 0 {
                return false;
            }
            if x + 1 < width && mask[(x + 1, y)] && labels[(x + 1, y)] != labels[(x, y)] {
                return false;
            }
            if y + 1 < height && mask[(x, y + 1)] && labels[(x, y + 1)] != labels[(x, y)] {
                return false;
            }
        }
    }
    true
}

#[test]
fn partition_reg() {
    let mut rp = RegParams::new("partition");

    let sizes = [(1u32, 1u32), (1, 40), (40, 1), (7, 5), (33, 17), (64, 64)];
    let densities = [0.1, 0.35, 0.5, 0.59, 0.7, 0.95];

    let mut seed = 0u64;
    for &(width, height) in &sizes {
        for &density in &densities {
            seed += 1;
            let mask = random_mask(width, height, density, seed).unwrap();
            let flood = label_components(&mask);
            let two_pass = label_components_two_pass(&mask);

            rp.compare_partitions(&flood, &two_pass);
            rp.compare_values(
                1.0,
                if adjacent_pixels_agree(&mask, &flood) {
                    1.0
                } else {
                    0.0
                },
                0.0,
            );

            // Flood-fill labels are contiguous, and the renumbered two-pass
            // roots land on exactly the same values.
            let n = count_components(&flood);
            rp.compare_values(n as f64, flood.max_label() as f64, 0.0);
            let (renumbered, m) = renumber_labels(&two_pass);
            rp.compare_values(n as f64, m as f64, 0.0);
            rp.compare_grids(&flood, &renumbered);
        }
    }

    assert!(rp.cleanup(), "partition regression test failed");
}

#[test]
fn partition_threads_reg() {
    let mut rp = RegParams::new("partition_threads");

    // Independent masks labeled concurrently share no state.
    let masks: Vec<Mask> = (0..8)
        .map(|seed| random_mask(96, 96, 0.55, 100 + seed).unwrap())
        .collect();

    let results: Vec<(LabelGrid, LabelGrid)> = std::thread::scope(|scope| {
        let handles: Vec<_> = masks
            .iter()
            .map(|mask| {
                scope.spawn(move || {
                    (
                        label_with(mask, LabelAlgorithm::FloodFill),
                        label_with(mask, LabelAlgorithm::TwoPass),
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("labeling thread panicked"))
            .collect()
    });

    for (mask, (flood, two_pass)) in masks.iter().zip(&results) {
        rp.compare_values(
            1.0,
            if same_partition(flood, two_pass) {
                1.0
            } else {
                0.0
            },
            0.0,
        );
        rp.compare_grids(&label_components(mask), flood);
    }

    // Degenerate shapes agree as well.
    let empty: Mask = Grid::new(0, 0).unwrap();
    rp.compare_partitions(&label_components(&empty), &label_components_two_pass(&empty));

    assert!(rp.cleanup(), "partition threads regression test failed");
}
