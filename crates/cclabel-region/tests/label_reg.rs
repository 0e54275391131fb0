//! Labeling regression test
//!
//! Runs both labeling strategies over hand-drawn masks with known answers:
//! empty and single-pixel images, a one-row strip, elbows that force the
//! two-pass merge, and components touching every border.
//!
//! Run with:
//! ```text
//! cargo test -p cclabel-region --test label_reg
//! ```

use cclabel_core::{Grid, LabelGrid, Mask};
use cclabel_region::{
    count_components, label_components, label_components_two_pass, renumber_labels,
};
use cclabel_test::{RegParams, mask_from_ascii};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // --- Test 1: 3x3 all-zero mask ---
    eprintln!("=== all-zero mask ===");
    let blank: Mask = Grid::new(3, 3).unwrap();
    let expected: LabelGrid = Grid::new(3, 3).unwrap();
    rp.compare_grids(&expected, &label_components(&blank));
    rp.compare_grids(&expected, &label_components_two_pass(&blank));

    // --- Test 2: single pixel at (1, 1) ---
    eprintln!("=== single pixel ===");
    let single = mask_from_ascii(&["...", ".#.", "..."]).unwrap();
    let expected = Grid::from_rows(&[[0u32, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    rp.compare_grids(&expected, &label_components(&single));
    rp.compare_grids(&expected, &label_components_two_pass(&single));

    // --- Test 3: one-row strip [1,1,0,1,1,1] ---
    eprintln!("=== one-row strip ===");
    let strip = mask_from_ascii(&["##.###"]).unwrap();
    let expected = Grid::from_rows(&[[1u32, 1, 0, 2, 2, 2]]).unwrap();
    rp.compare_grids(&expected, &label_components(&strip));
    rp.compare_partitions(&expected, &label_components_two_pass(&strip));

    // --- Test 4: L shape spanning two rows and two columns ---
    eprintln!("=== L shape ===");
    for drawing in [
        ["#.", "##"], // left arm first
        [".#", "##"], // right arm first, merged on the second row
        ["##", "#."],
        ["##", ".#"],
    ] {
        let elbow = mask_from_ascii(&drawing).unwrap();
        rp.show_mask("elbow", &elbow);
        let flood = label_components(&elbow);
        let two_pass = label_components_two_pass(&elbow);
        rp.compare_values(1.0, count_components(&flood) as f64, 0.0);
        rp.compare_values(1.0, count_components(&two_pass) as f64, 0.0);
        rp.compare_partitions(&flood, &two_pass);
    }

    // --- Test 5: components on every border ---
    eprintln!("=== border components ===");
    let borders = mask_from_ascii(&[
        "##...##", //
        "#.....#", //
        "...#...", //
        "#.....#", //
        "##...##",
    ])
    .unwrap();
    let flood = label_components(&borders);
    rp.compare_values(5.0, flood.max_label() as f64, 0.0);
    rp.compare_values(1.0, flood[(0, 0)] as f64, 0.0);
    rp.compare_values(2.0, flood[(5, 0)] as f64, 0.0);
    rp.compare_values(3.0, flood[(3, 2)] as f64, 0.0);
    rp.compare_values(4.0, flood[(0, 3)] as f64, 0.0);
    rp.compare_values(5.0, flood[(6, 4)] as f64, 0.0);
    rp.compare_partitions(&flood, &label_components_two_pass(&borders));

    // --- Test 6: comb whose teeth join only at the bottom ---
    eprintln!("=== comb ===");
    let comb = mask_from_ascii(&[
        "#.#.#.#.#", //
        "#.#.#.#.#", //
        "#.#.#.#.#", //
        "#########",
    ])
    .unwrap();
    let two_pass = label_components_two_pass(&comb);
    rp.compare_values(1.0, count_components(&two_pass) as f64, 0.0);
    // The surviving root is the first provisional label.
    rp.compare_values(1.0, two_pass.max_label() as f64, 0.0);

    // --- Test 7: two-pass roots renumber to the flood-fill labels ---
    eprintln!("=== renumbering ===");
    let gaps = mask_from_ascii(&[
        "#.#.#..#", //
        "###.#..#", //
        "....####", //
        "#.......",
    ])
    .unwrap();
    let two_pass = label_components_two_pass(&gaps);
    let (renumbered, n) = renumber_labels(&two_pass);
    eprintln!("  two-pass max label {}, renumbered to {}", two_pass.max_label(), n);
    rp.compare_values(3.0, n as f64, 0.0);
    rp.compare_grids(&label_components(&gaps), &renumbered);

    assert!(rp.cleanup(), "label regression test failed");
}

#[test]
fn discovery_order_reg() {
    let mut rp = RegParams::new("discovery_order");

    let mask = mask_from_ascii(&[
        "....#...#", //
        ".##.....#", //
        ".#...#...", //
        "......##.",
    ])
    .unwrap();
    let labels = label_components(&mask);

    // Walk the mask in raster order and record labels as first seen.
    let mut seen = Vec::new();
    for &label in labels.iter().filter(|&&l| l != 0) {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    eprintln!("  discovery order: {:?}", seen);
    let expected: Vec<u32> = (1..=seen.len() as u32).collect();
    rp.compare_values(5.0, seen.len() as f64, 0.0);
    rp.compare_values(1.0, if seen == expected { 1.0 } else { 0.0 }, 0.0);

    // Labeling is deterministic.
    rp.compare_grids(&labels, &label_components(&mask));

    assert!(rp.cleanup(), "discovery order regression test failed");
}

#[test]
fn large_component_reg() {
    let mut rp = RegParams::new("large_component");

    // A full-foreground raster is one component; the explicit stack must
    // absorb it without recursion.
    let full: Mask = Grid::filled(1024, 1024, true).unwrap();
    let flood = label_components(&full);
    rp.compare_values(1.0, flood.max_label() as f64, 0.0);
    rp.compare_values(1.0, count_components(&flood) as f64, 0.0);

    let two_pass = label_components_two_pass(&full);
    rp.compare_values(1.0, two_pass.max_label() as f64, 0.0);

    // A one-pixel-wide serpentine is a single very long path.
    let width = 257u32;
    let height = 257u32;
    let mut serpentine: Mask = Grid::new(width, height).unwrap();
    for y in 0..height {
        if y % 2 == 0 {
            for x in 0..width {
                serpentine[(x, y)] = true;
            }
        } else if y % 4 == 1 {
            serpentine[(width - 1, y)] = true;
        } else {
            serpentine[(0, y)] = true;
        }
    }
    let flood = label_components(&serpentine);
    let two_pass = label_components_two_pass(&serpentine);
    rp.compare_values(1.0, count_components(&flood) as f64, 0.0);
    rp.compare_values(1.0, count_components(&two_pass) as f64, 0.0);

    assert!(rp.cleanup(), "large component regression test failed");
}
