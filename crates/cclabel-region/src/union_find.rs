//! Label equivalence tracking for the two-pass labeler
//!
//! Provisional labels are plain `u32` indices into a parent table. Slot 0
//! is reserved so that label values can index the table directly; it is
//! never handed out. A union always hangs the larger root under the
//! smaller one, so every parent pointer points to an equal or smaller
//! label and the root of a class is its smallest member.

/// Disjoint-set forest over provisional labels, scoped to one labeling call.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    pub(crate) fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Number of labels handed out so far.
    pub(crate) fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate the next label as a singleton class.
    pub(crate) fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Root of `label`, halving the path on the way up.
    pub(crate) fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    /// Merge the classes of `a` and `b`; returns the surviving (smaller) root.
    pub(crate) fn union(&mut self, a: u32, b: u32) -> u32 {
        let root_a = self.find(a);
        let root_b = self.find(b);
        let (root, child) = if root_a <= root_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        if root != child {
            self.parent[child as usize] = root;
        }
        root
    }

    /// Point every label directly at its root.
    ///
    /// Parents are never larger than their children, so an ascending sweep
    /// sees each parent already flattened.
    pub(crate) fn flatten(&mut self) {
        for label in 1..self.parent.len() {
            let parent = self.parent[label] as usize;
            self.parent[label] = self.parent[parent];
        }
    }

    /// Root of `label` after [`UnionFind::flatten`], in one lookup.
    #[inline]
    pub(crate) fn resolved(&self, label: u32) -> u32 {
        self.parent[label as usize]
    }

    /// Number of distinct classes.
    pub(crate) fn root_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(label, &parent)| label as u32 == parent)
            .count()
    }
}
