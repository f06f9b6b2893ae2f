//! Union-find (disjoint set union) used by the fusion loop.
//!
//! The binary partition tree builder merges graph components in edge-weight
//! order. The builder tracks which tree node currently represents each
//! component; this structure only answers root queries and links roots, so
//! both operations stay amortised near-constant.

#[derive(Clone, Debug)]
pub(super) struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    pub(super) fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
        }
    }

    /// Root of the set containing `element`, with path halving.
    pub(super) fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        element
    }

    /// Links two distinct roots by rank and returns the surviving root.
    pub(super) fn link(&mut self, left: usize, right: usize) -> usize {
        debug_assert_ne!(left, right);
        debug_assert_eq!(self.parent[left], left);
        debug_assert_eq!(self.parent[right], right);
        let (winner, loser) = if self.rank[left] < self.rank[right] {
            (right, left)
        } else {
            (left, right)
        };
        self.parent[loser] = winner;
        if self.rank[winner] == self.rank[loser] {
            self.rank[winner] = self.rank[winner].saturating_add(1);
        }
        winner
    }
}
