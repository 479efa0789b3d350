//! Disjoint-set union with path compression and union by rank.

use std::cmp::Ordering;

/// Disjoint-set structure over nodes `0..n`.
///
/// Kruskal uses it for cycle detection; Borůvka uses it as the component
/// map. Arguments must be valid node ids; out-of-range ids are a
/// precondition violation and panic on indexing.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Returns the representative of `x`'s set.
    ///
    /// Iterative two-pass compression: walk to the root, then repoint every
    /// node on the path directly at it. Recursion here would overflow the
    /// stack on the path lengths that large graphs can produce.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets holding `x` and `y` using union by rank.
    ///
    /// Returns `false` when they already share a set, in which case the
    /// caller's edge would close a cycle.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Whether `x` and `y` share a representative.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut dsu = UnionFind::new(4);
        assert_eq!(dsu.set_count(), 4);
        for i in 0..4 {
            assert_eq!(dsu.find(i), i);
        }
    }

    #[test]
    fn test_union_merges() {
        let mut dsu = UnionFind::new(4);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert_eq!(dsu.set_count(), 2);
        assert!(dsu.connected(0, 1));
        assert!(!dsu.connected(1, 2));
        assert!(dsu.union(1, 3));
        assert_eq!(dsu.set_count(), 1);
        assert!(dsu.connected(0, 2));
    }

    #[test]
    fn test_union_detects_cycle() {
        let mut dsu = UnionFind::new(3);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(1, 2));
        assert!(!dsu.union(0, 2));
        assert_eq!(dsu.set_count(), 1);
    }

    #[test]
    fn test_union_self_is_noop() {
        let mut dsu = UnionFind::new(3);
        let before = dsu.clone();
        assert!(!dsu.union(1, 1));
        assert_eq!(dsu.set_count(), before.set_count());
        for i in 0..3 {
            assert_eq!(dsu.find(i), i);
        }
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut dsu = UnionFind::new(6);
        dsu.union(0, 1);
        dsu.union(1, 2);
        dsu.union(3, 4);
        for i in 0..6 {
            assert_eq!(dsu.find(i), dsu.find(i));
        }
    }

    #[test]
    fn test_long_chain_compresses() {
        // worst-case chain; find must not recurse and must flatten the path
        let n = 100_000;
        let mut dsu = UnionFind::new(n);
        for i in 1..n {
            dsu.union(i - 1, i);
        }
        let root = dsu.find(0);
        assert_eq!(dsu.find(n - 1), root);
        assert_eq!(dsu.set_count(), 1);
    }
}
