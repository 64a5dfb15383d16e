//! Weighted union-find over grid cells.
//!
//! Cells are flattened to `row * cols + col`. `find` uses path halving and
//! `union` attaches the smaller tree under the larger one, so both run in
//! near-constant amortized time. Locations outside the grid the structure was
//! built for are a caller bug.

use crate::location::GridLocation;

#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    cols: usize,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl WeightedQuickUnion {
    /// Every cell of a `rows` x `cols` grid starts as its own singleton set.
    pub fn new(rows: usize, cols: usize) -> Self {
        let n = rows * cols;
        Self {
            cols,
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Representative cell of the set containing `location`
    pub fn find(&mut self, location: GridLocation) -> GridLocation {
        let root = self.find_index(self.index(location));
        GridLocation::new(root / self.cols, root % self.cols)
    }

    /// Merges the sets containing `a` and `b`
    pub fn union(&mut self, a: GridLocation, b: GridLocation) {
        let ra = self.find_index(self.index(a));
        let rb = self.find_index(self.index(b));
        if ra == rb {
            return;
        }

        // Ties go to `ra` so the first argument's root survives.
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
    }

    fn index(&self, location: GridLocation) -> usize {
        location.row * self.cols + location.col
    }

    fn find_index(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }
}

#[cfg(test)]
impl WeightedQuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn connected(&mut self, a: GridLocation, b: GridLocation) -> bool {
        self.find(a) == self.find(b)
    }

    fn set_size(&mut self, location: GridLocation) -> usize {
        let root = self.find_index(self.index(location));
        self.size[root]
    }
}
