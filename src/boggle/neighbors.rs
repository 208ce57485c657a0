//! Precomputed king's-move neighbor lists for each supported board shape.
//!
//! The depth-first search asks for a cell's neighbors millions of times per
//! board, so the lists are computed once per shape and shared read-only for
//! the life of the process.

use std::sync::OnceLock;

use super::types::models::BoardShape;

/// Neighbor lists for one board shape, indexed by linear cell index.
#[derive(Debug)]
pub struct AdjacencyTable {
    shape: BoardShape,
    neighbors: Vec<Vec<u8>>,
}

static TABLES: [OnceLock<AdjacencyTable>; BoardShape::SUPPORTED.len()] =
    [const { OnceLock::new() }; BoardShape::SUPPORTED.len()];

impl AdjacencyTable {
    /// The shared table for `shape`, built on first use.
    pub fn for_shape(shape: BoardShape) -> &'static AdjacencyTable {
        TABLES[shape.slot()].get_or_init(|| AdjacencyTable::build(shape))
    }

    fn build(shape: BoardShape) -> Self {
        let (w, h) = (shape.width() as i32, shape.height() as i32);
        let neighbors = (0..shape.cells())
            .map(|i| {
                let (x, y) = ((i as i32) / h, (i as i32) % h);
                let mut ns = Vec::with_capacity(8);
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        let (nx, ny) = (x + dx, y + dy);
                        if (dx, dy) == (0, 0) || nx < 0 || nx >= w || ny < 0 || ny >= h {
                            continue;
                        }
                        ns.push((nx * h + ny) as u8);
                    }
                }
                ns.sort_unstable();
                ns
            })
            .collect();
        Self { shape, neighbors }
    }

    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Cells adjacent to cell `i`, in increasing index order.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[u8] {
        &self.neighbors[i]
    }
}
