//! Tesseract (4D hypercube) topology
//!
//! A tesseract has 16 vertices (all combinations of {0, edge} for x,y,z,w)
//! and 32 edges. Vertex `i` sits at `edge` on every axis whose bit is set in
//! `i`, with x as the least-significant bit.
//!
//! Edges join vertices that differ in exactly one coordinate. They are found
//! once from the unrotated lattice and stored as index pairs, so rotating
//! the vertex array never changes which vertices an edge connects.

use bitflags::bitflags;
use std::fmt;
use tesseract4d_math::Vec4;

/// Number of vertices of a tesseract
pub const VERTEX_COUNT: usize = 16;

/// Number of edges of a tesseract
pub const EDGE_COUNT: usize = 32;

bitflags! {
    /// Axes at `edge` (rather than 0) for a lattice vertex
    ///
    /// The bits are the vertex index itself: vertex 5 = `X | Z`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const W = 1 << 3;
    }
}

impl Axes {
    /// Axes encoded by a vertex index (only the low 4 bits are used)
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::from_bits_truncate(index as u8)
    }

    /// Vertex index for this axis set
    #[inline]
    pub fn index(self) -> usize {
        self.bits() as usize
    }

    /// Lattice position with each selected axis at `edge_length`
    pub fn vertex(self, edge_length: f32) -> Vec4 {
        let at = |axis: Axes| if self.contains(axis) { edge_length } else { 0.0 };
        Vec4::new(at(Axes::X), at(Axes::Y), at(Axes::Z), at(Axes::W))
    }
}

/// An edge between two vertices, stored as indices into the vertex array
///
/// `start < end` always holds for generated edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    /// Create an edge, ordering the indices so `start < end`
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The axis this edge runs along, by index encoding
    ///
    /// Empty when the endpoints do not differ in exactly one bit, or when
    /// either index is outside the vertex array.
    pub fn axis(&self) -> Axes {
        let diff = self.start ^ self.end;
        let in_range = self.start < VERTEX_COUNT && self.end < VERTEX_COUNT;
        if in_range && diff.count_ones() == 1 {
            Axes::from_index(diff)
        } else {
            Axes::empty()
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge_{}_{}", self.start, self.end)
    }
}

/// Generate the 16 lattice vertices in binary counting order
pub fn generate_vertices(edge_length: f32) -> [Vec4; VERTEX_COUNT] {
    std::array::from_fn(|i| Axes::from_index(i).vertex(edge_length))
}

/// Find every pair of vertices that differ in exactly one coordinate
///
/// Pairs are visited as `(i, j)` with `i < j` in lexicographic order, which
/// fixes the edge order (and so the segment order downstream).
pub fn generate_edges(vertices: &[Vec4]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(EDGE_COUNT);

    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let difference = vertices[i] - vertices[j];
            if difference.nonzero_count() == 1 {
                edges.push(Edge { start: i, end: j });
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count() {
        assert_eq!(generate_vertices(1.0).len(), VERTEX_COUNT);
    }

    #[test]
    fn test_vertices_follow_binary_counting() {
        let vertices = generate_vertices(2.0);

        assert_eq!(vertices[0], Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(vertices[1], Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(vertices[2], Vec4::new(0.0, 2.0, 0.0, 0.0));
        assert_eq!(vertices[4], Vec4::new(0.0, 0.0, 2.0, 0.0));
        assert_eq!(vertices[8], Vec4::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(vertices[15], Vec4::new(2.0, 2.0, 2.0, 2.0));

        for (i, v) in vertices.iter().enumerate() {
            for axis in 0..4 {
                let expected = if i & (1 << axis) != 0 { 2.0 } else { 0.0 };
                assert_eq!(v.axis(axis), expected, "vertex {} axis {}", i, axis);
            }
        }
    }

    #[test]
    fn test_edge_count() {
        let edges = generate_edges(&generate_vertices(1.0));
        assert_eq!(edges.len(), EDGE_COUNT);
    }

    #[test]
    fn test_edges_match_single_bit_adjacency() {
        let edges: HashSet<Edge> = generate_edges(&generate_vertices(1.0)).into_iter().collect();

        for i in 0usize..16 {
            for j in (i + 1)..16 {
                let adjacent = (i ^ j).count_ones() == 1;
                assert_eq!(
                    edges.contains(&Edge::new(i, j)),
                    adjacent,
                    "pair ({}, {}) adjacency mismatch",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_edges_are_ordered() {
        let edges = generate_edges(&generate_vertices(1.0));
        for edge in &edges {
            assert!(edge.start < edge.end);
        }
        let mut sorted = edges.clone();
        sorted.sort();
        assert_eq!(edges, sorted);
        assert_eq!(edges[0], Edge { start: 0, end: 1 });
        assert_eq!(edges[31], Edge { start: 14, end: 15 });
    }

    #[test]
    fn test_every_vertex_has_four_edges() {
        let edges = generate_edges(&generate_vertices(1.0));
        for v in 0..VERTEX_COUNT {
            let degree = edges.iter().filter(|e| e.start == v || e.end == v).count();
            assert_eq!(degree, 4, "vertex {} has degree {}", v, degree);
        }
    }

    #[test]
    fn test_edge_axis_ignores_out_of_range_indices() {
        // 0 ^ 17 has two bits set, one of them above the vertex range
        assert_eq!(Edge::new(0, 17).axis(), Axes::empty());
        assert_eq!(Edge::new(0, 16).axis(), Axes::empty());
        assert_eq!(Edge::new(16, 17).axis(), Axes::empty());
    }

    #[test]
    fn test_negative_edge_length_keeps_topology() {
        let edges = generate_edges(&generate_vertices(-3.5));
        assert_eq!(edges, generate_edges(&generate_vertices(1.0)));
    }

    #[test]
    fn test_zero_edge_length_collapses() {
        let vertices = generate_vertices(0.0);
        assert!(vertices.iter().all(|v| *v == Vec4::ZERO));
        // All points coincide, so no pair differs in exactly one coordinate
        assert!(generate_edges(&vertices).is_empty());
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(Edge::new(0, 1).axis(), Axes::X);
        assert_eq!(Edge::new(5, 13).axis(), Axes::W);
        assert_eq!(Edge::new(0, 3).axis(), Axes::empty());
    }

    #[test]
    fn test_edge_new_orders_indices() {
        assert_eq!(Edge::new(9, 1), Edge { start: 1, end: 9 });
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(3, 7).to_string(), "Edge_3_7");
    }

    #[test]
    fn test_axes_round_trip_index() {
        for i in 0..VERTEX_COUNT {
            assert_eq!(Axes::from_index(i).index(), i);
        }
        assert_eq!(Axes::from_index(5), Axes::X | Axes::Z);
    }
}
