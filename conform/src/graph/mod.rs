//! Mesh graph model.
//!
//! [`MeshGraph`] owns the vertices, edges, and triangular interiors of a mesh.
//! Every entity is identified by a string key that is unique among entities of
//! the same kind. Keys are chosen by whoever inserts the entity: a mesh
//! construction routine or a transformation deriving keys deterministically
//! from the keys of the vertices involved.
//!
//! Edges are undirected. At most one edge joins any unordered pair of
//! vertices, so an edge can be queried either by its key or by its endpoints
//! in any order. Each vertex caches the keys of its incident edges, which
//! makes adjacency queries proportional to vertex degree rather than to the
//! size of the graph.
//!
//! An interior refers only to its three corners. The graph expects (but only
//! checks on request via [`MeshGraph::validate`]) that the corners of every
//! interior are pairwise joined, either directly by an edge or through a
//! vertex that subdivides the segment between them.
//!
//! # Examples
//!
//! ```rust
//! use conform::graph::{MeshGraph, VertexKind};
//!
//! let mut graph = MeshGraph::new();
//! graph.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0)).unwrap();
//! graph.insert_vertex("b", VertexKind::Simple, (3.0, 4.0, 0.0)).unwrap();
//! graph.insert_edge("ab", "a", "b").unwrap();
//!
//! let edge = graph.edge_between("b", "a").unwrap();
//! assert_eq!("ab", edge.key().as_str());
//! assert_eq!(5.0, edge.length());
//! ```

mod builder;
mod edge;
mod interior;
mod mutation;
mod vertex;

use ahash::RandomState;
use approx::relative_eq;
use itertools::Itertools;
use std::collections::HashMap;
use thiserror::Error;

use crate::geometry::{self, Point3};

pub use crate::graph::builder::GraphBuilder;
pub use crate::graph::edge::{Edge, EdgeKey};
pub use crate::graph::interior::{Interior, InteriorKey};
pub use crate::graph::mutation::Mutation;
pub use crate::graph::vertex::{Vertex, VertexKey, VertexKind};

/// Relative tolerance used to decide whether a vertex lies on a segment.
const COLLINEAR_TOLERANCE: f64 = 1e-9;

type Storage<K, E> = HashMap<K, E, RandomState>;

/// Errors concerning [`MeshGraph`]s.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex `{0}` not found")]
    VertexNotFound(VertexKey),
    #[error("edge `{0}` not found")]
    EdgeNotFound(EdgeKey),
    #[error("interior `{0}` not found")]
    InteriorNotFound(InteriorKey),
    #[error("no edge joins vertices `{a}` and `{b}`")]
    EdgeBetweenNotFound { a: VertexKey, b: VertexKey },
    #[error("vertex `{0}` already exists")]
    VertexConflict(VertexKey),
    #[error("edge `{0}` already exists")]
    EdgeConflict(EdgeKey),
    #[error("interior `{0}` already exists")]
    InteriorConflict(InteriorKey),
    #[error("vertices `{a}` and `{b}` are already joined by edge `{edge}`")]
    EdgeBetweenConflict {
        a: VertexKey,
        b: VertexKey,
        edge: EdgeKey,
    },
    #[error("edge `{edge}` joins vertex `{vertex}` to itself")]
    EdgeDegenerate { edge: EdgeKey, vertex: VertexKey },
    #[error("interior `{0}` repeats a corner")]
    InteriorDegenerate(InteriorKey),
    /// A vertex cannot be removed while an interior uses it as a corner.
    #[error("vertex `{vertex}` is a corner of interior `{interior}`")]
    VertexInUse {
        vertex: VertexKey,
        interior: InteriorKey,
    },
    /// The boundary of an interior is not fully represented by edges.
    #[error("interior `{interior}` has no boundary between corners `{a}` and `{b}`")]
    InteriorNotConforming {
        interior: InteriorKey,
        a: VertexKey,
        b: VertexKey,
    },
    /// A transformation was applied to an interior that has no hanging vertex
    /// at the midpoint of one of its edges.
    #[error("interior `{interior}` has no hanging vertex at the midpoint of an edge")]
    HangingVertexNotFound { interior: InteriorKey },
}

trait OptionExt<T> {
    fn expect_consistent(self) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    fn expect_consistent(self) -> T {
        self.expect("internal error: graph consistency violated")
    }
}

/// Triangle mesh represented as a graph of vertices, edges, and interiors.
///
/// `MeshGraph` is the single owner of its entities. Removing a vertex or an
/// edge removes it from every index, while removing an interior only removes
/// the element itself: its corners and boundary edges may be shared with
/// adjacent interiors and are left in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshGraph {
    vertices: Storage<VertexKey, Vertex>,
    edges: Storage<EdgeKey, Edge>,
    interiors: Storage<InteriorKey, Interior>,
}

impl MeshGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn interior_count(&self) -> usize {
        self.interiors.len()
    }

    /// Gets the number of vertices classified as [`VertexKind::Hanging`].
    pub fn hanging_vertex_count(&self) -> usize {
        self.vertices().filter(|vertex| vertex.is_hanging()).count()
    }

    pub fn vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    pub fn edge(&self, key: &str) -> Option<&Edge> {
        self.edges.get(key)
    }

    pub fn edge_mut(&mut self, key: &str) -> Option<&mut Edge> {
        self.edges.get_mut(key)
    }

    pub fn interior(&self, key: &str) -> Option<&Interior> {
        self.interiors.get(key)
    }

    pub fn interior_mut(&mut self, key: &str) -> Option<&mut Interior> {
        self.interiors.get_mut(key)
    }

    /// Gets an iterator over the vertices in the graph in arbitrary order.
    pub fn vertices(&self) -> impl '_ + ExactSizeIterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Gets an iterator over the edges in the graph in arbitrary order.
    pub fn edges(&self) -> impl '_ + ExactSizeIterator<Item = &Edge> {
        self.edges.values()
    }

    /// Gets an iterator over the interiors in the graph in arbitrary order.
    pub fn interiors(&self) -> impl '_ + ExactSizeIterator<Item = &Interior> {
        self.interiors.values()
    }

    /// Gets the edge joining two vertices, if any.
    ///
    /// The order of the vertices is irrelevant.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        self.vertices
            .get(a)?
            .edges
            .iter()
            .flat_map(|key| self.edges.get(key))
            .find(|edge| {
                edge.opposite(a)
                    .map_or(false, |opposite| opposite.as_str() == b)
            })
    }

    /// Gets an iterator over the vertices adjacent to a vertex.
    ///
    /// The iterator is empty if the vertex does not exist.
    pub fn neighbors<'a>(&'a self, key: &str) -> impl 'a + Iterator<Item = &'a Vertex> {
        self.vertices.get(key).into_iter().flat_map(move |vertex| {
            vertex
                .edges
                .iter()
                .flat_map(move |edge| self.edges.get(edge))
                .flat_map(move |edge| edge.opposite(vertex.key().as_str()))
                .flat_map(move |opposite| self.vertices.get(opposite))
        })
    }

    /// Gets the vertices that subdivide the segment between two vertices.
    ///
    /// A vertex `v` (other than `a` or `b`) is included if the edges `a-v` and
    /// `v-b` both exist and `v` lies on the segment `a-b`. This finds vertices
    /// inserted along an edge by refinement of an adjacent element. Vertices
    /// are returned in the incidence order of `a`.
    pub fn vertices_between(&self, a: &str, b: &str) -> Vec<&Vertex> {
        let (Some(start), Some(end)) = (self.vertex(a), self.vertex(b)) else {
            return Vec::new();
        };
        let length = start.position().distance(end.position());
        self.neighbors(a)
            .filter(|vertex| vertex.key().as_str() != b)
            .filter(|vertex| self.edge_between(vertex.key().as_str(), b).is_some())
            .filter(|vertex| {
                let position = vertex.position();
                relative_eq!(
                    start.position().distance(position) + position.distance(end.position()),
                    length,
                    max_relative = COLLINEAR_TOLERANCE
                )
            })
            .collect()
    }

    /// Inserts a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex with the same key already exists.
    pub fn insert_vertex<K, P>(
        &mut self,
        key: K,
        kind: VertexKind,
        position: P,
    ) -> Result<&Vertex, GraphError>
    where
        K: Into<VertexKey>,
        P: Into<Point3>,
    {
        let key = key.into();
        if self.vertices.contains_key(&key) {
            return Err(GraphError::VertexConflict(key));
        }
        self.vertices
            .insert(key.clone(), Vertex::new(key.clone(), kind, position.into()));
        Ok(self.vertices.get(&key).expect_consistent())
    }

    /// Removes a vertex and all of its incident edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not exist or if it is a corner of
    /// any interior.
    pub fn remove_vertex(&mut self, key: &str) -> Result<Vertex, GraphError> {
        let vertex = self
            .vertices
            .get(key)
            .ok_or_else(|| GraphError::VertexNotFound(key.into()))?;
        if let Some(interior) = self.interiors().find(|interior| interior.is_corner(key)) {
            return Err(GraphError::VertexInUse {
                vertex: vertex.key().clone(),
                interior: interior.key().clone(),
            });
        }
        let edges = vertex.edges.clone();
        for edge in edges {
            self.remove_edge(edge.as_str())?;
        }
        Ok(self.vertices.remove(key).expect_consistent())
    }

    /// Inserts an edge between two vertices.
    ///
    /// The length of the edge is computed from the positions of its endpoints.
    /// The edge is inserted without the boundary flag.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge with the same key already exists, if either
    /// vertex does not exist, if the vertices are the same, or if the vertices
    /// are already joined by an edge.
    pub fn insert_edge<K>(&mut self, key: K, a: &str, b: &str) -> Result<&mut Edge, GraphError>
    where
        K: Into<EdgeKey>,
    {
        let key = key.into();
        if self.edges.contains_key(&key) {
            return Err(GraphError::EdgeConflict(key));
        }
        let start = self
            .vertex(a)
            .ok_or_else(|| GraphError::VertexNotFound(a.into()))?;
        let end = self
            .vertex(b)
            .ok_or_else(|| GraphError::VertexNotFound(b.into()))?;
        if a == b {
            return Err(GraphError::EdgeDegenerate {
                edge: key,
                vertex: a.into(),
            });
        }
        if let Some(edge) = self.edge_between(a, b) {
            return Err(GraphError::EdgeBetweenConflict {
                a: a.into(),
                b: b.into(),
                edge: edge.key().clone(),
            });
        }
        let length = start.position().distance(end.position());
        let edge = Edge::new(key, [start.key().clone(), end.key().clone()], length);
        Ok(self.link_edge(edge))
    }

    /// Removes the edge joining two vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if no edge joins the vertices.
    pub fn delete_edge(&mut self, a: &str, b: &str) -> Result<Edge, GraphError> {
        let key = self
            .edge_between(a, b)
            .map(|edge| edge.key().clone())
            .ok_or_else(|| GraphError::EdgeBetweenNotFound {
                a: a.into(),
                b: b.into(),
            })?;
        self.remove_edge(key.as_str())
    }

    /// Removes an edge by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    pub fn remove_edge(&mut self, key: &str) -> Result<Edge, GraphError> {
        let edge = self
            .edges
            .remove(key)
            .ok_or_else(|| GraphError::EdgeNotFound(key.into()))?;
        let (a, b) = edge.endpoints();
        for endpoint in [a, b] {
            if let Some(vertex) = self.vertices.get_mut(endpoint) {
                vertex.edges.retain(|incident| *incident != *edge.key());
            }
        }
        Ok(edge)
    }

    /// Inserts an interior with the given corners.
    ///
    /// The boundary edges of the interior are not checked; see
    /// [`MeshGraph::validate_interior`].
    ///
    /// # Errors
    ///
    /// Returns an error if an interior with the same key already exists, if
    /// any corner does not exist, or if a corner is repeated.
    pub fn insert_interior<K>(
        &mut self,
        key: K,
        a: &str,
        b: &str,
        c: &str,
    ) -> Result<&mut Interior, GraphError>
    where
        K: Into<InteriorKey>,
    {
        let key = key.into();
        if self.interiors.contains_key(&key) {
            return Err(GraphError::InteriorConflict(key));
        }
        let corner = |key: &str| {
            self.vertex(key)
                .map(|vertex| vertex.key().clone())
                .ok_or_else(|| GraphError::VertexNotFound(key.into()))
        };
        let corners = [corner(a)?, corner(b)?, corner(c)?];
        if corners.iter().tuple_combinations().any(|(a, b)| a == b) {
            return Err(GraphError::InteriorDegenerate(key));
        }
        Ok(self.link_interior(Interior::new(key, corners)))
    }

    /// Removes an interior by key.
    ///
    /// The corners and boundary edges of the interior are not removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the interior does not exist.
    pub fn remove_interior(&mut self, key: &str) -> Result<Interior, GraphError> {
        self.interiors
            .remove(key)
            .ok_or_else(|| GraphError::InteriorNotFound(key.into()))
    }

    /// Gets the area of an interior computed from the positions of its
    /// corners.
    pub fn interior_area(&self, key: &str) -> Option<f64> {
        let [a, b, c] = self.interior(key)?.corners();
        Some(geometry::triangle_area(
            self.vertex(a.as_str())?.position(),
            self.vertex(b.as_str())?.position(),
            self.vertex(c.as_str())?.position(),
        ))
    }

    /// Checks that the boundary of an interior is represented in the graph.
    ///
    /// Each pair of corners must be joined either by an edge or by a path of
    /// two edges through a vertex that subdivides the segment between them
    /// (see [`MeshGraph::vertices_between`]). The latter is the configuration
    /// left by refinement of an adjacent element.
    ///
    /// # Errors
    ///
    /// Returns an error if the interior does not exist or if an edge of its
    /// boundary is missing.
    pub fn validate_interior(&self, key: &str) -> Result<(), GraphError> {
        let interior = self
            .interior(key)
            .ok_or_else(|| GraphError::InteriorNotFound(key.into()))?;
        for (a, b) in interior.corners().iter().tuple_combinations() {
            let (a, b) = (a.as_str(), b.as_str());
            if self.edge_between(a, b).is_none() && self.vertices_between(a, b).is_empty() {
                return Err(GraphError::InteriorNotConforming {
                    interior: interior.key().clone(),
                    a: a.into(),
                    b: b.into(),
                });
            }
        }
        Ok(())
    }

    /// Checks that the boundary of every interior is represented in the graph.
    ///
    /// Interiors are checked in key order, so the reported error is
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError::InteriorNotConforming`] encountered.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.interiors
            .keys()
            .sorted()
            .try_for_each(|key| self.validate_interior(key.as_str()))
    }

    pub(in crate::graph) fn set_vertex_kind(
        &mut self,
        key: &str,
        kind: VertexKind,
    ) -> Result<VertexKind, GraphError> {
        self.vertices
            .get_mut(key)
            .map(|vertex| vertex.set_kind(kind))
            .ok_or_else(|| GraphError::VertexNotFound(key.into()))
    }

    // Inserts an edge and records it in the incidence of its endpoints. The
    // endpoints must exist and the key must be vacant.
    fn link_edge(&mut self, edge: Edge) -> &mut Edge {
        let key = edge.key().clone();
        let (a, b) = edge.endpoints();
        for endpoint in [a, b] {
            self.vertices
                .get_mut(endpoint)
                .expect_consistent()
                .edges
                .push(key.clone());
        }
        self.edges.insert(key.clone(), edge);
        self.edges.get_mut(&key).expect_consistent()
    }

    fn link_interior(&mut self, interior: Interior) -> &mut Interior {
        let key = interior.key().clone();
        self.interiors.insert(key.clone(), interior);
        self.interiors.get_mut(&key).expect_consistent()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::graph::{GraphError, MeshGraph, VertexKind};

    // Triangle with a hanging vertex `h` at the midpoint of `a-b`.
    fn triangle() -> MeshGraph {
        let mut graph = MeshGraph::new();
        graph
            .insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))
            .unwrap();
        graph
            .insert_vertex("h", VertexKind::Hanging, (50.0, 0.0, 0.0))
            .unwrap();
        graph
            .insert_vertex("b", VertexKind::Simple, (100.0, 0.0, 0.0))
            .unwrap();
        graph
            .insert_vertex("c", VertexKind::Simple, (50.0, 86.0, 0.0))
            .unwrap();
        graph.insert_edge("e0", "a", "h").unwrap();
        graph.insert_edge("e1", "h", "b").unwrap();
        graph.insert_edge("e2", "b", "c").unwrap();
        graph.insert_edge("e3", "c", "a").unwrap();
        graph.insert_interior("i0", "a", "b", "c").unwrap();
        graph
    }

    #[test]
    fn counts() {
        let graph = triangle();

        assert_eq!(4, graph.vertex_count());
        assert_eq!(4, graph.edge_count());
        assert_eq!(1, graph.interior_count());
        assert_eq!(1, graph.hanging_vertex_count());
    }

    #[test]
    fn edge_between_is_unordered() {
        let graph = triangle();

        assert_eq!("e1", graph.edge_between("h", "b").unwrap().key().as_str());
        assert_eq!("e1", graph.edge_between("b", "h").unwrap().key().as_str());
        assert!(graph.edge_between("a", "b").is_none());
        assert!(graph.edge_between("a", "x").is_none());
    }

    #[test]
    fn edge_length_from_positions() {
        let graph = triangle();

        assert_abs_diff_eq!(50.0, graph.edge("e0").unwrap().length());
        assert_abs_diff_eq!(
            (50.0f64.powi(2) + 86.0f64.powi(2)).sqrt(),
            graph.edge("e2").unwrap().length()
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut graph = triangle();

        assert_eq!(
            Err(GraphError::VertexConflict("a".into())),
            graph
                .insert_vertex("a", VertexKind::Simple, (1.0, 1.0, 1.0))
                .map(|_| ())
        );
        assert_eq!(
            Err(GraphError::EdgeConflict("e0".into())),
            graph.insert_edge("e0", "a", "b").map(|_| ())
        );
        assert_eq!(
            Err(GraphError::InteriorConflict("i0".into())),
            graph.insert_interior("i0", "a", "h", "c").map(|_| ())
        );
        assert_eq!(4, graph.vertex_count());
        assert_eq!(4, graph.edge_count());
        assert_eq!(1, graph.interior_count());
    }

    #[test]
    fn parallel_edges_are_rejected() {
        let mut graph = triangle();

        assert_eq!(
            Err(GraphError::EdgeBetweenConflict {
                a: "h".into(),
                b: "a".into(),
                edge: "e0".into(),
            }),
            graph.insert_edge("e4", "h", "a").map(|_| ())
        );
        assert_eq!(
            Err(GraphError::EdgeBetweenConflict {
                a: "c".into(),
                b: "b".into(),
                edge: "e2".into(),
            }),
            graph.insert_edge("e4", "c", "b").map(|_| ())
        );
        assert_eq!(
            Err(GraphError::EdgeDegenerate {
                edge: "e4".into(),
                vertex: "c".into(),
            }),
            graph.insert_edge("e4", "c", "c").map(|_| ())
        );
    }

    #[test]
    fn missing_vertices_are_reported() {
        let mut graph = triangle();

        assert_eq!(
            Err(GraphError::VertexNotFound("x".into())),
            graph.insert_edge("e4", "a", "x").map(|_| ())
        );
        assert_eq!(
            Err(GraphError::VertexNotFound("x".into())),
            graph.insert_interior("i1", "a", "x", "c").map(|_| ())
        );
        assert_eq!(
            Err(GraphError::InteriorDegenerate("i1".into())),
            graph.insert_interior("i1", "a", "c", "a").map(|_| ())
        );
    }

    #[test]
    fn delete_edge_by_endpoints() {
        let mut graph = triangle();

        let edge = graph.delete_edge("b", "h").unwrap();
        assert_eq!("e1", edge.key().as_str());
        assert!(graph.edge("e1").is_none());
        assert!(graph.edge_between("h", "b").is_none());
        assert_eq!(1, graph.vertex("h").unwrap().edges().len());
        assert_eq!(
            Err(GraphError::EdgeBetweenNotFound {
                a: "h".into(),
                b: "b".into(),
            }),
            graph.delete_edge("h", "b").map(|_| ())
        );
    }

    #[test]
    fn remove_interior_keeps_boundary() {
        let mut graph = triangle();

        graph.remove_interior("i0").unwrap();
        assert_eq!(0, graph.interior_count());
        assert_eq!(4, graph.edge_count());
        assert_eq!(4, graph.vertex_count());
        assert_eq!(
            Err(GraphError::InteriorNotFound("i0".into())),
            graph.remove_interior("i0").map(|_| ())
        );
    }

    #[test]
    fn remove_vertex_removes_incident_edges() {
        let mut graph = triangle();

        assert_eq!(
            Err(GraphError::VertexInUse {
                vertex: "c".into(),
                interior: "i0".into(),
            }),
            graph.remove_vertex("c").map(|_| ())
        );

        graph.remove_vertex("h").unwrap();
        assert!(graph.vertex("h").is_none());
        assert!(graph.edge("e0").is_none());
        assert!(graph.edge("e1").is_none());
        assert_eq!(2, graph.edge_count());
        assert_eq!(1, graph.vertex("a").unwrap().edges().len());
        assert_eq!(1, graph.vertex("b").unwrap().edges().len());
    }

    #[test]
    fn neighbors() {
        let graph = triangle();

        let mut neighbors: Vec<_> = graph
            .neighbors("a")
            .map(|vertex| vertex.key().as_str())
            .collect();
        neighbors.sort_unstable();
        assert_eq!(vec!["c", "h"], neighbors);
        assert_eq!(0, graph.neighbors("x").count());
    }

    #[test]
    fn vertices_between_follows_segment() {
        let graph = triangle();

        let between = graph.vertices_between("a", "b");
        assert_eq!(1, between.len());
        assert_eq!("h", between[0].key().as_str());
        assert_eq!(1, graph.vertices_between("b", "a").len());
        // `c` is adjacent to both `a` and `b` through direct edges, but `a-b`
        // is not subdivided by it.
        assert!(graph.vertices_between("b", "c").is_empty());
        assert!(graph.vertices_between("a", "x").is_empty());
    }

    #[test]
    fn vertices_between_requires_collinearity() {
        let mut graph = triangle();

        // `d` is joined to both `a` and `b`, but lies off the segment.
        graph
            .insert_vertex("d", VertexKind::Simple, (50.0, -10.0, 0.0))
            .unwrap();
        graph.insert_edge("e4", "a", "d").unwrap();
        graph.insert_edge("e5", "d", "b").unwrap();

        let between = graph.vertices_between("a", "b");
        assert_eq!(1, between.len());
        assert_eq!("h", between[0].key().as_str());
    }

    #[test]
    fn validate_reports_missing_boundary() {
        let mut graph = triangle();

        // `a-b` is represented by the path through the hanging vertex.
        assert_eq!(Ok(()), graph.validate());

        graph
            .insert_vertex("d", VertexKind::Simple, (0.0, 100.0, 0.0))
            .unwrap();
        graph.insert_interior("i1", "a", "c", "d").unwrap();
        assert_eq!(
            Err(GraphError::InteriorNotConforming {
                interior: "i1".into(),
                a: "a".into(),
                b: "d".into(),
            }),
            graph.validate()
        );

        graph.delete_edge("b", "c").unwrap();
        assert_eq!(
            Err(GraphError::InteriorNotConforming {
                interior: "i0".into(),
                a: "b".into(),
                b: "c".into(),
            }),
            graph.validate_interior("i0")
        );
        assert_eq!(
            Err(GraphError::InteriorNotFound("i2".into())),
            graph.validate_interior("i2")
        );
    }

    #[test]
    fn interior_area() {
        let graph = triangle();

        assert_abs_diff_eq!(4300.0, graph.interior_area("i0").unwrap());
        assert!(graph.interior_area("i1").is_none());
    }

    #[test]
    fn error_display_names_keys() {
        let error = GraphError::EdgeBetweenNotFound {
            a: "v0".into(),
            b: "v7".into(),
        };
        let display = format!("{}", error);
        assert!(display.contains("v0"));
        assert!(display.contains("v7"));
    }
}
