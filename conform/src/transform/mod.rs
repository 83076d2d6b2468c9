//! Rewrite rules that eliminate hanging vertices.
//!
//! A rule recognizes a configuration of hanging vertices on the boundary of a
//! single interior and rewrites the graph around that interior so that the
//! hanging vertices become true corners of new, smaller interiors (transition
//! elements). Rules share the [`Transformation`] contract and are enumerated
//! by [`Rule`], which a driver tries in order for each interior.
//!
//! Rules hold no state between calls. The graph is the only state and is
//! mutated in place by [`Transformation::apply`].
//!
//! # Examples
//!
//! ```rust
//! use conform::graph::{GraphBuilder, VertexKind};
//! use conform::prelude::*;
//! use conform::transform::Rule;
//!
//! let (mut graph, _) = GraphBuilder::default()
//!     .commit_with(|builder| {
//!         builder.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))?;
//!         builder.insert_vertex("h", VertexKind::Hanging, (2.0, 0.0, 0.0))?;
//!         builder.insert_vertex("b", VertexKind::Simple, (4.0, 0.0, 0.0))?;
//!         builder.insert_vertex("c", VertexKind::Simple, (2.0, 3.0, 0.0))?;
//!         builder.insert_edge("ah", "a", "h")?;
//!         builder.insert_edge("hb", "h", "b")?;
//!         builder.insert_edge("bc", "b", "c")?;
//!         builder.insert_edge("ca", "c", "a")?;
//!         builder.insert_interior("abc", "a", "b", "c")
//!     })
//!     .unwrap();
//!
//! let rule = Rule::SplitHangingEdge;
//! if rule.is_applicable(&graph, "abc") {
//!     rule.apply(&mut graph, "abc").unwrap();
//! }
//! assert_eq!(0, graph.hanging_vertex_count());
//! assert_eq!(2, graph.interior_count());
//! ```

pub mod split;

use crate::graph::{GraphError, MeshGraph};

pub use crate::transform::split::SplitHangingEdge;

/// Rewrite of a single interior.
pub trait Transformation {
    /// Returns `true` if the transformation can be applied to an interior.
    ///
    /// This never mutates the graph and never fails: an interior that does not
    /// exist or any topology that cannot be resolved yields `false`.
    fn is_applicable(&self, graph: &MeshGraph, interior: &str) -> bool;

    /// Applies the transformation to an interior.
    ///
    /// The transformation is not re-checked. Callers should test
    /// [`is_applicable`] against the current state of the graph immediately
    /// before applying, because earlier rewrites may change the
    /// classification of vertices and the topology around an interior.
    ///
    /// The rewrite is atomic: if it fails, the graph is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if topology that the transformation requires cannot be
    /// found or if the rewrite conflicts with existing keys.
    ///
    /// [`is_applicable`]: Transformation::is_applicable
    fn apply<'g>(
        &self,
        graph: &'g mut MeshGraph,
        interior: &str,
    ) -> Result<&'g mut MeshGraph, GraphError>;
}

/// Rewrite strategies.
///
/// Variants are tried by drivers in the order given by [`Rule::ALL`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rule {
    /// Splits a triangle in two at a hanging vertex on one of its edges. See
    /// [`SplitHangingEdge`].
    SplitHangingEdge,
}

impl Rule {
    pub const ALL: [Rule; 1] = [Rule::SplitHangingEdge];
}

impl Transformation for Rule {
    fn is_applicable(&self, graph: &MeshGraph, interior: &str) -> bool {
        match *self {
            Rule::SplitHangingEdge => SplitHangingEdge.is_applicable(graph, interior),
        }
    }

    fn apply<'g>(
        &self,
        graph: &'g mut MeshGraph,
        interior: &str,
    ) -> Result<&'g mut MeshGraph, GraphError> {
        match *self {
            Rule::SplitHangingEdge => SplitHangingEdge.apply(graph, interior),
        }
    }
}
